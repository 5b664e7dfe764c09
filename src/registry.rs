//! The numeric component model of every supported color space and the
//! canonical CSS text for a color in each of them.

use crate::fixed::{round_half_up, to_fixed};
use crate::{Component, Components, Space};

/// The allowed values of one component of a color space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentRange {
    /// Short key used to address the component, e.g. `"l"`.
    pub key: &'static str,
    /// Smallest allowed value.
    pub min: Component,
    /// Largest allowed value.
    pub max: Component,
    /// Granularity of the value when edited.
    pub step: Component,
    /// Unit shown next to the value, if any.
    pub unit: Option<&'static str>,
    /// Human readable name of the component.
    pub label: &'static str,
}

impl ComponentRange {
    const fn new(
        key: &'static str,
        min: Component,
        max: Component,
        step: Component,
        unit: Option<&'static str>,
        label: &'static str,
    ) -> Self {
        Self {
            key,
            min,
            max,
            step,
            unit,
            label,
        }
    }

    /// True if `value` lies within `min..=max`.
    pub fn contains(&self, value: Component) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// The middle of the range.
    pub fn midpoint(&self) -> Component {
        (self.min + self.max) / 2.0
    }
}

const PERCENT: Option<&str> = Some("%");
const DEGREES: Option<&str> = Some("°");

const fn unit_rgb() -> [ComponentRange; 3] {
    [
        ComponentRange::new("r", 0.0, 1.0, 0.001, None, "Red"),
        ComponentRange::new("g", 0.0, 1.0, 0.001, None, "Green"),
        ComponentRange::new("b", 0.0, 1.0, 0.001, None, "Blue"),
    ]
}

static OKLAB: [ComponentRange; 3] = [
    ComponentRange::new("l", 0.0, 1.0, 0.01, None, "Lightness"),
    ComponentRange::new("a", -0.4, 0.4, 0.001, None, "Green-Red"),
    ComponentRange::new("b", -0.4, 0.4, 0.001, None, "Blue-Yellow"),
];

static LCH: [ComponentRange; 3] = [
    ComponentRange::new("l", 0.0, 100.0, 0.1, PERCENT, "Lightness"),
    ComponentRange::new("c", 0.0, 150.0, 0.1, None, "Chroma"),
    ComponentRange::new("h", 0.0, 360.0, 1.0, DEGREES, "Hue"),
];

static OKLCH: [ComponentRange; 3] = [
    ComponentRange::new("l", 0.0, 100.0, 0.1, PERCENT, "Lightness"),
    ComponentRange::new("c", 0.0, 0.4, 0.001, None, "Chroma"),
    ComponentRange::new("h", 0.0, 360.0, 1.0, DEGREES, "Hue"),
];

static HSL: [ComponentRange; 3] = [
    ComponentRange::new("h", 0.0, 360.0, 1.0, DEGREES, "Hue"),
    ComponentRange::new("s", 0.0, 100.0, 0.1, PERCENT, "Saturation"),
    ComponentRange::new("l", 0.0, 100.0, 0.1, PERCENT, "Lightness"),
];

static HWB: [ComponentRange; 3] = [
    ComponentRange::new("h", 0.0, 360.0, 1.0, DEGREES, "Hue"),
    ComponentRange::new("w", 0.0, 100.0, 0.1, PERCENT, "Whiteness"),
    ComponentRange::new("b", 0.0, 100.0, 0.1, PERCENT, "Blackness"),
];

static LAB: [ComponentRange; 3] = [
    ComponentRange::new("l", 0.0, 100.0, 0.1, None, "Lightness"),
    ComponentRange::new("a", -128.0, 127.0, 0.1, None, "Green-Red"),
    ComponentRange::new("b", -128.0, 127.0, 0.1, None, "Blue-Yellow"),
];

static SRGB: [ComponentRange; 3] = [
    ComponentRange::new("r", 0.0, 255.0, 1.0, None, "Red"),
    ComponentRange::new("g", 0.0, 255.0, 1.0, None, "Green"),
    ComponentRange::new("b", 0.0, 255.0, 1.0, None, "Blue"),
];

static XYZ: [ComponentRange; 3] = [
    ComponentRange::new("x", 0.0, 1.0, 0.001, None, "X"),
    ComponentRange::new("y", 0.0, 1.0, 0.001, None, "Y"),
    ComponentRange::new("z", 0.0, 1.0, 0.001, None, "Z"),
];

static DISPLAY_P3: [ComponentRange; 3] = unit_rgb();
static A98_RGB: [ComponentRange; 3] = unit_rgb();
static PROPHOTO_RGB: [ComponentRange; 3] = unit_rgb();
static REC2020: [ComponentRange; 3] = unit_rgb();

impl Space {
    /// The components of the space, in declared order.
    pub fn components(self) -> &'static [ComponentRange; 3] {
        match self {
            Space::Oklab => &OKLAB,
            Space::Lch => &LCH,
            Space::Oklch => &OKLCH,
            Space::Hsl => &HSL,
            Space::Hwb => &HWB,
            Space::Lab => &LAB,
            Space::Srgb => &SRGB,
            Space::Xyz => &XYZ,
            Space::DisplayP3 => &DISPLAY_P3,
            Space::A98Rgb => &A98_RGB,
            Space::ProPhotoRgb => &PROPHOTO_RGB,
            Space::Rec2020 => &REC2020,
        }
    }

    /// The component keys of the space, in declared order.
    pub fn keys(self) -> [&'static str; 3] {
        let [c0, c1, c2] = self.components();
        [c0.key, c1.key, c2.key]
    }

    /// Position of the component named `key`, if the space has one.
    pub fn index_of(self, key: &str) -> Option<usize> {
        self.components().iter().position(|range| range.key == key)
    }

    /// The range of the component named `key`, if the space has one.
    pub fn range(self, key: &str) -> Option<&'static ComponentRange> {
        self.components().iter().find(|range| range.key == key)
    }

    /// Format `values` as the canonical CSS functional notation for this
    /// space. The per component precision is part of the output contract.
    pub fn format(self, values: &Components) -> String {
        let Components(c0, c1, c2) = *values;
        match self {
            Space::Oklab => format!(
                "oklab({} {} {})",
                to_fixed(c0, 2),
                to_fixed(c1, 3),
                to_fixed(c2, 3)
            ),
            Space::Lch => format!(
                "lch({}% {} {})",
                to_fixed(c0, 1),
                to_fixed(c1, 1),
                to_fixed(c2, 0)
            ),
            Space::Oklch => format!(
                "oklch({}% {} {})",
                to_fixed(c0, 1),
                to_fixed(c1, 3),
                to_fixed(c2, 0)
            ),
            Space::Hsl => format!(
                "hsl({}deg {}% {}%)",
                to_fixed(c0, 0),
                to_fixed(c1, 1),
                to_fixed(c2, 1)
            ),
            Space::Hwb => format!(
                "hwb({}deg {}% {}%)",
                to_fixed(c0, 0),
                to_fixed(c1, 1),
                to_fixed(c2, 1)
            ),
            Space::Lab => format!(
                "lab({}% {} {})",
                to_fixed(c0, 1),
                to_fixed(c1, 1),
                to_fixed(c2, 1)
            ),
            Space::Srgb => format!(
                "rgb({}, {}, {})",
                round_half_up(c0),
                round_half_up(c1),
                round_half_up(c2)
            ),
            Space::Xyz
            | Space::DisplayP3
            | Space::A98Rgb
            | Space::ProPhotoRgb
            | Space::Rec2020 => format!(
                "color({} {} {} {})",
                self.name(),
                to_fixed(c0, 3),
                to_fixed(c1, 3),
                to_fixed(c2, 3)
            ),
        }
    }

    /// Whether a color with `values` should be treated as dark when picking a
    /// contrasting foreground.
    pub fn is_dark(self, values: &Components) -> bool {
        if self.is_rgb_like() {
            let scale = if self == Space::Srgb { 255.0 } else { 1.0 };
            let Components(r, g, b) = values.map(|v| v / scale);
            return 0.299 * r + 0.587 * g + 0.114 * b < 0.6;
        }

        match self {
            Space::Hsl => values.2 < 60.0,
            Space::Hwb => values.1 < 60.0,
            Space::Xyz => values.1 < 0.6,
            // The rest lead with lightness.
            _ => values.0 < self.components()[0].max * 0.6,
        }
    }
}

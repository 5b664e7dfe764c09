//! The color spaces a pattern can be specified in and the raw component
//! values that describe a color within one of them.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::error::UnknownSpace;

/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color, in the order the
/// color space declares its component keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return the component at `index` (0, 1 or 2).
    pub fn get(&self, index: usize) -> Option<Component> {
        match index {
            0 => Some(self.0),
            1 => Some(self.1),
            2 => Some(self.2),
            _ => None,
        }
    }

    /// Replace the component at `index`. Returns `false` if the index is out
    /// of bounds.
    pub fn set(&mut self, index: usize, value: Component) -> bool {
        match index {
            0 => self.0 = value,
            1 => self.1 = value,
            2 => self.2 = value,
            _ => return false,
        }
        true
    }

    /// Iterate over the three components in order.
    pub fn iter(&self) -> impl Iterator<Item = Component> {
        [self.0, self.1, self.2].into_iter()
    }
}

impl From<[Component; 3]> for Components {
    fn from(value: [Component; 3]) -> Self {
        Self(value[0], value[1], value[2])
    }
}

bitflags! {
    /// Flags to mark components that were missing from some input and had to
    /// be filled in.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the first component is missing.
        const C0_IS_NONE = 1 << 0;
        /// Set when the second component is missing.
        const C1_IS_NONE = 1 << 1;
        /// Set when the third component is missing.
        const C2_IS_NONE = 1 << 2;
    }
}

impl Flags {
    /// The flag for the component at `index`.
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => Flags::C0_IS_NONE,
            1 => Flags::C1_IS_NONE,
            2 => Flags::C2_IS_NONE,
            _ => Flags::empty(),
        }
    }
}

/// Color spaces and notations a pattern can be specified in.
/// <https://drafts.csswg.org/css-color-4/#color-type>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Oklab in the rectangular orthogonal form.
    Oklab = 0,
    /// CIE-Lab in the cylindrical polar form.
    Lch = 1,
    /// Oklab in the cylindrical polar form.
    Oklch = 2,
    /// The HSL (hue, saturation, lightness) notation of sRGB.
    /// <https://drafts.csswg.org/css-color-4/#the-hsl-notation>
    Hsl = 3,
    /// The HWB (hue, whiteness, blackness) notation of sRGB.
    /// <https://drafts.csswg.org/css-color-4/#the-hwb-notation>
    Hwb = 4,
    /// CIE-Lab in the rectangular orthogonal form.
    Lab = 5,
    /// The sRGB color space, with 0-255 channels.
    /// <https://drafts.csswg.org/css-color-4/#numeric-srgb>
    Srgb = 6,
    /// CIE-XYZ.
    Xyz = 7,
    /// display-p3
    DisplayP3 = 8,
    /// a98-rgb
    A98Rgb = 9,
    /// prophoto-rgb
    ProPhotoRgb = 10,
    /// rec2020
    Rec2020 = 11,
}

impl Space {
    /// Every supported space, in registry order.
    pub const ALL: [Space; 12] = [
        Space::Oklab,
        Space::Lch,
        Space::Oklch,
        Space::Hsl,
        Space::Hwb,
        Space::Lab,
        Space::Srgb,
        Space::Xyz,
        Space::DisplayP3,
        Space::A98Rgb,
        Space::ProPhotoRgb,
        Space::Rec2020,
    ];

    /// The name used for the space in CSS and in stored pattern data.
    pub fn name(self) -> &'static str {
        match self {
            Space::Oklab => "oklab",
            Space::Lch => "lch",
            Space::Oklch => "oklch",
            Space::Hsl => "hsl",
            Space::Hwb => "hwb",
            Space::Lab => "lab",
            Space::Srgb => "srgb",
            Space::Xyz => "xyz",
            Space::DisplayP3 => "display-p3",
            Space::A98Rgb => "a98-rgb",
            Space::ProPhotoRgb => "prophoto-rgb",
            Space::Rec2020 => "rec2020",
        }
    }

    /// The 2-character code used for the space in share strings.
    pub fn code(self) -> &'static str {
        match self {
            Space::Oklab => "ol",
            Space::Lch => "lc",
            Space::Oklch => "ok",
            Space::Hsl => "hs",
            Space::Hwb => "hw",
            Space::Lab => "lb",
            Space::Srgb => "sr",
            Space::Xyz => "xy",
            Space::DisplayP3 => "p3",
            Space::A98Rgb => "a9",
            Space::ProPhotoRgb => "pp",
            Space::Rec2020 => "r2",
        }
    }

    /// Look up a space by its share code.
    pub fn from_code(code: &str) -> Option<Space> {
        Space::ALL.into_iter().find(|space| space.code() == code)
    }

    /// The group the space is listed under when presenting a choice of
    /// spaces.
    pub fn group(self) -> SpaceGroup {
        match self {
            Space::Oklab => SpaceGroup::Default,
            Space::Lch | Space::Oklch | Space::Hsl | Space::Hwb => SpaceGroup::Cylindrical,
            _ => SpaceGroup::Cartesian,
        }
    }

    /// True for the spaces whose components are red, green and blue channels.
    pub fn is_rgb_like(self) -> bool {
        matches!(
            self,
            Space::Srgb | Space::DisplayP3 | Space::A98Rgb | Space::ProPhotoRgb | Space::Rec2020
        )
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = UnknownSpace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Space::ALL
            .into_iter()
            .find(|space| space.name() == s)
            .ok_or_else(|| UnknownSpace(s.to_string()))
    }
}

/// Groups used to organize spaces in a selection list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpaceGroup {
    /// The space new patterns are expected to start from.
    Default,
    /// Spaces with a hue angle.
    Cylindrical,
    /// Spaces with orthogonal axes.
    Cartesian,
}

impl SpaceGroup {
    /// The heading shown for the group.
    pub fn label(self) -> &'static str {
        match self {
            SpaceGroup::Default => "Default",
            SpaceGroup::Cylindrical => "Cylindrical",
            SpaceGroup::Cartesian => "Cartesian",
        }
    }
}

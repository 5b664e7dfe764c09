//! Default component values for a freshly selected color space.

use crate::registry::ComponentRange;
use crate::{Component, Components, Space};

/// Hue given to every space with a hue component.
pub const DEFAULT_HUE: Component = 240.0;

/// The default value of a single component, chosen by the role its key
/// plays in the space.
pub fn default_component(range: &ComponentRange) -> Component {
    match range.key {
        "h" => DEFAULT_HUE,
        "r" | "g" => range.min,
        "b" => range.max,
        "l" | "y" => range.max * 0.5,
        "c" | "s" => range.max * 0.5,
        "w" | "a" | "x" | "z" => range.min,
        _ => range.midpoint(),
    }
}

impl Space {
    /// A complete set of values for the space, one per declared component.
    pub fn defaults(self) -> Components {
        let [c0, c1, c2] = self.components();
        Components(
            default_component(c0),
            default_component(c1),
            default_component(c2),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_defaults() {
        assert_eq!(Space::Oklch.defaults(), Components(50.0, 0.2, 240.0));
        assert_eq!(Space::Srgb.defaults(), Components(0.0, 0.0, 255.0));
        assert_eq!(Space::Hsl.defaults(), Components(240.0, 50.0, 50.0));
        assert_eq!(Space::Hwb.defaults(), Components(240.0, 0.0, 100.0));
        assert_eq!(Space::Oklab.defaults(), Components(0.5, -0.4, 0.4));
        assert_eq!(Space::Lab.defaults(), Components(50.0, -128.0, 127.0));
        assert_eq!(Space::Xyz.defaults(), Components(0.0, 0.5, 0.0));
        assert_eq!(Space::DisplayP3.defaults(), Components(0.0, 0.0, 1.0));
    }

    #[test]
    fn unknown_keys_fall_back_to_the_midpoint() {
        let range = ComponentRange {
            key: "q",
            min: -1.0,
            max: 3.0,
            step: 0.1,
            unit: None,
            label: "Q",
        };
        assert_eq!(default_component(&range), 1.0);
    }

    proptest! {
        #[test]
        fn defaults_lie_within_declared_ranges(index in 0..Space::ALL.len()) {
            let space = Space::ALL[index];
            let values = space.defaults();
            for (range, value) in space.components().iter().zip(values.iter()) {
                prop_assert!(range.contains(value), "{} {} = {}", space, range.key, value);
            }
        }
    }
}

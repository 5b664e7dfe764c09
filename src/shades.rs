//! Derive the CSS custom properties for a list of patterns: the base color,
//! the base modifier and a ten step shade scale expressed as relative oklch
//! colors.

use crate::fixed::to_fixed;
use crate::Pattern;

/// Lightness percentages of the shade scale.
pub const SHADE_STEPS: [u32; 10] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// The `sin()` multiplier for the shade at `step` percent lightness, rounded
/// to one decimal so the emitted text is stable.
pub fn shade_multiplier(step: u32) -> String {
    to_fixed((11.0 - f64::from(step) / 10.0) * 0.1, 1)
}

/// The relative color expression for the shade of pattern `name` at `step`
/// percent lightness.
pub fn shade_expression(name: &str, step: u32) -> String {
    let multiplier = shade_multiplier(step);
    format!(
        "oklch(from var(--{name}) {step}% calc(var(--{name}-base) + (sin({multiplier} * pi) * c)) h)"
    )
}

/// Reference to a shade variable, for use as a swatch background.
pub fn preview_var(pattern: &Pattern, step: u32) -> String {
    format!("var(--{}-{step})", pattern.name)
}

/// An ordered set of CSS custom property declarations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CssVariables {
    entries: Vec<(String, String)>,
}

impl CssVariables {
    /// Derive the variables of every pattern in order.
    pub fn derive(patterns: &[Pattern]) -> Self {
        let mut entries = Vec::with_capacity(patterns.len() * (SHADE_STEPS.len() + 2));
        for pattern in patterns {
            let name = &pattern.name;
            entries.push((format!("--{name}"), pattern.css_color()));
            entries.push((format!("--{name}-base"), pattern.base_modifier.to_string()));
            for step in SHADE_STEPS {
                entries.push((format!("--{name}-{step}"), shade_expression(name, step)));
            }
        }
        Self { entries }
    }

    /// Look up the value of a variable by its full name, e.g. `--primary-50`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The declarations as the body of a `:root` rule, one per line.
    pub fn to_style_block(&self) -> String {
        let body = self
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(":root {{\n{body}\n}}")
    }
}

/// The copyable stylesheet for `patterns`: a `:root` rule with each
/// pattern's declarations followed by a blank line.
pub fn stylesheet(patterns: &[Pattern]) -> String {
    let mut css = String::from(":root {\n");
    for pattern in patterns {
        for (name, value) in CssVariables::derive(std::slice::from_ref(pattern)).iter() {
            css.push_str(&format!("  {name}: {value};\n"));
        }
        css.push('\n');
    }
    css.push('}');
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PatternId, Space};

    #[test]
    fn multipliers_have_one_decimal() {
        let multipliers = SHADE_STEPS.map(shade_multiplier);
        assert_eq!(
            multipliers,
            ["1.0", "0.9", "0.8", "0.7", "0.6", "0.5", "0.4", "0.3", "0.2", "0.1"]
        );
    }

    #[test]
    fn shade_expression_text() {
        assert_eq!(
            shade_expression("primary", 30),
            "oklch(from var(--primary) 30% calc(var(--primary-base) + (sin(0.8 * pi) * c)) h)"
        );
    }

    #[test]
    fn variables_per_pattern() {
        let patterns = vec![
            Pattern::fallback(),
            Pattern::new(PatternId(2), "accent", Space::Srgb),
        ];
        let vars = CssVariables::derive(&patterns);
        assert_eq!(vars.len(), 24);
        assert_eq!(vars.get("--primary"), Some("oklch(50.0% 0.200 240)"));
        assert_eq!(vars.get("--primary-base"), Some("0.05"));
        assert_eq!(vars.get("--accent"), Some("rgb(0, 0, 255)"));
        assert_eq!(
            vars.get("--accent-100"),
            Some("oklch(from var(--accent) 100% calc(var(--accent-base) + (sin(0.1 * pi) * c)) h)")
        );
        assert_eq!(vars.get("--accent-0"), None);
        assert_eq!(preview_var(&patterns[1], 40), "var(--accent-40)");
    }

    #[test]
    fn derivation_is_deterministic() {
        let patterns = vec![Pattern::fallback()];
        assert_eq!(CssVariables::derive(&patterns), CssVariables::derive(&patterns));
        assert_eq!(stylesheet(&patterns), stylesheet(&patterns));
    }

    #[test]
    fn stylesheet_layout() {
        let css = stylesheet(&[Pattern::fallback()]);
        let lines: Vec<_> = css.lines().collect();
        assert_eq!(lines[0], ":root {");
        assert_eq!(lines[1], "  --primary: oklch(50.0% 0.200 240);");
        assert_eq!(lines[2], "  --primary-base: 0.05;");
        assert_eq!(
            lines[3],
            "  --primary-10: oklch(from var(--primary) 10% calc(var(--primary-base) + (sin(1.0 * pi) * c)) h);"
        );
        assert_eq!(lines[13], "");
        assert_eq!(lines[14], "}");
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn style_block() {
        let vars = CssVariables::derive(&[Pattern::fallback()]);
        let block = vars.to_style_block();
        assert!(block.starts_with(":root {\n--primary: oklch(50.0% 0.200 240);\n"));
        assert!(block.ends_with(";\n}"));
    }
}

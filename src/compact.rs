//! The compact share string format.
//!
//! ```text
//! Patterns := Pattern ("|" Pattern)*
//! Pattern  := Name ":" SpaceCode ":" Values [":" Base]
//! Values   := Value ("," Value)*
//! ```
//!
//! Names are percent-encoded, the space is stored as its 2-character code and
//! numbers are written with at most 3 (values) or 2 (base modifier) decimals
//! without trailing zeros. Encoding is lossy past that precision.

use crate::error::SegmentError;
use crate::fixed::to_fixed_trimmed;
use crate::pattern::{normalize, sanitize_name, DEFAULT_BASE_MODIFIER};
use crate::{Component, Components, Flags, Pattern, PatternId, Space};

const PATTERN_SEPARATOR: &str = "|";
const FIELD_SEPARATOR: &str = ":";
const VALUE_SEPARATOR: &str = ",";

/// Space assumed for a missing or unknown space code.
pub const FALLBACK_SPACE: Space = Space::Oklch;

/// Encode `patterns` into a share string.
pub fn encode(patterns: &[Pattern]) -> String {
    patterns
        .iter()
        .map(encode_pattern)
        .collect::<Vec<_>>()
        .join(PATTERN_SEPARATOR)
}

fn encode_pattern(pattern: &Pattern) -> String {
    let name = urlencoding::encode(&sanitize_name(&pattern.name)).into_owned();
    let values = pattern
        .values
        .iter()
        .map(|value| to_fixed_trimmed(value, 3))
        .collect::<Vec<_>>()
        .join(VALUE_SEPARATOR);
    let base = to_fixed_trimmed(pattern.base_modifier, 2);

    format!("{name}:{}:{values}:{base}", pattern.space.code())
}

/// Decode a share string. Segments that cannot be read are logged and
/// skipped. Ids are assigned by position among the readable segments. If
/// nothing can be read the result is the single fallback pattern.
///
/// Values are not clamped to the ranges of their space. Each value must be
/// a complete number: `60px` rejects its segment instead of reading as `60`.
pub fn decode(encoded: &str) -> Vec<Pattern> {
    let mut patterns = Vec::new();

    if !encoded.is_empty() {
        for segment in encoded.split(PATTERN_SEPARATOR) {
            let id = PatternId(patterns.len() as u32 + 1);
            match decode_pattern(segment, id) {
                Ok(pattern) => patterns.push(pattern),
                Err(err) => {
                    tracing::warn!(segment, error = %err, "skipping unreadable pattern");
                }
            }
        }
    }

    let mut patterns = normalize(patterns);
    for (position, pattern) in patterns.iter_mut().enumerate() {
        pattern.id = PatternId(position as u32 + 1);
    }
    patterns
}

fn decode_pattern(segment: &str, id: PatternId) -> Result<Pattern, SegmentError> {
    let fields: Vec<&str> = segment.split(FIELD_SEPARATOR).collect();
    let [name, code, values, rest @ ..] = fields.as_slice() else {
        return Err(SegmentError::MissingFields(fields.len()));
    };

    let name = urlencoding::decode(name).map_err(|_| SegmentError::BadName)?;
    let name = sanitize_name(&name);
    if name.is_empty() {
        return Err(SegmentError::EmptyName);
    }

    let space = Space::from_code(code).unwrap_or_else(|| {
        tracing::debug!(code, fallback = %FALLBACK_SPACE, "unknown space code");
        FALLBACK_SPACE
    });

    let (values, missing) = decode_values(values, space)?;
    if !missing.is_empty() {
        tracing::debug!(name = %name, ?missing, "filled missing components with defaults");
    }

    let base_modifier = rest
        .first()
        .and_then(|base| base.trim().parse::<Component>().ok())
        .filter(|base| base.is_finite())
        .unwrap_or(DEFAULT_BASE_MODIFIER);

    Ok(Pattern {
        id,
        name,
        space,
        values,
        base_modifier,
    })
}

/// Read the comma separated values of `space`. Components past the end of
/// the list keep their default value and are reported in the returned flags.
fn decode_values(text: &str, space: Space) -> Result<(Components, Flags), SegmentError> {
    let parts: Vec<&str> = text.split(VALUE_SEPARATOR).collect();
    let mut values = space.defaults();
    let mut missing = Flags::empty();

    for index in 0..space.components().len() {
        match parts.get(index) {
            Some(part) => {
                let value = part
                    .trim()
                    .parse::<Component>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| SegmentError::BadValue {
                        index,
                        text: part.to_string(),
                    })?;
                values.set(index, value);
            }
            None => missing |= Flags::for_index(index),
        }
    }

    Ok((values, missing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use proptest::prelude::*;

    fn pattern(id: u32, name: &str, space: Space, values: Components, base: Component) -> Pattern {
        Pattern {
            id: PatternId(id),
            name: name.to_string(),
            space,
            values,
            base_modifier: base,
        }
    }

    #[test]
    fn encodes_two_patterns() {
        let patterns = vec![
            pattern(1, "primary", Space::Oklch, Components(60.0, 0.1, 240.0), 0.05),
            pattern(2, "accent!", Space::Hsl, Components(10.0, 80.0, 50.0), 0.2),
        ];
        assert_eq!(
            encode(&patterns),
            "primary:ok:60,0.1,240:0.05|accent-:hs:10,80,50:0.2"
        );
    }

    #[test]
    fn decodes_two_patterns() {
        let patterns = decode("primary:ok:60,0.1,240:0.05|accent-:hs:10,80,50:0.2");
        assert_eq!(
            patterns,
            vec![
                pattern(1, "primary", Space::Oklch, Components(60.0, 0.1, 240.0), 0.05),
                pattern(2, "accent-", Space::Hsl, Components(10.0, 80.0, 50.0), 0.2),
            ]
        );
    }

    #[test]
    fn empty_and_garbage_input_yield_the_fallback() {
        assert_eq!(decode(""), vec![Pattern::fallback()]);
        assert_eq!(decode("garbage:::"), vec![Pattern::fallback()]);
        assert_eq!(decode("only-a-name"), vec![Pattern::fallback()]);
        assert_eq!(decode("|||"), vec![Pattern::fallback()]);
    }

    #[test]
    fn values_must_be_complete_numbers() {
        assert_eq!(decode("a:hs:60px,1,1"), vec![Pattern::fallback()]);
        assert_eq!(decode("a:hs:60,1,1|b:hs:1,2%,3")[0].name, "a");
        assert_eq!(decode("a:hs:60,1,1|b:hs:1,2%,3").len(), 1);
    }

    #[test]
    fn unreadable_segments_are_skipped_and_ids_follow_position() {
        let patterns = decode("a:ok:1,2,3:0.1|b:hs:x,1,1|c:sr:1,2,3");
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].name, "a");
        assert_eq!(patterns[0].id, PatternId(1));
        assert_eq!(patterns[1].name, "c");
        assert_eq!(patterns[1].id, PatternId(2));
    }

    #[test]
    fn unknown_or_missing_space_code_means_oklch() {
        let patterns = decode("a:zz:1,2,3|b::4,5,6");
        assert_eq!(patterns[0].space, Space::Oklch);
        assert_eq!(patterns[1].space, Space::Oklch);
        assert_eq!(patterns[1].values, Components(4.0, 5.0, 6.0));
    }

    #[test]
    fn missing_values_default_per_component() {
        let patterns = decode("a:sr:10|b:hs:90,10");
        assert_eq!(patterns[0].values, Components(10.0, 0.0, 255.0));
        assert_eq!(patterns[1].values, Components(90.0, 10.0, 50.0));
    }

    #[test]
    fn missing_or_bad_base_modifier_defaults() {
        assert_eq!(decode("a:ok:1,2,3")[0].base_modifier, 0.05);
        assert_eq!(decode("a:ok:1,2,3:nope")[0].base_modifier, 0.05);
        assert_eq!(decode("a:ok:1,2,3:0")[0].base_modifier, 0.0);
        assert_eq!(decode("a:ok:1,2,3:1:extra")[0].base_modifier, 1.0);
    }

    #[test]
    fn out_of_range_values_are_kept() {
        let patterns = decode("a:sr:300,-5,1000:2");
        assert_eq!(patterns[0].values, Components(300.0, -5.0, 1000.0));
        assert_eq!(patterns[0].base_modifier, 2.0);
    }

    #[test]
    fn names_are_percent_decoded_and_sanitized() {
        assert_eq!(decode("my%20color:ok:1,2,3")[0].name, "my-color");
        assert_eq!(decode("%20:ok:1,2,3|b:ok:1,2,3")[0].name, "-");
        assert_eq!(decode("a:ok:1,2,3|a:hs:1,2,3").len(), 1);
    }

    #[test]
    fn encoding_is_lossy_past_three_decimals() {
        let values = Components(0.12345, -0.0006, 0.4);
        let patterns = vec![pattern(1, "p", Space::Oklab, values, 0.056)];
        let encoded = encode(&patterns);
        assert_eq!(encoded, "p:ol:0.123,-0.001,0.4:0.06");
        let decoded = decode(&encoded);
        assert_component_eq!(decoded[0].values.0, 0.12345, epsilon = 0.001);
        assert_component_eq!(decoded[0].values.1, -0.0006, epsilon = 0.001);
        assert_component_eq!(decoded[0].base_modifier, 0.056, epsilon = 0.01);
    }

    fn snapped(
        decimals: i32,
        range: std::ops::RangeInclusive<i64>,
    ) -> impl Strategy<Value = Component> {
        range.prop_map(move |n| format!("{}e-{decimals}", n).parse::<Component>().unwrap())
    }

    fn snapped_pattern() -> impl Strategy<Value = (usize, [Component; 3], Component)> {
        (
            0..Space::ALL.len(),
            [
                snapped(3, -400_000..=400_000),
                snapped(3, -400_000..=400_000),
                snapped(3, -400_000..=400_000),
            ],
            snapped(2, 0..=100),
        )
    }

    proptest! {
        #[test]
        fn round_trips_snapped_values(specs in prop::collection::vec(snapped_pattern(), 1..=10)) {
            let patterns: Vec<Pattern> = specs
                .into_iter()
                .enumerate()
                .map(|(i, (space, values, base))| Pattern {
                    id: PatternId(i as u32 + 1),
                    name: format!("color{}", i + 1),
                    space: Space::ALL[space],
                    values: Components::from(values),
                    base_modifier: base,
                })
                .collect();
            prop_assert_eq!(decode(&encode(&patterns)), patterns);
        }
    }
}

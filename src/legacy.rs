//! Reading share links from before the compact format: a base64 encoded JSON
//! array of patterns carried in the URL fragment.
//!
//! Entries are upgraded to the current model as they are read. Values are
//! kept only when they were stored for the space the entry ends up in and
//! every component of that space is present as a number; otherwise all of
//! them are replaced with the defaults of the space. Ids and base modifiers
//! that aren't usable numbers are treated as absent.

use std::collections::{HashMap, HashSet};

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LegacyError;
use crate::pattern::{normalize, DEFAULT_BASE_MODIFIER};
use crate::{Components, Flags, Pattern, PatternId, Space};

/// Space given to entries that predate color space support, and to entries
/// whose space is no longer supported.
pub const LEGACY_TARGET_SPACE: Space = Space::Oklch;

/// Stored ids above this are treated as unset, so allocation can't run out.
const MAX_STORED_ID: u32 = u32::MAX / 2;

/// Standard alphabet, with or without padding.
const FRAGMENT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacyPattern {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    color_space: Option<String>,
    #[serde(default)]
    color_values: Option<HashMap<String, Value>>,
    #[serde(default)]
    base_modifier: Option<Value>,
}

/// Resolve a stored space name against the registry. `srgb-linear` became
/// `srgb`; any other name that is no longer supported becomes `target`.
pub fn migrate_space(name: &str, target: Space) -> Space {
    if name == "srgb-linear" {
        return Space::Srgb;
    }
    name.parse().unwrap_or(target)
}

/// Decode a legacy fragment, with or without its leading `#`.
///
/// Fails only if the fragment as a whole is unreadable. Single entries that
/// don't look like a pattern are logged and skipped.
pub fn decode_legacy(fragment: &str) -> Result<Vec<Pattern>, LegacyError> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment).trim();
    let bytes = FRAGMENT_ENGINE.decode(fragment)?;
    let json = String::from_utf8(bytes)?;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&json)?;

    let mut patterns = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<LegacyPattern>(entry) {
            Ok(legacy) => patterns.push(upgrade(legacy, index)),
            Err(err) => tracing::warn!(index, error = %err, "skipping unreadable legacy pattern"),
        }
    }

    Ok(normalize(assign_ids(patterns)))
}

/// Like [`decode_legacy`], but never fails: an unreadable fragment yields
/// the fallback list.
pub fn load_legacy(fragment: &str) -> Vec<Pattern> {
    decode_legacy(fragment).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "failed to load patterns from legacy fragment");
        vec![Pattern::fallback()]
    })
}

fn upgrade(legacy: LegacyPattern, index: usize) -> Pattern {
    let name = legacy
        .name
        .unwrap_or_else(|| format!("color{}", index + 1));
    let id = legacy
        .id
        .as_ref()
        .and_then(Value::as_u64)
        .and_then(|id| u32::try_from(id).ok())
        .filter(|id| *id <= MAX_STORED_ID)
        .map(PatternId)
        .unwrap_or_default();
    let base_modifier = legacy
        .base_modifier
        .as_ref()
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_BASE_MODIFIER);
    let stored_values = legacy.color_values.unwrap_or_default();

    let stored_space = legacy.color_space.filter(|space| !space.is_empty());
    let Some(stored_space) = stored_space else {
        tracing::debug!(name = %name, space = %LEGACY_TARGET_SPACE, "pattern has no color space");
        return Pattern {
            id,
            name,
            space: LEGACY_TARGET_SPACE,
            values: LEGACY_TARGET_SPACE.defaults(),
            base_modifier,
        };
    };

    let space = migrate_space(&stored_space, LEGACY_TARGET_SPACE);
    let values = if space.name() == stored_space {
        complete_values(&stored_values, space).unwrap_or_else(|missing| {
            tracing::debug!(name = %name, ?missing, "incomplete values, using defaults");
            space.defaults()
        })
    } else {
        tracing::debug!(name = %name, from = %stored_space, to = %space, "migrated color space");
        space.defaults()
    };

    Pattern {
        id,
        name,
        space,
        values,
        base_modifier,
    }
}

/// Collect the values of `space` from a stored key/value map, or report
/// which components are missing or not numbers.
fn complete_values(stored: &HashMap<String, Value>, space: Space) -> Result<Components, Flags> {
    let mut values = space.defaults();
    let mut missing = Flags::empty();
    for (index, key) in space.keys().into_iter().enumerate() {
        match stored.get(key).and_then(Value::as_f64) {
            Some(value) => {
                values.set(index, value);
            }
            None => missing |= Flags::for_index(index),
        }
    }
    if missing.is_empty() {
        Ok(values)
    } else {
        Err(missing)
    }
}

/// Keep stored ids that are set and unique; give every other entry the next
/// free id.
fn assign_ids(patterns: Vec<Pattern>) -> Vec<Pattern> {
    let mut used = HashSet::new();
    let unassigned: Vec<bool> = patterns
        .iter()
        .map(|pattern| pattern.id.0 == 0 || !used.insert(pattern.id))
        .collect();

    let mut next = used.iter().max().copied().unwrap_or_default().next();
    patterns
        .into_iter()
        .zip(unassigned)
        .filter_map(|(mut pattern, unassigned)| {
            if unassigned {
                let Some(id) = next else {
                    tracing::warn!(name = %pattern.name, "no free id, skipping legacy pattern");
                    return None;
                };
                pattern.id = id;
                next = id.next();
            }
            Some(pattern)
        })
        .collect()
}

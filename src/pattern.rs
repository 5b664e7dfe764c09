//! A [`Pattern`] is a named base color from which a palette of shades is
//! derived.

use std::collections::HashSet;
use std::fmt;

use crate::{Component, Components, Space};

/// Upper bound on the number of patterns in a list.
pub const MAX_PATTERNS: usize = 10;

/// The base modifier given to new patterns and used when none can be read.
pub const DEFAULT_BASE_MODIFIER: Component = 0.05;

/// Name of the pattern a session starts with.
pub const DEFAULT_PATTERN_NAME: &str = "primary";

/// Identifies a pattern within a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternId(pub u32);

impl PatternId {
    /// The id following this one, or `None` once ids are exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A named base color in one of the supported color spaces.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    /// Session unique id.
    pub id: PatternId,
    /// Name of the pattern, also used as the CSS custom property name.
    pub name: String,
    /// The color space the values are specified in.
    pub space: Space,
    /// One value per component of `space`, in declared order.
    pub values: Components,
    /// Offset added to the chroma of every derived shade, in `0..=1`.
    pub base_modifier: Component,
}

impl Pattern {
    /// Create a pattern with the default values of `space`.
    pub fn new(id: PatternId, name: impl Into<String>, space: Space) -> Self {
        Self {
            id,
            name: name.into(),
            space,
            values: space.defaults(),
            base_modifier: DEFAULT_BASE_MODIFIER,
        }
    }

    /// The pattern every session falls back to.
    pub fn fallback() -> Self {
        Self::new(PatternId(1), DEFAULT_PATTERN_NAME, Space::Oklch)
    }

    /// Switch to another color space. Values are replaced with the defaults
    /// of the new space; nothing is carried over.
    pub fn set_space(&mut self, space: Space) {
        self.space = space;
        self.values = space.defaults();
    }

    /// The base color as CSS text.
    pub fn css_color(&self) -> String {
        self.space.format(&self.values)
    }

    /// Whether the base color is dark.
    pub fn is_dark(&self) -> bool {
        self.space.is_dark(&self.values)
    }
}

/// Replace every character that may not appear in a CSS custom property name
/// with `-`. Only ASCII letters, digits, `_` and `-` are kept.
pub fn sanitize_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Bring a decoded list in line with the pattern list invariants: names are
/// sanitized, empty and repeated names are dropped, at most [`MAX_PATTERNS`]
/// are kept, and an empty result becomes the fallback list.
pub(crate) fn normalize(patterns: Vec<Pattern>) -> Vec<Pattern> {
    let mut names = HashSet::new();
    let mut result = Vec::with_capacity(patterns.len().min(MAX_PATTERNS));

    for mut pattern in patterns {
        pattern.name = sanitize_name(&pattern.name);
        if pattern.name.is_empty() {
            tracing::warn!(id = %pattern.id, "dropping pattern with an empty name");
            continue;
        }
        if !names.insert(pattern.name.clone()) {
            tracing::warn!(name = %pattern.name, "dropping pattern with a repeated name");
            continue;
        }
        if result.len() == MAX_PATTERNS {
            tracing::warn!(limit = MAX_PATTERNS, "dropping patterns past the limit");
            break;
        }
        result.push(pattern);
    }

    if result.is_empty() {
        result.push(Pattern::fallback());
    }
    result
}

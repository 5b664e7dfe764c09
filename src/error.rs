//! Errors produced while reading share data and validating pattern edits.
//!
//! None of these are fatal: decode errors are logged and the affected input
//! is skipped, update errors are reported back to the caller with the
//! pattern list left untouched.

use thiserror::Error;

use crate::pattern::PatternId;

/// A color space name that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color space: {0}")]
pub struct UnknownSpace(pub String);

/// Reasons a single `|`-separated segment of a share string is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SegmentError {
    /// The segment has fewer than the required `name:code:values` fields.
    #[error("expected at least 3 ':'-separated fields, found {0}")]
    MissingFields(usize),
    /// The name could not be percent-decoded.
    #[error("name is not valid percent-encoded UTF-8")]
    BadName,
    /// The name is empty once sanitized.
    #[error("name is empty")]
    EmptyName,
    /// A component value is not a number.
    #[error("component {index} is not a number: {text:?}")]
    BadValue {
        /// Position of the value within the segment.
        index: usize,
        /// The offending text.
        text: String,
    },
}

/// Reasons the legacy fragment payload could not be read at all.
#[derive(Debug, Error)]
pub enum LegacyError {
    /// The fragment is not base64.
    #[error("fragment is not base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The decoded bytes are not UTF-8.
    #[error("fragment is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// The decoded text is not a JSON array.
    #[error("fragment is not a JSON pattern list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validation failures when editing a pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UpdateError {
    /// The name contained no usable characters.
    #[error("Name cannot be empty or contain only special characters")]
    EmptyName,
    /// Another pattern already uses the name.
    #[error("This name is already in use")]
    DuplicateName,
    /// No pattern has the given id.
    #[error("no pattern with id {0}")]
    UnknownPattern(PatternId),
    /// The pattern's color space has no component with the given key.
    #[error("{space} has no component {key:?}")]
    UnknownComponent {
        /// The pattern's current color space.
        space: crate::Space,
        /// The requested key.
        key: String,
    },
}

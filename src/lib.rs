//! palettelink builds CSS palettes from named base colors ("patterns") and
//! stores a whole set of patterns in a compact string that fits in a share
//! link.
//!
//! ```rust
//! use palettelink::{compact, Components, Pattern, PatternId, Space};
//!
//! let mut brand = Pattern::new(PatternId(1), "brand", Space::Hsl);
//! brand.values = Components(10.0, 80.0, 50.0);
//!
//! let encoded = compact::encode(&[brand.clone()]);
//! assert_eq!(encoded, "brand:hs:10,80,50:0.05");
//! assert_eq!(compact::decode(&encoded), vec![brand]);
//! ```

#![deny(missing_docs)]

mod color;
pub mod compact;
pub mod controller;
pub mod debounce;
mod defaults;
mod error;
pub mod fixed;
pub mod legacy;
mod pattern;
mod registry;
pub mod shades;
pub mod share;


pub use color::{Component, Components, Flags, Space, SpaceGroup};
pub use controller::{ControllerConfig, PatternController, PatternUpdate};
pub use defaults::{default_component, DEFAULT_HUE};
pub use error::{LegacyError, SegmentError, UnknownSpace, UpdateError};
pub use pattern::{
    sanitize_name, Pattern, PatternId, DEFAULT_BASE_MODIFIER, DEFAULT_PATTERN_NAME, MAX_PATTERNS,
};
pub use registry::ComponentRange;
pub use shades::{stylesheet, CssVariables};

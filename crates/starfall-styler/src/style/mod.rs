//! Style objects and how they combine.
//!
//! - [`StyleValue`]: a scalar CSS value or a nested block
//! - [`StyleObject`]: a mapping from property or selector keys to values
//! - [`merge`]: copy-on-write combination of two style objects

mod merge;
mod value;

pub(crate) use merge::merge_block;
pub use merge::merge;
pub use value::{StyleObject, StyleValue};

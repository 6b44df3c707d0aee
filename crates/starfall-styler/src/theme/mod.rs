//! Themes and breakpoint lookup.
//!
//! This module provides:
//!
//! - [`Breakpoints`]: the only theme capability the engine relies on
//! - [`Theme`]: a ready-made design-token theme with a fluent builder
//! - [`Font`]: a typography token
//!
//! Any type can serve as a theme by implementing [`Breakpoints`]; a
//! `serde_json::Value` shaped like `{ "mobileWidth": 600, ... }` works out
//! of the box.

mod breakpoints;
#[allow(clippy::module_inception)]
mod theme;

pub use breakpoints::{width_field, Breakpoints};
pub use theme::{Font, Theme};

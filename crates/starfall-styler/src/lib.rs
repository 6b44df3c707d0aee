//! # Starfall Styler
//!
//! Theme-aware resolution of style objects.
//!
//! Components describe their styling declaratively: as a plain
//! [`StyleObject`], as a function of the theme, or as a function that itself
//! resolves nested style descriptions. [`resolve_style`] turns any of these
//! into one flat style object, merged onto an optional target that is never
//! modified.
//!
//! ## Breakpoint shorthands
//!
//! Keys such as `:sf-max(sm)` and `:sf-min(md)` are rewritten into canonical
//! media queries using the theme's breakpoint widths. `max` covers widths up
//! to and including the tier, `min` starts one pixel above it, so the two
//! windows never overlap.
//!
//! ## Quick start
//!
//! ```rust
//! use starfall_styler::{resolve_style, StyleInput, StyleObject, Theme};
//!
//! let theme = Theme::new()
//!     .with_mobile_width(600)
//!     .with_spacing_unit(5.0)
//!     .add_color("primary", "green");
//!
//! let style = StyleInput::computed(|theme: &Theme, _styler| {
//!     Ok(StyleObject::new()
//!         .add("height", theme.spacing(1.0))
//!         .add(":sf-max(sm)", StyleObject::new().add("color", theme.color("primary").unwrap_or("black"))))
//! });
//! let target = StyleObject::new().add("backgroundColor", "World");
//!
//! let resolved = resolve_style(&style, &theme, Some(&target)).unwrap();
//! assert_eq!(
//!     resolved,
//!     StyleObject::new()
//!         .add("backgroundColor", "World")
//!         .add("height", 5)
//!         .add("@media (max-width: 600px)", StyleObject::new().add("color", "green"))
//! );
//! ```
//!
//! ## Themes
//!
//! The engine only needs breakpoint widths from a theme, expressed by the
//! [`Breakpoints`] trait. [`Theme`] is a ready-made implementation that also
//! carries spacing, color and font tokens and loads from YAML or JSON. A
//! JSON value shaped like `{ "mobileWidth": 600, "tabletWidth": 1024 }`
//! works as a theme too.

pub mod error;
pub mod input;
pub mod shorthand;
pub mod space;
pub mod style;
pub mod styler;
pub mod theme;

pub use error::{StyleError, StyleResult};
pub use input::{StyleFn, StyleInput};
pub use shorthand::{expand, media_query_key, Bound, Shorthand};
pub use space::{compile_space, stack_item_style, SpaceValue};
pub use style::{merge, StyleObject, StyleValue};
pub use styler::{resolve_style, Styler};
pub use theme::{Breakpoints, Font, Theme};

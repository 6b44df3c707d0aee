//! Responsive breakpoint shorthands.
//!
//! Style keys such as `:sf-max(sm)` and `:sf-min(md)` are compact spellings
//! of media queries. [`Shorthand`] parses them and [`expand`] rewrites a
//! whole style object into canonical `@media (...)` keys using the theme's
//! breakpoint widths:
//!
//! | Shorthand       | Canonical key                      |
//! |-----------------|------------------------------------|
//! | `:sf-max(sm)`   | `@media (max-width: {sm}px)`       |
//! | `:sf-min(sm)`   | `@media (min-width: {sm + 1}px)`   |

mod expand;
mod parse;

pub use expand::expand;
pub use parse::{is_shorthand_key, media_query_key, Bound, Shorthand, SHORTHAND_PREFIX};

//! Rewriting breakpoint shorthands into media-query keys.

use tracing::trace;

use super::parse::Shorthand;
use crate::error::{StyleError, StyleResult};
use crate::style::{merge_block, StyleObject, StyleValue};
use crate::theme::Breakpoints;

/// Expands every breakpoint shorthand in `style`, returning a new object.
///
/// Ordinary keys are copied as they are. Each shorthand block is merged onto
/// the block under its canonical `@media` key, whether that block was
/// declared explicitly or produced by another shorthand; on collision the
/// shorthand's properties win. Nested blocks are expanded too, so no
/// shorthand survives anywhere in the result.
///
/// # Errors
///
/// Fails on malformed shorthands, tiers missing from the theme, and
/// shorthands whose value is not a block.
///
/// # Example
///
/// ```rust
/// use starfall_styler::{expand, StyleObject, Theme};
///
/// let theme = Theme::new().with_mobile_width(600);
/// let style = StyleObject::new()
///     .add("@media (max-width: 600px)", StyleObject::new().add("color", "black"))
///     .add(":sf-max(sm)", StyleObject::new().add("backgroundColor", "blue"));
///
/// let expanded = expand(&style, &theme).unwrap();
/// assert_eq!(
///     expanded,
///     StyleObject::new().add(
///         "@media (max-width: 600px)",
///         StyleObject::new()
///             .add("color", "black")
///             .add("backgroundColor", "blue"),
///     )
/// );
/// ```
pub fn expand<T: Breakpoints + ?Sized>(style: &StyleObject, theme: &T) -> StyleResult<StyleObject> {
    let mut expanded = StyleObject::new();
    let mut shorthand_blocks = Vec::new();

    for (key, value) in style {
        match Shorthand::parse(key)? {
            Some(shorthand) => {
                let block = value
                    .as_block()
                    .ok_or_else(|| StyleError::ShorthandNotBlock { key: key.clone() })?;
                let canonical = shorthand.canonical_key(theme)?;
                trace!(shorthand = %key, canonical = %canonical, "expanding breakpoint shorthand");
                shorthand_blocks.push((canonical, expand(block, theme)?));
            }
            None => {
                let value = match value {
                    StyleValue::Block(block) => StyleValue::Block(expand(block, theme)?),
                    scalar => scalar.clone(),
                };
                expanded.insert(key.clone(), value);
            }
        }
    }

    for (canonical, block) in shorthand_blocks {
        let merged = merge_block(expanded.get(&canonical), &block);
        expanded.insert(canonical, merged);
    }

    Ok(expanded)
}

//! The resolve, expand and merge pipeline.

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::error::StyleResult;
use crate::input::StyleInput;
use crate::shorthand::expand;
use crate::style::{merge, StyleObject};
use crate::theme::Breakpoints;

/// Resolves a style description against a theme, optionally onto a target.
///
/// The pipeline runs in three steps:
///
/// 1. **Resolve**: a computed style is invoked with the theme and a
///    [`Styler`] it can use to resolve nested styles.
/// 2. **Expand**: breakpoint shorthands in both the resolved style and the
///    target are rewritten into canonical `@media` keys.
/// 3. **Merge**: the expanded style is merged onto the expanded target. The
///    style wins on collision and blocks under the same key are combined.
///
/// The target is only read; the result is always a new object.
///
/// # Errors
///
/// Returns the first error raised by a style function or by shorthand
/// expansion.
///
/// # Example
///
/// ```rust
/// use starfall_styler::{resolve_style, StyleInput, StyleObject, Theme};
///
/// let theme = Theme::new().with_tablet_width(1000);
/// let style: StyleInput<Theme> = StyleObject::new()
///     .add("test", "123")
///     .add(":sf-min(md)", StyleObject::new().add("backgroundColor", "blue"))
///     .into();
/// let target = StyleObject::new()
///     .add(":sf-min(md)", StyleObject::new().add("color", "black"));
///
/// let resolved = resolve_style(&style, &theme, Some(&target)).unwrap();
/// assert_eq!(
///     resolved,
///     StyleObject::new().add("test", "123").add(
///         "@media (min-width: 1001px)",
///         StyleObject::new()
///             .add("backgroundColor", "blue")
///             .add("color", "black"),
///     )
/// );
/// ```
pub fn resolve_style<T: Breakpoints>(
    style: &StyleInput<T>,
    theme: &T,
    target: Option<&StyleObject>,
) -> StyleResult<StyleObject> {
    let resolved = resolve(style, theme)?;
    let style = expand(&resolved, theme)?;

    match target {
        Some(target) => Ok(merge(&expand(target, theme)?, &style)),
        None => Ok(style),
    }
}

fn resolve<'s, T: Breakpoints>(
    style: &'s StyleInput<T>,
    theme: &T,
) -> StyleResult<Cow<'s, StyleObject>> {
    match style {
        StyleInput::None => Ok(Cow::Owned(StyleObject::new())),
        StyleInput::Literal(style) => Ok(Cow::Borrowed(style)),
        StyleInput::Computed(compute) => {
            debug!("invoking computed style");
            compute(theme, &Styler::new(theme)).map(Cow::Owned)
        }
    }
}

/// A resolver bound to a theme.
///
/// Style functions receive one of these so they can resolve nested style
/// descriptions with the same pipeline as [`resolve_style`], defaulting to
/// the theme they were called with.
///
/// # Example
///
/// ```rust
/// use starfall_styler::{StyleInput, StyleObject, Styler, Theme};
///
/// let theme = Theme::new().add_color("primary", "green");
///
/// let inner = StyleInput::computed(|theme: &Theme, _styler| {
///     Ok(StyleObject::new().add("superTest", theme.color("primary").unwrap_or("black")))
/// });
/// let outer = StyleInput::computed(move |_theme: &Theme, styler| {
///     styler.resolve_onto(&inner, &StyleObject::new().add("color", "hi"))
/// });
///
/// let resolved = Styler::new(&theme).resolve(&outer).unwrap();
/// assert_eq!(
///     resolved,
///     StyleObject::new().add("color", "hi").add("superTest", "green")
/// );
/// ```
pub struct Styler<'t, T> {
    theme: &'t T,
}

impl<'t, T> Styler<'t, T> {
    pub fn new(theme: &'t T) -> Self {
        Self { theme }
    }

    /// The theme this styler resolves against.
    pub fn theme(&self) -> &'t T {
        self.theme
    }
}

impl<'t, T: Breakpoints> Styler<'t, T> {
    /// Resolves `style` with no target.
    pub fn resolve(&self, style: &StyleInput<T>) -> StyleResult<StyleObject> {
        resolve_style(style, self.theme, None)
    }

    /// Resolves `style` onto `target`.
    pub fn resolve_onto(
        &self,
        style: &StyleInput<T>,
        target: &StyleObject,
    ) -> StyleResult<StyleObject> {
        resolve_style(style, self.theme, Some(target))
    }

    /// Resolves `style` with an optional theme override and target.
    ///
    /// When `theme` is `None` the styler's own theme is used.
    pub fn resolve_with(
        &self,
        style: &StyleInput<T>,
        theme: Option<&T>,
        target: Option<&StyleObject>,
    ) -> StyleResult<StyleObject> {
        resolve_style(style, theme.unwrap_or(self.theme), target)
    }
}

impl<T> Clone for Styler<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Styler<'_, T> {}

impl<T> fmt::Debug for Styler<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styler").finish_non_exhaustive()
    }
}

//! Style descriptions awaiting resolution.

use std::fmt;
use std::sync::Arc;

use crate::error::StyleResult;
use crate::style::StyleObject;
use crate::styler::Styler;

/// A theme-dependent style function.
///
/// It receives the theme and a [`Styler`] bound to that theme, through which
/// it may resolve nested style descriptions.
pub type StyleFn<T> = Arc<dyn Fn(&T, &Styler<'_, T>) -> StyleResult<StyleObject> + Send + Sync>;

/// A style description: nothing, a literal object, or a function of the theme.
///
/// # Example
///
/// ```rust
/// use starfall_styler::{resolve_style, StyleInput, StyleObject, Theme};
///
/// let theme = Theme::new().add_color("primary", "green");
/// let style = StyleInput::computed(|theme: &Theme, _styler| {
///     Ok(StyleObject::new().add("color", theme.color("primary").unwrap_or("black")))
/// });
///
/// let resolved = resolve_style(&style, &theme, None).unwrap();
/// assert_eq!(resolved, StyleObject::new().add("color", "green"));
/// ```
pub enum StyleInput<T> {
    /// No styling; resolves to an empty object.
    None,
    /// A concrete style object.
    Literal(StyleObject),
    /// A style computed from the theme.
    Computed(StyleFn<T>),
}

impl<T> StyleInput<T> {
    pub fn none() -> Self {
        StyleInput::None
    }

    pub fn literal(style: StyleObject) -> Self {
        StyleInput::Literal(style)
    }

    /// Wraps a style function.
    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&T, &Styler<'_, T>) -> StyleResult<StyleObject> + Send + Sync + 'static,
    {
        StyleInput::Computed(Arc::new(f))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, StyleInput::None)
    }
}

impl<T> Default for StyleInput<T> {
    fn default() -> Self {
        StyleInput::None
    }
}

impl<T> Clone for StyleInput<T> {
    fn clone(&self) -> Self {
        match self {
            StyleInput::None => StyleInput::None,
            StyleInput::Literal(style) => StyleInput::Literal(style.clone()),
            StyleInput::Computed(f) => StyleInput::Computed(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for StyleInput<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleInput::None => f.write_str("None"),
            StyleInput::Literal(style) => f.debug_tuple("Literal").field(style).finish(),
            StyleInput::Computed(_) => f.write_str("Computed(<fn>)"),
        }
    }
}

impl<T> From<StyleObject> for StyleInput<T> {
    fn from(style: StyleObject) -> Self {
        StyleInput::Literal(style)
    }
}

impl<T> From<Option<StyleObject>> for StyleInput<T> {
    fn from(style: Option<StyleObject>) -> Self {
        style.map_or(StyleInput::None, StyleInput::Literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn test_from_option() {
        let none: StyleInput<Theme> = None.into();
        assert!(none.is_none());

        let some: StyleInput<Theme> = Some(StyleObject::new().add("color", "red")).into();
        assert!(matches!(some, StyleInput::Literal(_)));
    }

    #[test]
    fn test_clone_shares_function() {
        let style: StyleInput<Theme> =
            StyleInput::computed(|_theme: &Theme, _styler| Ok(StyleObject::new()));
        let copy = style.clone();

        match (&style, &copy) {
            (StyleInput::Computed(a), StyleInput::Computed(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected computed styles"),
        }
    }

    #[test]
    fn test_debug_hides_function() {
        let style: StyleInput<Theme> =
            StyleInput::computed(|_theme: &Theme, _styler| Ok(StyleObject::new()));
        assert_eq!(format!("{:?}", style), "Computed(<fn>)");
        assert_eq!(format!("{:?}", StyleInput::<Theme>::default()), "None");
    }
}

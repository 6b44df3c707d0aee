//! Compiling layout space values into CSS lengths.
//!
//! Layout components accept spacing either as a raw CSS length (`"12px"`,
//! `"50%"`), a number of pixels, or a reference into the theme's spacing
//! scale written as `"spacing(n)"`.

use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};
use crate::style::StyleObject;
use crate::theme::Theme;

/// A space value as written by a component user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpaceValue {
    /// Pixels.
    Number(f64),
    /// A CSS length or a `spacing(n)` reference.
    Text(String),
}

impl From<f64> for SpaceValue {
    fn from(n: f64) -> Self {
        SpaceValue::Number(n)
    }
}

impl From<i32> for SpaceValue {
    fn from(n: i32) -> Self {
        SpaceValue::Number(n.into())
    }
}

impl From<&str> for SpaceValue {
    fn from(text: &str) -> Self {
        SpaceValue::Text(text.to_string())
    }
}

impl From<String> for SpaceValue {
    fn from(text: String) -> Self {
        SpaceValue::Text(text)
    }
}

/// Compiles a space value into a CSS length.
///
/// `spacing` maps a step of the spacing scale to pixels.
///
/// # Errors
///
/// Returns [`StyleError::InvalidSpace`] for empty text and for a
/// `spacing(...)` reference whose argument is not a number.
///
/// # Example
///
/// ```rust
/// use starfall_styler::{compile_space, SpaceValue};
///
/// let spacing = |n: f64| n * 4.0;
/// assert_eq!(compile_space(&SpaceValue::from("spacing(3)"), spacing).unwrap(), "12px");
/// assert_eq!(compile_space(&SpaceValue::from(10), spacing).unwrap(), "10px");
/// assert_eq!(compile_space(&SpaceValue::from("50%"), spacing).unwrap(), "50%");
/// ```
pub fn compile_space<F: Fn(f64) -> f64>(space: &SpaceValue, spacing: F) -> StyleResult<String> {
    match space {
        SpaceValue::Number(n) => Ok(px(*n)),
        SpaceValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(invalid(text));
            }

            match text.strip_prefix("spacing") {
                Some(call) => {
                    let steps = call
                        .trim_start()
                        .strip_prefix('(')
                        .and_then(|rest| rest.strip_suffix(')'))
                        .and_then(|arg| arg.trim().parse::<f64>().ok())
                        .ok_or_else(|| invalid(text))?;
                    Ok(px(spacing(steps)))
                }
                None => Ok(text.to_string()),
            }
        }
    }
}

impl SpaceValue {
    /// Whether this value asks for no space at all: zero, or blank text.
    pub fn is_empty(&self) -> bool {
        match self {
            SpaceValue::Number(n) => *n == 0.0,
            SpaceValue::Text(text) => text.trim().is_empty(),
        }
    }
}

/// The target style a stack applies to each of its items.
///
/// Every item except the first is pushed down by `space`. With no space, a
/// zero space or a blank one, the target is empty.
pub fn stack_item_style(
    space: Option<&SpaceValue>,
    first: bool,
    theme: &Theme,
) -> StyleResult<StyleObject> {
    match space {
        Some(space) if !first && !space.is_empty() => {
            Ok(StyleObject::new().add("marginTop", theme.compile_space(space)?))
        }
        _ => Ok(StyleObject::new()),
    }
}

fn px(n: f64) -> String {
    format!("{}px", n)
}

fn invalid(text: &str) -> StyleError {
    StyleError::InvalidSpace {
        value: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacing(n: f64) -> f64 {
        n * 5.0
    }

    #[test]
    fn test_number_is_pixels() {
        assert_eq!(compile_space(&SpaceValue::from(8), spacing).unwrap(), "8px");
        assert_eq!(compile_space(&SpaceValue::from(1.5), spacing).unwrap(), "1.5px");
    }

    #[test]
    fn test_spacing_reference() {
        assert_eq!(
            compile_space(&SpaceValue::from("spacing(2)"), spacing).unwrap(),
            "10px"
        );
        assert_eq!(
            compile_space(&SpaceValue::from(" spacing( 0.5 ) "), spacing).unwrap(),
            "2.5px"
        );
    }

    #[test]
    fn test_css_lengths_pass_through() {
        for value in ["12px", "50%", "1rem", "auto"] {
            assert_eq!(compile_space(&SpaceValue::from(value), spacing).unwrap(), value);
        }
    }

    #[test]
    fn test_invalid_values() {
        for value in ["", "   ", "spacing(x)", "spacing(", "spacing"] {
            assert!(
                matches!(
                    compile_space(&SpaceValue::from(value), spacing),
                    Err(StyleError::InvalidSpace { .. })
                ),
                "value {:?}",
                value
            );
        }
    }

    #[test]
    fn test_stack_item_style() {
        let theme = Theme::new().with_spacing_unit(5.0);
        let space = SpaceValue::from("spacing(2)");

        assert!(stack_item_style(Some(&space), true, &theme).unwrap().is_empty());
        assert!(stack_item_style(None, false, &theme).unwrap().is_empty());
        assert_eq!(
            stack_item_style(Some(&space), false, &theme).unwrap(),
            StyleObject::new().add("marginTop", "10px")
        );
    }

    #[test]
    fn test_stack_item_style_zero_space_adds_no_margin() {
        let theme = Theme::new();
        for space in [SpaceValue::from(0), SpaceValue::from(0.0)] {
            assert!(stack_item_style(Some(&space), false, &theme).unwrap().is_empty());
        }
    }

    #[test]
    fn test_stack_item_style_blank_space_adds_no_margin() {
        let theme = Theme::new();
        for space in [SpaceValue::from(""), SpaceValue::from("  ")] {
            assert!(stack_item_style(Some(&space), false, &theme).unwrap().is_empty());
        }
    }

    #[test]
    fn test_compile_space_stays_strict_on_blank_text() {
        assert!(SpaceValue::from("").is_empty());
        assert!(!SpaceValue::from("0px").is_empty());
        assert!(compile_space(&SpaceValue::from(""), spacing).is_err());
    }

    #[test]
    fn test_space_value_deserializes_untagged() {
        let values: Vec<SpaceValue> = serde_json::from_str(r#"[4, "spacing(1)"]"#).unwrap();
        assert_eq!(
            values,
            vec![SpaceValue::Number(4.0), SpaceValue::from("spacing(1)")]
        );
    }
}

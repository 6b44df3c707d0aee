//! Style resolution errors.

use thiserror::Error;

/// Error returned when a style cannot be resolved.
///
/// Every variant is a contract violation by the caller: the engine never
/// retries or produces a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A breakpoint shorthand names a tier the theme does not define.
    #[error("undefined width for breakpoint tier '{tier}' (in '{key}')")]
    UnknownBreakpoint { key: String, tier: String },

    /// A `:sf-` key that does not follow the `:sf-min(tier)` / `:sf-max(tier)` grammar.
    #[error("malformed breakpoint shorthand '{key}': {reason}")]
    MalformedShorthand { key: String, reason: String },

    /// A breakpoint shorthand whose value is not a nested block.
    #[error("breakpoint shorthand '{key}' must map to a block of properties")]
    ShorthandNotBlock { key: String },

    /// Dynamic style data whose root is not an object.
    #[error("style must be an object, found {found}")]
    NotAnObject { found: String },

    /// Dynamic style data holding a value that is neither text, number nor block.
    #[error("unsupported style value at '{path}': {found}")]
    UnsupportedValue { path: String, found: String },

    /// A space value that could not be compiled into a CSS length.
    #[error("invalid space value '{value}'")]
    InvalidSpace { value: String },

    /// Theme configuration failed to load.
    #[error("invalid theme: {0}")]
    Theme(String),
}

/// Result type for style operations.
pub type StyleResult<T> = Result<T, StyleError>;

/// Describes a JSON value's kind for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_breakpoint_display() {
        let err = StyleError::UnknownBreakpoint {
            key: ":sf-max(xl)".to_string(),
            tier: "xl".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("undefined width for breakpoint tier"));
        assert!(msg.contains("'xl'"));
        assert!(msg.contains(":sf-max(xl)"));
    }

    #[test]
    fn test_malformed_shorthand_display() {
        let err = StyleError::MalformedShorthand {
            key: ":sf-min(".to_string(),
            reason: "unexpected end of input".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed breakpoint shorthand ':sf-min(': unexpected end of input"
        );
    }

    #[test]
    fn test_not_an_object_display() {
        let err = StyleError::NotAnObject {
            found: "array".to_string(),
        };
        assert_eq!(err.to_string(), "style must be an object, found array");
    }

    #[test]
    fn test_json_kind() {
        assert_eq!(json_kind(&serde_json::json!(null)), "null");
        assert_eq!(json_kind(&serde_json::json!([1])), "array");
        assert_eq!(json_kind(&serde_json::json!({})), "object");
    }
}

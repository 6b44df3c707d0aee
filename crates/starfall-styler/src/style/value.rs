//! Style values and style objects.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{json_kind, StyleError, StyleResult};

/// A single value in a style object.
///
/// Values are either CSS scalars (text or a number, numbers being
/// interpreted as pixels by the consumer) or a nested block for
/// pseudo-selectors and at-rules such as `:hover` or `@media (...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// A numeric CSS value.
    Number(f64),
    /// A textual CSS value.
    Text(String),
    /// A nested block of properties.
    Block(StyleObject),
}

impl StyleValue {
    /// Returns the nested block, if this value is one.
    pub fn as_block(&self) -> Option<&StyleObject> {
        match self {
            StyleValue::Block(block) => Some(block),
            _ => None,
        }
    }

    /// Returns the text, if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number, if this value is numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this value is a nested block.
    pub fn is_block(&self) -> bool {
        matches!(self, StyleValue::Block(_))
    }

    /// Converts the value into JSON.
    ///
    /// Integral numbers become JSON integers so the output compares equal
    /// to hand-written `json!` fixtures.
    pub fn to_json(&self) -> Value {
        match self {
            StyleValue::Number(n) if n.fract() == 0.0 && n.abs() < i64::MAX as f64 => {
                Value::from(*n as i64)
            }
            StyleValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            StyleValue::Text(text) => Value::String(text.clone()),
            StyleValue::Block(block) => block.to_json(),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(text: &str) -> Self {
        StyleValue::Text(text.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        StyleValue::Text(text)
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Number(n.into())
    }
}

impl From<u32> for StyleValue {
    fn from(n: u32) -> Self {
        StyleValue::Number(n.into())
    }
}

impl From<StyleObject> for StyleValue {
    fn from(block: StyleObject) -> Self {
        StyleValue::Block(block)
    }
}

/// A resolved style: CSS property or nested-selector keys mapped to values.
///
/// Key order carries no meaning; entries are kept sorted so iteration and
/// debug output are deterministic.
///
/// # Example
///
/// ```rust
/// use starfall_styler::StyleObject;
///
/// let style = StyleObject::new()
///     .add("color", "black")
///     .add("zIndex", 100)
///     .add(":hover", StyleObject::new().add("color", "red"));
///
/// assert_eq!(style.len(), 3);
/// assert!(style.get_block(":hover").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject {
    entries: BTreeMap<String, StyleValue>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, returning the updated object for chaining.
    pub fn add<K: Into<String>, V: Into<StyleValue>>(mut self, key: K, value: V) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a property, returning the value it replaced.
    pub fn insert<K: Into<String>, V: Into<StyleValue>>(
        &mut self,
        key: K,
        value: V,
    ) -> Option<StyleValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.get(key)
    }

    /// Returns the nested block stored under `key`.
    pub fn get_block(&self, key: &str) -> Option<&StyleObject> {
        self.get(key).and_then(StyleValue::as_block)
    }

    pub fn remove(&mut self, key: &str) -> Option<StyleValue> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, StyleValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, String, StyleValue> {
        self.entries.keys()
    }

    /// Converts the object into a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_json()))
                .collect(),
        )
    }
}

impl TryFrom<Value> for StyleObject {
    type Error = StyleError;

    /// Converts dynamic JSON data into a style object.
    ///
    /// The root must be an object. Nested values must be strings, numbers
    /// or objects; anything else is reported with its dotted key path.
    fn try_from(value: Value) -> StyleResult<Self> {
        match value {
            Value::Object(map) => object_from_json(map, None),
            other => Err(StyleError::NotAnObject {
                found: json_kind(&other).to_string(),
            }),
        }
    }
}

fn object_from_json(
    map: serde_json::Map<String, Value>,
    parent: Option<&str>,
) -> StyleResult<StyleObject> {
    let mut object = StyleObject::new();

    for (key, value) in map {
        let path = match parent {
            Some(parent) => format!("{}.{}", parent, key),
            None => key.clone(),
        };

        let value = match value {
            Value::String(text) => StyleValue::Text(text),
            Value::Number(n) => match n.as_f64() {
                Some(n) => StyleValue::Number(n),
                None => {
                    return Err(StyleError::UnsupportedValue {
                        path,
                        found: n.to_string(),
                    })
                }
            },
            Value::Object(inner) => StyleValue::Block(object_from_json(inner, Some(&path))?),
            other => {
                return Err(StyleError::UnsupportedValue {
                    path,
                    found: json_kind(&other).to_string(),
                })
            }
        };

        object.entries.insert(key, value);
    }

    Ok(object)
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = StyleObject::new();
        object.extend(iter);
        object
    }
}

impl<K: Into<String>, V: Into<StyleValue>> Extend<(K, V)> for StyleObject {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for StyleObject {
    type Item = (String, StyleValue);
    type IntoIter = btree_map::IntoIter<String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleObject {
    type Item = (&'a String, &'a StyleValue);
    type IntoIter = btree_map::Iter<'a, String, StyleValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

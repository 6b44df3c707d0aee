//! Copy-on-write merging of style objects.

use super::value::{StyleObject, StyleValue};

/// Merges `overlay` onto `base`, returning a new object.
///
/// Scalars in `overlay` replace those in `base`. When both sides hold a
/// block under the same key, the two blocks are merged one level deep with
/// the overlay's inner properties winning; unrelated blocks are left
/// independent. Neither input is modified.
///
/// # Example
///
/// ```rust
/// use starfall_styler::{merge, StyleObject};
///
/// let base = StyleObject::new()
///     .add("color", "black")
///     .add(":hover", StyleObject::new().add("color", "red").add("opacity", 1));
/// let overlay = StyleObject::new()
///     .add("color", "white")
///     .add(":hover", StyleObject::new().add("opacity", 0.5));
///
/// let merged = merge(&base, &overlay);
/// assert_eq!(
///     merged,
///     StyleObject::new()
///         .add("color", "white")
///         .add(":hover", StyleObject::new().add("color", "red").add("opacity", 0.5))
/// );
/// ```
pub fn merge(base: &StyleObject, overlay: &StyleObject) -> StyleObject {
    let mut merged = base.clone();

    for (key, value) in overlay {
        let combined = match value {
            StyleValue::Block(block) => merge_block(merged.get(key), block),
            scalar => scalar.clone(),
        };
        merged.insert(key.clone(), combined);
    }

    merged
}

/// Lays the properties of `overlay` over an existing value.
///
/// An existing block keeps its properties unless `overlay` redefines them;
/// a missing or scalar value is replaced by a copy of `overlay`.
pub(crate) fn merge_block(existing: Option<&StyleValue>, overlay: &StyleObject) -> StyleValue {
    let mut block = match existing {
        Some(StyleValue::Block(existing)) => existing.clone(),
        _ => StyleObject::new(),
    };

    for (key, value) in overlay {
        block.insert(key.clone(), value.clone());
    }

    StyleValue::Block(block)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_scalars_win() {
        let base = StyleObject::new().add("color", "black").add("height", 1);
        let overlay = StyleObject::new().add("color", "white");

        let merged = merge(&base, &overlay);
        assert_eq!(merged.get("color"), Some(&StyleValue::from("white")));
        assert_eq!(merged.get("height"), Some(&StyleValue::from(1)));
    }

    #[test]
    fn test_keys_from_both_sides_kept() {
        let base = StyleObject::new().add("backgroundColor", "World");
        let overlay = StyleObject::new().add("outline", "Universe");

        let merged = merge(&base, &overlay);
        assert_eq!(merged.len(), 2);
        assert!(merged.contains_key("backgroundColor"));
        assert!(merged.contains_key("outline"));
    }

    #[test]
    fn test_same_block_key_merges_inner_properties() {
        let key = "@media (max-width: 600px)";
        let base = StyleObject::new().add(key, StyleObject::new().add("color", "black"));
        let overlay = StyleObject::new().add(
            key,
            StyleObject::new()
                .add("color", "blue")
                .add("backgroundColor", "blue"),
        );

        let merged = merge(&base, &overlay);
        assert_eq!(
            merged.get_block(key),
            Some(
                &StyleObject::new()
                    .add("color", "blue")
                    .add("backgroundColor", "blue")
            )
        );
    }

    #[test]
    fn test_unrelated_blocks_stay_independent() {
        let base = StyleObject::new().add(":after", StyleObject::new().add("still", "here!"));
        let overlay =
            StyleObject::new().add("::-ms-clear", StyleObject::new().add("still", ""));

        let merged = merge(&base, &overlay);
        assert_eq!(
            merged.get_block(":after"),
            Some(&StyleObject::new().add("still", "here!"))
        );
        assert_eq!(
            merged.get_block("::-ms-clear"),
            Some(&StyleObject::new().add("still", ""))
        );
    }

    #[test]
    fn test_block_replaces_scalar_and_scalar_replaces_block() {
        let base = StyleObject::new()
            .add("a", "scalar")
            .add("b", StyleObject::new().add("x", 1));
        let overlay = StyleObject::new()
            .add("a", StyleObject::new().add("y", 2))
            .add("b", "scalar");

        let merged = merge(&base, &overlay);
        assert_eq!(merged.get_block("a"), Some(&StyleObject::new().add("y", 2)));
        assert_eq!(merged.get("b"), Some(&StyleValue::from("scalar")));
    }

    #[test]
    fn test_merge_leaves_inputs_untouched() {
        let base = StyleObject::new().add(":before", StyleObject::new().add("color", "stays"));
        let overlay = StyleObject::new().add(":before", StyleObject::new().add("color", "new"));
        let base_before = base.clone();
        let overlay_before = overlay.clone();

        let mut merged = merge(&base, &overlay);
        merged.insert(":before", "mutated");

        assert_eq!(base, base_before);
        assert_eq!(overlay, overlay_before);
    }

    #[test]
    fn test_merge_is_one_level_deep() {
        let base = StyleObject::new().add(
            "@media (min-width: 769px)",
            StyleObject::new().add(":hover", StyleObject::new().add("color", "red")),
        );
        let overlay = StyleObject::new().add(
            "@media (min-width: 769px)",
            StyleObject::new().add(":hover", StyleObject::new().add("opacity", 1)),
        );

        let merged = merge(&base, &overlay);
        assert_eq!(
            merged
                .get_block("@media (min-width: 769px)")
                .and_then(|b| b.get_block(":hover")),
            Some(&StyleObject::new().add("opacity", 1))
        );
    }
}

//! Breakpoint width lookup.

use std::borrow::Cow;

use serde_json::Value;

/// The part of a theme the engine itself reads.
///
/// Everything else a theme carries (colors, spacing, fonts) is only touched
/// by caller-supplied style functions.
pub trait Breakpoints {
    /// Returns the width in pixels for a breakpoint tier such as `sm` or `md`.
    fn breakpoint_width(&self, tier: &str) -> Option<u32>;
}

impl<T: Breakpoints + ?Sized> Breakpoints for &T {
    fn breakpoint_width(&self, tier: &str) -> Option<u32> {
        (**self).breakpoint_width(tier)
    }
}

/// Field holding a tier's width in a JSON-shaped theme.
///
/// `sm` and `md` map onto `mobileWidth` and `tabletWidth`; any other tier
/// `t` is looked up as `tWidth`.
pub fn width_field(tier: &str) -> Cow<'static, str> {
    match tier {
        "sm" => Cow::Borrowed("mobileWidth"),
        "md" => Cow::Borrowed("tabletWidth"),
        other => Cow::Owned(format!("{}Width", other)),
    }
}

/// JSON themes expose their widths as top-level integer fields.
impl Breakpoints for Value {
    fn breakpoint_width(&self, tier: &str) -> Option<u32> {
        let field = width_field(tier);
        self.get(&*field)
            .and_then(Value::as_u64)
            .and_then(|width| u32::try_from(width).ok())
    }
}

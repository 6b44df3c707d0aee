//! Theme struct for design tokens and breakpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::breakpoints::Breakpoints;
use crate::error::{StyleError, StyleResult};
use crate::space::{compile_space, SpaceValue};

/// A typography token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Font {
    /// Font size in pixels.
    pub size: f64,
    /// CSS font weight.
    pub weight: u16,
    /// Line height in pixels.
    pub leading: f64,
}

impl Font {
    pub fn new(size: f64, weight: u16, leading: f64) -> Self {
        Self {
            size,
            weight,
            leading,
        }
    }

    /// The font size as a CSS length.
    pub fn px(&self) -> String {
        format!("{}px", self.size)
    }
}

/// A collection of design tokens consulted while resolving styles.
///
/// The engine reads only the breakpoint widths: `sm` resolves to
/// [`mobile_width`](Theme::mobile_width), `md` to
/// [`tablet_width`](Theme::tablet_width), and further tiers can be added
/// with [`add_breakpoint`](Theme::add_breakpoint). The remaining tokens are
/// there for style functions to use.
///
/// # Example
///
/// ```rust
/// use starfall_styler::{Breakpoints, Theme};
///
/// let theme = Theme::new()
///     .with_mobile_width(600)
///     .with_tablet_width(1024)
///     .add_breakpoint("lg", 1440)
///     .with_spacing_unit(4.0)
///     .add_color("primary", "green");
///
/// assert_eq!(theme.breakpoint_width("sm"), Some(600));
/// assert_eq!(theme.breakpoint_width("lg"), Some(1440));
/// assert_eq!(theme.spacing(2.0), 8.0);
/// assert_eq!(theme.color("primary"), Some("green"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    mobile_width: u32,
    tablet_width: u32,
    breakpoints: BTreeMap<String, u32>,
    spacing_unit: f64,
    line_unit: f64,
    corner_unit: f64,
    colors: BTreeMap<String, String>,
    fonts: BTreeMap<String, Font>,
}

impl Theme {
    /// Creates a theme with default widths and scales and no colors or fonts.
    pub fn new() -> Self {
        Self {
            mobile_width: 768,
            tablet_width: 1024,
            breakpoints: BTreeMap::new(),
            spacing_unit: 4.0,
            line_unit: 1.0,
            corner_unit: 2.0,
            colors: BTreeMap::new(),
            fonts: BTreeMap::new(),
        }
    }

    /// Loads a theme from YAML.
    ///
    /// Fields use camelCase (`mobileWidth`, `spacingUnit`, ...); any field
    /// left out keeps its default.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Theme`] if the document does not describe a theme.
    pub fn from_yaml(source: &str) -> StyleResult<Self> {
        serde_yaml::from_str(source).map_err(|e| StyleError::Theme(e.to_string()))
    }

    /// Loads a theme from JSON. See [`from_yaml`](Theme::from_yaml).
    pub fn from_json(source: &str) -> StyleResult<Self> {
        serde_json::from_str(source).map_err(|e| StyleError::Theme(e.to_string()))
    }

    pub fn with_mobile_width(mut self, width: u32) -> Self {
        self.mobile_width = width;
        self
    }

    pub fn with_tablet_width(mut self, width: u32) -> Self {
        self.tablet_width = width;
        self
    }

    pub fn with_spacing_unit(mut self, unit: f64) -> Self {
        self.spacing_unit = unit;
        self
    }

    pub fn with_line_unit(mut self, unit: f64) -> Self {
        self.line_unit = unit;
        self
    }

    pub fn with_corner_unit(mut self, unit: f64) -> Self {
        self.corner_unit = unit;
        self
    }

    /// Adds a named breakpoint tier, returning the updated theme for chaining.
    ///
    /// Defining `sm` or `md` here has no effect: those tiers always use the
    /// mobile and tablet widths.
    pub fn add_breakpoint(mut self, tier: &str, width: u32) -> Self {
        self.breakpoints.insert(tier.to_string(), width);
        self
    }

    /// Adds a named color, returning the updated theme for chaining.
    pub fn add_color(mut self, name: &str, value: &str) -> Self {
        self.colors.insert(name.to_string(), value.to_string());
        self
    }

    /// Adds a named font, returning the updated theme for chaining.
    pub fn add_font(mut self, name: &str, font: Font) -> Self {
        self.fonts.insert(name.to_string(), font);
        self
    }

    pub fn mobile_width(&self) -> u32 {
        self.mobile_width
    }

    pub fn tablet_width(&self) -> u32 {
        self.tablet_width
    }

    /// Spacing for `n` steps of the spacing scale, in pixels.
    pub fn spacing(&self, n: f64) -> f64 {
        n * self.spacing_unit
    }

    /// Border width for `n` steps of the line scale, as a CSS length.
    pub fn line(&self, n: f64) -> String {
        format!("{}px", n * self.line_unit)
    }

    /// Corner radius for `n` steps of the corner scale, in pixels.
    pub fn corner(&self, n: f64) -> f64 {
        n * self.corner_unit
    }

    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(String::as_str)
    }

    pub fn font(&self, name: &str) -> Option<&Font> {
        self.fonts.get(name)
    }

    /// Compiles a space value against this theme's spacing scale.
    pub fn compile_space(&self, space: &SpaceValue) -> StyleResult<String> {
        compile_space(space, |n| self.spacing(n))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Breakpoints for Theme {
    fn breakpoint_width(&self, tier: &str) -> Option<u32> {
        match tier {
            "sm" => Some(self.mobile_width),
            "md" => Some(self.tablet_width),
            other => self.breakpoints.get(other).copied(),
        }
    }
}

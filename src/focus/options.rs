use serde::{Deserialize, Serialize};

use crate::error::{FocusError, FocusResult};
use crate::render::Color;

/// Fallback margin between an element's bounding box and its focus border
/// when a caller passes no explicit margin.
pub const DEFAULT_FOCUS_BORDER_MARGIN: f64 = 3.0;

fn default_true() -> bool {
    true
}

/// Visual style of the focus-border overlay.
///
/// Stroke fields are only materialized when the chart styles shapes inline;
/// under external styling the overlay carries its class tag only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusBorderStyle {
    #[serde(default = "default_border_color")]
    pub color: Option<Color>,
    #[serde(default = "default_border_line_width")]
    pub line_width: Option<f64>,
    /// Corner radius, truncated to a whole number of pixels when the overlay
    /// is built. Absent means square corners.
    #[serde(default = "default_border_radius")]
    pub border_radius: Option<f64>,
}

impl Default for FocusBorderStyle {
    fn default() -> Self {
        Self {
            color: default_border_color(),
            line_width: default_border_line_width(),
            border_radius: default_border_radius(),
        }
    }
}

impl FocusBorderStyle {
    pub fn validate(self) -> FocusResult<()> {
        if let Some(color) = self.color {
            color.validate()?;
        }
        if let Some(line_width) = self.line_width {
            if !line_width.is_finite() || line_width <= 0.0 {
                return Err(FocusError::InvalidData(
                    "focus border line width must be finite and > 0".to_owned(),
                ));
            }
        }
        if let Some(border_radius) = self.border_radius {
            if !border_radius.is_finite() {
                return Err(FocusError::InvalidData(
                    "focus border radius must be finite".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Resolved focus-border options, the `keyboard_navigation.focus_border`
/// branch of the accessibility configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocusBorderOptions {
    /// Master enable for the drawn border. Native focus is applied either way.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Suppresses the host's native focus ring after focusing, leaving the
    /// drawn border as the only indicator.
    #[serde(default = "default_true")]
    pub hide_browser_focus_outline: bool,
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default)]
    pub style: FocusBorderStyle,
}

impl Default for FocusBorderOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            hide_browser_focus_outline: true,
            margin: default_margin(),
            style: FocusBorderStyle::default(),
        }
    }
}

impl FocusBorderOptions {
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_hide_browser_focus_outline(mut self, hide: bool) -> Self {
        self.hide_browser_focus_outline = hide;
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: FocusBorderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(self) -> FocusResult<()> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(FocusError::InvalidData(
                "focus border margin must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}

/// Keyboard-navigation branch of the accessibility configuration.
///
/// Navigation sequencing itself lives with the embedding application; this
/// crate only consumes the focus-border leaf.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyboardNavigationConfig {
    #[serde(default)]
    pub focus_border: FocusBorderOptions,
}

/// Resolved accessibility configuration consumed by the focus coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccessibilityConfig {
    #[serde(default)]
    pub keyboard_navigation: KeyboardNavigationConfig,
}

impl AccessibilityConfig {
    pub fn validate(self) -> FocusResult<()> {
        self.keyboard_navigation.focus_border.validate()
    }
}

fn default_border_color() -> Option<Color> {
    // #334eff
    Some(Color::from_rgb8(0x33, 0x4e, 0xff))
}

fn default_border_line_width() -> Option<f64> {
    Some(2.0)
}

fn default_border_radius() -> Option<f64> {
    Some(3.0)
}

fn default_margin() -> f64 {
    DEFAULT_FOCUS_BORDER_MARGIN
}

use serde::{Deserialize, Serialize};

use crate::error::{FocusError, FocusResult};
use crate::focus::{AccessibilityConfig, FocusBorderOptions};
use crate::render::StylingMode;

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FocusChartConfig {
    #[serde(default)]
    pub styling_mode: StylingMode,
    #[serde(default)]
    pub accessibility: AccessibilityConfig,
}

impl FocusChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether shapes carry inline visual attributes or are styled
    /// externally.
    #[must_use]
    pub fn with_styling_mode(mut self, mode: StylingMode) -> Self {
        self.styling_mode = mode;
        self
    }

    /// Sets the full resolved accessibility configuration.
    #[must_use]
    pub fn with_accessibility(mut self, accessibility: AccessibilityConfig) -> Self {
        self.accessibility = accessibility;
        self
    }

    /// Sets the `keyboard_navigation.focus_border` leaf directly.
    #[must_use]
    pub fn with_focus_border_options(mut self, options: FocusBorderOptions) -> Self {
        self.accessibility.keyboard_navigation.focus_border = options;
        self
    }

    pub fn validate(self) -> FocusResult<()> {
        self.accessibility.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> FocusResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| FocusError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> FocusResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| FocusError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

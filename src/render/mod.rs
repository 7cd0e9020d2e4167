use serde::{Deserialize, Serialize};

use crate::error::{FocusError, FocusResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels, e.g. `from_rgb8(0x33, 0x4e, 0xff)`.
    #[must_use]
    pub const fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(red as f64 / 255.0, green as f64 / 255.0, blue as f64 / 255.0)
    }

    pub fn validate(self) -> FocusResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(FocusError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Identity of the host's rendering engine.
///
/// Text bounding boxes are baseline-anchored differently across engines, so
/// the focus-border geometry applies an engine-specific correction. The tag
/// is injected by the host adapter once, never detected per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderingEngine {
    /// Firefox family.
    Gecko,
    /// Every other engine measured so far shares one correction factor.
    Other,
}

impl RenderingEngine {
    /// Baseline-offset correction factor for unrotated text elements.
    ///
    /// Pinned empirical calibration values; changing either shifts every
    /// text focus border visibly on that engine.
    #[must_use]
    pub const fn text_baseline_correction(self) -> f64 {
        match self {
            Self::Gecko => 0.25,
            Self::Other => 0.068,
        }
    }
}

/// Whether created shapes carry inline visual attributes or are left to
/// external styling rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StylingMode {
    /// Stroke attributes are set inline on created shapes.
    Inline,
    /// Visual properties are governed by external stylesheet rules; created
    /// shapes receive class tags only.
    External,
}

impl Default for StylingMode {
    fn default() -> Self {
        Self::Inline
    }
}

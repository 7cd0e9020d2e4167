//! Focus-border drawing and chart-level focus coordination.

mod border;
mod coordinator;
mod options;

pub use border::{
    FOCUS_BORDER_CLASS, FOCUS_BORDER_Z_INDEX, TEXT_ROTATION_ANCHOR_CORRECTION, focus_border_box,
};
pub(crate) use border::FocusBorderRenderer;
pub(crate) use coordinator::FocusCoordinator;
pub use options::{
    AccessibilityConfig, DEFAULT_FOCUS_BORDER_MARGIN, FocusBorderOptions, FocusBorderStyle,
    KeyboardNavigationConfig,
};

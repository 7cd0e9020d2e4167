//! chart-focus: accessible focus-indicator engine for chart scene graphs.
//!
//! This crate draws a visible focus border around the chart element that
//! currently holds logical focus, and coordinates that border with the host
//! environment's native input focus. Keyboard and assistive-technology users
//! get a reliable indicator even when the host's own focus outline is
//! invisible or stripped by styling.

pub mod api;
pub mod core;
pub mod error;
pub mod focus;
pub mod host;
pub mod render;
pub mod telemetry;

pub use api::{FocusChart, FocusChartConfig};
pub use error::{FocusError, FocusResult};

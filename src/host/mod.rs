//! Host-environment seam for native focus.
//!
//! The chart never talks to a concrete windowing system or DOM directly; it
//! goes through [`FocusHost`] so the same coordination logic runs against a
//! browser binding, a desktop toolkit, or the headless test doubles below.

use std::fmt;

use crate::render::RenderingEngine;

/// Handle to a host-side node that can receive native input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostNodeId(pub u64);

impl fmt::Display for HostNodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Contract implemented by any host environment binding.
///
/// All operations are best-effort: a host may not support focusing a given
/// node at all, and callers are expected to probe with `can_focus` first.
pub trait FocusHost {
    /// Identity of the rendering engine, used for text-geometry correction.
    fn rendering_engine(&self) -> RenderingEngine;

    /// Whether `node` exists and can receive native input focus.
    fn can_focus(&self, node: HostNodeId) -> bool;

    /// Invokes the native focus operation on `node`.
    fn focus(&mut self, node: HostNodeId);

    fn has_focusin_listener(&self, node: HostNodeId) -> bool;

    /// Registers a no-op "focusin" listener on `node`.
    ///
    /// Some host/assistive-technology combinations only announce
    /// programmatic focus changes when at least one focusin listener is
    /// present, so the coordinator registers one before focusing.
    fn add_focusin_listener(&mut self, node: HostNodeId);

    /// Suppresses the node's native focus outline (outline style none).
    fn hide_focus_outline(&mut self, node: HostNodeId);
}

/// No-op host used by headless chart usage.
///
/// Nothing is focusable, so the coordinator skips every native-focus step and
/// only the overlay protocol runs.
#[derive(Debug, Clone, Copy)]
pub struct NullHost {
    pub engine: RenderingEngine,
}

impl Default for NullHost {
    fn default() -> Self {
        Self {
            engine: RenderingEngine::Other,
        }
    }
}

impl FocusHost for NullHost {
    fn rendering_engine(&self) -> RenderingEngine {
        self.engine
    }

    fn can_focus(&self, _node: HostNodeId) -> bool {
        false
    }

    fn focus(&mut self, _node: HostNodeId) {}

    fn has_focusin_listener(&self, _node: HostNodeId) -> bool {
        false
    }

    fn add_focusin_listener(&mut self, _node: HostNodeId) {}

    fn hide_focus_outline(&mut self, _node: HostNodeId) {}
}

/// Test host that records every native-focus interaction.
///
/// Mirrors the role `NullRenderer` plays for render backends: tests configure
/// which nodes are focusable, run the coordinator, then assert on the
/// recorded call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub engine_override: Option<RenderingEngine>,
    pub focusable: Vec<HostNodeId>,
    pub focus_calls: Vec<HostNodeId>,
    pub focusin_listeners: Vec<HostNodeId>,
    pub hidden_outlines: Vec<HostNodeId>,
}

impl RecordingHost {
    #[must_use]
    pub fn with_focusable(mut self, node: HostNodeId) -> Self {
        self.focusable.push(node);
        self
    }

    #[must_use]
    pub fn with_engine(mut self, engine: RenderingEngine) -> Self {
        self.engine_override = Some(engine);
        self
    }

    /// Pre-registers a focusin listener, as if the embedding application had
    /// installed one before the chart ran.
    #[must_use]
    pub fn with_focusin_listener(mut self, node: HostNodeId) -> Self {
        self.focusin_listeners.push(node);
        self
    }

    #[must_use]
    pub fn focusin_listener_count(&self, node: HostNodeId) -> usize {
        self.focusin_listeners
            .iter()
            .filter(|candidate| **candidate == node)
            .count()
    }

    #[must_use]
    pub fn focus_call_count(&self, node: HostNodeId) -> usize {
        self.focus_calls
            .iter()
            .filter(|candidate| **candidate == node)
            .count()
    }
}

impl FocusHost for RecordingHost {
    fn rendering_engine(&self) -> RenderingEngine {
        self.engine_override.unwrap_or(RenderingEngine::Other)
    }

    fn can_focus(&self, node: HostNodeId) -> bool {
        self.focusable.contains(&node)
    }

    fn focus(&mut self, node: HostNodeId) {
        self.focus_calls.push(node);
    }

    fn has_focusin_listener(&self, node: HostNodeId) -> bool {
        self.focusin_listeners.contains(&node)
    }

    fn add_focusin_listener(&mut self, node: HostNodeId) {
        self.focusin_listeners.push(node);
    }

    fn hide_focus_outline(&mut self, node: HostNodeId) {
        self.hidden_outlines.push(node);
    }
}

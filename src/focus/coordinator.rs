use tracing::{debug, trace};

use crate::api::FocusChart;
use crate::core::ElementId;
use crate::host::{FocusHost, HostNodeId};

use super::border::FocusBorderRenderer;

/// Orchestrates native host focus plus the single active chart-level border.
pub(crate) struct FocusCoordinator;

impl FocusCoordinator {
    /// Moves logical focus to `target`.
    ///
    /// Native focus goes to `host_target` when given, otherwise to the
    /// element's own focus node. Host steps are skipped entirely when the
    /// candidate is missing or not focusable; the border protocol still runs.
    pub(crate) fn set_focus_to_element<H: FocusHost>(
        chart: &mut FocusChart<H>,
        target: ElementId,
        host_target: Option<HostNodeId>,
    ) {
        let options = chart.focus_border_options();
        let candidate = host_target.or_else(|| {
            chart
                .scene()
                .element(target)
                .and_then(|element| element.focus_node())
        });

        if let Some(node) = candidate {
            if chart.host().can_focus(node) {
                // Without at least one focusin listener some host/AT
                // combinations never announce a programmatic focus change.
                if !chart.host().has_focusin_listener(node) {
                    chart.host_mut().add_focusin_listener(node);
                }
                chart.host_mut().focus(node);
                debug!(%node, "native focus applied");
                if options.hide_browser_focus_outline {
                    chart.host_mut().hide_focus_outline(node);
                }
            } else {
                trace!(%node, "focus target not focusable, skipping native focus");
            }
        }

        if !options.enabled {
            trace!(%target, "focus border disabled, native focus only");
            return;
        }

        // Remove-then-add: never two live borders on one chart.
        if let Some(previous) = chart.take_active_focus() {
            FocusBorderRenderer::remove(chart.scene_mut(), previous);
        }
        let engine = chart.host().rendering_engine();
        FocusBorderRenderer::add(
            chart.scene_mut(),
            target,
            Some(options.margin),
            &options.style,
            engine,
        );
        chart.set_active_focus(target);
        debug!(%target, "focus assigned");
    }
}

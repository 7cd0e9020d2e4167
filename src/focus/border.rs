use tracing::{debug, trace};

use crate::core::{BoundingBox, ElementId, FocusOverlay, NodeKind, Scene, SceneElement};
use crate::render::{RenderingEngine, StylingMode};

use super::options::{DEFAULT_FOCUS_BORDER_MARGIN, FocusBorderStyle};

/// Class tag carried by every focus-border overlay, for styling/selection.
pub const FOCUS_BORDER_CLASS: &str = "focus-border";

/// Stacking order keeping the border above sibling content.
pub const FOCUS_BORDER_Z_INDEX: i32 = 99;

/// Horizontal anchor correction applied to rotated text elements.
///
/// Pinned calibration value, like the engine-specific vertical factors in
/// [`RenderingEngine::text_baseline_correction`].
pub const TEXT_ROTATION_ANCHOR_CORRECTION: f64 = 0.068;

/// Computes the focus-border rectangle for `element` with the given margin.
///
/// Non-text elements take their bounding box, shifted by any translation
/// offsets and grown by the margin on all sides. Text elements instead
/// derive the origin from their explicit `x`/`y` anchor attributes, since
/// text bounding boxes are baseline-anchored differently across rendering
/// engines; `engine` selects the vertical correction factor.
#[must_use]
pub fn focus_border_box(
    element: &SceneElement,
    margin: f64,
    engine: RenderingEngine,
) -> BoundingBox {
    let bounds = element.bounds();
    if element.kind() != NodeKind::Text {
        let (dx, dy) = element.translation();
        return bounds.translated(dx, dy).outset(margin);
    }

    let (anchor_x, anchor_y) = element.anchor();
    let rotated = element.is_rotated();
    let x = anchor_x - bounds.width * 0.5 - margin
        + if rotated {
            bounds.height * TEXT_ROTATION_ANCHOR_CORRECTION
        } else {
            0.0
        };
    let y = anchor_y - bounds.height * 0.5 - margin
        + if rotated {
            0.0
        } else {
            -bounds.height * engine.text_baseline_correction()
        };
    BoundingBox::new(
        x,
        y,
        bounds.width + 2.0 * margin,
        bounds.height + 2.0 * margin,
    )
}

/// Builds and destroys the overlay rectangle for a single element.
pub(crate) struct FocusBorderRenderer;

impl FocusBorderRenderer {
    /// Draws (or redraws) the focus border owned by `target`.
    ///
    /// An existing overlay is replaced, never accumulated. A stale id is a
    /// silent no-op.
    pub(crate) fn add(
        scene: &mut Scene,
        target: ElementId,
        margin: Option<f64>,
        style: &FocusBorderStyle,
        engine: RenderingEngine,
    ) {
        let styling_mode = scene.styling_mode();
        let Some(element) = scene.element_mut(target) else {
            trace!(%target, "focus border add on stale element");
            return;
        };

        if element.take_overlay().is_some() {
            trace!(%target, "replacing existing focus border");
        }

        let margin = margin.unwrap_or(DEFAULT_FOCUS_BORDER_MARGIN);
        let bounds = focus_border_box(element, margin, engine);
        let corner_radius = style.border_radius.map_or(0, |radius| {
            if radius.is_finite() && radius > 0.0 {
                radius as u32
            } else {
                0
            }
        });
        let (stroke, stroke_width) = match styling_mode {
            StylingMode::Inline => (style.color, style.line_width),
            StylingMode::External => (None, None),
        };

        debug!(
            %target,
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "add focus border"
        );
        element.set_overlay(FocusOverlay {
            bounds,
            corner_radius,
            class: FOCUS_BORDER_CLASS,
            z_index: FOCUS_BORDER_Z_INDEX,
            parent: element.parent(),
            stroke,
            stroke_width,
        });
    }

    /// Destroys the overlay owned by `target`, if any.
    pub(crate) fn remove(scene: &mut Scene, target: ElementId) {
        let Some(element) = scene.element_mut(target) else {
            return;
        };
        if element.take_overlay().is_some() {
            debug!(%target, "remove focus border");
        }
    }
}

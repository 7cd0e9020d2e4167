use std::fmt;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::BoundingBox;
use crate::host::HostNodeId;
use crate::render::{Color, StylingMode};

/// Handle to an element in a [`Scene`].
///
/// Ids are scene-local: a handle carried across a chart re-render (which
/// rebuilds the scene) resolves to nothing instead of aliasing a new
/// element, and focus operations treat it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Node-kind tag carried by every scene element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Group,
    Shape,
    Text,
}

/// Focus-border rectangle owned by exactly one scene element.
///
/// The overlay is attached as a child of the owning element's parent group so
/// it follows the chart's coordinate transforms, not the element's own
/// transform (translation is already baked into `bounds`).
#[derive(Debug, Clone, PartialEq)]
pub struct FocusOverlay {
    pub bounds: BoundingBox,
    pub corner_radius: u32,
    pub class: &'static str,
    pub z_index: i32,
    pub parent: Option<ElementId>,
    pub stroke: Option<Color>,
    pub stroke_width: Option<f64>,
}

/// A renderable shape/group/text node in the chart's scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneElement {
    kind: NodeKind,
    bounds: BoundingBox,
    anchor_x: f64,
    anchor_y: f64,
    translate_x: Option<f64>,
    translate_y: Option<f64>,
    rotation_deg: f64,
    parent: Option<ElementId>,
    children: SmallVec<[ElementId; 8]>,
    focus_node: Option<HostNodeId>,
    overlay: Option<FocusOverlay>,
}

impl SceneElement {
    #[must_use]
    pub fn new(kind: NodeKind, bounds: BoundingBox) -> Self {
        Self {
            kind,
            bounds,
            anchor_x: 0.0,
            anchor_y: 0.0,
            translate_x: None,
            translate_y: None,
            rotation_deg: 0.0,
            parent: None,
            children: SmallVec::new(),
            focus_node: None,
            overlay: None,
        }
    }

    #[must_use]
    pub fn group() -> Self {
        Self::new(NodeKind::Group, BoundingBox::new(0.0, 0.0, 0.0, 0.0))
    }

    #[must_use]
    pub fn shape(bounds: BoundingBox) -> Self {
        Self::new(NodeKind::Shape, bounds)
    }

    #[must_use]
    pub fn text(bounds: BoundingBox) -> Self {
        Self::new(NodeKind::Text, bounds)
    }

    /// Sets the explicit `x`/`y` placement attributes (text anchor point).
    #[must_use]
    pub fn with_anchor(mut self, x: f64, y: f64) -> Self {
        self.anchor_x = x;
        self.anchor_y = y;
        self
    }

    #[must_use]
    pub fn with_translation(mut self, dx: f64, dy: f64) -> Self {
        self.translate_x = Some(dx);
        self.translate_y = Some(dy);
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation_deg = degrees;
        self
    }

    /// Associates the element with a host node that can receive native focus.
    #[must_use]
    pub fn with_focus_node(mut self, node: HostNodeId) -> Self {
        self.focus_node = Some(node);
        self
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    #[must_use]
    pub fn anchor(&self) -> (f64, f64) {
        (self.anchor_x, self.anchor_y)
    }

    /// Translation offsets with absent components resolved to 0.
    #[must_use]
    pub fn translation(&self) -> (f64, f64) {
        (
            self.translate_x.unwrap_or(0.0),
            self.translate_y.unwrap_or(0.0),
        )
    }

    #[must_use]
    pub fn is_rotated(&self) -> bool {
        self.rotation_deg != 0.0
    }

    #[must_use]
    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    #[must_use]
    pub fn focus_node(&self) -> Option<HostNodeId> {
        self.focus_node
    }

    #[must_use]
    pub fn overlay(&self) -> Option<&FocusOverlay> {
        self.overlay.as_ref()
    }

    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub(crate) fn set_overlay(&mut self, overlay: FocusOverlay) {
        self.overlay = Some(overlay);
    }

    pub(crate) fn take_overlay(&mut self) -> Option<FocusOverlay> {
        self.overlay.take()
    }
}

/// Arena-backed scene graph.
///
/// Elements are addressed by [`ElementId`]; iteration order is insertion
/// order, which keeps headless test assertions deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    elements: IndexMap<u64, SceneElement>,
    next_id: u64,
    styling_mode: StylingMode,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(StylingMode::default())
    }
}

impl Scene {
    #[must_use]
    pub fn new(styling_mode: StylingMode) -> Self {
        Self {
            elements: IndexMap::new(),
            next_id: 0,
            styling_mode,
        }
    }

    #[must_use]
    pub fn styling_mode(&self) -> StylingMode {
        self.styling_mode
    }

    pub fn set_styling_mode(&mut self, mode: StylingMode) {
        self.styling_mode = mode;
    }

    /// Inserts a root element (no parent group).
    pub fn insert(&mut self, element: SceneElement) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id.0, element);
        id
    }

    /// Inserts `element` as a child of `parent`.
    ///
    /// Falls back to a root insert when `parent` is stale.
    pub fn attach(&mut self, parent: ElementId, element: SceneElement) -> ElementId {
        let mut element = element;
        if self.elements.contains_key(&parent.0) {
            element.parent = Some(parent);
        }
        let id = self.insert(element);
        if let Some(group) = self.elements.get_mut(&parent.0) {
            group.children.push(id);
        }
        id
    }

    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&SceneElement> {
        self.elements.get(&id.0)
    }

    #[must_use]
    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut SceneElement> {
        self.elements.get_mut(&id.0)
    }

    #[must_use]
    pub fn overlay(&self, id: ElementId) -> Option<&FocusOverlay> {
        self.element(id).and_then(SceneElement::overlay)
    }

    /// Number of live focus-border overlays across the whole scene.
    #[must_use]
    pub fn overlay_count(&self) -> usize {
        self.elements
            .values()
            .filter(|element| element.has_overlay())
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

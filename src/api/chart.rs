use crate::core::{ElementId, Scene};
use crate::error::FocusResult;
use crate::focus::{
    AccessibilityConfig, FocusBorderOptions, FocusBorderRenderer, FocusBorderStyle,
    FocusCoordinator,
};
use crate::host::{FocusHost, HostNodeId};

use super::FocusChartConfig;

/// Chart engine owning the scene graph, the host binding, the resolved
/// accessibility configuration, and the single active-focus slot.
///
/// At most one element carries a focus border at any time; the slot is only
/// mutated through [`FocusChart::set_focus_to_element`].
pub struct FocusChart<H: FocusHost> {
    host: H,
    scene: Scene,
    accessibility: AccessibilityConfig,
    active_focus: Option<ElementId>,
}

impl<H: FocusHost> FocusChart<H> {
    pub fn new(host: H, config: FocusChartConfig) -> FocusResult<Self> {
        config.validate()?;
        Ok(Self {
            host,
            scene: Scene::new(config.styling_mode),
            accessibility: config.accessibility,
            active_focus: None,
        })
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub(crate) fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn into_host(self) -> H {
        self.host
    }

    #[must_use]
    pub fn accessibility(&self) -> &AccessibilityConfig {
        &self.accessibility
    }

    #[must_use]
    pub fn focus_border_options(&self) -> FocusBorderOptions {
        self.accessibility.keyboard_navigation.focus_border
    }

    pub fn set_focus_border_options(&mut self, options: FocusBorderOptions) -> FocusResult<()> {
        options.validate()?;
        self.accessibility.keyboard_navigation.focus_border = options;
        Ok(())
    }

    /// The element currently recorded as the chart's focus target.
    #[must_use]
    pub fn focused_element(&self) -> Option<ElementId> {
        self.active_focus
    }

    pub(crate) fn take_active_focus(&mut self) -> Option<ElementId> {
        self.active_focus.take()
    }

    pub(crate) fn set_active_focus(&mut self, element: ElementId) {
        self.active_focus = Some(element);
    }

    /// Draws (or redraws) a focus border around `element`.
    ///
    /// This is the raw per-element primitive; it does not touch native focus
    /// or the chart's active-focus slot. `margin` falls back to the default
    /// when `None`.
    pub fn add_focus_border(
        &mut self,
        element: ElementId,
        margin: Option<f64>,
        style: &FocusBorderStyle,
    ) {
        let engine = self.host.rendering_engine();
        FocusBorderRenderer::add(&mut self.scene, element, margin, style, engine);
    }

    /// Destroys the focus border owned by `element`, if any.
    pub fn remove_focus_border(&mut self, element: ElementId) {
        FocusBorderRenderer::remove(&mut self.scene, element);
    }

    /// Moves logical focus to `element`: applies native host focus, removes
    /// the previously bordered element's overlay, and draws the new border.
    ///
    /// `host_target` overrides the element's own focus node when the native
    /// focus should land on a different host node (e.g. a proxy button).
    pub fn set_focus_to_element(&mut self, element: ElementId, host_target: Option<HostNodeId>) {
        FocusCoordinator::set_focus_to_element(self, element, host_target);
    }
}

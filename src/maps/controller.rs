// ============================================================================
// MAP CONTROLLER - Single owner of the renderer and its collaborators
// ============================================================================
// Shared with the UI as Rc<RefCell<MapController<R>>>. Event handlers and
// deferred callbacks hold Weak references, never the renderer itself.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::MapConfig;
use crate::models::{Marker, TooltipState};
use super::engine::MapEngine;
use super::interaction::InteractionLayer;
use super::selection::{SelectionController, SelectionOutcome, SelectionTicket};
use super::sync::{MarkerSynchronizer, SyncReport};
use super::traits::{MapError, MapRenderer, PointerEvent, PointerEventKind, PointerHandler};

pub type SharedMapController<R> = Rc<RefCell<MapController<R>>>;

pub struct MapController<R: MapRenderer> {
    engine: MapEngine<R>,
    sync: MarkerSynchronizer,
    interaction: InteractionLayer,
    selection: SelectionController,
}

impl<R: MapRenderer> MapController<R> {
    pub fn new(config: MapConfig, category_color: &str) -> Self {
        let offset = (config.tooltip_offset_x, config.tooltip_offset_y);
        Self {
            engine: MapEngine::new(config),
            sync: MarkerSynchronizer::new(category_color),
            interaction: InteractionLayer::new(offset),
            selection: SelectionController::new(),
        }
    }

    pub fn shared(config: MapConfig, category_color: &str) -> SharedMapController<R> {
        Rc::new(RefCell::new(Self::new(config, category_color)))
    }

    pub fn config(&self) -> &MapConfig {
        self.engine.config()
    }

    // ------------------------------------------------------------------------
    // Engine lifecycle
    // ------------------------------------------------------------------------

    pub fn mount<F>(&mut self, create: F) -> Result<bool, MapError>
    where
        F: FnOnce(&MapConfig, u64) -> Result<R, MapError>,
    {
        self.engine.mount(create)
    }

    pub fn on_style_loaded(&mut self, epoch: u64) {
        self.engine.on_style_loaded(epoch, self.sync.category_color());
        if self.engine.is_ready() && !self.sync.hot_zones_visible() {
            self.sync.set_hot_zones_visible(&mut self.engine, false);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_ready()
    }

    pub fn epoch(&self) -> u64 {
        self.engine.epoch()
    }

    pub fn teardown(&mut self) {
        self.interaction.reset();
        self.selection.invalidate_focus();
        self.engine.teardown();
    }

    // ------------------------------------------------------------------------
    // Marker data
    // ------------------------------------------------------------------------

    pub fn sync_markers(&mut self, markers: &[Marker], category_color: &str) -> Option<SyncReport> {
        let report = self.sync.sync(&mut self.engine, markers, category_color);
        if report.is_some_and(|r| r.camera_fitted) {
            self.selection.invalidate_focus();
        }
        report
    }

    pub fn apply_category_color(&mut self, category_color: &str) {
        self.sync.apply_category_color(&mut self.engine, category_color);
    }

    /// Remembered across mounts: applied again once the style loads
    pub fn set_hot_zones_visible(&mut self, visible: bool) {
        self.sync.set_hot_zones_visible(&mut self.engine, visible);
    }

    // ------------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------------

    pub fn subscribe(&mut self, kind: PointerEventKind, layer_id: &str, handler: PointerHandler) -> Option<R::Subscription> {
        self.engine
            .with_renderer("on", move |r| r.subscribe(kind, layer_id, handler))
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) -> TooltipState {
        self.interaction.pointer_move(&mut self.engine, event)
    }

    pub fn pointer_leave(&mut self) -> TooltipState {
        self.interaction.pointer_leave(&mut self.engine)
    }

    pub fn click(&self, event: &PointerEvent) -> Option<String> {
        self.interaction.click(event)
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.interaction.hovered_id()
    }

    pub fn tooltip(&self) -> &TooltipState {
        self.interaction.tooltip()
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    pub fn schedule_selection(&mut self) -> SelectionTicket {
        self.selection.schedule(&self.engine)
    }

    pub fn reconcile_selection(
        &mut self,
        ticket: SelectionTicket,
        selected_id: Option<&str>,
        markers: &[Marker],
    ) -> SelectionOutcome {
        self.selection.reconcile(&mut self.engine, ticket, selected_id, markers)
    }
}

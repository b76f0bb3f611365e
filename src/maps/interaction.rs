// ============================================================================
// INTERACTION - Hover tracking, tooltip and click-to-select
// ============================================================================
// Invariant: at most one marker carries hover=true. The previous hover is
// always cleared before the new one is set.
// ============================================================================

use std::rc::Rc;

use crate::models::TooltipState;
use crate::utils::constants::*;
use super::controller::SharedMapController;
use super::engine::MapEngine;
use super::traits::{FeatureState, MapRenderer, PointerEvent, PointerEventKind, PointerHandler};

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionLayer {
    hovered_id: Option<String>,
    tooltip: TooltipState,
    offset: (f64, f64),
}

impl InteractionLayer {
    pub fn new(offset: (f64, f64)) -> Self {
        Self {
            hovered_id: None,
            tooltip: TooltipState::hidden(),
            offset,
        }
    }

    pub fn hovered_id(&self) -> Option<&str> {
        self.hovered_id.as_deref()
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn pointer_move<R: MapRenderer>(&mut self, engine: &mut MapEngine<R>, event: &PointerEvent) -> TooltipState {
        let Some(feature) = event.feature.as_ref() else {
            return self.pointer_leave(engine);
        };

        // Only track what the renderer accepted; a failed call is retried on the next move
        if self.hovered_id.as_deref() != Some(feature.id.as_str()) && self.clear_hover(engine) {
            let applied = engine
                .with_renderer("setFeatureState(hover)", |r| {
                    r.set_feature_state(MARKERS_SOURCE, &feature.id, &FeatureState::hover(true))
                })
                .is_some();
            if applied {
                self.hovered_id = Some(feature.id.clone());
                log::debug!("👆 [HOVER] {}", feature.id);
            }
        }

        engine.with_renderer("setCursor", |r| r.set_cursor("pointer"));

        self.tooltip = TooltipState::at_pointer(event.point, self.offset, &feature.name, feature.viability_score);
        self.tooltip.clone()
    }

    /// Clear any hover and hide the tooltip; safe when nothing is hovered
    pub fn pointer_leave<R: MapRenderer>(&mut self, engine: &mut MapEngine<R>) -> TooltipState {
        self.clear_hover(engine);
        engine.with_renderer("setCursor", |r| r.set_cursor(""));
        self.tooltip = TooltipState::hidden();
        self.tooltip.clone()
    }

    /// Marker id to hand to the host's selection callback
    pub fn click(&self, event: &PointerEvent) -> Option<String> {
        event.feature.as_ref().map(|f| f.id.clone())
    }

    /// Drop local hover tracking without touching the renderer (teardown)
    pub fn reset(&mut self) {
        self.hovered_id = None;
        self.tooltip = TooltipState::hidden();
    }

    /// False when the previous marker is still hovered in the renderer
    fn clear_hover<R: MapRenderer>(&mut self, engine: &mut MapEngine<R>) -> bool {
        let Some(previous) = self.hovered_id.as_deref() else {
            return true;
        };
        let cleared = engine
            .with_renderer("setFeatureState(unhover)", |r| {
                r.set_feature_state(MARKERS_SOURCE, previous, &FeatureState::hover(false))
            })
            .is_some();
        if cleared {
            self.hovered_id = None;
        }
        cleared
    }
}

/// Subscribe move/leave/click handlers on the marker layer.
///
/// Handlers hold a weak reference to the controller, so a late event after
/// teardown does nothing. Dropping the returned guards unsubscribes them.
pub fn wire_interactions<R>(
    controller: &SharedMapController<R>,
    on_tooltip: Rc<dyn Fn(TooltipState)>,
    on_select: Rc<dyn Fn(String)>,
) -> Vec<R::Subscription>
where
    R: MapRenderer + 'static,
{
    let mut subscriptions = Vec::new();

    let weak = Rc::downgrade(controller);
    let tooltip_cb = on_tooltip.clone();
    let on_move: PointerHandler = Box::new(move |event: PointerEvent| {
        let Some(controller) = weak.upgrade() else { return };
        let tooltip = controller.borrow_mut().pointer_move(&event);
        tooltip_cb(tooltip);
    });

    let weak = Rc::downgrade(controller);
    let on_leave: PointerHandler = Box::new(move |_event: PointerEvent| {
        let Some(controller) = weak.upgrade() else { return };
        let tooltip = controller.borrow_mut().pointer_leave();
        on_tooltip(tooltip);
    });

    let weak = Rc::downgrade(controller);
    let on_click: PointerHandler = Box::new(move |event: PointerEvent| {
        let Some(controller) = weak.upgrade() else { return };
        let selected = controller.borrow().click(&event);
        if let Some(id) = selected {
            log::info!("🖱️ [CLICK] Marker {}", id);
            on_select(id);
        }
    });

    let mut controller = controller.borrow_mut();
    for (kind, handler) in [
        (PointerEventKind::Move, on_move),
        (PointerEventKind::Leave, on_leave),
        (PointerEventKind::Click, on_click),
    ] {
        if let Some(subscription) = controller.subscribe(kind, MARKER_CIRCLE_LAYER, handler) {
            subscriptions.push(subscription);
        }
    }

    log::info!("✅ [MAP] {} interaction handlers registered", subscriptions.len());
    subscriptions
}

// ============================================================================
// SELECTION - Selected feature-state + camera focus
// ============================================================================
// Reconciliation runs deferred (see hooks::use_canada_map). A ticket carries
// the engine epoch and a sequence number: only the latest ticket of the
// current mount is honoured.
// ============================================================================

use crate::models::{LngLat, Marker};
use crate::utils::constants::*;
use super::engine::MapEngine;
use super::traits::{FeatureState, FlyToOptions, MapRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    epoch: u64,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOutcome {
    /// Stale ticket, torn-down renderer or style not loaded
    Skipped,
    Applied {
        selected: Option<String>,
        camera_moved: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionController {
    seq: u64,
    /// Last fly-to target, so re-running with the same selection does not fly again
    focused: Option<(String, LngLat)>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket; any earlier ticket becomes stale
    pub fn schedule<R: MapRenderer>(&mut self, engine: &MapEngine<R>) -> SelectionTicket {
        self.seq += 1;
        SelectionTicket { epoch: engine.epoch(), seq: self.seq }
    }

    /// Camera moved for another reason (fit-bounds); the next reconcile may fly again
    pub fn invalidate_focus(&mut self) {
        self.focused = None;
    }

    pub fn reconcile<R: MapRenderer>(
        &mut self,
        engine: &mut MapEngine<R>,
        ticket: SelectionTicket,
        selected_id: Option<&str>,
        markers: &[Marker],
    ) -> SelectionOutcome {
        if ticket.epoch != engine.epoch() || ticket.seq != self.seq {
            log::debug!("⏭️ [SELECT] Stale ticket {:?}, skipping", ticket);
            return SelectionOutcome::Skipped;
        }
        if !engine.is_style_loaded() {
            log::debug!("⏳ [SELECT] Style not loaded, skipping");
            return SelectionOutcome::Skipped;
        }

        for marker in markers {
            let state = FeatureState::selected(selected_id == Some(marker.id.as_str()));
            engine.with_renderer("setFeatureState(selected)", |r| {
                r.set_feature_state(MARKERS_SOURCE, &marker.id, &state)
            });
        }

        let target = selected_id.and_then(|id| markers.iter().find(|m| m.id == id));
        let Some(target) = target else {
            if let Some(id) = selected_id {
                log::debug!("🔎 [SELECT] {} not in current markers", id);
            }
            self.focused = None;
            return SelectionOutcome::Applied { selected: None, camera_moved: false };
        };

        let position = target.position();
        let already_focused = self
            .focused
            .as_ref()
            .is_some_and(|(id, at)| *id == target.id && *at == position);

        let mut camera_moved = false;
        if !already_focused {
            let config = engine.config();
            let options = FlyToOptions {
                center: position,
                zoom: config.fly_to_zoom,
                duration: config.fly_to_duration_ms,
                essential: true,
            };
            camera_moved = engine.with_renderer("flyTo", |r| r.fly_to(&options)).is_some();
            if camera_moved {
                self.focused = Some((target.id.clone(), position));
                log::info!("🎯 [SELECT] Flying to {}", target.name);
            }
        }

        SelectionOutcome::Applied {
            selected: Some(target.id.clone()),
            camera_moved,
        }
    }
}

// ============================================================================
// USE CANADA MAP - Wires the map controller into the Yew lifecycle
// ============================================================================
// One effect per concern, each keyed on the readiness flag so nothing touches
// the renderer before the style has loaded:
//   mount/teardown -> interactions -> markers -> hot zones -> selection
// ============================================================================

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::CONFIG;
use crate::maps::web::MaplibreRenderer;
use crate::maps::{wire_interactions, MapController, MapError};
use crate::models::{Marker, TooltipState};

/// What the component needs to render around the map canvas
pub struct UseCanadaMapHandle {
    pub container: NodeRef,
    pub ready: bool,
    pub tooltip: TooltipState,
}

#[hook]
pub fn use_canada_map(
    markers: Vec<Marker>,
    selected_id: Option<String>,
    on_marker_click: Callback<String>,
    category_color: AttrValue,
    show_hot_zones: bool,
) -> UseCanadaMapHandle {
    let container = use_node_ref();
    let controller = {
        let category_color = category_color.clone();
        use_mut_ref(move || {
            MapController::<MaplibreRenderer>::new(CONFIG.map_config.clone(), &category_color)
        })
    };
    let ready = use_state(|| false);
    let tooltip = use_state(TooltipState::hidden);

    // Mount once, tear down on unmount
    {
        let controller = controller.clone();
        let container = container.clone();
        let ready = ready.clone();
        use_effect_with((), move |_| {
            match container.cast::<web_sys::HtmlElement>() {
                Some(element) => {
                    let weak = Rc::downgrade(&controller);
                    let result = controller.borrow_mut().mount(|config, epoch| {
                        MaplibreRenderer::create(&element, config, move || {
                            let Some(controller) = weak.upgrade() else { return };
                            controller.borrow_mut().on_style_loaded(epoch);
                            let is_ready = controller.borrow().is_ready();
                            ready.set(is_ready);
                        })
                    });
                    if let Err(e) = result {
                        log::error!("❌ [MAP] Could not create map: {}", e);
                    }
                }
                None => log::error!("❌ [MAP] {}", MapError::MissingContainer),
            }

            move || {
                controller.borrow_mut().teardown();
            }
        });
    }

    // Pointer handlers; re-registered when the click callback changes
    {
        let controller = controller.clone();
        let tooltip = tooltip.clone();
        use_effect_with((*ready, on_marker_click), move |(ready, on_marker_click)| {
            let subscriptions = if *ready {
                let on_click = on_marker_click.clone();
                wire_interactions(
                    &controller,
                    Rc::new(move |state: TooltipState| tooltip.set(state)),
                    Rc::new(move |id: String| on_click.emit(id)),
                )
            } else {
                Vec::new()
            };

            move || drop(subscriptions)
        });
    }

    // Marker geometry + accent colour
    {
        let controller = controller.clone();
        use_effect_with(
            (*ready, markers.clone(), category_color),
            move |(ready, markers, category_color)| {
                if *ready {
                    controller.borrow_mut().sync_markers(markers, category_color);
                }
                || ()
            },
        );
    }

    // Hot-zone overlay toggle
    {
        let controller = controller.clone();
        use_effect_with((*ready, show_hot_zones), move |(ready, show_hot_zones)| {
            if *ready {
                controller.borrow_mut().set_hot_zones_visible(*show_hot_zones);
            }
            || ()
        });
    }

    // Selection, deferred so an in-flight source update can settle first
    {
        let controller = controller.clone();
        use_effect_with(
            (*ready, selected_id, markers),
            move |(ready, selected_id, markers)| {
                let pending = ready.then(|| {
                    let ticket = controller.borrow_mut().schedule_selection();
                    let delay = controller.borrow().config().selection_delay_ms;
                    let weak = Rc::downgrade(&controller);
                    let selected_id = selected_id.clone();
                    let markers = markers.clone();
                    Timeout::new(delay, move || {
                        if let Some(controller) = weak.upgrade() {
                            controller
                                .borrow_mut()
                                .reconcile_selection(ticket, selected_id.as_deref(), &markers);
                        }
                    })
                });

                move || {
                    if let Some(timeout) = pending {
                        timeout.cancel();
                    }
                }
            },
        );
    }

    UseCanadaMapHandle {
        container,
        ready: *ready,
        tooltip: (*tooltip).clone(),
    }
}

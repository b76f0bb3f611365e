// ============================================================================
// APP - Mission 2050 dashboard
// ============================================================================
// Module selector + site list on the left, the map on the right. Selection
// state lives here; the map only reports clicks and reflects `selected_id`.
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::demo::markers_for;
use crate::models::{Marker, MarkerSummary, MissionModule};
use super::canada_map::CanadaMap;

#[function_component(App)]
pub fn app() -> Html {
    let module = use_state(MissionModule::default);
    let selected_id = use_state(|| None::<String>);
    let show_hot_zones = use_state(|| true);
    let markers: Rc<Vec<Marker>> = use_memo(*module, |module| markers_for(*module));

    let on_module_change = {
        let module = module.clone();
        let selected_id = selected_id.clone();
        Callback::from(move |e: Event| {
            let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) else {
                return;
            };
            if let Some(next) = MissionModule::from_key(&select.value()) {
                log::info!("📂 [APP] Module -> {}", next.label());
                module.set(next);
                selected_id.set(None);
            }
        })
    };

    // Stable identity so the map does not re-register its click handler every render
    let on_marker_click = {
        let selected_id = selected_id.clone();
        use_callback((), move |id: String, _| {
            log::info!("📍 [APP] Marker selected: {}", id);
            selected_id.set(Some(id));
        })
    };

    let on_toggle_hot_zones = {
        let show_hot_zones = show_hot_zones.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                show_hot_zones.set(input.checked());
            }
        })
    };

    let summary = MarkerSummary::of(&markers);

    html! {
        <div class="app">
            <aside class="sidebar">
                <h1 class="sidebar__title">{ "Mission 2050" }</h1>

                <select class="module-select" onchange={on_module_change}>
                    { for MissionModule::ALL.iter().map(|m| html! {
                        <option value={m.key()} selected={*m == *module}>{ m.label() }</option>
                    }) }
                </select>

                <label class="hot-toggle">
                    <input type="checkbox" checked={*show_hot_zones} onchange={on_toggle_hot_zones} />
                    { " Show hot zones" }
                </label>

                <div class="summary">
                    <span>{ format!("{} sites", summary.total) }</span>
                    <span>{ format!("🔥 {} hot", summary.hot) }</span>
                    <span>{ format!("Avg viability {}", summary.average_score) }</span>
                </div>

                <ul class="site-list">
                    { for markers.iter().map(|marker| {
                        let is_selected = selected_id.as_deref() == Some(marker.id.as_str());
                        let onclick = {
                            let on_marker_click = on_marker_click.clone();
                            let id = marker.id.clone();
                            Callback::from(move |_: MouseEvent| on_marker_click.emit(id.clone()))
                        };
                        html! {
                            <li key={marker.id.clone()}
                                class={classes!("site", is_selected.then_some("site--selected"), marker.is_hot().then_some("site--hot"))}
                                {onclick}>
                                <span class="site__name">{ &marker.name }</span>
                                <span class="site__score">{ marker.viability_score }</span>
                            </li>
                        }
                    }) }
                </ul>
            </aside>

            <main class="map-panel">
                <CanadaMap
                    markers={(*markers).clone()}
                    selected_id={(*selected_id).clone()}
                    on_marker_click={on_marker_click.clone()}
                    category_color={AttrValue::from(module.accent_color())}
                    show_hot_zones={*show_hot_zones}
                />
            </main>
        </div>
    }
}

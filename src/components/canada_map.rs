// ============================================================================
// CANADA MAP COMPONENT
// ============================================================================
// Thin view over `use_canada_map`: the container div the renderer mounts into,
// a loading veil until the style is ready, and the hover tooltip.
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_canada_map;
use crate::models::Marker;
use crate::utils::constants::MAP_CONTAINER_ID;
use super::tooltip::Tooltip;

#[derive(Properties, PartialEq)]
pub struct CanadaMapProps {
    pub markers: Vec<Marker>,
    #[prop_or_default]
    pub selected_id: Option<String>,
    pub on_marker_click: Callback<String>,
    pub category_color: AttrValue,
    #[prop_or(true)]
    pub show_hot_zones: bool,
}

#[function_component(CanadaMap)]
pub fn canada_map(props: &CanadaMapProps) -> Html {
    let map = use_canada_map(
        props.markers.clone(),
        props.selected_id.clone(),
        props.on_marker_click.clone(),
        props.category_color.clone(),
        props.show_hot_zones,
    );

    html! {
        <div class="canada-map">
            <div id={MAP_CONTAINER_ID} class="canada-map__canvas" ref={map.container.clone()}></div>
            if !map.ready {
                <div class="canada-map__loading">{ "🗺️ Loading map..." }</div>
            }
            <Tooltip state={map.tooltip.clone()} />
        </div>
    }
}

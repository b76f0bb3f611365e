use yew::prelude::*;

use crate::models::TooltipState;

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub state: TooltipState,
}

/// Floating label next to the hovered marker
#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let state = &props.state;
    if !state.visible {
        return html! {};
    }

    let style = format!("left: {:.0}px; top: {:.0}px;", state.screen_x, state.screen_y);

    html! {
        <div class="map-tooltip" style={style}>
            <div class="map-tooltip__label">{ &state.label }</div>
            <div class="map-tooltip__score">{ format!("Viability {}/100", state.score) }</div>
            if state.is_hot_opportunity {
                <span class="map-tooltip__badge">{ "🔥 Hot opportunity" }</span>
            }
        </div>
    }
}

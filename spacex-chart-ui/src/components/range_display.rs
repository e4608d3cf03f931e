//! Text widget echoing the selected payload range.

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_dash::WidgetId;

#[derive(Props, Clone, PartialEq)]
pub struct RangeDisplayProps {
    pub widget: WidgetId,
}

/// Shows `AppState::range_text`, which the range callback keeps current.
#[component]
pub fn RangeDisplay(props: RangeDisplayProps) -> Element {
    let state = use_context::<AppState>();
    let text = (state.range_text)();
    let dom_id = props.widget.dom_id();

    rsx! {
        div {
            id: "{dom_id}",
            style: "margin: 4px 0 12px 0; font-size: 14px;",
            "{text}"
        }
    }
}

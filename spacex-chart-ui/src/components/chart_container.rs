//! Placeholder div that a D3.js renderer draws into.

use dioxus::prelude::*;
use spacex_dash::WidgetId;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// Output widget; its DOM id is the render target
    pub widget: WidgetId,
    /// Minimum height in pixels, so the page does not jump before the first render
    #[props(default = 400)]
    pub min_height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("min-height: {}px; width: 100%;", props.min_height);
    let dom_id = props.widget.dom_id();

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{dom_id}",
                style: "width: 100%;",
            }
        }
    }
}

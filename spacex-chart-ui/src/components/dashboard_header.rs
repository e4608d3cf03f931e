//! Page title.

use dioxus::prelude::*;
use spacex_dash::layout::TitleBlock;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: TitleBlock,
}

#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    let style = format!("margin: 0 0 16px 0; {}", props.title.style());

    rsx! {
        h1 {
            style: "{style}",
            "{props.title.text}"
        }
    }
}

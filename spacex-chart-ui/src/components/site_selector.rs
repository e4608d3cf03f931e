//! Dropdown selector for choosing a launch site, or "ALL".

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_dash::layout::{DropdownOption, SiteDropdown};
use spacex_dash::SiteSelection;

#[derive(Props, Clone, PartialEq)]
pub struct SiteSelectorProps {
    pub dropdown: SiteDropdown,
}

/// Site dropdown. Writes `selected_site` on change.
///
/// When the dropdown is searchable, a filter box narrows the listed options.
/// The current selection always stays listed, so the value in the `select`
/// is never one the user cannot see.
#[component]
pub fn SiteSelector(props: SiteSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut filter = use_signal(String::new);
    let selected = (state.selected_site)().to_string();

    let needle = filter().to_lowercase();
    let visible: Vec<DropdownOption> = props
        .dropdown
        .options
        .iter()
        .filter(|o| {
            needle.is_empty() || o.value == selected || o.label.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();
    let dom_id = props.dropdown.id.dom_id();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        log::info!("[Launch UI] site selected: {}", value);
        state.selected_site.set(SiteSelection::from(value));
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            if props.dropdown.searchable {
                input {
                    r#type: "search",
                    placeholder: "{props.dropdown.placeholder}",
                    value: "{filter}",
                    style: "flex: 1; padding: 6px 8px;",
                    oninput: move |evt: Event<FormData>| filter.set(evt.value()),
                }
            }
            select {
                id: "{dom_id}",
                style: "flex: 2; padding: 6px 8px;",
                onchange: on_change,
                for opt in visible.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

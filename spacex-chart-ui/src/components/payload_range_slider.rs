//! Two-thumb payload range slider.

use crate::state::AppState;
use dioxus::prelude::*;
use spacex_dash::layout::RangeSlider;

#[derive(Props, Clone, PartialEq)]
pub struct PayloadRangeSliderProps {
    pub slider: RangeSlider,
}

/// Payload range slider built from two range inputs sharing the same track.
///
/// Each thumb is clamped against the other (see `PayloadRange::with_low` and
/// `with_high`), which keeps `low <= high` for every callback downstream.
/// Values are committed on release, like a drag-and-drop slider.
#[component]
pub fn PayloadRangeSlider(props: PayloadRangeSliderProps) -> Element {
    let mut state = use_context::<AppState>();
    let range = (state.payload_range)();
    let slider = props.slider;
    let dom_id = slider.id.dom_id();
    let marks = slider.marks();

    let on_low_change = move |evt: Event<FormData>| {
        if let Ok(low) = evt.value().parse::<f64>() {
            let current = *state.payload_range.peek();
            state.payload_range.set(current.with_low(low));
        }
    };

    let on_high_change = move |evt: Event<FormData>| {
        if let Ok(high) = evt.value().parse::<f64>() {
            let current = *state.payload_range.peek();
            state.payload_range.set(current.with_high(high));
        }
    };

    rsx! {
        div {
            id: "{dom_id}",
            style: "margin: 8px 0;",
            p {
                style: "margin: 0 0 4px 0; font-weight: bold;",
                "{slider.label}"
            }
            div {
                style: "display: flex; flex-direction: column; gap: 4px;",
                label {
                    style: "display: flex; gap: 8px; align-items: center;",
                    span { style: "width: 40px;", "Min" }
                    input {
                        r#type: "range",
                        style: "flex: 1;",
                        min: "{slider.min}",
                        max: "{slider.max}",
                        step: "{slider.step}",
                        value: "{range.low}",
                        onchange: on_low_change,
                    }
                }
                label {
                    style: "display: flex; gap: 8px; align-items: center;",
                    span { style: "width: 40px;", "Max" }
                    input {
                        r#type: "range",
                        style: "flex: 1;",
                        min: "{slider.min}",
                        max: "{slider.max}",
                        step: "{slider.step}",
                        value: "{range.high}",
                        onchange: on_high_change,
                    }
                }
            }
            div {
                style: "display: flex; justify-content: space-between; margin-left: 48px; font-size: 11px; color: #666;",
                for mark in marks.iter() {
                    span { key: "{mark}", "{mark}" }
                }
            }
        }
    }
}

//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the widget state into signals provided via
//! `use_context_provider`. Components retrieve it with `use_context::<AppState>()`.
//! Input widgets write `selected_site` and `payload_range`; callback effects
//! read them and write the outputs.

use dioxus::prelude::*;
use spacex_dash::{CallbackInputs, Dashboard, PayloadRange, SiteSelection, WidgetId};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded dataset, layout and callbacks (None until loaded)
    pub dashboard: Signal<Option<Dashboard>>,
    /// Whether the dataset is still loading
    pub loading: Signal<bool>,
    /// Fatal load error; when set no widgets are shown
    pub error_msg: Signal<Option<String>>,
    /// Site dropdown value
    pub selected_site: Signal<SiteSelection>,
    /// Payload slider value
    pub payload_range: Signal<PayloadRange>,
    /// Content of the range confirmation widget
    pub range_text: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            dashboard: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_site: Signal::new(SiteSelection::All),
            payload_range: Signal::new(PayloadRange::default()),
            range_text: Signal::new(String::new()),
        }
    }

    /// Read the current value of each listed input widget.
    ///
    /// Only the listed signals are read, so an effect calling this subscribes
    /// to exactly the inputs its callback declared.
    pub fn read_inputs(&self, inputs: &[WidgetId]) -> CallbackInputs {
        let mut values = CallbackInputs::default();
        for input in inputs {
            match input {
                WidgetId::SiteDropdown => values.site = (self.selected_site)(),
                WidgetId::PayloadSlider => values.payload_range = (self.payload_range)(),
                other => log::warn!("[Launch UI] {} is not an input widget", other),
            }
        }
        values
    }
}

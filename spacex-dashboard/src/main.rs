//! SpaceX Launch Records Dashboard
//!
//! A launch site dropdown, a pie chart of launch outcomes, a payload range
//! slider with a confirmation line, and a scatter chart of payload mass
//! against outcome, colored by booster version category.
//!
//! Data flow:
//! 1. `build.rs` copies `spacex_launch_dash.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is loaded into an in-memory SQLite database and the
//!    page layout is built from its payload bounds and launch sites.
//! 4. Each registered callback runs in its own effect, which subscribes only
//!    to the signals of the callback's input widgets. When the site or the
//!    payload range changes, the affected outputs are recomputed and
//!    rendered with D3.js (charts) or written to a signal (text).

use dioxus::prelude::*;
use spacex_chart_ui::components::{
    ChartContainer, DashboardHeader, ErrorDisplay, LoadingSpinner, PayloadRangeSlider,
    RangeDisplay, SiteSelector,
};
use spacex_chart_ui::js_bridge;
use spacex_chart_ui::state::AppState;
use spacex_dash::{CallbackOutput, Dashboard, DashboardConfig, DashboardLayout, WidgetId};

/// Launch records, one row per launch attempt.
const LAUNCHES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/spacex_launch_dash.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("launch-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset and build the layout once, on mount
    use_effect(move || {
        match Dashboard::load(LAUNCHES_CSV, &DashboardConfig::default()) {
            Ok(dashboard) => {
                state
                    .selected_site
                    .set(dashboard.layout.site_dropdown.value.clone());
                state
                    .payload_range
                    .set(dashboard.layout.payload_slider.value);
                state.dashboard.set(Some(dashboard));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("[Launch UI] Failed to load launch records: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    use_bound_callback(state, WidgetId::SuccessPieChart);
    use_bound_callback(state, WidgetId::SuccessPayloadScatterChart);
    use_bound_callback(state, WidgetId::RangeSliderOutput);

    let layout = state.dashboard.read().as_ref().map(|d| d.layout.clone());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                if let Some(layout) = layout {
                    DashboardPage { layout }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct DashboardPageProps {
    layout: DashboardLayout,
}

/// The widgets, top to bottom, as laid out by [`DashboardLayout`].
#[component]
fn DashboardPage(props: DashboardPageProps) -> Element {
    let layout = props.layout;

    rsx! {
        DashboardHeader { title: layout.title.clone() }
        SiteSelector { dropdown: layout.site_dropdown.clone() }
        br {}
        ChartContainer { widget: layout.pie_chart, min_height: 400 }
        br {}
        PayloadRangeSlider { slider: layout.payload_slider.clone() }
        RangeDisplay { widget: layout.range_output }
        ChartContainer { widget: layout.scatter_chart, min_height: 420 }
    }
}

/// Run the callback bound to `output` whenever one of its inputs changes and
/// patch the output widget with the result.
fn use_bound_callback(state: AppState, output: WidgetId) {
    use_effect(move || {
        let guard = state.dashboard.read();
        let Some(dashboard) = guard.as_ref() else {
            return;
        };
        let Some(callback) = dashboard.registry.get(output) else {
            log::warn!("[Launch UI] No callback registered for {}", output);
            return;
        };

        let inputs = state.read_inputs(&callback.inputs);
        let result = dashboard.dispatch(output, &inputs);
        drop(guard);

        match result {
            Ok(figure) => apply_output(state, output, figure),
            Err(e) => {
                log::error!("[Launch UI] Callback for {} failed: {:#}", output, e);
                clear_output(state, output);
            }
        }
    });
}

fn apply_output(mut state: AppState, output: WidgetId, result: CallbackOutput) {
    match result {
        CallbackOutput::Pie(fig) => {
            let data_json = serde_json::to_string(&fig.slices).unwrap_or_default();
            let config_json = serde_json::json!({
                "title": fig.title,
                "namesLabel": fig.names,
                "valuesLabel": fig.values.unwrap_or_else(|| "count".to_string()),
            })
            .to_string();
            js_bridge::render_pie_chart(output.dom_id(), &data_json, &config_json);
        }
        CallbackOutput::Scatter(fig) => {
            let data_json = serde_json::to_string(&fig.points).unwrap_or_default();
            let config_json = serde_json::json!({
                "title": fig.title,
                "xLabel": fig.x_label,
                "yLabel": fig.y_label,
                "colorLabel": fig.color_label,
                "categories": fig.categories,
            })
            .to_string();
            js_bridge::render_scatter_chart(output.dom_id(), &data_json, &config_json);
        }
        CallbackOutput::Text(text) => state.range_text.set(text),
    }
}

fn clear_output(mut state: AppState, output: WidgetId) {
    match output {
        WidgetId::RangeSliderOutput => state.range_text.set(String::new()),
        _ => js_bridge::destroy_chart(output.dom_id()),
    }
}

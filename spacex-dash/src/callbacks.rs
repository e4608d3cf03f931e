//! Callback registration and dispatch.
//!
//! Each output widget is bound to the input widgets it reads and a pure
//! handler. The host event loop (Dioxus effects in the browser, or the CLI)
//! decides when to run a callback; this module only knows what to run.

use crate::figures::{PieFigure, ScatterFigure};
use crate::selection::{PayloadRange, SiteSelection};
use crate::widget::{WidgetId, WidgetRole};
use serde::Serialize;
use spacex_db::Database;

/// Current values of the input widgets a callback reads.
///
/// Fields for widgets the callback did not declare keep their defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CallbackInputs {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

/// New content for an output widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CallbackOutput {
    Pie(PieFigure),
    Scatter(ScatterFigure),
    Text(String),
}

pub type CallbackHandler = fn(&Database, &CallbackInputs) -> anyhow::Result<CallbackOutput>;

#[derive(Clone)]
pub struct Callback {
    pub output: WidgetId,
    pub inputs: Vec<WidgetId>,
    handler: CallbackHandler,
}

/// Output widget → (input widgets, handler) bindings.
#[derive(Clone, Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three dashboard callbacks.
    pub fn dashboard() -> Self {
        Self {
            callbacks: vec![
                Callback {
                    output: WidgetId::SuccessPieChart,
                    inputs: vec![WidgetId::SiteDropdown],
                    handler: success_pie_chart,
                },
                Callback {
                    output: WidgetId::SuccessPayloadScatterChart,
                    inputs: vec![WidgetId::SiteDropdown, WidgetId::PayloadSlider],
                    handler: success_payload_scatter_chart,
                },
                Callback {
                    output: WidgetId::RangeSliderOutput,
                    inputs: vec![WidgetId::PayloadSlider],
                    handler: payload_range_text,
                },
            ],
        }
    }

    /// Bind `handler` to `output`, re-run whenever any of `inputs` changes.
    ///
    /// An output can only have one callback, and the widgets must have the
    /// right roles.
    pub fn register(
        &mut self,
        output: WidgetId,
        inputs: &[WidgetId],
        handler: CallbackHandler,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            output.role() == WidgetRole::Output,
            "'{}' is not an output widget",
            output
        );
        anyhow::ensure!(!inputs.is_empty(), "callback for '{}' has no inputs", output);
        if let Some(input) = inputs.iter().find(|w| w.role() != WidgetRole::Input) {
            anyhow::bail!("'{}' is not an input widget", input);
        }
        anyhow::ensure!(
            self.get(output).is_none(),
            "'{}' already has a callback",
            output
        );
        self.callbacks.push(Callback {
            output,
            inputs: inputs.to_vec(),
            handler,
        });
        Ok(())
    }

    pub fn get(&self, output: WidgetId) -> Option<&Callback> {
        self.callbacks.iter().find(|c| c.output == output)
    }

    /// Registered outputs, in registration order.
    pub fn outputs(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.callbacks.iter().map(|c| c.output)
    }

    /// Outputs that must be recomputed when `input` changes.
    pub fn outputs_for(&self, input: WidgetId) -> Vec<WidgetId> {
        self.callbacks
            .iter()
            .filter(|c| c.inputs.contains(&input))
            .map(|c| c.output)
            .collect()
    }

    /// Run the callback bound to `output`.
    pub fn dispatch(
        &self,
        output: WidgetId,
        db: &Database,
        inputs: &CallbackInputs,
    ) -> anyhow::Result<CallbackOutput> {
        let callback = self
            .get(output)
            .ok_or_else(|| anyhow::anyhow!("no callback registered for '{}'", output))?;
        log::info!(
            "[Launch Dash] dispatch: {} (site={}, payload=[{}, {}])",
            output,
            inputs.site,
            inputs.payload_range.low,
            inputs.payload_range.high
        );
        (callback.handler)(db, inputs)
    }
}

/// Site dropdown → success pie chart.
pub fn success_pie_chart(db: &Database, inputs: &CallbackInputs) -> anyhow::Result<CallbackOutput> {
    Ok(CallbackOutput::Pie(PieFigure::for_site(db, &inputs.site)?))
}

/// Site dropdown + payload slider → payload/outcome scatter chart.
pub fn success_payload_scatter_chart(
    db: &Database,
    inputs: &CallbackInputs,
) -> anyhow::Result<CallbackOutput> {
    Ok(CallbackOutput::Scatter(ScatterFigure::for_selection(
        db,
        &inputs.site,
        &inputs.payload_range,
    )?))
}

/// Payload slider → confirmation text.
pub fn payload_range_text(_db: &Database, inputs: &CallbackInputs) -> anyhow::Result<CallbackOutput> {
    Ok(CallbackOutput::Text(inputs.payload_range.describe()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAUNCHES_CSV: &str = include_str!("../../fixtures/spacex_launch_dash.csv");

    fn fixture_db() -> Database {
        Database::from_csv(LAUNCHES_CSV).unwrap()
    }

    fn inputs(site: &str, low: f64, high: f64) -> CallbackInputs {
        CallbackInputs {
            site: SiteSelection::from(site),
            payload_range: PayloadRange::new(low, high),
        }
    }

    fn expect_pie(output: CallbackOutput) -> PieFigure {
        match output {
            CallbackOutput::Pie(fig) => fig,
            other => panic!("expected a pie figure, got {:?}", other),
        }
    }

    fn expect_scatter(output: CallbackOutput) -> ScatterFigure {
        match output {
            CallbackOutput::Scatter(fig) => fig,
            other => panic!("expected a scatter figure, got {:?}", other),
        }
    }

    #[test]
    fn dashboard_registers_three_callbacks() {
        let registry = CallbackRegistry::dashboard();
        let outputs: Vec<WidgetId> = registry.outputs().collect();
        assert_eq!(
            outputs,
            vec![
                WidgetId::SuccessPieChart,
                WidgetId::SuccessPayloadScatterChart,
                WidgetId::RangeSliderOutput,
            ]
        );
    }

    #[test]
    fn site_dropdown_feeds_both_charts() {
        let registry = CallbackRegistry::dashboard();
        assert_eq!(
            registry.outputs_for(WidgetId::SiteDropdown),
            vec![WidgetId::SuccessPieChart, WidgetId::SuccessPayloadScatterChart]
        );
        assert_eq!(
            registry.outputs_for(WidgetId::PayloadSlider),
            vec![WidgetId::SuccessPayloadScatterChart, WidgetId::RangeSliderOutput]
        );
    }

    #[test]
    fn register_rejects_duplicate_output() {
        let mut registry = CallbackRegistry::dashboard();
        let result = registry.register(
            WidgetId::SuccessPieChart,
            &[WidgetId::SiteDropdown],
            success_pie_chart,
        );
        assert!(result.is_err());
    }

    #[test]
    fn register_checks_widget_roles() {
        let mut registry = CallbackRegistry::new();
        assert!(registry
            .register(WidgetId::SiteDropdown, &[WidgetId::PayloadSlider], payload_range_text)
            .is_err());
        assert!(registry
            .register(
                WidgetId::RangeSliderOutput,
                &[WidgetId::SuccessPieChart],
                payload_range_text
            )
            .is_err());
        assert!(registry
            .register(WidgetId::RangeSliderOutput, &[], payload_range_text)
            .is_err());
        registry
            .register(
                WidgetId::RangeSliderOutput,
                &[WidgetId::PayloadSlider],
                payload_range_text,
            )
            .unwrap();
        assert!(registry.get(WidgetId::RangeSliderOutput).is_some());
    }

    #[test]
    fn dispatch_unregistered_output_fails() {
        let registry = CallbackRegistry::new();
        let db = fixture_db();
        assert!(registry
            .dispatch(WidgetId::SuccessPieChart, &db, &CallbackInputs::default())
            .is_err());
    }

    #[test]
    fn all_sites_full_range_scenario() {
        let registry = CallbackRegistry::dashboard();
        let db = fixture_db();
        let input = inputs("ALL", 0.0, 10000.0);

        let scatter = expect_scatter(
            registry
                .dispatch(WidgetId::SuccessPayloadScatterChart, &db, &input)
                .unwrap(),
        );
        assert_eq!(
            scatter.points.len() as i64,
            db.query_launch_count().unwrap(),
            "Full range over all sites should select the whole dataset"
        );

        let pie = expect_pie(registry.dispatch(WidgetId::SuccessPieChart, &db, &input).unwrap());
        let labels: Vec<&str> = pie.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        let values: Vec<i64> = pie.slices.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![7, 4, 10, 3]);
    }

    #[test]
    fn single_site_dataset_range_scenario() {
        let registry = CallbackRegistry::dashboard();
        let db = fixture_db();
        let bounds = db.query_payload_bounds().unwrap();
        let input = inputs("CCAFS LC-40", bounds.min, bounds.max);

        let scatter = expect_scatter(
            registry
                .dispatch(WidgetId::SuccessPayloadScatterChart, &db, &input)
                .unwrap(),
        );
        assert_eq!(scatter.points.len(), 26);
        assert!(scatter
            .points
            .iter()
            .all(|p| p.launch_site == "CCAFS LC-40"));

        let pie = expect_pie(registry.dispatch(WidgetId::SuccessPieChart, &db, &input).unwrap());
        assert_eq!(pie.slices.len(), 2);
        assert_eq!(pie.total(), 26);
    }

    #[test]
    fn pie_slice_counts_for_every_selection() {
        let registry = CallbackRegistry::dashboard();
        let db = fixture_db();
        let sites = db.query_launch_sites().unwrap();

        let all = expect_pie(registry
            .dispatch(WidgetId::SuccessPieChart, &db, &inputs("ALL", 0.0, 0.0))
            .unwrap());
        assert_eq!(all.slices.len(), sites.len());

        for site in &sites {
            let fig = expect_pie(registry
                .dispatch(WidgetId::SuccessPieChart, &db, &inputs(site, 0.0, 0.0))
                .unwrap());
            assert!(
                !fig.slices.is_empty() && fig.slices.len() <= 2,
                "Site {} should have one or two outcome slices",
                site
            );
        }
    }

    #[test]
    fn scatter_subset_matches_filter_for_many_ranges() {
        let registry = CallbackRegistry::dashboard();
        let db = fixture_db();
        let everything = db.query_launches(None, f64::MIN, f64::MAX).unwrap();

        let ranges = [
            (0.0, 10000.0),
            (0.0, 0.0),
            (500.0, 500.0),
            (1000.0, 4000.0),
            (3696.65, 3696.65),
            (9600.0, 10000.0),
            (4242.0, 4242.0),
        ];
        for site in ["ALL", "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E", "CCAFS SLC-40"] {
            for (low, high) in ranges {
                let input = inputs(site, low, high);
                let fig = expect_scatter(
                    registry
                        .dispatch(WidgetId::SuccessPayloadScatterChart, &db, &input)
                        .unwrap(),
                );
                let expected: Vec<_> = everything
                    .iter()
                    .filter(|r| input.payload_range.contains(r.payload_mass_kg))
                    .filter(|r| input.site.site().map_or(true, |s| r.launch_site == s))
                    .cloned()
                    .collect();
                assert_eq!(
                    fig.points, expected,
                    "site={} range=[{}, {}]",
                    site, low, high
                );
            }
        }
    }

    #[test]
    fn equal_bounds_select_exact_payload() {
        let registry = CallbackRegistry::dashboard();
        let db = fixture_db();
        let fig = expect_scatter(
            registry
                .dispatch(
                    WidgetId::SuccessPayloadScatterChart,
                    &db,
                    &inputs("ALL", 9600.0, 9600.0),
                )
                .unwrap(),
        );
        assert_eq!(fig.points.len(), 3);
        assert!(fig.points.iter().all(|p| p.payload_mass_kg == 9600.0));
    }

    #[test]
    fn unknown_site_yields_empty_figures() {
        let registry = CallbackRegistry::dashboard();
        let db = fixture_db();
        let input = inputs("", 0.0, 10000.0);
        let pie = expect_pie(registry.dispatch(WidgetId::SuccessPieChart, &db, &input).unwrap());
        assert!(pie.slices.is_empty());
        let scatter = expect_scatter(
            registry
                .dispatch(WidgetId::SuccessPayloadScatterChart, &db, &input)
                .unwrap(),
        );
        assert!(scatter.points.is_empty());
    }

    #[test]
    fn callbacks_are_idempotent() {
        let registry = CallbackRegistry::dashboard();
        let db = fixture_db();
        let input = inputs("KSC LC-39A", 2000.0, 6000.0);
        for output in registry.outputs().collect::<Vec<_>>() {
            let first = registry.dispatch(output, &db, &input).unwrap();
            let second = registry.dispatch(output, &db, &input).unwrap();
            assert_eq!(first, second, "{} should be idempotent", output);
        }
    }

    #[test]
    fn range_text_callback() {
        let registry = CallbackRegistry::dashboard();
        let db = fixture_db();
        let output = registry
            .dispatch(
                WidgetId::RangeSliderOutput,
                &db,
                &inputs("ALL", 500.0, 7500.0),
            )
            .unwrap();
        assert_eq!(
            output,
            CallbackOutput::Text("You have selected \"[500, 7500]\"".to_string())
        );
    }
}

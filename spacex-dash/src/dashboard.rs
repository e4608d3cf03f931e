//! A loaded dashboard: dataset, layout and callbacks together.

use crate::callbacks::{CallbackInputs, CallbackOutput, CallbackRegistry};
use crate::config::DashboardConfig;
use crate::layout::DashboardLayout;
use crate::widget::WidgetId;
use spacex_db::Database;

#[derive(Clone)]
pub struct Dashboard {
    pub db: Database,
    pub layout: DashboardLayout,
    pub registry: CallbackRegistry,
}

impl Dashboard {
    /// Load the launch CSV, build the layout and register the callbacks.
    ///
    /// Any failure here means the dashboard cannot be shown at all.
    pub fn load(csv_data: &str, config: &DashboardConfig) -> anyhow::Result<Self> {
        let db = Database::from_csv(csv_data)?;
        let layout = DashboardLayout::from_database(config, &db)?;
        Ok(Self {
            db,
            layout,
            registry: CallbackRegistry::dashboard(),
        })
    }

    /// Widget values the page starts with.
    pub fn initial_inputs(&self) -> CallbackInputs {
        CallbackInputs {
            site: self.layout.site_dropdown.value.clone(),
            payload_range: self.layout.payload_slider.value,
        }
    }

    pub fn dispatch(
        &self,
        output: WidgetId,
        inputs: &CallbackInputs,
    ) -> anyhow::Result<CallbackOutput> {
        self.registry.dispatch(output, &self.db, inputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{PayloadRange, SiteSelection};

    const LAUNCHES_CSV: &str = include_str!("../../fixtures/spacex_launch_dash.csv");

    #[test]
    fn load_fixture_dashboard() {
        let dashboard = Dashboard::load(LAUNCHES_CSV, &DashboardConfig::default()).unwrap();
        assert_eq!(dashboard.layout.site_dropdown.options.len(), 5);
        assert_eq!(
            dashboard.initial_inputs(),
            CallbackInputs {
                site: SiteSelection::All,
                payload_range: PayloadRange::new(0.0, 9600.0),
            }
        );
    }

    #[test]
    fn fixture_matches_four_site_layout() {
        let config = DashboardConfig {
            expected_site_count: Some(4),
            ..DashboardConfig::default()
        };
        assert!(Dashboard::load(LAUNCHES_CSV, &config).is_ok());
    }

    #[test]
    fn three_site_dataset_fails_four_site_layout() {
        let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,0,500.0,v1.0
VAFB SLC-4E,1,9600.0,FT
KSC LC-39A,1,2490.0,FT
";
        let config = DashboardConfig {
            expected_site_count: Some(4),
            ..DashboardConfig::default()
        };
        assert!(Dashboard::load(csv, &config).is_err());
        assert!(Dashboard::load(csv, &DashboardConfig::default()).is_ok());
    }

    #[test]
    fn missing_dataset_is_fatal() {
        assert!(Dashboard::load("", &DashboardConfig::default()).is_err());
    }

    #[test]
    fn header_only_dataset_is_fatal() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
        assert!(Dashboard::load(csv, &DashboardConfig::default()).is_err());
    }

    #[test]
    fn initial_text_shows_dataset_range() {
        let dashboard = Dashboard::load(LAUNCHES_CSV, &DashboardConfig::default()).unwrap();
        let output = dashboard
            .dispatch(WidgetId::RangeSliderOutput, &dashboard.initial_inputs())
            .unwrap();
        assert_eq!(
            output,
            CallbackOutput::Text("You have selected \"[0, 9600]\"".to_string())
        );
    }
}

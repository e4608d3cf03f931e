//! Declarative page layout, built once at startup from the loaded dataset.

use crate::config::DashboardConfig;
use crate::selection::{PayloadRange, SiteSelection, ALL_SITES};
use crate::widget::WidgetId;
use serde::Serialize;
use spacex_db::models::PayloadBounds;
use spacex_db::Database;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleBlock {
    pub text: String,
    pub text_align: String,
    pub color: String,
    pub font_size_px: u32,
}

impl TitleBlock {
    /// Inline CSS for the heading element.
    pub fn style(&self) -> String {
        format!(
            "text-align: {}; color: {}; font-size: {}px;",
            self.text_align, self.color, self.font_size_px
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteDropdown {
    pub id: WidgetId,
    pub options: Vec<DropdownOption>,
    pub value: SiteSelection,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: WidgetId,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Initial selection. Taken from the dataset and not clamped to `min..=max`.
    pub value: PayloadRange,
}

impl RangeSlider {
    /// Tick positions from `min` to `max` every `step`.
    pub fn marks(&self) -> Vec<f64> {
        let mut marks = Vec::new();
        let mut mark = self.min;
        while mark <= self.max {
            marks.push(mark);
            mark += self.step;
        }
        marks
    }
}

/// The dashboard page, top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardLayout {
    pub title: TitleBlock,
    pub site_dropdown: SiteDropdown,
    pub pie_chart: WidgetId,
    pub payload_slider: RangeSlider,
    pub range_output: WidgetId,
    pub scatter_chart: WidgetId,
}

impl DashboardLayout {
    /// Build the layout from the dataset's derived values.
    ///
    /// Dropdown options are "ALL" followed by every site in the order given.
    /// Fails when there are no sites, or when `config.expected_site_count` is
    /// set and does not match.
    pub fn build(
        config: &DashboardConfig,
        bounds: PayloadBounds,
        sites: &[String],
    ) -> anyhow::Result<Self> {
        config.validate()?;
        anyhow::ensure!(
            !sites.is_empty(),
            "cannot build the site dropdown: the dataset has no launch sites"
        );
        if let Some(expected) = config.expected_site_count {
            anyhow::ensure!(
                sites.len() == expected,
                "site dropdown expects {} launch sites but the dataset has {}",
                expected,
                sites.len()
            );
        }

        let options = std::iter::once(ALL_SITES)
            .chain(sites.iter().map(String::as_str))
            .map(|site| DropdownOption {
                label: site.to_string(),
                value: site.to_string(),
            })
            .collect();

        log::info!(
            "[Launch Dash] layout: {} sites, payload range [{}, {}]",
            sites.len(),
            bounds.min,
            bounds.max
        );

        Ok(Self {
            title: TitleBlock {
                text: config.title.clone(),
                text_align: "center".to_string(),
                color: config.title_color.clone(),
                font_size_px: config.title_font_size_px,
            },
            site_dropdown: SiteDropdown {
                id: WidgetId::SiteDropdown,
                options,
                value: SiteSelection::All,
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            pie_chart: WidgetId::SuccessPieChart,
            payload_slider: RangeSlider {
                id: WidgetId::PayloadSlider,
                label: "Payload range (Kg):".to_string(),
                min: config.slider_min,
                max: config.slider_max,
                step: config.slider_step,
                value: PayloadRange::from(bounds),
            },
            range_output: WidgetId::RangeSliderOutput,
            scatter_chart: WidgetId::SuccessPayloadScatterChart,
        })
    }

    /// Build the layout from a loaded database.
    pub fn from_database(config: &DashboardConfig, db: &Database) -> anyhow::Result<Self> {
        let bounds = db.query_payload_bounds()?;
        let sites = db.query_launch_sites()?;
        Self::build(config, bounds, &sites)
    }
}

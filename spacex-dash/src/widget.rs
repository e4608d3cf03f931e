//! Identifiers for the dashboard's widgets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a widget feeds callbacks or displays their results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetRole {
    Input,
    Output,
}

/// A named widget on the dashboard page. The serialized form is its DOM id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetId {
    #[serde(rename = "site-dropdown")]
    SiteDropdown,
    #[serde(rename = "success-pie-chart")]
    SuccessPieChart,
    #[serde(rename = "payload-slider")]
    PayloadSlider,
    #[serde(rename = "output-container-range-slider")]
    RangeSliderOutput,
    #[serde(rename = "success-payload-scatter-chart")]
    SuccessPayloadScatterChart,
}

impl WidgetId {
    pub const ALL: [WidgetId; 5] = [
        WidgetId::SiteDropdown,
        WidgetId::SuccessPieChart,
        WidgetId::PayloadSlider,
        WidgetId::RangeSliderOutput,
        WidgetId::SuccessPayloadScatterChart,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            WidgetId::SiteDropdown => "site-dropdown",
            WidgetId::SuccessPieChart => "success-pie-chart",
            WidgetId::PayloadSlider => "payload-slider",
            WidgetId::RangeSliderOutput => "output-container-range-slider",
            WidgetId::SuccessPayloadScatterChart => "success-payload-scatter-chart",
        }
    }

    pub fn role(self) -> WidgetRole {
        match self {
            WidgetId::SiteDropdown | WidgetId::PayloadSlider => WidgetRole::Input,
            WidgetId::SuccessPieChart
            | WidgetId::RangeSliderOutput
            | WidgetId::SuccessPayloadScatterChart => WidgetRole::Output,
        }
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

impl FromStr for WidgetId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WidgetId::ALL
            .into_iter()
            .find(|w| w.dom_id() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown widget id '{}'", s))
    }
}

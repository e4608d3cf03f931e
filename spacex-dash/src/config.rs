//! Dashboard configuration.
//!
//! Defaults reproduce the launch records dashboard as deployed. The CLI can
//! override them from a JSON file; any field left out keeps its default.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub title_color: String,
    pub title_font_size_px: u32,
    /// Selectable bounds of the payload slider, in kilograms.
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
    /// When set, the layout refuses datasets with a different number of sites.
    pub expected_site_count: Option<usize>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "SpaceX Launch Records Dashboard".to_string(),
            title_color: "#503D36".to_string(),
            title_font_size_px: 40,
            slider_min: 0.0,
            slider_max: 10000.0,
            slider_step: 1000.0,
            expected_site_count: None,
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON config and check it.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.slider_min <= self.slider_max,
            "slider_min ({}) must not exceed slider_max ({})",
            self.slider_min,
            self.slider_max
        );
        anyhow::ensure!(
            self.slider_step > 0.0,
            "slider_step must be positive, got {}",
            self.slider_step
        );
        Ok(())
    }
}

//! Chart figures produced by the dashboard callbacks.
//!
//! A figure is plain data: slices or points plus the labels the D3.js
//! renderers need. Building one only reads the database.

use crate::selection::{PayloadRange, SiteSelection};
use serde::Serialize;
use spacex_db::models::LaunchRecord;
use spacex_db::{columns, Database};

/// One pie slice.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: i64,
}

/// Pie chart of launch outcomes.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieFigure {
    pub title: String,
    /// Column whose values name the slices.
    pub names: String,
    /// Column summed into slice sizes; `None` means slices are row counts.
    pub values: Option<String>,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    /// Build the pie for a site selection.
    ///
    /// - "ALL": one slice per site, sized by that site's successful launches.
    /// - a site: one slice per outcome class at that site, sized by row count.
    ///   An unknown site gives a figure with no slices.
    pub fn for_site(db: &Database, site: &SiteSelection) -> anyhow::Result<Self> {
        match site {
            SiteSelection::All => {
                let slices = db
                    .query_success_by_site()?
                    .into_iter()
                    .map(|s| PieSlice {
                        label: s.launch_site,
                        value: s.successes,
                    })
                    .collect();
                Ok(Self {
                    title: "Total Success Launches By Site".to_string(),
                    names: columns::LAUNCH_SITE.to_string(),
                    values: Some(columns::CLASS.to_string()),
                    slices,
                })
            }
            SiteSelection::Site(name) => {
                let slices = db
                    .query_outcome_counts(name)?
                    .into_iter()
                    .map(|c| PieSlice {
                        label: c.class.to_string(),
                        value: c.launches,
                    })
                    .collect();
                Ok(Self {
                    title: format!("Total Success Launches for site {}", name),
                    names: columns::CLASS.to_string(),
                    values: None,
                    slices,
                })
            }
        }
    }

    pub fn total(&self) -> i64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// Scatter chart of payload mass against outcome class.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    /// Booster version categories in first-encountered order; one color each.
    pub categories: Vec<String>,
    pub points: Vec<LaunchRecord>,
}

impl ScatterFigure {
    /// Build the scatter for a site selection and payload range.
    ///
    /// Points are the launches with `low <= payload <= high`, restricted to the
    /// selected site unless it is "ALL". An empty subset yields a figure with
    /// no points.
    pub fn for_selection(
        db: &Database,
        site: &SiteSelection,
        range: &PayloadRange,
    ) -> anyhow::Result<Self> {
        let points = db.query_launches(site.site(), range.low, range.high)?;

        let mut categories: Vec<String> = Vec::new();
        for point in &points {
            if !categories.contains(&point.booster_version_category) {
                categories.push(point.booster_version_category.clone());
            }
        }

        let title = match site {
            SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
            SiteSelection::Site(name) => {
                format!("Correlation between Payload and Success for site {}", name)
            }
        };

        Ok(Self {
            title,
            x_label: columns::PAYLOAD_MASS_KG.to_string(),
            y_label: columns::CLASS.to_string(),
            color_label: columns::BOOSTER_VERSION_CATEGORY.to_string(),
            categories,
            points,
        })
    }
}

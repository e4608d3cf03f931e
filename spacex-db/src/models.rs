//! Query result model structs for launch data.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend.

use serde::Serialize;

/// One launch attempt as stored in the `launches` table.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LaunchRecord {
    pub flight_number: Option<i64>,
    pub launch_site: String,
    /// Outcome class: 1 = success, 0 = failure.
    pub class: u8,
    pub payload_mass_kg: f64,
    pub booster_version: Option<String>,
    /// Hardware family label, only used to color scatter points.
    pub booster_version_category: String,
}

/// Smallest and largest payload mass in the dataset, in kilograms.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

/// Number of successful launches attributed to one site.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SiteSuccessCount {
    pub launch_site: String,
    pub successes: i64,
}

/// Number of launches with a given outcome class.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutcomeCount {
    pub class: u8,
    pub launches: i64,
}

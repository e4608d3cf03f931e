//! Values carried by the dashboard's input widgets.

use serde::{Deserialize, Serialize};
use spacex_db::models::PayloadBounds;
use std::fmt;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Current value of the launch site dropdown.
///
/// Serializes as the raw dropdown value: `"ALL"` or the site name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// The selected site name, or `None` for "ALL".
    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(name) => f.write_str(name),
        }
    }
}

/// Current value of the payload range slider, in kilograms.
///
/// `low <= high` is maintained by the slider through [`with_low`](Self::with_low)
/// and [`with_high`](Self::with_high); callbacks do not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Inclusive on both ends.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }

    /// Move the lower thumb; it cannot pass the upper one.
    pub fn with_low(self, low: f64) -> Self {
        Self {
            low: low.min(self.high),
            high: self.high,
        }
    }

    /// Move the upper thumb; it cannot pass the lower one.
    pub fn with_high(self, high: f64) -> Self {
        Self {
            low: self.low,
            high: high.max(self.low),
        }
    }

    /// Confirmation line shown under the slider.
    ///
    /// Integral values print without a fractional part: `[500, 7500]`.
    pub fn describe(&self) -> String {
        format!("You have selected \"[{}, {}]\"", self.low, self.high)
    }
}

impl From<PayloadBounds> for PayloadRange {
    fn from(bounds: PayloadBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}

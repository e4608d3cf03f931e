//! Dioxus RSX components, one per widget in the dashboard layout.

mod chart_container;
mod dashboard_header;
mod error_display;
mod loading_spinner;
mod payload_range_slider;
mod range_display;
mod site_selector;

pub use chart_container::ChartContainer;
pub use dashboard_header::DashboardHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use payload_range_slider::PayloadRangeSlider;
pub use range_display::RangeDisplay;
pub use site_selector::SiteSelector;

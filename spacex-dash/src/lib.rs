//! Launch records dashboard logic, independent of any UI toolkit.
//!
//! - `selection`: values of the input widgets (site dropdown, payload slider)
//! - `figures`: pie and scatter chart figures
//! - `layout`: the declarative page, built once from the dataset
//! - `callbacks`: output widget → handler registration and dispatch
//! - `dashboard`: everything above loaded together
//!
//! The Dioxus app in `spacex-dashboard` and the `spacex-cli` tool are both
//! thin hosts around [`Dashboard`].

pub mod callbacks;
pub mod config;
pub mod dashboard;
pub mod figures;
pub mod layout;
pub mod selection;
pub mod widget;

pub use callbacks::{CallbackInputs, CallbackOutput, CallbackRegistry};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use layout::DashboardLayout;
pub use selection::{PayloadRange, SiteSelection};
pub use widget::WidgetId;

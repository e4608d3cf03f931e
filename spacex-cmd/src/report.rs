//! Report builders behind each subcommand.
//!
//! The `run_*` functions read files and return the text to print; the
//! `*_report` functions work on already loaded data so they can be tested
//! without touching the filesystem.

use anyhow::Context;
use log::info;
use spacex_dash::{
    CallbackInputs, CallbackOutput, Dashboard, DashboardConfig, PayloadRange, SiteSelection,
    WidgetId,
};
use spacex_db::Database;

fn read_file(path: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
}

fn load_config(path: Option<&str>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => {
            let json = read_file(path)?;
            DashboardConfig::from_json(&json)
                .with_context(|| format!("Invalid dashboard config in {}", path))
        }
        None => Ok(DashboardConfig::default()),
    }
}

pub fn run_summary(csv_path: &str) -> anyhow::Result<String> {
    let csv_data = read_file(csv_path)?;
    let db = Database::from_csv(&csv_data)
        .with_context(|| format!("Failed to load launches from {}", csv_path))?;
    info!("Loaded launch records from {}", csv_path);
    summary_report(&db)
}

pub fn run_layout(csv_path: &str, config_path: Option<&str>) -> anyhow::Result<String> {
    let config = load_config(config_path)?;
    let csv_data = read_file(csv_path)?;
    let dashboard = Dashboard::load(&csv_data, &config)
        .with_context(|| format!("Failed to build dashboard from {}", csv_path))?;
    layout_report(&dashboard)
}

pub fn run_dispatch(
    csv_path: &str,
    output: &str,
    site: &str,
    payload_low: Option<f64>,
    payload_high: Option<f64>,
) -> anyhow::Result<String> {
    let output: WidgetId = output.parse()?;
    let csv_data = read_file(csv_path)?;
    let dashboard = Dashboard::load(&csv_data, &DashboardConfig::default())
        .with_context(|| format!("Failed to build dashboard from {}", csv_path))?;
    dispatch_report(&dashboard, output, site, payload_low, payload_high)
}

/// Record count, payload bounds and sites, one per line.
pub fn summary_report(db: &Database) -> anyhow::Result<String> {
    let count = db.query_launch_count()?;
    let bounds = db.query_payload_bounds()?;
    let sites = db.query_success_by_site()?;

    let mut lines = vec![
        format!("Launches: {}", count),
        format!("Payload range (kg): [{}, {}]", bounds.min, bounds.max),
        format!("Launch sites: {}", sites.len()),
    ];
    for site in sites {
        lines.push(format!("  {} ({} successful)", site.launch_site, site.successes));
    }
    Ok(lines.join("\n"))
}

pub fn layout_report(dashboard: &Dashboard) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&dashboard.layout)?)
}

/// Run one callback. Payload bounds left unset fall back to the slider's
/// initial value, i.e. the dataset's range.
pub fn dispatch_report(
    dashboard: &Dashboard,
    output: WidgetId,
    site: &str,
    payload_low: Option<f64>,
    payload_high: Option<f64>,
) -> anyhow::Result<String> {
    let initial = dashboard.initial_inputs().payload_range;
    let inputs = CallbackInputs {
        site: SiteSelection::from(site),
        payload_range: PayloadRange::new(
            payload_low.unwrap_or(initial.low),
            payload_high.unwrap_or(initial.high),
        ),
    };

    match dashboard.dispatch(output, &inputs)? {
        CallbackOutput::Text(text) => Ok(text),
        figure => Ok(serde_json::to_string_pretty(&figure)?),
    }
}

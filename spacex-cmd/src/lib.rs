//! Command implementations for the launch dashboard CLI.
//!
//! Each subcommand loads a launch CSV the same way the dashboard does and
//! prints what the dashboard would show: derived values, the built layout,
//! or the output of a single callback.

use clap::Subcommand;

pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Print record count, payload bounds and launch sites
    Summary {
        /// Path to the launch records CSV
        #[arg(short = 'c', long)]
        csv: String,
    },

    /// Print the dashboard layout built from the dataset as JSON
    Layout {
        /// Path to the launch records CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Optional JSON file overriding the dashboard configuration
        #[arg(long)]
        config: Option<String>,
    },

    /// Run the callback bound to one output widget and print its output
    Dispatch {
        /// Path to the launch records CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// DOM id of the output widget (e.g. success-pie-chart)
        #[arg(short = 'o', long)]
        output: String,

        /// Selected launch site, or ALL
        #[arg(short = 's', long, default_value = "ALL")]
        site: String,

        /// Lower payload bound in kg (defaults to the dataset minimum)
        #[arg(long)]
        payload_low: Option<f64>,

        /// Upper payload bound in kg (defaults to the dataset maximum)
        #[arg(long)]
        payload_high: Option<f64>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let text = match command {
        Command::Summary { csv } => report::run_summary(&csv)?,
        Command::Layout { csv, config } => report::run_layout(&csv, config.as_deref())?,
        Command::Dispatch {
            csv,
            output,
            site,
            payload_low,
            payload_high,
        } => report::run_dispatch(&csv, &output, &site, payload_low, payload_high)?,
    };
    println!("{}", text);
    Ok(())
}

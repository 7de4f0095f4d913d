use super::commands::get_metric::GetMetricCommands;
use super::commands::list_metrics::ListMetricsCommands;
use super::commands::show::ShowCommands;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "azmetrics-cli")]
#[command(about = "A CLI tool for querying Azure Monitor metrics of Web Apps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the metric names available for a Web App
    ListMetrics(ListMetricsCommands),
    /// Query metric values for a Web App
    GetMetric(GetMetricCommands),
    /// Show the Web App resource
    Show(ShowCommands),
}

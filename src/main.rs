use anyhow::Result;
use clap::Parser;
use log::info;

mod api;
mod auth;
mod cli;

use cli::Cli;
use cli::app::Commands;
use cli::commands::{handle_get_metric_command, handle_list_metrics_command, handle_show_command};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting azmetrics-cli");

    match cli.command {
        Commands::ListMetrics(args) => handle_list_metrics_command(args).await,
        Commands::GetMetric(args) => handle_get_metric_command(args).await,
        Commands::Show(args) => handle_show_command(args).await,
    }
}

//! List the metric names Azure Monitor exposes for a Web App

use anyhow::{Context, Result};
use clap::Args;
use colored::*;

use super::{DisplayStyle, TargetArgs, connect};

#[derive(Args)]
pub struct ListMetricsCommands {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub async fn handle_list_metrics_command(args: ListMetricsCommands) -> Result<()> {
    let (client, scope) = connect(&args.target).await?;

    let response = client
        .list_metrics(&scope)
        .await
        .context("Failed to list metrics")?;

    // One name per line, in response order. An empty list is not an error.
    for name in response.metric_names() {
        println!("{}", name);
    }

    if matches!(args.target.style, DisplayStyle::Verbose) {
        for entry in &response.value {
            if let Some(unit) = &entry.unit {
                log::debug!("{}: unit {}", entry.name.value, unit);
            }
        }
    }

    println!(
        "{} Listed {} metrics for {}",
        "✓".green(),
        response.value.len(),
        scope.site_name.cyan()
    );

    Ok(())
}

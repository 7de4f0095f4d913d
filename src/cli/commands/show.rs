//! Fetch and print the Microsoft.Web/sites resource for a Web App

use anyhow::{Context, Result};
use clap::Args;
use colored::*;

use super::{DisplayStyle, TargetArgs, connect};

#[derive(Args)]
pub struct ShowCommands {
    #[command(flatten)]
    pub target: TargetArgs,
}

pub async fn handle_show_command(args: ShowCommands) -> Result<()> {
    let (client, scope) = connect(&args.target).await?;

    let site = client
        .get_site(&scope)
        .await
        .with_context(|| format!("Failed to fetch Web App '{}'", scope.site_name))?;

    if matches!(args.target.style, DisplayStyle::Verbose) {
        let plan = site
            .pointer("/properties/serverFarmId")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        let workers = site
            .pointer("/properties/siteConfig/numberOfWorkers")
            .and_then(|v| v.as_u64())
            .unwrap_or(1);
        println!("Plan: {}", plan.cyan());
        println!("Workers: {}", workers.to_string().bright_yellow());
        println!();
    }

    println!("{}", serde_json::to_string_pretty(&site)?);
    println!("{} Fetched {}", "✓".green(), scope.site_name.cyan());

    Ok(())
}

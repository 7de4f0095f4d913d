pub mod get_metric;
pub mod list_metrics;
pub mod show;

pub use get_metric::handle_get_metric_command;
pub use list_metrics::handle_list_metrics_command;
pub use show::handle_show_command;

use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::*;
use std::path::PathBuf;

use crate::api::{AuthClient, Cloud, MetricsClient, ResourceScope};
use crate::auth::Credentials;

/// Arguments shared by every subcommand: the target resource,
/// credential source and display options.
#[derive(Args)]
pub struct TargetArgs {
    /// Resource group containing the Web App
    #[arg(long, short = 'g', help = "Resource group name")]
    pub resource_group: String,

    /// Name of the Web App
    #[arg(long, short = 'a', help = "Web App name")]
    pub app: String,

    /// Azure cloud environment
    #[arg(long, default_value = "china", help = "Azure cloud environment")]
    pub cloud: CloudOpt,

    /// JSON config file holding an array of credential objects
    #[arg(long, help = "Path to JSON config file")]
    pub config: Option<PathBuf>,

    /// .env file with AZURE_* variables
    #[arg(long, help = "Path to .env file")]
    pub env_file: Option<String>,

    /// Display style
    #[arg(long, default_value = "minimal", help = "Display style")]
    pub style: DisplayStyle,

    /// Disable colored output
    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum CloudOpt {
    /// Azure China (21Vianet) cloud
    China,
    /// Azure public cloud
    Public,
}

impl CloudOpt {
    pub fn to_cloud(&self) -> Cloud {
        match self {
            CloudOpt::China => Cloud::China,
            CloudOpt::Public => Cloud::Public,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum DisplayStyle {
    /// Data only, no decorations (default)
    Minimal,
    /// Include cloud, endpoint and token details
    Verbose,
}

/// Resolve credentials, acquire a token and build an authorized client.
/// The token must exist before any data call is made.
pub async fn connect(args: &TargetArgs) -> Result<(MetricsClient, ResourceScope)> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let cloud = args.cloud.to_cloud();
    let credentials = Credentials::resolve(args.config.as_deref(), args.env_file.as_deref())?;

    if matches!(args.style, DisplayStyle::Verbose) {
        println!("Cloud: {}", format!("{:?}", cloud).bright_yellow());
        println!("Management endpoint: {}", cloud.management_base().cyan());
        println!("Subscription: {}", credentials.subscription_id.as_str().cyan());
        println!();
    }

    let token = AuthClient::new(cloud).acquire_token(&credentials).await?;
    println!("{} Access token acquired", "✓".green());

    let scope = ResourceScope {
        subscription_id: credentials.subscription_id,
        resource_group: args.resource_group.clone(),
        site_name: args.app.clone(),
    };
    let client = MetricsClient::new(cloud, token.access_token)?;

    Ok((client, scope))
}

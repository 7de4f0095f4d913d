//! Query metric values for a Web App and print the JSON response

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::*;
use std::fs;
use std::path::PathBuf;

use super::{DisplayStyle, TargetArgs, connect};
use crate::api::MetricsQuery;

#[derive(Args)]
pub struct GetMetricCommands {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Metric name to query (repeatable); omit to query without a filter
    #[arg(long = "metric", short = 'm', help = "Metric name to query")]
    pub metrics: Vec<String>,

    /// ISO8601 timespan (start/end)
    #[arg(long, help = "ISO8601 timespan, e.g. 2024-01-01T00:00:00Z/2024-01-02T00:00:00Z")]
    pub timespan: Option<String>,

    /// ISO8601 interval between data points
    #[arg(long, help = "ISO8601 interval, e.g. PT5M")]
    pub interval: Option<String>,

    /// Aggregation type
    #[arg(long, help = "Aggregation type, e.g. Average")]
    pub aggregation: Option<String>,

    /// Override the metrics api-version
    #[arg(long, help = "Metrics endpoint api-version")]
    pub api_version: Option<String>,

    /// Output format
    #[arg(long, default_value = "json", help = "Output format")]
    pub format: OutputFormat,

    /// Save results to file
    #[arg(short, long, help = "Save results to file")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON (default)
    Json,
    /// Compact JSON (no whitespace, for piping)
    JsonCompact,
}

pub async fn handle_get_metric_command(args: GetMetricCommands) -> Result<()> {
    let (client, scope) = connect(&args.target).await?;

    let query = MetricsQuery {
        metric_names: args.metrics.clone(),
        timespan: args.timespan.clone(),
        interval: args.interval.clone(),
        aggregation: args.aggregation.clone(),
        api_version: args.api_version.clone(),
    };

    if matches!(args.target.style, DisplayStyle::Verbose) && !args.metrics.is_empty() {
        println!("Metrics: {}", args.metrics.join(",").cyan());
    }

    let result = client
        .query_metrics(&scope, &query)
        .await
        .context("Failed to query metrics")?;

    let formatted_output = format_output(&result, &args.format)?;

    if let Some(output_path) = args.output {
        fs::write(&output_path, &formatted_output)
            .with_context(|| format!("Failed to write output to: {}", output_path.display()))?;
        println!(
            "{} Results saved to: {}",
            "✓".green(),
            output_path.display().to_string().bright_green()
        );
    } else {
        println!("{}", formatted_output);
    }

    Ok(())
}

/// Format the API body according to the requested output format
fn format_output(data: &serde_json::Value, format: &OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(data).context("Failed to format JSON output")
        }
        OutputFormat::JsonCompact => {
            serde_json::to_string(data).context("Failed to format JSON output")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_output_pretty() {
        let data = json!({"value": []});
        let output = format_output(&data, &OutputFormat::Json).unwrap();
        assert!(output.contains('\n'));
        assert!(output.contains("\"value\""));
    }

    #[test]
    fn test_format_output_compact() {
        let data = json!({"value": [{"name": {"value": "CpuTime"}}]});
        let output = format_output(&data, &OutputFormat::JsonCompact).unwrap();
        assert_eq!(output, r#"{"value":[{"name":{"value":"CpuTime"}}]}"#);
    }
}

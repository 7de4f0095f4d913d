use std::time::{Duration, SystemTime};

use serde::Deserialize;

use super::constants::API_VERSION_METRICS;

/// Coordinates of a single Web App resource
#[derive(Debug, Clone)]
pub struct ResourceScope {
    pub subscription_id: String,
    pub resource_group: String,
    pub site_name: String,
}

/// Token information for one invocation; never cached or persisted
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub access_token: String,
    pub expires_at: SystemTime,
}

/// Successful body of the OAuth2 token endpoint.
///
/// The v1 endpoint serializes `expires_in` as a decimal string while
/// other responses use a JSON number, so both are accepted.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    expires_in: Option<serde_json::Value>,
}

impl TokenResponse {
    /// Token lifetime in seconds, defaulting to one hour when absent
    pub fn expires_in_secs(&self) -> u64 {
        self.expires_in
            .as_ref()
            .and_then(|v| match v {
                serde_json::Value::Number(n) => n.as_u64(),
                serde_json::Value::String(s) => s.parse().ok(),
                _ => None,
            })
            .unwrap_or(3600)
    }

    pub fn into_token_info(self) -> TokenInfo {
        let expires_at = SystemTime::now() + Duration::from_secs(self.expires_in_secs());
        TokenInfo {
            access_token: self.access_token,
            expires_at,
        }
    }
}

/// Parameters of one metrics query
#[derive(Debug, Clone, Default)]
pub struct MetricsQuery {
    /// Metric names to filter on; empty means no `metricnames` parameter
    pub metric_names: Vec<String>,
    /// ISO8601 timespan, e.g. `2024-01-01T00:00:00Z/2024-01-01T01:00:00Z`
    pub timespan: Option<String>,
    /// ISO8601 duration between data points, e.g. `PT5M`
    pub interval: Option<String>,
    /// Aggregation type, e.g. `Average`
    pub aggregation: Option<String>,
    /// Override of the default metrics api-version
    pub api_version: Option<String>,
}

impl MetricsQuery {
    /// Query parameters in the order the management API documents them
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![(
            "api-version",
            self.api_version
                .clone()
                .unwrap_or_else(|| API_VERSION_METRICS.to_string()),
        )];
        if !self.metric_names.is_empty() {
            params.push(("metricnames", self.metric_names.join(",")));
        }
        if let Some(timespan) = &self.timespan {
            params.push(("timespan", timespan.clone()));
        }
        if let Some(interval) = &self.interval {
            params.push(("interval", interval.clone()));
        }
        if let Some(aggregation) = &self.aggregation {
            params.push(("aggregation", aggregation.clone()));
        }
        params
    }
}

/// Azure Monitor metrics list response
#[derive(Debug, Deserialize)]
pub struct MetricsResponse {
    #[serde(default)]
    pub value: Vec<MetricEntry>,
}

/// One metric descriptor from the `value` array
#[derive(Debug, Deserialize)]
pub struct MetricEntry {
    pub name: MetricName,
    #[serde(default)]
    pub unit: Option<String>,
}

/// Localized metric name pair as returned by microsoft.insights
#[derive(Debug, Deserialize)]
pub struct MetricName {
    pub value: String,
    #[serde(rename = "localizedValue", default)]
    pub localized_value: Option<String>,
}

impl MetricsResponse {
    /// Metric names in response order
    pub fn metric_names(&self) -> Vec<&str> {
        self.value.iter().map(|m| m.name.value.as_str()).collect()
    }
}

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use serde_json::Value;

use super::constants::{self, API_VERSION_SITES, Cloud, headers};
use super::models::{MetricsQuery, MetricsResponse, ResourceScope};

/// Azure management-plane client with connection pooling
pub struct MetricsClient {
    management_base: String,
    http_client: reqwest::Client,
    access_token: String,
}

impl MetricsClient {
    pub fn new(cloud: Cloud, access_token: String) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("azmetrics-cli/0.1")
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            management_base: cloud.management_base().to_string(),
            http_client,
            access_token,
        })
    }

    /// List the metric descriptors Azure Monitor exposes for a Web App
    pub async fn list_metrics(&self, scope: &ResourceScope) -> Result<MetricsResponse> {
        let url = constants::site_metrics_endpoint(&self.management_base, scope);
        let params = MetricsQuery::default().to_query_params();
        let body = self.get(&url, &params).await?;
        serde_json::from_value(body).context("Unexpected shape of metrics list response")
    }

    /// Query metric values for a Web App, returning the raw JSON body
    pub async fn query_metrics(&self, scope: &ResourceScope, query: &MetricsQuery) -> Result<Value> {
        let url = constants::site_metrics_endpoint(&self.management_base, scope);
        let params = query.to_query_params();
        self.get(&url, &params).await
    }

    /// Fetch the Microsoft.Web/sites resource itself
    pub async fn get_site(&self, scope: &ResourceScope) -> Result<Value> {
        let url = constants::site_endpoint(&self.management_base, scope);
        let params = [("api-version", API_VERSION_SITES.to_string())];
        self.get(&url, &params).await
    }

    /// One bearer-authorized GET. Non-2xx statuses are errors carrying
    /// the status and the error body text.
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<Value> {
        debug!("GET {}", url);

        let response = self
            .http_client
            .get(url)
            .bearer_auth(&self.access_token)
            .header("Accept", headers::CONTENT_TYPE_JSON)
            .query(params)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        debug!("Response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("API request failed with {}: {}", status, error_text);
        }

        response
            .json()
            .await
            .context("API response was not valid JSON")
    }
}

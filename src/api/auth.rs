use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;

use super::constants::{self, Cloud};
use super::models::{TokenInfo, TokenResponse};
use crate::auth::Credentials;

/// Client for the Azure AD OAuth2 client-credentials flow
pub struct AuthClient {
    client: Client,
    login_base: String,
    resource: String,
}

impl AuthClient {
    pub fn new(cloud: Cloud) -> Self {
        Self {
            client: Client::new(),
            login_base: cloud.login_base().to_string(),
            resource: cloud.management_resource().to_string(),
        }
    }

    /// Acquire a management-plane bearer token for the given credentials.
    ///
    /// One POST, no retry. A non-2xx status or a body without an
    /// `access_token` field are both terminal failures.
    pub async fn acquire_token(&self, credentials: &Credentials) -> Result<TokenInfo> {
        let token_url = constants::token_endpoint(&self.login_base, &credentials.tenant_id);
        debug!(
            "Requesting token from {} with client_id {}",
            token_url, credentials.client_id
        );

        let response = self
            .client
            .post(&token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", &credentials.client_id),
                ("client_secret", &credentials.client_secret),
                ("resource", &self.resource),
            ])
            .send()
            .await
            .context("Token request failed to reach the login endpoint")?;

        debug!("Token request status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Token request failed with {}: {}", status, error_text);
        }

        let token: TokenResponse = response
            .json()
            .await
            .context("Token response did not contain an access_token")?;

        debug!("Access token obtained, expires in {}s", token.expires_in_secs());
        Ok(token.into_token_info())
    }
}

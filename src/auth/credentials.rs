use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::path::Path;

/// Service-principal credentials for the client-credentials flow.
/// Opaque strings, checked only for presence.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub subscription_id: String,
}

/// One element of the JSON config array
#[derive(Debug, Deserialize)]
struct ConfigEntry {
    tenant_id: String,
    client_id: String,
    client_secret: String,
    subscription_id: String,
}

impl Credentials {
    /// Resolve credentials from the first available source: an explicit
    /// JSON config file, an explicit .env file, or the process environment.
    pub fn resolve(config: Option<&Path>, env_file: Option<&str>) -> Result<Credentials> {
        if let Some(path) = config {
            Self::from_config_file(path)
        } else if let Some(path) = env_file {
            Self::from_env_file(path)
        } else {
            Self::from_env()
        }
    }

    pub fn from_env() -> Result<Credentials> {
        info!("Importing credentials from environment variables");

        let tenant_id = std::env::var("AZURE_TENANT_ID")
            .map_err(|_| anyhow::anyhow!("AZURE_TENANT_ID environment variable not set"))?;
        let client_id = std::env::var("AZURE_CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("AZURE_CLIENT_ID environment variable not set"))?;
        let client_secret = std::env::var("AZURE_CLIENT_SECRET")
            .map_err(|_| anyhow::anyhow!("AZURE_CLIENT_SECRET environment variable not set"))?;
        let subscription_id = std::env::var("AZURE_SUBSCRIPTION_ID")
            .map_err(|_| anyhow::anyhow!("AZURE_SUBSCRIPTION_ID environment variable not set"))?;

        Ok(Credentials {
            tenant_id,
            client_id,
            client_secret,
            subscription_id,
        })
    }

    pub fn from_env_file(path: &str) -> Result<Credentials> {
        info!("Importing credentials from .env file: {}", path);

        if !Path::new(path).exists() {
            anyhow::bail!("Environment file not found: {}", path);
        }

        dotenvy::from_path(path)
            .map_err(|e| anyhow::anyhow!("Failed to load .env file '{}': {}", path, e))?;

        let tenant_id = std::env::var("AZURE_TENANT_ID")
            .map_err(|_| anyhow::anyhow!("AZURE_TENANT_ID not found in .env file: {}", path))?;
        let client_id = std::env::var("AZURE_CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("AZURE_CLIENT_ID not found in .env file: {}", path))?;
        let client_secret = std::env::var("AZURE_CLIENT_SECRET")
            .map_err(|_| anyhow::anyhow!("AZURE_CLIENT_SECRET not found in .env file: {}", path))?;
        let subscription_id = std::env::var("AZURE_SUBSCRIPTION_ID")
            .map_err(|_| anyhow::anyhow!("AZURE_SUBSCRIPTION_ID not found in .env file: {}", path))?;

        Ok(Credentials {
            tenant_id,
            client_id,
            client_secret,
            subscription_id,
        })
    }

    /// Load from a JSON file holding an array of credential objects;
    /// only the first element is used.
    pub fn from_config_file(path: &Path) -> Result<Credentials> {
        info!("Importing credentials from config file: {}", path.display());

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse_config(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn parse_config(contents: &str) -> Result<Credentials> {
        let entries: Vec<ConfigEntry> =
            serde_json::from_str(contents).context("Config file is not a JSON array")?;
        let entry = entries
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Config array is empty"))?;

        Ok(Credentials {
            tenant_id: entry.tenant_id,
            client_id: entry.client_id,
            client_secret: entry.client_secret,
            subscription_id: entry.subscription_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_uses_first_element() {
        let contents = r#"[
            {"tenant_id":"t","client_id":"c","client_secret":"s","subscription_id":"sub"},
            {"tenant_id":"t2","client_id":"c2","client_secret":"s2","subscription_id":"sub2"}
        ]"#;
        let credentials = Credentials::parse_config(contents).unwrap();
        assert_eq!(credentials.tenant_id, "t");
        assert_eq!(credentials.client_id, "c");
        assert_eq!(credentials.client_secret, "s");
        assert_eq!(credentials.subscription_id, "sub");
    }

    #[test]
    fn test_parse_config_empty_array() {
        let result = Credentials::parse_config("[]");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_parse_config_not_an_array() {
        let contents = r#"{"tenant_id":"t"}"#;
        assert!(Credentials::parse_config(contents).is_err());
    }

    #[test]
    fn test_parse_config_missing_key() {
        let contents = r#"[{"tenant_id":"t","client_id":"c","client_secret":"s"}]"#;
        assert!(Credentials::parse_config(contents).is_err());
    }
}

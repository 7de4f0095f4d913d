use anyhow::Result;
use azmetrics_cli::api::{AuthClient, Cloud};
use azmetrics_cli::auth::Credentials;

#[tokio::test]
#[ignore] // Requires real service-principal credentials in the environment
async fn test_acquire_token_with_real_credentials() -> Result<()> {
    let credentials = Credentials::from_env()?;

    let token = AuthClient::new(Cloud::China)
        .acquire_token(&credentials)
        .await?;
    assert!(!token.access_token.is_empty());

    Ok(())
}

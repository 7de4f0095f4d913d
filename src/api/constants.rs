//! API constants and endpoint construction for the Azure management plane

use super::models::ResourceScope;

/// Default api-version for the Azure Monitor metrics endpoint
pub const API_VERSION_METRICS: &str = "2023-10-01";

/// Default api-version for the Microsoft.Web/sites resource endpoint
pub const API_VERSION_SITES: &str = "2024-04-01";

/// Azure cloud environment selecting the login and management endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cloud {
    /// Azure China (21Vianet) sovereign cloud
    China,
    /// Azure public (global) cloud
    Public,
}

impl Cloud {
    /// Base URL of the Azure AD token service for this cloud
    pub fn login_base(&self) -> &'static str {
        match self {
            Cloud::China => "https://login.partner.microsoftonline.cn",
            Cloud::Public => "https://login.microsoftonline.com",
        }
    }

    /// Base URL of the Azure Resource Manager endpoint for this cloud
    pub fn management_base(&self) -> &'static str {
        match self {
            Cloud::China => "https://management.chinacloudapi.cn",
            Cloud::Public => "https://management.azure.com",
        }
    }

    /// OAuth2 `resource` audience for management-plane tokens
    pub fn management_resource(&self) -> &'static str {
        self.management_base()
    }
}

/// Standard headers for management-plane requests
pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json";
}

/// Build the OAuth2 token endpoint URL for a tenant
pub fn token_endpoint(login_base: &str, tenant_id: &str) -> String {
    format!("{}/{}/oauth2/token", login_base, urlencoding::encode(tenant_id))
}

/// Build the base Microsoft.Web/sites resource URL for a Web App
pub fn site_endpoint(management_base: &str, scope: &ResourceScope) -> String {
    format!(
        "{}/subscriptions/{}/resourceGroups/{}/providers/Microsoft.Web/sites/{}",
        management_base,
        urlencoding::encode(&scope.subscription_id),
        urlencoding::encode(&scope.resource_group),
        urlencoding::encode(&scope.site_name),
    )
}

/// Build the Azure Monitor metrics URL for a Web App
pub fn site_metrics_endpoint(management_base: &str, scope: &ResourceScope) -> String {
    format!(
        "{}/providers/microsoft.insights/metrics",
        site_endpoint(management_base, scope)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> ResourceScope {
        ResourceScope {
            subscription_id: "sub-123".to_string(),
            resource_group: "my-rg".to_string(),
            site_name: "my-app".to_string(),
        }
    }

    #[test]
    fn test_token_endpoint_china() {
        assert_eq!(
            token_endpoint(Cloud::China.login_base(), "11111111-2222-3333-4444-555555555555"),
            "https://login.partner.microsoftonline.cn/11111111-2222-3333-4444-555555555555/oauth2/token"
        );
    }

    #[test]
    fn test_site_endpoint() {
        assert_eq!(
            site_endpoint(Cloud::China.management_base(), &scope()),
            "https://management.chinacloudapi.cn/subscriptions/sub-123/resourceGroups/my-rg/providers/Microsoft.Web/sites/my-app"
        );
    }

    #[test]
    fn test_site_metrics_endpoint() {
        assert_eq!(
            site_metrics_endpoint(Cloud::Public.management_base(), &scope()),
            "https://management.azure.com/subscriptions/sub-123/resourceGroups/my-rg/providers/Microsoft.Web/sites/my-app/providers/microsoft.insights/metrics"
        );
    }

    #[test]
    fn test_path_segments_are_percent_encoded() {
        let scope = ResourceScope {
            subscription_id: "sub 123".to_string(),
            resource_group: "rg/with/slashes".to_string(),
            site_name: "app#1".to_string(),
        };
        let url = site_endpoint(Cloud::Public.management_base(), &scope);
        assert!(url.contains("sub%20123"));
        assert!(url.contains("rg%2Fwith%2Fslashes"));
        assert!(url.contains("app%231"));
    }

    #[test]
    fn test_management_resource_matches_base() {
        assert_eq!(
            Cloud::China.management_resource(),
            "https://management.chinacloudapi.cn"
        );
        assert_eq!(Cloud::Public.management_resource(), "https://management.azure.com");
    }
}

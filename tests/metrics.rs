use azmetrics_cli::api::constants::{self, Cloud};
use azmetrics_cli::api::{MetricsQuery, MetricsResponse, ResourceScope};

fn scope() -> ResourceScope {
    ResourceScope {
        subscription_id: "00000000-0000-0000-0000-000000000000".to_string(),
        resource_group: "prod-rg".to_string(),
        site_name: "shop-frontend".to_string(),
    }
}

#[test]
fn test_metrics_url_matches_management_api_shape() {
    let url = constants::site_metrics_endpoint(Cloud::China.management_base(), &scope());
    assert_eq!(
        url,
        "https://management.chinacloudapi.cn/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/prod-rg/providers/Microsoft.Web/sites/shop-frontend/providers/microsoft.insights/metrics"
    );

    let query = MetricsQuery {
        metric_names: vec!["CpuPercentage".to_string()],
        ..Default::default()
    };
    assert_eq!(
        query.to_query_params(),
        vec![
            ("api-version", "2023-10-01".to_string()),
            ("metricnames", "CpuPercentage".to_string()),
        ]
    );
}

#[test]
fn test_parse_metrics_response_with_timeseries() {
    let body = r#"{
        "value": [
            {
                "name": {"value": "CpuTime", "localizedValue": "CPU Time"},
                "unit": "Seconds",
                "timeseries": [
                    {"data": [{"timeStamp": "2024-01-01T00:00:00Z", "average": 1.5}]}
                ]
            },
            {
                "name": {"value": "Requests"},
                "unit": "Count"
            }
        ]
    }"#;

    let response: MetricsResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.metric_names(), vec!["CpuTime", "Requests"]);
    assert_eq!(response.value[0].unit.as_deref(), Some("Seconds"));
    assert_eq!(
        response.value[0].name.localized_value.as_deref(),
        Some("CPU Time")
    );
}

#[test]
fn test_parse_metrics_response_without_value_array() {
    // Some error-shaped bodies omit `value` entirely; the projection
    // treats that the same as an empty list.
    let response: MetricsResponse = serde_json::from_str("{}").unwrap();
    assert!(response.metric_names().is_empty());
}

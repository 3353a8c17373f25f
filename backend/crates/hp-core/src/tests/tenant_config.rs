use crate::tests::set_of;
use crate::{CoreError, TenantConfig, UseCase};

use serde_json::json;

#[test]
fn given_camel_case_body_when_parsed_then_all_fields_read() {
    // Given
    let body = json!({
        "tenantId": "acme",
        "displayName": "Acme Health",
        "accentColor": "#2155CD",
        "selectedUseCase": ["Member Dashboard", "Healthcare Price Transparency"]
    });

    // When
    let config = TenantConfig::from_json(&body).unwrap();

    // Then
    assert_eq!(config.tenant_id.as_deref(), Some("acme"));
    assert_eq!(config.display_name.as_deref(), Some("Acme Health"));
    assert_eq!(config.accent_color.as_deref(), Some("#2155CD"));
    assert_eq!(
        config.use_cases,
        set_of(&[UseCase::MemberDashboard, UseCase::HealthcarePriceTransparency])
    );
}

#[test]
fn given_legacy_single_string_body_when_parsed_then_single_use_case() {
    let body = json!({ "name": "Legacy", "selectedUseCase": "Healthcare Underwriter Dashboard" });

    let config = TenantConfig::from_json(&body).unwrap();

    assert_eq!(config.display_name.as_deref(), Some("Legacy"));
    assert_eq!(
        config.use_cases,
        set_of(&[UseCase::HealthcareUnderwriterDashboard])
    );
}

#[test]
fn given_body_without_selector_when_parsed_then_empty_set() {
    let body = json!({ "id": "t-1" });

    let config = TenantConfig::from_json(&body).unwrap();

    assert!(config.use_cases.is_empty());
    assert_eq!(config.accent_color, None);
}

#[test]
fn given_non_string_metadata_when_parsed_then_ignored() {
    let body = json!({ "tenantId": 12, "color": ["red"], "useCases": ["Member Dashboard"] });

    let config = TenantConfig::from_json(&body).unwrap();

    assert_eq!(config.tenant_id, None);
    assert_eq!(config.accent_color, None);
    assert_eq!(config.use_cases, set_of(&[UseCase::MemberDashboard]));
}

#[test]
fn given_array_body_when_parsed_then_invalid_config_error() {
    let result = TenantConfig::from_json(&json!(["Member Dashboard"]));

    assert!(matches!(result, Err(CoreError::InvalidTenantConfig { .. })));
}

#[test]
fn given_malformed_bytes_when_parsed_then_parse_error() {
    let result = TenantConfig::from_slice(b"{not json");

    assert!(matches!(result, Err(CoreError::TenantConfigParse { .. })));
}

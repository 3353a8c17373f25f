use crate::{CoreError, Result as CoreErrorResult, UseCaseSelector, UseCaseSet};

use serde::Serialize;
use serde_json::{Map, Value};

const TENANT_ID_KEYS: &[&str] = &["tenantId", "tenant_id", "id"];
const DISPLAY_NAME_KEYS: &[&str] = &["displayName", "display_name", "name"];
const ACCENT_COLOR_KEYS: &[&str] = &["accentColor", "accent_color", "color"];
const SELECTOR_KEYS: &[&str] = &["selectedUseCase", "selectedUseCases", "useCases", "use_cases"];

/// Tenant configuration as returned by the tenant API, with the use-case
/// selector already normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TenantConfig {
    pub tenant_id: Option<String>,
    pub display_name: Option<String>,
    pub accent_color: Option<String>,
    pub use_cases: UseCaseSet,
}

impl TenantConfig {
    /// Parse a raw response body.
    #[track_caller]
    pub fn from_slice(body: &[u8]) -> CoreErrorResult<Self> {
        let value: Value = serde_json::from_slice(body).map_err(CoreError::from_json)?;
        Self::from_json(&value)
    }

    /// Build from a decoded JSON document. The document must be an object;
    /// metadata fields that are not strings are ignored.
    #[track_caller]
    pub fn from_json(value: &Value) -> CoreErrorResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            CoreError::invalid_tenant_config("tenant configuration must be a JSON object")
        })?;

        let selector = UseCaseSelector::from_value(first_present(object, SELECTOR_KEYS));

        Ok(Self {
            tenant_id: first_string(object, TENANT_ID_KEYS),
            display_name: first_string(object, DISPLAY_NAME_KEYS),
            accent_color: first_string(object, ACCENT_COLOR_KEYS),
            use_cases: selector.normalize(),
        })
    }
}

fn first_present<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

fn first_string(object: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| object.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .map(String::from)
}


use crate::IdentityClaims;

use serde_json::{Map, Value};

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub(crate) fn claims_with(org_name: Option<&str>, extra: &[(&str, Value)]) -> IdentityClaims {
    let now = chrono::Utc::now().timestamp();
    let mut map = Map::new();
    for (key, value) in extra {
        map.insert((*key).to_string(), value.clone());
    }

    IdentityClaims {
        sub: "auth0|user-123".to_string(),
        exp: now + 3600,
        iat: now,
        email: Some("user@example.com".to_string()),
        name: None,
        org_name: org_name.map(String::from),
        extra: map,
    }
}

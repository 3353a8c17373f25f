#![allow(dead_code)]

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Map, Value, json};

/// Default JWT secret for all tests (HS256 requires at least 32 bytes)
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-integration-tests-min-32-bytes-long";

/// ID token for `sub` in organization `org` (no `org_name` claim when `None`)
pub fn create_id_token(sub: &str, org: Option<&str>, extra: Value) -> String {
    create_id_token_at(sub, org, extra, 3600)
}

/// ID token that expired an hour ago (well outside the validator's leeway)
pub fn create_expired_id_token(sub: &str, org: Option<&str>) -> String {
    create_id_token_at(sub, org, json!({}), -3600)
}

fn create_id_token_at(sub: &str, org: Option<&str>, extra: Value, expires_in: i64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs() as i64;

    let mut claims = Map::new();
    claims.insert("sub".into(), json!(sub));
    claims.insert("iat".into(), json!(now));
    claims.insert("exp".into(), json!(now + expires_in));
    claims.insert("email".into(), json!(format!("{sub}@example.com")));
    if let Some(org) = org {
        claims.insert("org_name".into(), json!(org));
    }
    if let Value::Object(extra) = extra {
        claims.extend(extra);
    }

    encode(
        &Header::default(), // HS256 by default
        &Value::Object(claims),
        &EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("Failed to encode JWT")
}

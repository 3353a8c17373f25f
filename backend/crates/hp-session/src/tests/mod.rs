
use crate::{PortalSession, SessionSettings};

use std::sync::Arc;

use async_trait::async_trait;
use hp_auth::IdentityClaims;
use hp_core::{TenantConfig, UseCase, UseCaseSet};
use hp_tenant::{Result as TenantResult, TenantConfigSource, TenantError};
use serde_json::{Map, Value};

/// Source answering every organization with a fixed set, or a 500.
pub(crate) struct FixedSource(pub Option<Vec<UseCase>>);

#[async_trait]
impl TenantConfigSource for FixedSource {
    async fn fetch(&self, org_id: &str) -> TenantResult<TenantConfig> {
        match &self.0 {
            Some(use_cases) => Ok(TenantConfig {
                tenant_id: Some(format!("{org_id}-tenant")),
                display_name: Some(org_id.to_string()),
                use_cases: use_cases.iter().copied().collect::<UseCaseSet>(),
                ..TenantConfig::default()
            }),
            None => Err(TenantError::status(500, format!("http://tenant.test/retrieve/{org_id}"))),
        }
    }
}

pub(crate) fn session_with(use_cases: Option<&[UseCase]>) -> PortalSession {
    session_with_settings(use_cases, SessionSettings::default())
}

pub(crate) fn session_with_settings(
    use_cases: Option<&[UseCase]>,
    settings: SessionSettings,
) -> PortalSession {
    let source = Arc::new(FixedSource(use_cases.map(<[UseCase]>::to_vec)));
    PortalSession::new(Arc::new(settings), source)
}

pub(crate) fn claims_for(org_name: Option<&str>, extra: &[(&str, Value)]) -> IdentityClaims {
    let mut map = Map::new();
    for (key, value) in extra {
        map.insert((*key).to_string(), value.clone());
    }

    IdentityClaims {
        sub: "auth0|visitor-1".to_string(),
        exp: 4_102_444_800,
        iat: 1_700_000_000,
        email: Some("visitor@example.com".to_string()),
        name: Some("Pat Visitor".to_string()),
        org_name: org_name.map(String::from),
        extra: map,
    }
}

/// Drive a session from first visit through tenant application.
pub(crate) async fn signed_in(session: &mut PortalSession, first_path: &str, org: &str) {
    let nonce = match session.visit(first_path) {
        crate::ShellView::StartLogin { nonce } => nonce,
        other => panic!("expected StartLogin, got {other:?}"),
    };
    let ticket = session
        .complete_login(&nonce, claims_for(Some(org), &[]))
        .unwrap();
    let resolution = session.resolver().resolve(&ticket.org_id).await;
    session.apply_tenant(&ticket, resolution);
}

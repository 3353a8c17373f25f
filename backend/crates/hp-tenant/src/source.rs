use crate::Result as TenantResult;

use async_trait::async_trait;
use hp_core::TenantConfig;

/// Anything that can produce a tenant configuration for an organization.
#[async_trait]
pub trait TenantConfigSource: Send + Sync {
    async fn fetch(&self, org_id: &str) -> TenantResult<TenantConfig>;
}

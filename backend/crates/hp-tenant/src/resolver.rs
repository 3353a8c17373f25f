use crate::{TenantConfigSource, TenantError, TenantResolution};

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use log::{info, warn};
use tokio::sync::Mutex;

type PendingResolution = Shared<BoxFuture<'static, TenantResolution>>;

/// Memoizing front for a [`TenantConfigSource`].
///
/// Each organization id maps to one shared future. Concurrent callers for the
/// same id await that future instead of issuing a second request, and once it
/// settles every later call returns the same result until [`retry`] is used.
///
/// [`retry`]: TenantResolver::retry
pub struct TenantResolver {
    source: Arc<dyn TenantConfigSource>,
    timeout: Duration,
    entries: Mutex<HashMap<String, PendingResolution>>,
}

impl TenantResolver {
    pub fn new(source: Arc<dyn TenantConfigSource>, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve the tenant configuration for `org_id`. Never fails; errors are
    /// folded into the returned [`TenantResolution`].
    pub async fn resolve(&self, org_id: &str) -> TenantResolution {
        let pending = {
            let mut entries = self.entries.lock().await;
            entries
                .entry(org_id.to_string())
                .or_insert_with(|| self.start(org_id))
                .clone()
        };

        pending.await
    }

    /// Drop a settled result for `org_id` and resolve again.
    ///
    /// A fetch that is still in flight is joined rather than restarted.
    pub async fn retry(&self, org_id: &str) -> TenantResolution {
        {
            let mut entries = self.entries.lock().await;
            let settled = entries
                .get(org_id)
                .is_some_and(|pending| pending.peek().is_some());
            if settled {
                entries.remove(org_id);
            }
        }

        self.resolve(org_id).await
    }

    /// Settled result for `org_id`, if any.
    pub async fn cached(&self, org_id: &str) -> Option<TenantResolution> {
        let entries = self.entries.lock().await;
        entries.get(org_id).and_then(|pending| pending.peek().cloned())
    }

    fn start(&self, org_id: &str) -> PendingResolution {
        let source = Arc::clone(&self.source);
        let timeout = self.timeout;
        let org_id = org_id.to_string();

        async move {
            match tokio::time::timeout(timeout, source.fetch(&org_id)).await {
                Ok(Ok(config)) => {
                    info!(
                        "Tenant configuration for '{}' resolved: {} use case(s)",
                        org_id,
                        config.use_cases.len()
                    );
                    TenantResolution::loaded(config)
                }
                Ok(Err(e)) => {
                    warn!("Tenant configuration for '{org_id}' failed: {e}");
                    TenantResolution::failed(e.to_string())
                }
                Err(_) => {
                    let e = TenantError::timeout(&org_id, timeout);
                    warn!("{e}");
                    TenantResolution::failed(e.to_string())
                }
            }
        }
        .boxed()
        .shared()
    }
}

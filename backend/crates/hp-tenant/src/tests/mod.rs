
use crate::{Result as TenantResult, TenantConfigSource, TenantError};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use hp_core::{TenantConfig, UseCase, UseCaseSet};

/// In-memory source that counts calls and can be told to fail or stall.
pub(crate) struct CountingSource {
    pub calls: AtomicUsize,
    pub delay: Duration,
    pub failures_remaining: AtomicUsize,
    pub use_cases: Vec<UseCase>,
}

impl CountingSource {
    pub(crate) fn new(use_cases: &[UseCase]) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            failures_remaining: AtomicUsize::new(0),
            use_cases: use_cases.to_vec(),
        })
    }

    pub(crate) fn slow(use_cases: &[UseCase], delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay,
            failures_remaining: AtomicUsize::new(0),
            use_cases: use_cases.to_vec(),
        })
    }

    pub(crate) fn failing_once(use_cases: &[UseCase]) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay: Duration::ZERO,
            failures_remaining: AtomicUsize::new(1),
            use_cases: use_cases.to_vec(),
        })
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TenantConfigSource for CountingSource {
    async fn fetch(&self, _org_id: &str) -> TenantResult<TenantConfig> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let failing = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failing {
            return Err(TenantError::status(500, "http://tenant.test/retrieve/acme"));
        }

        Ok(TenantConfig {
            use_cases: self.use_cases.iter().copied().collect::<UseCaseSet>(),
            ..TenantConfig::default()
        })
    }
}

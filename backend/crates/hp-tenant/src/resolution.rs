use hp_core::{TenantConfig, UseCaseSet};

use serde::Serialize;

/// Settled outcome of resolving an organization's tenant configuration.
///
/// A failed fetch is not fatal: it yields an empty use-case set together with
/// a message the portal can show next to the "no modules enabled" view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TenantResolution {
    pub config: Option<TenantConfig>,
    pub use_cases: UseCaseSet,
    pub error: Option<String>,
}

impl TenantResolution {
    pub fn loaded(config: TenantConfig) -> Self {
        Self {
            use_cases: config.use_cases.clone(),
            config: Some(config),
            error: None,
        }
    }

    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self {
            config: None,
            use_cases: UseCaseSet::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

use crate::UseCase;

use serde::Serialize;

/// A protected route registered for an enabled use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub use_case: UseCase,
    pub path: &'static str,
}

impl From<UseCase> for RouteEntry {
    fn from(use_case: UseCase) -> Self {
        Self {
            use_case,
            path: use_case.path(),
        }
    }
}

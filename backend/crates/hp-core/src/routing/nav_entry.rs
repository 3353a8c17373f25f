use crate::UseCase;

use serde::Serialize;

/// Sidebar navigation entry for an enabled use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub use_case: UseCase,
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// Set when the entry matches the path currently displayed.
    pub active: bool,
}

impl From<UseCase> for NavEntry {
    fn from(use_case: UseCase) -> Self {
        Self {
            use_case,
            path: use_case.path(),
            label: use_case.label(),
            icon: use_case.icon(),
            active: false,
        }
    }
}

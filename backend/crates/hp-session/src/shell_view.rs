use hp_core::{NavEntry, UseCase};

use serde::Serialize;

/// What the portal shell shows for one navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ShellView {
    /// Send the visitor to the identity provider; `nonce` becomes `state`.
    StartLogin { nonce: String },
    /// Sign-in or tenant resolution still in progress.
    Loading,
    Error { message: String },
    Redirect { to: String },
    Page {
        use_case: UseCase,
        path: &'static str,
        nav: Vec<NavEntry>,
    },
    /// Module hosted outside the portal.
    External { use_case: UseCase, url: String },
    NoModulesEnabled {
        #[serde(skip_serializing_if = "Option::is_none")]
        notice: Option<String>,
    },
    NotFound { path: String },
}

use crate::UseCase;

use serde::Serialize;

/// Outcome of resolving a requested path against a route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "use_case", rename_all = "snake_case")]
pub enum RouteResolution {
    /// Mount the page module of this use case.
    Page(UseCase),
    /// `/` was requested; navigate to this use case's path.
    RedirectTo(UseCase),
    /// `/` was requested and the tenant has nothing enabled.
    NoModulesEnabled,
    NotFound,
}

use crate::RouteTable;
use crate::routing::route_table::is_root;

/// Issues the automatic `/` → default redirect at most once per change of
/// the enabled set.
#[derive(Debug, Clone, Default)]
pub struct RootRedirect {
    last_fingerprint: Option<u32>,
}

impl RootRedirect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the path to navigate to, if any.
    ///
    /// `None` when the table was already seen, when the visitor is not on
    /// `/`, when nothing is enabled, or when the target is already active.
    pub fn decide(&mut self, table: &RouteTable, current_path: &str) -> Option<&'static str> {
        if self.last_fingerprint == Some(table.fingerprint()) {
            return None;
        }
        self.last_fingerprint = Some(table.fingerprint());

        if !is_root(current_path) {
            return None;
        }

        table
            .default_route()
            .path()
            .filter(|target| *target != current_path)
    }

    /// Forget the last table, e.g. when the session ends.
    pub fn reset(&mut self) {
        self.last_fingerprint = None;
    }
}

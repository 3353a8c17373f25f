use crate::{DefaultRoute, NavEntry, RouteEntry, RouteResolution, UseCase, UseCaseSet};

use serde::Serialize;

pub const ROOT_PATH: &str = "/";

/// Routes, navigation entries and default landing route derived from a
/// normalized use-case set.
///
/// Pure: building from equal sets always yields equal tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    nav_entries: Vec<NavEntry>,
    default_route: DefaultRoute,
    fingerprint: u32,
}

impl RouteTable {
    pub fn build(use_cases: &UseCaseSet) -> Self {
        let enabled: Vec<UseCase> = use_cases.in_enumeration_order().collect();

        Self {
            routes: enabled.iter().copied().map(RouteEntry::from).collect(),
            nav_entries: enabled.iter().copied().map(NavEntry::from).collect(),
            default_route: DefaultRoute::for_set(use_cases),
            fingerprint: enabled
                .iter()
                .fold(0, |bits, use_case| bits | (1 << use_case.ordinal())),
        }
    }

    /// A table with no use cases enabled.
    pub fn empty() -> Self {
        Self::build(&UseCaseSet::new())
    }

    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    pub fn nav_entries(&self) -> &[NavEntry] {
        &self.nav_entries
    }

    /// Navigation entries with the one matching `current_path` marked active.
    pub fn nav_for(&self, current_path: &str) -> Vec<NavEntry> {
        let current = UseCase::from_path(current_path);
        self.nav_entries
            .iter()
            .map(|entry| NavEntry {
                active: Some(entry.use_case) == current,
                ..entry.clone()
            })
            .collect()
    }

    pub fn default_route(&self) -> DefaultRoute {
        self.default_route
    }

    /// Identity of the enabled set, independent of the order it arrived in.
    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    pub fn is_enabled(&self, use_case: UseCase) -> bool {
        self.fingerprint & (1 << use_case.ordinal()) != 0
    }

    /// Resolve a requested path.
    ///
    /// Paths of disabled use cases resolve to `NotFound`, exactly like paths
    /// the portal has never heard of.
    pub fn resolve(&self, path: &str) -> RouteResolution {
        if is_root(path) {
            return match self.default_route {
                DefaultRoute::UseCase(use_case) => RouteResolution::RedirectTo(use_case),
                DefaultRoute::NoModulesEnabled => RouteResolution::NoModulesEnabled,
            };
        }

        match UseCase::from_path(path) {
            Some(use_case) if self.is_enabled(use_case) => RouteResolution::Page(use_case),
            _ => RouteResolution::NotFound,
        }
    }
}

pub fn is_root(path: &str) -> bool {
    path.is_empty() || path == ROOT_PATH
}

use crate::{UseCase, UseCaseSet};

use serde::Serialize;

/// Where `/` lands for a given set of enabled use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "use_case", rename_all = "snake_case")]
pub enum DefaultRoute {
    UseCase(UseCase),
    NoModulesEnabled,
}

impl DefaultRoute {
    /// The underwriter dashboard wins whenever it is enabled; otherwise the
    /// first enabled use case in enumeration order.
    pub fn for_set(use_cases: &UseCaseSet) -> Self {
        if use_cases.contains(UseCase::DEFAULT) {
            return Self::UseCase(UseCase::DEFAULT);
        }

        use_cases
            .in_enumeration_order()
            .next()
            .map_or(Self::NoModulesEnabled, Self::UseCase)
    }

    pub fn use_case(&self) -> Option<UseCase> {
        match self {
            Self::UseCase(use_case) => Some(*use_case),
            Self::NoModulesEnabled => None,
        }
    }

    pub fn path(&self) -> Option<&'static str> {
        self.use_case().map(|use_case| use_case.path())
    }
}

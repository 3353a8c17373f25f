use crate::UseCase;

use serde::Serialize;

/// Ordered set of enabled use cases.
///
/// Insertion order is preserved and duplicates are ignored. Every member is
/// drawn from [`UseCase::ALL`] by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UseCaseSet(Vec<UseCase>);

impl UseCaseSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns `false` if the use case was already present.
    pub fn insert(&mut self, use_case: UseCase) -> bool {
        if self.0.contains(&use_case) {
            return false;
        }
        self.0.push(use_case);
        true
    }

    pub fn contains(&self, use_case: UseCase) -> bool {
        self.0.contains(&use_case)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = UseCase> + '_ {
        self.0.iter().copied()
    }

    /// Members in enumeration order, independent of insertion order.
    pub fn in_enumeration_order(&self) -> impl Iterator<Item = UseCase> + '_ {
        UseCase::ALL
            .into_iter()
            .filter(move |use_case| self.contains(*use_case))
    }

    pub fn as_slice(&self) -> &[UseCase] {
        &self.0
    }
}

impl FromIterator<UseCase> for UseCaseSet {
    fn from_iter<I: IntoIterator<Item = UseCase>>(iter: I) -> Self {
        let mut set = UseCaseSet::new();
        for use_case in iter {
            set.insert(use_case);
        }
        set
    }
}

impl<'a> IntoIterator for &'a UseCaseSet {
    type Item = UseCase;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, UseCase>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

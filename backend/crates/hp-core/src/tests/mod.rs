mod normalization;
mod tenant_config;

use crate::{UseCase, UseCaseSet};

pub(crate) fn set_of(use_cases: &[UseCase]) -> UseCaseSet {
    use_cases.iter().copied().collect()
}

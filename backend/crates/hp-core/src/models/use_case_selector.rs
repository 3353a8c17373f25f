use crate::{UseCase, UseCaseSet};

use log::debug;
use serde_json::Value;

/// The use-case selector field exactly as the tenant API delivered it.
///
/// Across backend iterations the field has been a single string, an array of
/// strings, or missing entirely. Normalize it with [`UseCaseSelector::normalize`]
/// as soon as it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCaseSelector {
    Single(String),
    Many(Vec<String>),
    Absent,
    Malformed,
}

impl UseCaseSelector {
    /// Classify a raw JSON value. Non-string array entries are skipped.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Absent,
            Some(Value::String(s)) => Self::Single(s.clone()),
            Some(Value::Array(items)) => Self::Many(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(String::from))
                    .collect(),
            ),
            Some(_) => Self::Malformed,
        }
    }

    /// Convert into the canonical ordered, deduplicated, allow-listed set.
    pub fn normalize(&self) -> UseCaseSet {
        match self {
            Self::Single(value) => Self::known(value).into_iter().collect(),
            Self::Many(values) => values.iter().filter_map(|v| Self::known(v)).collect(),
            Self::Absent | Self::Malformed => UseCaseSet::new(),
        }
    }

    fn known(value: &str) -> Option<UseCase> {
        let use_case = UseCase::from_wire(value);
        if use_case.is_none() {
            debug!("Ignoring unknown use case '{value}'");
        }
        use_case
    }
}

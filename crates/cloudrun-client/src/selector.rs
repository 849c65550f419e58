//! Label selector parsing and matching
//!
//! The Admin API v2 list endpoint has no server-side label filter, so
//! selectors are applied client-side against each service's label map.
//! Only equality requirements are supported: `key=value,key2=value2`.

use crate::error::CloudRunError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Set of `key=value` equality requirements, all of which must match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSelector {
    requirements: Vec<(String, String)>,
}

impl LabelSelector {
    /// Parse a selector of the form `key=value,key2=value2`
    ///
    /// Whitespace around clauses is ignored. Empty keys and clauses
    /// without `=` are rejected. The empty string parses to a selector
    /// that matches everything.
    pub fn parse(input: &str) -> Result<Self, CloudRunError> {
        let mut requirements = Vec::new();
        for clause in input.split(',') {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            let (key, value) = clause.split_once('=').ok_or_else(|| {
                CloudRunError::InvalidSelector(format!(
                    "expected key=value, got {:?}",
                    clause
                ))
            })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(CloudRunError::InvalidSelector(format!(
                    "empty key in clause {:?}",
                    clause
                )));
            }
            requirements.push((key.to_string(), value.trim().to_string()));
        }
        Ok(Self { requirements })
    }

    /// True when every requirement is present in `labels` with an equal value
    pub fn matches(&self, labels: &HashMap<String, String>) -> bool {
        self.requirements
            .iter()
            .all(|(key, value)| labels.get(key).is_some_and(|v| v == value))
    }

    /// True when the selector has no requirements
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl FromStr for LabelSelector {
    type Err = CloudRunError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LabelSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.requirements.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        Ok(())
    }
}

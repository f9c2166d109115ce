// Named rule table
//
// A JSON object mapping a human-readable name to a single PRN rule, e.g.
// `{"final-devoicing": "[bdg] -> [ptk] / _#"}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error raised while decoding a named rule table.
#[derive(Debug, thiserror::Error)]
pub enum NamedRulesError {
    #[error("invalid named rule table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Named PRN rules, kept in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NamedRules {
    rules: BTreeMap<String, String>,
}

impl NamedRules {
    pub fn from_json(json: &str) -> Result<Self, NamedRulesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up the rule text registered under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.rules.get(name).map(String::as_str)
    }

    /// Rule names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

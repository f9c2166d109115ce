// Sound class table and label resolution
//
// A sound class is a single uppercase letter standing for a set of phones.
// Before a rule is parsed every label in its text is replaced by a character
// group, so `V > 0 / #_` becomes `[aeiou] > 0 / #_`.

use std::collections::BTreeMap;
use std::fmt;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::notation::{GROUP_CLOSE, GROUP_OPEN};

/// Built-in table used when the caller supplies none.
pub const DEFAULT_CLASSES: &[(char, &str)] = &[
    ('V', "aeiou"),
    ('C', "bcdfghjklmnpqrstvwxyz"),
    ('S', "sz"),
    ('P', "pbtdkg"),
    ('F', "fvsz"),
    ('N', "mn"),
];

/// Error raised while building a sound class table.
#[derive(Debug, thiserror::Error)]
pub enum SoundClassError {
    /// A key is not exactly one uppercase letter.
    #[error("invalid sound class '{label}': labels must be a single uppercase letter")]
    InvalidLabel { label: String },

    /// A class has no members.
    #[error("sound class '{label}' has no members")]
    EmptyClass { label: char },

    /// The table could not be decoded from JSON.
    #[error("invalid sound class table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validated mapping from class label to class members.
///
/// Immutable once built; every rule compiled against a table sees the same
/// classes for the table's whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct SoundClasses {
    classes: HashMap<char, String>,
}

impl SoundClasses {
    /// Build a table from label/member pairs.
    ///
    /// Fails with [`SoundClassError::InvalidLabel`] if any key is not exactly
    /// one uppercase letter, and with [`SoundClassError::EmptyClass`] if any
    /// member string is empty.
    pub fn new<I, K, V>(table: I) -> Result<Self, SoundClassError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut classes = HashMap::new();
        for (key, members) in table {
            let label = parse_label(key.as_ref())?;
            let members = members.into();
            if members.is_empty() {
                return Err(SoundClassError::EmptyClass { label });
            }
            classes.insert(label, members);
        }
        Ok(Self { classes })
    }

    /// A table with no classes. Resolution leaves rule text unchanged.
    pub fn empty() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Decode a table from a JSON object such as `{"V": "aeiou"}`.
    pub fn from_json(json: &str) -> Result<Self, SoundClassError> {
        let table: BTreeMap<String, String> = serde_json::from_str(json)?;
        Self::new(table)
    }

    /// Members of the class with the given label.
    pub fn get(&self, label: char) -> Option<&str> {
        self.classes.get(&label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterate over `(label, members)` in label order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        let mut entries: Vec<(char, &str)> = self
            .classes
            .iter()
            .map(|(&label, members)| (label, members.as_str()))
            .collect();
        entries.sort_unstable_by_key(|&(label, _)| label);
        entries.into_iter()
    }

    /// Replace every class label in `text` with a character group.
    ///
    /// Outside a group a label becomes `[members]`. Inside a group the
    /// members are spliced in bare, so `[VN]` becomes `[aeioumn]` rather than
    /// a nested group. Characters that are not labels are copied unchanged.
    pub fn resolve(&self, text: &str) -> String {
        if self.classes.is_empty() {
            return text.to_string();
        }

        let mut resolved = String::with_capacity(text.len());
        let mut depth = 0usize;
        for c in text.chars() {
            match c {
                GROUP_OPEN => {
                    depth += 1;
                    resolved.push(c);
                }
                GROUP_CLOSE => {
                    depth = depth.saturating_sub(1);
                    resolved.push(c);
                }
                _ => match self.classes.get(&c) {
                    Some(members) if depth == 0 => {
                        resolved.push(GROUP_OPEN);
                        resolved.push_str(members);
                        resolved.push(GROUP_CLOSE);
                    }
                    Some(members) => resolved.push_str(members),
                    None => resolved.push(c),
                },
            }
        }
        resolved
    }
}

impl Default for SoundClasses {
    /// The built-in table: `V`, `C`, `S`, `P`, `F`, `N`.
    fn default() -> Self {
        Self {
            classes: DEFAULT_CLASSES
                .iter()
                .map(|&(label, members)| (label, members.to_string()))
                .collect(),
        }
    }
}

impl TryFrom<BTreeMap<String, String>> for SoundClasses {
    type Error = SoundClassError;

    fn try_from(table: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::new(table)
    }
}

impl From<SoundClasses> for BTreeMap<String, String> {
    fn from(classes: SoundClasses) -> Self {
        classes
            .classes
            .into_iter()
            .map(|(label, members)| (label.to_string(), members))
            .collect()
    }
}

impl fmt::Display for SoundClasses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (label, members) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{label}={members}")?;
            first = false;
        }
        Ok(())
    }
}

fn parse_label(key: &str) -> Result<char, SoundClassError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() && c.is_uppercase() => Ok(c),
        _ => Err(SoundClassError::InvalidLabel {
            label: key.to_string(),
        }),
    }
}

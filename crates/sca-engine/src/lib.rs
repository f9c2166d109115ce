//! Rule compiler and applier for phonological rule notation (PRN).
//!
//! A PRN rule such as `[ptk] -> [bdg] / V_V` is turned into executable
//! substitutions in five steps:
//!
//! 1. sound class labels are resolved into character groups
//!    ([`sca_core::SoundClasses::resolve`]);
//! 2. the text is matched against the rule grammar ([`parser`]);
//! 3. many-to-many rules are expanded into elementary rules
//!    ([`bracket`], [`expand`]);
//! 4. the environment is compiled into zero-width context assertions
//!    ([`pattern`], [`context`]);
//! 5. each elementary rule replaces the first phone it matches ([`apply`]).
//!
//! [`changer::SoundChanger`] ties the steps together behind a compiled-rule
//! cache. The free functions in this module are the uncached equivalents.

pub mod apply;
pub mod bracket;
pub mod cache;
pub mod changer;
pub mod context;
pub mod expand;
pub mod parser;
pub mod pattern;

use sca_core::{SoundClassError, SoundClasses};

pub use apply::CompiledRule;
pub use changer::{ChangerOptions, SoundChanger};

/// Error raised when a rule cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The rule text is unusable. `rule` is the text as the caller wrote it,
    /// before sound class resolution.
    #[error("'{rule}' is not a valid phonological rule notation: {reason}")]
    InvalidRule { rule: String, reason: RuleDefect },
}

impl RuleError {
    pub(crate) fn invalid(rule: &str, reason: RuleDefect) -> Self {
        Self::InvalidRule {
            rule: rule.to_string(),
            reason,
        }
    }

    /// The offending rule text.
    pub fn rule(&self) -> &str {
        match self {
            Self::InvalidRule { rule, .. } => rule,
        }
    }
}

/// What is wrong with an invalid rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleDefect {
    #[error("expected `before -> after / environment`")]
    Grammar,
    #[error("the environment must contain exactly one '_', found {0}")]
    FocusMarkers(usize),
}

/// Build a sound class table, falling back to the built-in table when none
/// is given.
pub fn build_sound_classes<I, K, V>(table: Option<I>) -> Result<SoundClasses, SoundClassError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    match table {
        Some(table) => SoundClasses::new(table),
        None => Ok(SoundClasses::default()),
    }
}

/// Compile one rule into its elementary rules, without caching.
pub fn compile_rule(text: &str, classes: &SoundClasses) -> Result<Vec<CompiledRule>, RuleError> {
    let resolved = classes.resolve(text.trim());
    let parsed = parser::parse_rule(&resolved).map_err(|reason| RuleError::invalid(text, reason))?;
    expand::expand(parsed)
        .into_iter()
        .map(|rule| CompiledRule::compile(rule).map_err(|reason| RuleError::invalid(text, reason)))
        .collect()
}

/// Apply one compiled elementary rule to one word.
pub fn apply_rule(rule: &CompiledRule, word: &str) -> String {
    rule.apply(word)
}

/// Apply `rules` in order to every word, without caching.
///
/// Every rule is compiled before any word is touched; the first invalid
/// rule aborts the whole batch.
pub fn apply_rule_set<R, W>(
    rules: &[R],
    words: &[W],
    classes: &SoundClasses,
) -> Result<Vec<String>, RuleError>
where
    R: AsRef<str>,
    W: AsRef<str>,
{
    let compiled = rules
        .iter()
        .map(|rule| compile_rule(rule.as_ref(), classes))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(apply::apply_compiled(
        compiled.iter().map(Vec::as_slice),
        words,
    ))
}

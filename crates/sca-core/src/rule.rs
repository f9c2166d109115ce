// Rule values produced by the parser and the complex-rule expander

use std::fmt;

use crate::notation::strip_focus;

/// A rule that matched the PRN grammar, split into its three parts.
///
/// `before` and `after` may still contain a bracket group describing several
/// parallel changes; `environment` holds exactly one focus marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedRule {
    pub before: String,
    pub after: String,
    pub environment: String,
}

impl ParsedRule {
    pub fn new(
        before: impl Into<String>,
        after: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            environment: environment.into(),
        }
    }

    /// Treat this rule as a single change without expanding it.
    pub fn into_elementary(self) -> ElementaryRule {
        ElementaryRule {
            before: self.before,
            after: self.after,
            environment: self.environment,
        }
    }
}

impl fmt::Display for ParsedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} / {}", self.before, self.after, self.environment)
    }
}

/// A rule describing exactly one phone change, the unit the applier runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementaryRule {
    pub before: String,
    pub after: String,
    pub environment: String,
}

impl ElementaryRule {
    pub fn new(
        before: impl Into<String>,
        after: impl Into<String>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            environment: environment.into(),
        }
    }

    /// Text substituted for the matched phone: `after` with focus markers
    /// removed, so an `after` of `_` deletes the phone.
    pub fn replacement(&self) -> String {
        strip_focus(&self.after)
    }
}

impl fmt::Display for ElementaryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} / {}", self.before, self.after, self.environment)
    }
}

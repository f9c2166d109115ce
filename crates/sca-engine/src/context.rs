// Context compiler: environment string -> zero-width context assertions
//
// The environment `L_R` constrains what may stand immediately left and right
// of the changing phone. Each non-empty side becomes an assertion checked
// against the text before (left) or after (right) the focus match, so the
// context is tested but never consumed or replaced.
//
//   #...   left side pinned to the start of the word
//   ...#   right side pinned to the end of the word
//   ...!_  left side negated: the context must NOT precede the focus
//   _!...  right side negated: the context must NOT follow the focus

use regex::Regex;
use sca_core::notation::{BOUNDARY, FOCUS, NEGATION};

use crate::RuleDefect;
use crate::pattern::{self, fragment_to_regex};

/// Which side of the focus an assertion looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// One compiled side of an environment.
#[derive(Debug, Clone)]
struct Assertion {
    negated: bool,
    pattern: Regex,
}

impl Assertion {
    /// Compile one side of an environment, or `None` if the side puts no
    /// constraint on the word.
    fn compile(side: Side, text: &str) -> Option<Self> {
        let (negated, body) = match side {
            Side::Left => match text.strip_suffix(NEGATION) {
                Some(rest) => (true, rest),
                None => (false, text),
            },
            Side::Right => match text.strip_prefix(NEGATION) {
                Some(rest) => (true, rest),
                None => (false, text),
            },
        };

        let (anchored, body) = match side {
            Side::Left => match body.strip_prefix(BOUNDARY) {
                Some(rest) => (true, rest),
                None => (false, body),
            },
            Side::Right => match body.strip_suffix(BOUNDARY) {
                Some(rest) => (true, rest),
                None => (false, body),
            },
        };

        if body.is_empty() && !anchored {
            return None;
        }

        let body = fragment_to_regex(body);
        let source = match (side, anchored) {
            (Side::Left, true) => format!("^(?:{body})$"),
            (Side::Left, false) => format!("(?:{body})$"),
            (Side::Right, true) => format!("^(?:{body})$"),
            (Side::Right, false) => format!("^(?:{body})"),
        };

        Some(Self {
            negated,
            pattern: pattern::compile(&source),
        })
    }

    /// Check the assertion against the text on its side of the focus.
    fn holds(&self, text: &str) -> bool {
        self.pattern.is_match(text) != self.negated
    }
}

/// Compiled environment of an elementary rule.
#[derive(Debug, Clone)]
pub struct Context {
    left: Option<Assertion>,
    right: Option<Assertion>,
}

impl Context {
    /// Compile an environment holding exactly one focus marker.
    pub fn compile(environment: &str) -> Result<Self, RuleDefect> {
        let mut sides = environment.split(FOCUS);
        let (Some(left), Some(right), None) = (sides.next(), sides.next(), sides.next()) else {
            let found = environment.chars().filter(|&c| c == FOCUS).count();
            return Err(RuleDefect::FocusMarkers(found));
        };

        Ok(Self {
            left: Assertion::compile(Side::Left, left),
            right: Assertion::compile(Side::Right, right),
        })
    }

    /// Whether the focus at byte range `start..end` of `word` stands in
    /// this context.
    pub fn holds(&self, word: &str, start: usize, end: usize) -> bool {
        self.left.as_ref().is_none_or(|a| a.holds(&word[..start]))
            && self.right.as_ref().is_none_or(|a| a.holds(&word[end..]))
    }

    /// Whether the environment constrains nothing (`_`).
    pub fn is_unconstrained(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

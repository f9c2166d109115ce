// Elementary rule applier and rule-set fold
//
// An elementary rule replaces the FIRST occurrence of its `before` phone that
// stands in the rule's context. Repeated application is expressed by
// repeating the rule, never implied.

use std::ops::Range;

use regex::Regex;
use sca_core::ElementaryRule;

use crate::RuleDefect;
use crate::context::Context;
use crate::pattern::{self, fragment_to_regex};

/// An elementary rule with its patterns compiled, ready to run on words.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: ElementaryRule,
    focus: Regex,
    context: Context,
    replacement: String,
}

impl CompiledRule {
    /// Compile the focus pattern and the context of an elementary rule.
    pub fn compile(rule: ElementaryRule) -> Result<Self, RuleDefect> {
        let focus = pattern::compile(&fragment_to_regex(&rule.before));
        let context = Context::compile(&rule.environment)?;
        let replacement = rule.replacement();
        Ok(Self {
            rule,
            focus,
            context,
            replacement,
        })
    }

    /// The source elementary rule.
    pub fn rule(&self) -> &ElementaryRule {
        &self.rule
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Byte range of the first focus match standing in context, if any.
    pub fn find(&self, word: &str) -> Option<Range<usize>> {
        let mut from = 0;
        while from <= word.len() {
            let m = self.focus.find_at(word, from)?;
            if self.context.holds(word, m.start(), m.end()) {
                return Some(m.range());
            }
            // Retry one character past the rejected match start, so
            // overlapping candidates are still considered.
            from = m.start() + word[m.start()..].chars().next().map_or(1, char::len_utf8);
        }
        None
    }

    /// Apply the rule to one word. Words without a match come back unchanged.
    pub fn apply(&self, word: &str) -> String {
        let mut changed = word.to_string();
        self.apply_in_place(&mut changed);
        changed
    }

    /// Apply the rule to `word` in place. Returns whether the word changed.
    pub fn apply_in_place(&self, word: &mut String) -> bool {
        let Some(range) = self.find(word) else {
            return false;
        };
        tracing::trace!(rule = %self.rule, word = word.as_str(), at = range.start, "rule applied");
        word.replace_range(range, &self.replacement);
        true
    }
}

/// Apply each group of elementary rules, in order, to every word.
///
/// Rule-major: every elementary rule of a group runs over the whole word
/// list before the next rule starts. Output has the same length and order as
/// `words`.
pub fn apply_compiled<'a, I, W>(rules: I, words: &[W]) -> Vec<String>
where
    I: IntoIterator<Item = &'a [CompiledRule]>,
    W: AsRef<str>,
{
    let mut current: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
    for group in rules {
        for rule in group {
            for word in current.iter_mut() {
                rule.apply_in_place(word);
            }
        }
    }
    current
}

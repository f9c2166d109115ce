// Read-through cache of compiled rules
//
// Compiling a rule is a pure function of its text and the sound class table.
// A `SoundChanger` owns exactly one table for its whole life, so the rule
// text alone identifies a compiled entry.

use std::rc::Rc;

use hashbrown::HashMap;

use crate::apply::CompiledRule;

/// Compiled elementary rules shared between cache and callers.
pub type CompiledRules = Rc<[CompiledRule]>;

/// Cache of compiled rules keyed by rule text.
#[derive(Debug, Default)]
pub struct RuleCache {
    entries: HashMap<String, CompiledRules>,
    hits: u64,
    misses: u64,
}

impl RuleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a rule, counting the hit or miss.
    pub fn get(&mut self, text: &str) -> Option<CompiledRules> {
        match self.entries.get(text) {
            Some(rules) => {
                self.hits += 1;
                Some(Rc::clone(rules))
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store the compiled form of `text`, replacing any previous entry.
    pub fn store(&mut self, text: &str, rules: CompiledRules) {
        self.entries.insert(text.to_string(), rules);
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

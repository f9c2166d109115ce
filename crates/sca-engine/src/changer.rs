// SoundChanger: top-level handle for compiling and applying rules
//
// Owns one sound class table and a cache of compiled rules. The table is
// fixed at construction, which is what makes caching by rule text sound.
// The cache sits behind a `RefCell` so application can take `&self`.

use std::cell::RefCell;
use std::rc::Rc;

use sca_core::SoundClasses;

use crate::apply;
use crate::cache::{CompiledRules, RuleCache};
use crate::{RuleError, compile_rule};

/// Options for a [`SoundChanger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangerOptions {
    /// Memoize compiled rules by their text. Output is identical either way.
    pub cache: bool,
}

impl Default for ChangerOptions {
    fn default() -> Self {
        Self { cache: true }
    }
}

/// Compiles PRN rules against a fixed sound class table and applies them.
#[derive(Debug)]
pub struct SoundChanger {
    classes: SoundClasses,
    options: ChangerOptions,
    cache: RefCell<RuleCache>,
}

impl SoundChanger {
    pub fn new(classes: SoundClasses) -> Self {
        Self::with_options(classes, ChangerOptions::default())
    }

    pub fn with_options(classes: SoundClasses, options: ChangerOptions) -> Self {
        Self {
            classes,
            options,
            cache: RefCell::new(RuleCache::new()),
        }
    }

    pub fn classes(&self) -> &SoundClasses {
        &self.classes
    }

    pub fn options(&self) -> ChangerOptions {
        self.options
    }

    /// Compile `rule` into its elementary rules, consulting the cache first.
    pub fn compile(&self, rule: &str) -> Result<CompiledRules, RuleError> {
        if self.options.cache {
            if let Some(hit) = self.cache.borrow_mut().get(rule) {
                tracing::trace!(rule, "compiled rule cache hit");
                return Ok(hit);
            }
        }

        let compiled: CompiledRules = Rc::from(compile_rule(rule, &self.classes)?);
        tracing::debug!(rule, elementary = compiled.len(), "compiled rule");

        if self.options.cache {
            self.cache.borrow_mut().store(rule, Rc::clone(&compiled));
        }
        Ok(compiled)
    }

    /// Compile every rule, failing on the first invalid one.
    pub fn compile_all<R: AsRef<str>>(&self, rules: &[R]) -> Result<Vec<CompiledRules>, RuleError> {
        rules.iter().map(|rule| self.compile(rule.as_ref())).collect()
    }

    /// Apply `rules` in order to one word.
    pub fn apply_to_word<R: AsRef<str>>(&self, rules: &[R], word: &str) -> Result<String, RuleError> {
        let mut words = self.apply_to_words(rules, &[word])?;
        Ok(words.pop().unwrap_or_default())
    }

    /// Apply `rules` in order to every word.
    ///
    /// Every rule is compiled before any word is changed; an invalid rule
    /// aborts the batch and no partial result is returned.
    pub fn apply_to_words<R, W>(&self, rules: &[R], words: &[W]) -> Result<Vec<String>, RuleError>
    where
        R: AsRef<str>,
        W: AsRef<str>,
    {
        let compiled = self.compile_all(rules)?;
        Ok(apply::apply_compiled(
            compiled.iter().map(|group| &group[..]),
            words,
        ))
    }

    /// Number of distinct rule texts held in the cache.
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// `(hits, misses)` counted since construction or the last clear.
    pub fn cache_stats(&self) -> (u64, u64) {
        let cache = self.cache.borrow();
        (cache.hits(), cache.misses())
    }

    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

impl Default for SoundChanger {
    /// A changer over the built-in sound class table.
    fn default() -> Self {
        Self::new(SoundClasses::default())
    }
}

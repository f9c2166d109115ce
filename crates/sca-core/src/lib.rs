//! Shared types for the sound change applier.
//!
//! This crate holds the leaf data every other layer works with: the sound
//! class table, the named rule table and the value types produced when a
//! rule written in phonological rule notation (PRN) is parsed.
//!
//! # Architecture
//!
//! - [`notation`] -- Reserved PRN characters (focus, boundary, negation, groups)
//! - [`sound_class`] -- Sound class table and label resolution
//! - [`named`] -- JSON table of named rules
//! - [`rule`] -- Parsed and elementary rule values

pub mod named;
pub mod notation;
pub mod rule;
pub mod sound_class;

pub use named::{NamedRules, NamedRulesError};
pub use rule::{ElementaryRule, ParsedRule};
pub use sound_class::{SoundClassError, SoundClasses};

// Translation of PRN fragments into regex syntax
//
// A fragment is a `before` token or one side of an environment. Outside a
// bracket group every character is literal; a balanced group is a set of
// literal characters. Boundary and negation markers are handled by the context compiler
// before a fragment gets here.

use regex::Regex;
use sca_core::notation::{GROUP_CLOSE, GROUP_OPEN};

use crate::bracket::scan_group;

/// Character set that never matches, used for `[]`.
const EMPTY_SET: &str = "[a&&b]";

/// Translate a fragment into an equivalent regex.
pub fn fragment_to_regex(fragment: &str) -> String {
    let mut regex = String::with_capacity(fragment.len() * 2);
    let mut rest = fragment;

    while let Some(c) = rest.chars().next() {
        if c == GROUP_OPEN {
            if let Some(group) = scan_group(rest) {
                push_set(&mut regex, group.interior);
                rest = group.suffix;
                continue;
            }
        }
        push_literal(&mut regex, c);
        rest = &rest[c.len_utf8()..];
    }
    regex
}

fn push_literal(regex: &mut String, c: char) {
    let mut buf = [0u8; 4];
    regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}

/// Emit a character set for the interior of a bracket group.
///
/// Every interior character is a literal member, brackets and `^`/`-`
/// included, so the set holds exactly the characters the expander pairs up.
fn push_set(regex: &mut String, interior: &str) {
    if interior.is_empty() {
        regex.push_str(EMPTY_SET);
        return;
    }

    let mut buf = [0u8; 4];
    regex.push(GROUP_OPEN);
    for c in interior.chars() {
        regex.push_str(&regex::escape(c.encode_utf8(&mut buf)));
    }
    regex.push(GROUP_CLOSE);
}

/// Compile a translated fragment.
///
/// Fragments only hold escaped literals and sets of escaped members, so
/// their syntax is always valid.
pub fn compile(source: &str) -> Regex {
    Regex::new(source).expect("translated fragments are valid regex syntax")
}

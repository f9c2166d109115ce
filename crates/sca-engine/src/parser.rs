// Rule parser: match resolved rule text against the PRN grammar
//
//   rule        ::= token WS? op WS? token WS? "/" WS? environment
//   op          ::= ">" | "->" | "=>"
//   environment ::= nonspace* "_" nonspace*
//
// The `before` token is matched lazily so that `x->y` splits as `x` / `y`
// instead of swallowing the arrow's first character.

use std::sync::LazyLock;

use regex::Regex;
use sca_core::ParsedRule;
use sca_core::notation::focus_count;

use crate::RuleDefect;

const GRAMMAR: &str = r"^(\S+?)\s*[-=]?>\s*(\S+)\s*/\s*(\S*)$";

static RULE_GRAMMAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(GRAMMAR).expect("PRN grammar pattern is a valid regex"));

/// Split resolved rule text into `before`, `after` and `environment`.
///
/// Fails with [`RuleDefect::Grammar`] if the text does not have the shape
/// `before OP after / environment`, and with [`RuleDefect::FocusMarkers`]
/// if the environment does not hold exactly one `_`.
pub fn parse_rule(text: &str) -> Result<ParsedRule, RuleDefect> {
    let caps = RULE_GRAMMAR.captures(text).ok_or(RuleDefect::Grammar)?;
    let environment = &caps[3];

    let focus = focus_count(environment);
    if focus != 1 {
        return Err(RuleDefect::FocusMarkers(focus));
    }

    Ok(ParsedRule::new(&caps[1], &caps[2], environment))
}

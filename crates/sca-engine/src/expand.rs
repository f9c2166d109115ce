// Complex-rule expander
//
// `[ae] -> [AE] / _#` stands for two parallel changes, `a -> A / _#` and
// `e -> E / _#`. Expansion pairs the interiors of the first bracket group of
// `before` and `after` character by character; each side keeps its own
// prefix and suffix.

use sca_core::{ElementaryRule, ParsedRule};

use crate::bracket::scan_group;

/// Expand a parsed rule into elementary rules.
///
/// The rule is expanded only when both `before` and `after` carry a bracket
/// group and the two groups hold the same, nonzero number of characters.
/// Otherwise the rule comes back unchanged as a one-element list.
pub fn expand(rule: ParsedRule) -> Vec<ElementaryRule> {
    let (Some(before), Some(after)) = (scan_group(&rule.before), scan_group(&rule.after)) else {
        return vec![rule.into_elementary()];
    };

    if before.is_empty() || after.is_empty() {
        return vec![rule.into_elementary()];
    }
    if before.len() != after.len() {
        tracing::warn!(
            rule = %rule,
            before = before.len(),
            after = after.len(),
            "bracket groups differ in length; rule applied unexpanded"
        );
        return vec![rule.into_elementary()];
    }

    before
        .interior
        .chars()
        .zip(after.interior.chars())
        .map(|(x, y)| {
            ElementaryRule::new(
                format!("{}{x}{}", before.prefix, before.suffix),
                format!("{}{y}{}", after.prefix, after.suffix),
                rule.environment.as_str(),
            )
        })
        .collect()
}

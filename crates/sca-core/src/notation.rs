// Reserved characters of phonological rule notation
//
// A rule reads `before -> after / environment`. Inside the environment the
// focus marker stands for the changing phone, a boundary marker at either end
// pins the context to the word edge, and a negation marker next to the focus
// inverts that side's context. Square brackets delimit character groups in
// every part of the rule.

/// Marks the position of the changing phone inside an environment.
/// Also used as the `after` token to express deletion.
pub const FOCUS: char = '_';

/// Word boundary when it opens or closes an environment.
pub const BOUNDARY: char = '#';

/// Negates the adjacent side of the environment (`a!_`, `_!b`).
pub const NEGATION: char = '!';

/// Opens a character group.
pub const GROUP_OPEN: char = '[';

/// Closes a character group.
pub const GROUP_CLOSE: char = ']';

/// Count the focus markers in an environment string.
pub fn focus_count(environment: &str) -> usize {
    environment.chars().filter(|&c| c == FOCUS).count()
}

/// Remove every focus marker from a token.
///
/// Applied to the `after` token so that `_` (and only `_`) deletes the
/// matched phone.
pub fn strip_focus(token: &str) -> String {
    token.chars().filter(|&c| c != FOCUS).collect()
}

// Bracket-group scanner
//
// Splits a token around its first balanced `[...]` group. Used by the
// complex-rule expander to detect many-to-many rules and by the pattern
// translator to recognise character groups.

use sca_core::notation::{GROUP_CLOSE, GROUP_OPEN};

/// A token split around its first balanced bracket group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketGroup<'a> {
    /// Literal text before the opening bracket.
    pub prefix: &'a str,
    /// Text strictly inside the group (nested brackets included).
    pub interior: &'a str,
    /// Everything after the closing bracket, verbatim.
    pub suffix: &'a str,
}

impl BracketGroup<'_> {
    /// Number of characters inside the group.
    pub fn len(&self) -> usize {
        self.interior.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.interior.is_empty()
    }
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    BeforeGroup,
    InGroup { open: usize, depth: usize },
    AfterGroup { open: usize, close: usize },
}

/// Scan `token` left to right for its first balanced bracket group.
///
/// Returns `None` when the token has no group or when the first group is
/// never closed. A stray `]` before any `[` is ordinary prefix text, and
/// anything after the first group, brackets included, lands in `suffix`.
pub fn scan_group(token: &str) -> Option<BracketGroup<'_>> {
    let mut state = ScanState::BeforeGroup;

    for (i, c) in token.char_indices() {
        state = match (state, c) {
            (ScanState::AfterGroup { .. }, _) => break,
            (ScanState::BeforeGroup, GROUP_OPEN) => ScanState::InGroup { open: i, depth: 1 },
            (ScanState::InGroup { open, depth }, GROUP_OPEN) => ScanState::InGroup {
                open,
                depth: depth + 1,
            },
            (ScanState::InGroup { open, depth: 1 }, GROUP_CLOSE) => {
                ScanState::AfterGroup { open, close: i }
            }
            (ScanState::InGroup { open, depth }, GROUP_CLOSE) => ScanState::InGroup {
                open,
                depth: depth - 1,
            },
            (other, _) => other,
        };
    }

    match state {
        ScanState::AfterGroup { open, close } => Some(BracketGroup {
            prefix: &token[..open],
            interior: &token[open + GROUP_OPEN.len_utf8()..close],
            suffix: &token[close + GROUP_CLOSE.len_utf8()..],
        }),
        ScanState::BeforeGroup | ScanState::InGroup { .. } => None,
    }
}

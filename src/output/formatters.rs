//! Formatting utilities for terminal output

use crate::commands::ScoredWord;

/// Width of the banner and separator rules
pub const BANNER_WIDTH: usize = 44;

/// Format a result line as `WORD (Score: n)`
#[must_use]
pub fn format_scored_word(scored: &ScoredWord) -> String {
    format!("{} (Score: {})", scored.word, scored.score)
}

/// Center text within the banner, padding both sides with spaces
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    format!("{text:^width$}")
}

/// Build a framed banner line: `|` + centered text + `|`
#[must_use]
pub fn banner_line(text: &str) -> String {
    format!("|{}|", center(text, BANNER_WIDTH - 2))
}

/// Trailing status line under a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    /// The rack spells no dictionary word
    NoneFound,
    /// A limit hid some of the words found
    Truncated { shown: usize, total: usize },
}

/// Pick the status line for `shown` printed words out of `total` found
#[must_use]
pub const fn result_status(shown: usize, total: usize) -> Option<ResultStatus> {
    if total == 0 {
        Some(ResultStatus::NoneFound)
    } else if shown < total {
        Some(ResultStatus::Truncated { shown, total })
    } else {
        None
    }
}

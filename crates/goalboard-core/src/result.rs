// Match result classification from a scoreline string.

use std::fmt;

use thiserror::Error;

/// The scoreline was empty, so there is nothing to compare.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed scoreline {raw:?}: expected at least one character")]
pub struct MalformedResultError {
    pub raw: String,
}

/// Outcome of the match in which the goal was scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    pub const ALL: [MatchResult; 3] = [MatchResult::Win, MatchResult::Draw, MatchResult::Loss];

    pub fn label(&self) -> &'static str {
        match self {
            MatchResult::Win => "Win",
            MatchResult::Draw => "Draw",
            MatchResult::Loss => "Loss",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a scoreline such as `"2-1"`.
///
/// Compares the first and last characters of the scoreline as characters,
/// not as parsed numbers, so only single-digit scores classify correctly:
/// `"10-2"` compares `'1'` with `'2'` and yields `Loss`. A single-character
/// scoreline compares with itself and yields `Draw`. The string is taken as
/// given; the CSV loader has already trimmed it.
pub fn classify_result(raw: &str) -> Result<MatchResult, MalformedResultError> {
    let (Some(first), Some(last)) = (raw.chars().next(), raw.chars().last()) else {
        return Err(MalformedResultError {
            raw: raw.to_string(),
        });
    };

    Ok(match first.cmp(&last) {
        std::cmp::Ordering::Greater => MatchResult::Win,
        std::cmp::Ordering::Equal => MatchResult::Draw,
        std::cmp::Ordering::Less => MatchResult::Loss,
    })
}

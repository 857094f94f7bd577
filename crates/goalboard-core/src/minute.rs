// Match-minute parsing.
//
// Source minutes are either a plain minute ("45") or a regular minute plus
// stoppage time ("45+2"). Two numeric interpretations exist and they are not
// interchangeable:
//
// - Truncating: "45+2" -> 47.0. Used where a whole minute is needed (quarter
//   bucketing, per-minute distribution).
// - Fractional: "45+2" -> 45 + 2/60. Used for average goal minute.

use thiserror::Error;

/// The minute field did not match `<int>` or `<int>+<int>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed match minute {raw:?}: expected <minute> or <minute>+<stoppage>")]
pub struct MalformedMinuteError {
    pub raw: String,
}

/// How stoppage time is folded into the numeric minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinutePolicy {
    /// Stoppage minutes are added as whole minutes.
    Truncating,
    /// Stoppage minutes are added as a fraction of one minute (n / 60).
    Fractional,
}

/// Parse a raw minute string under the given policy.
pub fn parse_minute(raw: &str, policy: MinutePolicy) -> Result<f64, MalformedMinuteError> {
    let malformed = || MalformedMinuteError {
        raw: raw.to_string(),
    };

    let (base, stoppage) = match raw.split_once('+') {
        Some((base, stoppage)) => (base, Some(stoppage)),
        None => (raw, None),
    };

    let base = parse_digits(base).ok_or_else(malformed)?;
    let stoppage = match stoppage {
        Some(s) => Some(parse_digits(s).ok_or_else(malformed)?),
        None => None,
    };

    Ok(match (policy, stoppage) {
        (_, None) => base,
        (MinutePolicy::Truncating, Some(extra)) => base + extra,
        (MinutePolicy::Fractional, Some(extra)) => base + extra / 60.0,
    })
}

/// Parse a non-empty run of ASCII digits of any length. Rejects signs,
/// whitespace, exponents and decimal points, which `f64` parsing would accept.
fn parse_digits(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

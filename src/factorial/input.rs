//! Validation of the raw `n` query value.

use thiserror::Error;

use super::calculator::MAX_INPUT;

/// Why a request's `n` was rejected. Every variant maps to HTTP 400.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// `n` absent or empty.
    #[error("missing query parameter `n`")]
    Missing,

    /// `n` is not a base-10 integer (or does not fit in 64 bits).
    #[error("`n` is not a base-10 integer: {0}")]
    Malformed(String),

    /// `n` parsed, but is below zero.
    #[error("`n` must not be negative, got {0}")]
    Negative(i64),

    /// `n!` would not fit in the result type.
    #[error("`n` = {n} exceeds the largest supported input {max}")]
    TooLarge { n: i64, max: u32 },
}

/// Run the presence and format gates over a raw query value.
pub fn parse_input(raw: Option<&str>) -> Result<u32, InputError> {
    let raw = raw.filter(|v| !v.is_empty()).ok_or(InputError::Missing)?;

    let value: i64 = raw
        .parse()
        .map_err(|e: std::num::ParseIntError| InputError::Malformed(e.to_string()))?;

    if value < 0 {
        return Err(InputError::Negative(value));
    }

    u32::try_from(value)
        .ok()
        .filter(|n| *n <= MAX_INPUT)
        .ok_or(InputError::TooLarge { n: value, max: MAX_INPUT })
}

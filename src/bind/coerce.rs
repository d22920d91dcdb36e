//! Conversion of trimmed raw text into field values.
//!
//! Every parser treats the empty string as the zero value of its type.

use crate::duration::Duration;
use crate::error::Reason;

const QUOTES: [char; 3] = ['"', '\'', '`'];

const TRUES: [&str; 5] = ["t", "true", "1", "on", "enabled"];
const FALSES: [&str; 5] = ["f", "false", "0", "off", "disabled"];

/// Trims `value` and removes one pair of surrounding quotes.
///
/// A value opening with a quote must close with the same quote.
pub(crate) fn normalize(value: &str) -> Result<&str, Reason> {
    let value = value.trim();
    let Some(first) = value.chars().next() else {
        return Ok(value);
    };
    if !QUOTES.contains(&first) {
        return Ok(value);
    }

    // first is ASCII, so byte slicing below stays on char boundaries
    if value.len() < 2 || !value.ends_with(first) {
        return Err(Reason::MissingClosingQuote);
    }
    Ok(&value[1..value.len() - 1])
}

pub(crate) fn parse_bool(value: &str) -> Result<bool, Reason> {
    if value.is_empty() {
        return Ok(false);
    }
    let lower = value.to_lowercase();
    if TRUES.contains(&lower.as_str()) {
        return Ok(true);
    }
    if FALSES.contains(&lower.as_str()) {
        return Ok(false);
    }
    match lower.parse::<i64>() {
        Ok(n) => Ok(n > 0),
        Err(_) => Err(Reason::InvalidBoolean),
    }
}

/// Parses a base-10 integer into the full 64-bit range.
///
/// Callers narrow the result with `as`, wrapping values that do not fit the
/// field's width.
pub(crate) fn parse_int(value: &str) -> Result<i64, Reason> {
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| Reason::NumberNotParsable)
}

pub(crate) fn parse_duration(value: &str) -> Result<Duration, Reason> {
    if value.is_empty() {
        return Ok(Duration::ZERO);
    }
    value.parse().map_err(|_| Reason::InvalidDuration)
}

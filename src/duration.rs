//! Signed durations written in the short unit form (`300ms`, `1h30m`, `-1.5s`).

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// A signed count of nanoseconds.
///
/// Unlike [`std::time::Duration`] this can be negative, so parsing `-5s` is
/// not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Duration = Duration(0);

    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis.saturating_mul(MILLISECOND as i64))
    }

    pub const fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(SECOND as i64))
    }

    pub const fn as_nanos(&self) -> i64 {
        self.0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts to a standard library duration; `None` when negative.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        u64::try_from(self.0).ok().map(std::time::Duration::from_nanos)
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = std::num::TryFromIntError;

    fn try_from(value: std::time::Duration) -> Result<Self, Self::Error> {
        i64::try_from(value.as_nanos()).map(Duration)
    }
}

/// Returned when text does not follow the short unit grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid duration: {0:?}")]
pub struct InvalidDuration(pub String);

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

impl FromStr for Duration {
    type Err = InvalidDuration;

    /// Parses `[-+]` followed by one or more `<decimal>[.<fraction>]<unit>` terms.
    ///
    /// A lone `0` needs no unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidDuration(s.to_string());

        let (negative, mut rest) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        if rest == "0" {
            return Ok(Duration::ZERO);
        }
        if rest.is_empty() {
            return Err(invalid());
        }

        let mut total: u128 = 0;
        while !rest.is_empty() {
            let whole_len = rest.bytes().take_while(u8::is_ascii_digit).count();
            let (whole, after) = rest.split_at(whole_len);
            rest = after;

            let mut fraction = "";
            if let Some(after_dot) = rest.strip_prefix('.') {
                let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
                fraction = &after_dot[..frac_len];
                rest = &after_dot[frac_len..];
            }
            if whole.is_empty() && fraction.is_empty() {
                return Err(invalid());
            }

            let unit_len = rest
                .char_indices()
                .find(|(_, c)| *c == '.' || c.is_ascii_digit())
                .map_or(rest.len(), |(i, _)| i);
            let (unit, after) = rest.split_at(unit_len);
            rest = after;
            let unit = unit_nanos(unit).ok_or_else(invalid)? as u128;

            let whole: u128 = if whole.is_empty() {
                0
            } else {
                whole.parse().map_err(|_| invalid())?
            };
            total = whole
                .checked_mul(unit)
                .and_then(|n| n.checked_add(total))
                .ok_or_else(invalid)?;

            // Digits past nanosecond precision cannot change the result.
            let fraction = &fraction[..fraction.len().min(18)];
            if !fraction.is_empty() {
                let digits: u128 = fraction.parse().map_err(|_| invalid())?;
                let scale = 10u128.pow(fraction.len() as u32);
                total += digits * unit / scale;
            }

            if total > i64::MAX as u128 + 1 {
                return Err(invalid());
            }
        }

        if negative {
            Ok(Duration((total as i128).wrapping_neg() as i64))
        } else {
            i64::try_from(total).map(Duration).map_err(|_| invalid())
        }
    }
}

/// Formats `value / unit` with a trimmed decimal fraction.
fn fmt_fraction(f: &mut fmt::Formatter<'_>, value: u64, unit: u64) -> fmt::Result {
    let whole = value / unit;
    let frac = value % unit;
    if frac == 0 {
        return write!(f, "{}", whole);
    }
    let width = unit.ilog10() as usize;
    let digits = format!("{:0width$}", frac, width = width);
    write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
}

impl fmt::Display for Duration {
    /// Formats like `72h3m0.5s`; durations below one second use `ms`, `µs` or `ns`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0 {
            return f.write_str("0s");
        }
        if self.0 < 0 {
            f.write_str("-")?;
        }
        let nanos = self.0.unsigned_abs();

        if nanos < SECOND {
            let (unit, suffix) = if nanos < MICROSECOND {
                (NANOSECOND, "ns")
            } else if nanos < MILLISECOND {
                (MICROSECOND, "\u{00b5}s")
            } else {
                (MILLISECOND, "ms")
            };
            fmt_fraction(f, nanos, unit)?;
            return f.write_str(suffix);
        }

        let hours = nanos / HOUR;
        let minutes = (nanos % HOUR) / MINUTE;
        let seconds = nanos % MINUTE;
        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if hours > 0 || minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        fmt_fraction(f, seconds, SECOND)?;
        f.write_str("s")
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

//! vcs::parse
//!
//! Lenient parsers shared by the backends. Each one returns a default
//! instead of an error: zero for numbers, the Unix epoch for dates.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

/// Date layout produced by `bzr version-info --template {date}`.
pub const BZR_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Parse an integer, accepting an optional sign and a `0x`, `0o`, or `0b`
/// radix prefix. Anything unparsable is `0`.
///
/// ```
/// use verstamp::vcs::parse::parse_int;
///
/// assert_eq!(parse_int("42"), 42);
/// assert_eq!(parse_int("0x1f"), 31);
/// assert_eq!(parse_int("1.2.3"), 0);
/// ```
pub fn parse_int(input: &str) -> i64 {
    try_parse_int(input.trim()).unwrap_or(0)
}

fn try_parse_int(s: &str) -> Option<i64> {
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let lower = digits.to_ascii_lowercase();
    let (radix, body) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, lower.as_str())
    };

    // from_str_radix would accept a second sign here.
    if body.is_empty() || !body.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from_str_radix(body, radix).ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Convert epoch seconds to a UTC timestamp, or the epoch if out of range.
pub fn epoch_seconds(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Parse integer epoch seconds (git `%ct`).
pub fn parse_epoch_int(input: &str) -> DateTime<Utc> {
    epoch_seconds(parse_int(input))
}

/// Mercurial `{date}`: fractional seconds immediately followed by the
/// timezone offset, e.g. `1700000000.0-7200`. East-of-UTC offsets are
/// negative.
static HG_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?\d+(?:\.\d*)?)(?:[+-]?\d+)?$").unwrap_or_else(|_| unreachable!())
});

/// Parse fractional epoch seconds (hg `{date}`), truncating toward zero.
///
/// A trailing timezone offset is ignored; the seconds are already UTC.
pub fn parse_epoch_float(input: &str) -> DateTime<Utc> {
    let secs = HG_DATE
        .captures(input.trim())
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|f| f.is_finite())
        .map(|f| f.trunc() as i64)
        .unwrap_or(0);
    epoch_seconds(secs)
}

/// Parse a bazaar date such as `2013-05-01 12:30:00 +0200`.
pub fn parse_bzr_date(input: &str) -> DateTime<Utc> {
    DateTime::parse_from_str(input.trim(), BZR_DATE_FORMAT)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

//! Epoch-seconds text for [`SystemTime`].
//!
//! Printed as whole seconds, a point, and up to nine fractional digits, so
//! every nanosecond survives the trip through a JSON string.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Epoch seconds as text, always with a fraction: `"1500000000.0"`,
/// `"-1.5"`, `"1500000000.123456789"`.
pub(crate) fn format_timestamp(time: SystemTime) -> String {
    let (sign, offset) = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => ("", after),
        Err(before) => ("-", before.duration()),
    };
    let nanos = format!("{:09}", offset.subsec_nanos());
    let fraction = match nanos.trim_end_matches('0') {
        "" => "0",
        digits => digits,
    };
    format!("{sign}{}.{fraction}", offset.as_secs())
}

/// Reads epoch seconds back. Plain decimals are read digit for digit; other
/// float forms (`1.5e9`) fall back to `f64`.
pub(crate) fn parse_timestamp(text: &str) -> Option<SystemTime> {
    let text = text.trim();
    parse_decimal(text).or_else(|| {
        let secs = text.parse::<f64>().ok()?;
        let offset = Duration::try_from_secs_f64(secs.abs()).ok()?;
        shift(secs < 0.0, offset)
    })
}

fn parse_decimal(text: &str) -> Option<SystemTime> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.is_empty() || fraction.len() > 9 || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    let secs = whole.parse::<u64>().ok()?;
    let nanos = if fraction.is_empty() {
        0
    } else {
        format!("{fraction:0<9}").parse::<u32>().ok()?
    };
    shift(negative, Duration::new(secs, nanos))
}

fn shift(negative: bool, offset: Duration) -> Option<SystemTime> {
    if negative {
        UNIX_EPOCH.checked_sub(offset)
    } else {
        UNIX_EPOCH.checked_add(offset)
    }
}

//! Conversion between `hh|mm|ss` time strings and total seconds.

use std::num::ParseIntError;

use crate::error::TimestatError;

pub const SECS_PER_HOUR: u64 = 3600;
pub const SECS_PER_MINUTE: u64 = 60;

/// Field separator inside a time string.
pub const FIELD_SEPARATOR: char = '|';

/// Parse an `hh|mm|ss` string into total seconds.
///
/// Fields are not range-checked: `"00|99|99"` is accepted and computes to
/// `99 * 60 + 99`. Hours may have any number of digits. Each field is read by
/// [`parse_field`], so `"01| 02|03"` and `"1_000|00|00"` are valid.
pub fn to_seconds(time_str: &str) -> Result<u64, TimestatError> {
    let fields: Vec<&str> = time_str.split(FIELD_SEPARATOR).collect();
    let [h, m, s] = fields[..] else {
        return Err(TimestatError::WrongComponentCount {
            input: time_str.to_string(),
            found: fields.len(),
        });
    };

    let parse = |component: &str| {
        parse_field(component).map_err(|source| TimestatError::InvalidComponent {
            input: time_str.to_string(),
            component: component.to_string(),
            source,
        })
    };
    let (hours, minutes, seconds) = (parse(h)?, parse(m)?, parse(s)?);

    hours
        .checked_mul(SECS_PER_HOUR)
        .and_then(|total| total.checked_add(minutes.checked_mul(SECS_PER_MINUTE)?))
        .and_then(|total| total.checked_add(seconds))
        .ok_or_else(|| TimestatError::Overflow {
            input: time_str.to_string(),
        })
}

/// Parse one field as a non-negative decimal integer.
///
/// Surrounding whitespace is ignored, an optional leading `+` is allowed and
/// single `_` separators may appear between digits (`1_000`). A sign of `-`
/// is rejected.
pub fn parse_field(component: &str) -> Result<u64, ParseIntError> {
    let trimmed = component.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    // Misplaced underscores are left in, so `parse` rejects them as invalid digits.
    let grouped = digits
        .split('_')
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()));
    if digits.contains('_') && grouped {
        return digits.replace('_', "").parse::<u64>();
    }
    trimmed.parse::<u64>()
}

/// Render total seconds as `hh|mm|ss`, each field zero-padded to two digits.
///
/// Hours are never truncated, so 100 hours renders as `100|00|00`.
pub fn to_hms(seconds: u64) -> String {
    let h = seconds / SECS_PER_HOUR;
    let m = (seconds % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let s = seconds % SECS_PER_MINUTE;
    format!("{h:02}|{m:02}|{s:02}")
}

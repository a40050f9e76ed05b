//! Range, average and median over a list of `hh|mm|ss` times.
//!
//! A Time List is a sequence of time strings joined by `", "`. Every
//! statistic is computed on whole seconds with floor division and rendered
//! back through [`to_hms`].

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::TimestatError;
use crate::hms::{to_hms, to_seconds};

/// Separator between entries of a Time List.
pub const LIST_SEPARATOR: &str = ", ";

/// Statistics for a non-empty list of times, in seconds.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Number of times the statistics were computed from.
    pub count: usize,
    /// Maximum minus minimum.
    #[serde(serialize_with = "serialize_hms")]
    pub range: u64,
    /// Floor of the arithmetic mean.
    #[serde(serialize_with = "serialize_hms")]
    pub average: u64,
    /// Middle value, or the floor mean of the two middle values for even counts.
    #[serde(serialize_with = "serialize_hms")]
    pub median: u64,
}

fn serialize_hms<S: Serializer>(seconds: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&to_hms(*seconds))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range: {} Average: {} Median: {}",
            to_hms(self.range),
            to_hms(self.average),
            to_hms(self.median)
        )
    }
}

/// Split a Time List and convert every entry to seconds, preserving order.
///
/// The empty string is the empty list. The first entry that fails to parse
/// aborts the whole call and is reported with its 0-based position.
pub fn parse_list(s: &str) -> Result<Vec<u64>, TimestatError> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(LIST_SEPARATOR)
        .enumerate()
        .map(|(index, entry)| {
            to_seconds(entry).map_err(|e| TimestatError::InvalidListEntry {
                index,
                source: Box::new(e),
            })
        })
        .collect()
}

/// Compute range, average and median of `times`. Returns `None` when empty.
pub fn summarize(times: &[u64]) -> Option<Summary> {
    if times.is_empty() {
        return None;
    }

    let mut sorted = times.to_vec();
    sorted.sort_unstable();

    let count = sorted.len();
    let range = sorted[count - 1] - sorted[0];

    // u128 accumulators: a sum of u64 values can exceed u64, their mean cannot.
    let total: u128 = sorted.iter().map(|&t| u128::from(t)).sum();
    let average = (total / count as u128) as u64;

    let mid = count / 2;
    let median = if count % 2 == 1 {
        sorted[mid]
    } else {
        ((u128::from(sorted[mid - 1]) + u128::from(sorted[mid])) / 2) as u64
    };

    let summary = Summary {
        count,
        range,
        average,
        median,
    };
    log::debug!("summarized {count} times: {summary:?}");
    Some(summary)
}

/// Render range, average and median of a Time List.
///
/// Returns `"Range: hh|mm|ss Average: hh|mm|ss Median: hh|mm|ss"`, or an empty
/// string when `s` is empty.
pub fn stat(s: &str) -> Result<String, TimestatError> {
    let times = parse_list(s)?;
    Ok(summarize(&times)
        .map(|summary| summary.to_string())
        .unwrap_or_default())
}

/// Conversion commands: single times to seconds and back.
use anyhow::Context;

use crate::cli::{ToHmsArgs, ToSecondsArgs};
use timestat::hms::{to_hms, to_seconds};

/// Print the total seconds of each `hh|mm|ss` argument, one per line.
pub fn run_to_seconds(args: ToSecondsArgs) -> anyhow::Result<()> {
    for line in seconds_lines(&args.times)? {
        println!("{line}");
    }
    Ok(())
}

/// Print each seconds argument as `hh|mm|ss`, one per line.
pub fn run_to_hms(args: ToHmsArgs) -> anyhow::Result<()> {
    for line in hms_lines(&args.seconds) {
        println!("{line}");
    }
    Ok(())
}

/// Convert every time before returning any line, so a bad argument prints nothing.
pub fn seconds_lines(times: &[String]) -> anyhow::Result<Vec<String>> {
    times
        .iter()
        .map(|time| {
            to_seconds(time)
                .map(|s| s.to_string())
                .with_context(|| format!("Cannot convert '{time}'"))
        })
        .collect()
}

pub fn hms_lines(seconds: &[u64]) -> Vec<String> {
    seconds.iter().map(|&s| to_hms(s)).collect()
}

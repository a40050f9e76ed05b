//! Shared input helpers for the CLI.

use anyhow::Context;
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Strip the line terminator a shell or editor leaves after the list.
///
/// Only one trailing `\n` / `\r\n` is removed here; spaces around fields are
/// handled by the time parser.
pub fn trim_line_end(s: &str) -> &str {
    s.strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(s)
}

/// Read a Time List from `path`, or from stdin when `path` is `-`.
pub fn read_list_from(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        return read_list_from_stdin();
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read time list from {}", path.display()))?;
    Ok(trim_line_end(&content).to_string())
}

/// Read a Time List from stdin. Refuses an interactive terminal rather than
/// blocking on it.
pub fn read_list_from_stdin() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    read_list_from_reader(stdin.is_terminal(), stdin.lock())
}

pub fn read_list_from_reader(is_terminal: bool, mut reader: impl Read) -> anyhow::Result<String> {
    if is_terminal {
        anyhow::bail!(
            "No time list given. Pass LIST (e.g. \"01|15|59, 1|47|16\"), use --file PATH, or pipe the list on stdin."
        );
    }
    let mut buf = String::new();
    reader
        .read_to_string(&mut buf)
        .context("Failed to read time list from stdin")?;
    Ok(trim_line_end(&buf).to_string())
}

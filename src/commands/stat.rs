/// Stat command: range, average and median of a Time List.
use std::path::PathBuf;

use owo_colors::{OwoColorize, Stream::Stdout};

use crate::cli::{OutputFormat, StatArgs};
use timestat::hms::to_hms;
use timestat::stats::{parse_list, summarize, Summary};

/// Where the Time List for a stat run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    Argument(String),
    File(PathBuf),
    Stdin,
}

impl ListSource {
    /// The positional list wins over `--file`; with neither, read stdin.
    pub fn select(list: Option<String>, file: Option<PathBuf>) -> Self {
        match (list, file) {
            (Some(list), _) => ListSource::Argument(list),
            (None, Some(path)) => ListSource::File(path),
            (None, None) => ListSource::Stdin,
        }
    }

    pub fn read(self) -> anyhow::Result<String> {
        match self {
            ListSource::Argument(list) => Ok(list),
            ListSource::File(path) => crate::util::read_list_from(&path),
            ListSource::Stdin => crate::util::read_list_from_stdin(),
        }
    }
}

/// Resolve the list from the positional argument, `--file`, or stdin, then
/// print its statistics in the requested format.
pub fn run_stat(args: StatArgs) -> anyhow::Result<()> {
    // ── 1. Resolve input ─────────────────────────────────────────────────
    let source = ListSource::select(args.list, args.file);
    log::debug!("reading time list from {source:?}");
    let list = source.read()?;

    // ── 2. Parse, summarize and render ───────────────────────────────────
    println!("{}", stat_output(&list, args.format)?);

    Ok(())
}

/// Everything `run_stat` prints for `list`.
pub fn stat_output(list: &str, format: OutputFormat) -> anyhow::Result<String> {
    let times = parse_list(list)?;
    log::debug!("parsed {} times from input", times.len());
    let summary = summarize(&times);

    if format == OutputFormat::Table && summary.is_none() {
        return Ok("No times given."
            .if_supports_color(Stdout, |t| t.yellow())
            .to_string());
    }
    render(format, summary.as_ref())
}

/// Render a summary in `format`. An empty list renders as an empty line in
/// plain format and as `null` in JSON.
pub fn render(format: OutputFormat, summary: Option<&Summary>) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Plain => summary.map(Summary::to_string).unwrap_or_default(),
        OutputFormat::Json => serde_json::to_string(&summary)?,
        OutputFormat::Table => summary.map(render_table).unwrap_or_default(),
    };
    Ok(rendered)
}

fn render_table(summary: &Summary) -> String {
    use comfy_table::{Cell, CellAlignment, Table};

    let mut table = Table::new();
    table.set_header(vec!["Statistic", "hh|mm|ss", "Seconds"]);

    for (label, seconds) in [
        ("Range", summary.range),
        ("Average", summary.average),
        ("Median", summary.median),
    ] {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(to_hms(seconds)),
            Cell::new(seconds).set_alignment(CellAlignment::Right),
        ]);
    }
    table.add_row(vec![
        Cell::new("Count"),
        Cell::new(""),
        Cell::new(summary.count).set_alignment(CellAlignment::Right),
    ]);

    table.to_string()
}

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::conference::{ConferenceRegistry, ConferenceSummary};
use crate::config::{Config, InputConfig};
use crate::constants::{format_ratio, REPORT_SEPARATOR};
use crate::error::{ConferenceError, Result};
use crate::selector::{select_top_conferences_with, ConferenceAverage};
use crate::team::TeamRecord;

/// Filter one raw line down to the text the record parser should see.
///
/// Returns `None` for comment lines (and blank lines when configured).
/// A line starting with a numeric character (any Unicode digit, so `²` and
/// `٣` count too) loses that single character and the whitespace around
/// the remainder, so `1 Duke (ACC) 20 10` style numbering is accepted;
/// only one character is removed.
pub fn preprocess_line<'a>(line: &'a str, input: &InputConfig) -> Option<&'a str> {
    let first = line.chars().next();

    if first == Some(input.comment_marker) {
        return None;
    }
    if input.skip_blank_lines && line.trim().is_empty() {
        return None;
    }

    match first {
        Some(c) if input.strip_numbering && c.is_numeric() => Some(line[c.len_utf8()..].trim()),
        _ => Some(line),
    }
}

/// Build a registry from every record line in `reader`.
///
/// The first parse failure aborts loading; the error carries the 1-based
/// line number.
pub fn load_registry<R: BufRead>(reader: R, input: &InputConfig) -> Result<ConferenceRegistry> {
    let mut registry = ConferenceRegistry::new();
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(text) = preprocess_line(&line, input) else {
            skipped += 1;
            continue;
        };

        let team = TeamRecord::parse(text).map_err(|e| ConferenceError::AtLine {
            line_no: idx + 1,
            source: Box::new(e),
        })?;
        log::debug!("{} -> {}", team, team.conference);
        registry.add(team);
    }

    log::info!(
        "Loaded {} teams in {} conferences ({} lines skipped)",
        registry.team_count(),
        registry.len(),
        skipped
    );
    Ok(registry)
}

/// Open `path` and load its records.
pub fn load_registry_from_path(path: &str, input: &InputConfig) -> Result<ConferenceRegistry> {
    let file = File::open(Path::new(path)).map_err(|e| ConferenceError::FileOpen {
        path: path.to_string(),
        source: e,
    })?;
    load_registry(BufReader::new(file), input)
}

/// Result of one run: the best conferences, plus every conference's
/// summary when a full listing was requested.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub top: Vec<ConferenceAverage>,

    /// Empty unless `report.show_all` is set
    pub all: Vec<ConferenceSummary>,
}

impl Report {
    /// Text printed on stdout for this report.
    pub fn render(&self, precision: Option<usize>) -> String {
        let mut output = format_report(&self.top, precision);
        if !self.all.is_empty() {
            output.push_str(&format_summaries(&self.all, precision));
        }
        output
    }
}

/// Load `path` and return the conferences tied for the best average.
pub fn run(path: &str, config: &Config) -> Result<Report> {
    let registry = load_registry_from_path(path, &config.input)?;
    let top = select_top_conferences_with(&registry, config.selection.tie_epsilon)?;
    let all = if config.report.show_all {
        registry.summaries()?
    } else {
        Vec::new()
    };
    Ok(Report { top, all })
}

/// Render `name : ratio` lines, one per conference.
pub fn format_report(conferences: &[ConferenceAverage], precision: Option<usize>) -> String {
    conferences
        .iter()
        .map(|c| format!("{}{}{}\n", c.name, REPORT_SEPARATOR, format_ratio(c.average, precision)))
        .collect()
}

/// Render the full listing: a blank line and header, then one line per
/// conference with its spread.
pub fn format_summaries(summaries: &[ConferenceSummary], precision: Option<usize>) -> String {
    let mut output = String::from("\nAll conferences:\n");
    for s in summaries {
        output.push_str(&format!(
            "{}{}{} ({} {}, min {}, max {}, std dev {})\n",
            s.name,
            REPORT_SEPARATOR,
            format_ratio(s.average, precision),
            s.teams,
            if s.teams == 1 { "team" } else { "teams" },
            format_ratio(s.min, precision),
            format_ratio(s.max, precision),
            format_ratio(s.std_dev, precision),
        ));
    }
    output
}

/// Where the CLI writes a failure message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureOutput {
    Stdout(String),
    Stderr(String),
}

/// Message the CLI prints for `err` before exiting with status 1.
///
/// An unopenable input file gets the fixed `ERROR: Could not open file`
/// line on stdout; every other error goes to stderr.
pub fn failure_output(err: &ConferenceError) -> FailureOutput {
    match err {
        ConferenceError::FileOpen { path, .. } => {
            FailureOutput::Stdout(format!("ERROR: Could not open file {}", path))
        }
        other => FailureOutput::Stderr(format!("Error: {}", other)),
    }
}

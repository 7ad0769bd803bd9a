//! Python bindings, built with the `python` feature.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::io::Cursor;

use crate::config::InputConfig;
use crate::error::ConferenceError;
use crate::pipeline::{load_registry, load_registry_from_path};
use crate::selector::{select_top_conferences, ConferenceAverage};
use crate::team::TeamRecord;

impl From<ConferenceError> for PyErr {
    fn from(err: ConferenceError) -> PyErr {
        match err.root() {
            ConferenceError::FileOpen { .. } | ConferenceError::Io(_) => PyIOError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}

fn to_pairs(top: Vec<ConferenceAverage>) -> Vec<(String, f64)> {
    top.into_iter().map(|c| (c.name, c.average)).collect()
}

/// Parse one team line into `(name, conference, win_ratio)`.
#[pyfunction]
fn parse_team_line(line: &str) -> PyResult<(String, String, f64)> {
    let team = TeamRecord::parse(line)?;
    Ok((team.name, team.conference, team.win_ratio))
}

/// Conferences tied for the best average win ratio in a listing file.
#[pyfunction]
fn top_conferences(path: &str) -> PyResult<Vec<(String, f64)>> {
    let registry = load_registry_from_path(path, &InputConfig::default())?;
    Ok(to_pairs(select_top_conferences(&registry)?))
}

/// Same as `top_conferences`, reading from already-loaded lines.
#[pyfunction]
fn top_conferences_from_lines(lines: Vec<String>) -> PyResult<Vec<(String, f64)>> {
    let text = lines.join("\n");
    let registry = load_registry(Cursor::new(text), &InputConfig::default())?;
    Ok(to_pairs(select_top_conferences(&registry)?))
}

/// Python module definition
#[pymodule]
fn conference_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_team_line, m)?)?;
    m.add_function(wrap_pyfunction!(top_conferences, m)?)?;
    m.add_function(wrap_pyfunction!(top_conferences_from_lines, m)?)?;
    Ok(())
}

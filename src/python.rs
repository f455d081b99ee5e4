//! PyO3 bindings. Built only with the `python` feature.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};
use tracing::debug;

use crate::error::RecordError;
use crate::match_record::{MatchRecord, MatchResult};
use crate::results_file::read_results_file;
use crate::standings::{compute_standings, TeamStanding};

#[pymethods]
impl TeamStanding {
    /// Plain dict with the keys the Python side expects
    /// (`team`, `played`, `won`, `lost`, `tied`, `noResult`, `points`).
    pub fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        dict.set_item("team", &self.team)?;
        dict.set_item("played", self.played)?;
        dict.set_item("won", self.won)?;
        dict.set_item("lost", self.lost)?;
        dict.set_item("tied", self.tied)?;
        dict.set_item("noResult", self.no_result)?;
        dict.set_item("points", self.points)?;
        Ok(dict)
    }

    fn __repr__(&self) -> String {
        format!(
            "TeamStanding({:?}, played={}, won={}, lost={}, tied={}, noResult={}, points={})",
            self.team, self.played, self.won, self.lost, self.tied, self.no_result, self.points
        )
    }
}

/// Read an optional string field; anything that is not a `str` counts as absent.
fn text_field(dict: &Bound<'_, PyDict>, key: &str) -> Option<String> {
    dict.get_item(key)
        .ok()
        .flatten()
        .and_then(|value| value.extract::<String>().ok())
}

fn record_from_py(item: &Bound<'_, PyAny>) -> Result<MatchRecord, RecordError> {
    let dict = item.downcast::<PyDict>().map_err(|_| RecordError::NotAnObject)?;

    let team1 = text_field(dict, "team1").ok_or(RecordError::MissingTeam { field: "team1" })?;
    let team2 = text_field(dict, "team2").ok_or(RecordError::MissingTeam { field: "team2" })?;
    let winner = text_field(dict, "winner");
    let result = MatchResult::from_label(text_field(dict, "result").as_deref(), winner);

    Ok(MatchRecord::new(team1, team2, result))
}

/// Build the points table from a list of match dicts.
///
/// Each match: `{"team1": "CSK", "team2": "MI", "result": "win", "winner": "CSK"}`.
/// Returns `[]` for anything that is not a non-empty list.
#[pyfunction]
pub fn points_table(matches: &Bound<'_, PyAny>) -> Vec<TeamStanding> {
    let Ok(list) = matches.downcast::<PyList>() else {
        return Vec::new();
    };

    let records: Vec<MatchRecord> = list
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match record_from_py(&item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(index, "skipping match record: {}", e);
                None
            }
        })
        .collect();

    compute_standings(&records)
}

/// Build the points table from a CSV results file (team1,team2,result[,winner]).
#[pyfunction]
pub fn points_table_from_file(filepath: &str) -> PyResult<Vec<TeamStanding>> {
    let records = read_results_file(filepath)
        .map_err(|e| pyo3::exceptions::PyIOError::new_err(e.to_string()))?;
    Ok(compute_standings(&records))
}

/// Python module definition
#[pymodule]
fn standings_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<TeamStanding>()?;

    m.add_function(wrap_pyfunction!(points_table, m)?)?;
    m.add_function(wrap_pyfunction!(points_table_from_file, m)?)?;

    m.add("WIN_POINTS", crate::constants::WIN_POINTS)?;
    m.add("TIE_POINTS", crate::constants::TIE_POINTS)?;
    m.add("NO_RESULT_POINTS", crate::constants::NO_RESULT_POINTS)?;

    Ok(())
}

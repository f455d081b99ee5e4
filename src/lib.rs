//! Standings Core - league points table computation.
//!
//! Turns a list of match results (win / tie / no-result) into a ranked table
//! of per-team statistics. Python bindings via PyO3 are available with the
//! `python` feature.

pub mod collation;
pub mod constants;
pub mod error;
pub mod match_record;
#[cfg(feature = "python")]
pub mod python;
pub mod results_file;
pub mod standings;

pub use collation::TeamNameCollator;
pub use constants::{LOSS_POINTS, NO_RESULT_POINTS, TIE_POINTS, WIN_POINTS};
pub use error::{RecordError, ResultsFileError};
pub use match_record::{MatchRecord, MatchResult};
pub use results_file::{parse_results, read_results_file};
pub use standings::{
    compute_standings, compute_standings_batch, standings_from_json, standings_from_json_str,
    StandingsTable, TeamStanding,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;
use rayon::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, debug_span};

use crate::collation::TeamNameCollator;
use crate::constants::{LOSS_POINTS, NO_RESULT_POINTS, TIE_POINTS, WIN_POINTS};
use crate::match_record::{MatchRecord, MatchResult};

/// A team's cumulative statistics over a set of matches.
///
/// `played == won + lost + tied + no_result` and
/// `points == 2 * won + tied + no_result` hold for every standing produced
/// by [`compute_standings`].
#[cfg_attr(feature = "python", pyclass(get_all))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub tied: u32,
    pub no_result: u32,
    pub points: u32,
}

impl TeamStanding {
    pub fn new(team: impl Into<String>) -> Self {
        TeamStanding {
            team: team.into(),
            ..Default::default()
        }
    }
}

/// Transient accumulator from team name to standing, rebuilt for every
/// computation.
#[derive(Debug, Default)]
pub struct StandingsTable {
    entries: HashMap<String, TeamStanding>,
}

impl StandingsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Standing for `team`, created zeroed on first sight.
    fn entry(&mut self, team: &str) -> &mut TeamStanding {
        self.entries
            .entry(team.to_string())
            .or_insert_with(|| TeamStanding::new(team))
    }

    /// Apply one match to the table.
    pub fn record(&mut self, m: &MatchRecord) {
        self.entry(&m.team1).played += 1;
        self.entry(&m.team2).played += 1;

        match &m.result {
            MatchResult::Win { .. } => {
                // A win without a usable winner still counts as played for
                // both sides but credits neither.
                let Some((winner, loser)) = m.decided() else {
                    debug!(team1 = %m.team1, team2 = %m.team2, "win without a valid winner");
                    return;
                };

                let w = self.entry(winner);
                w.won += 1;
                w.points += WIN_POINTS;

                let l = self.entry(loser);
                l.lost += 1;
                l.points += LOSS_POINTS;
            }
            MatchResult::Tie => {
                for team in [&m.team1, &m.team2] {
                    let s = self.entry(team);
                    s.tied += 1;
                    s.points += TIE_POINTS;
                }
            }
            MatchResult::NoResult => {
                for team in [&m.team1, &m.team2] {
                    let s = self.entry(team);
                    s.no_result += 1;
                    s.points += NO_RESULT_POINTS;
                }
            }
            MatchResult::Unrecognized => {
                debug!(team1 = %m.team1, team2 = %m.team2, "unrecognized match result");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table into a ranking: points descending, then team name
    /// in alphabetical (collated) order.
    pub fn into_ranked(self) -> Vec<TeamStanding> {
        let collator = TeamNameCollator::new();
        let mut standings: Vec<TeamStanding> = self.entries.into_values().collect();
        standings.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| collator.compare(&a.team, &b.team))
        });
        standings
    }
}

/// Compute the ranked standings table for a sequence of matches.
///
/// Every call starts from an empty table; no state is kept between calls.
pub fn compute_standings(matches: &[MatchRecord]) -> Vec<TeamStanding> {
    if matches.is_empty() {
        return Vec::new();
    }

    let _span = debug_span!("compute_standings", matches = matches.len()).entered();

    let mut table = StandingsTable::new();
    for m in matches {
        table.record(m);
    }

    debug!(teams = table.len(), "standings accumulated");
    table.into_ranked()
}

/// Compute standings for several independent match sets (seasons, groups).
///
/// Uses parallel processing; each set gets its own table.
pub fn compute_standings_batch(seasons: &[Vec<MatchRecord>]) -> Vec<Vec<TeamStanding>> {
    seasons
        .par_iter()
        .map(|matches| compute_standings(matches))
        .collect()
}

/// Compute standings from loosely shaped JSON.
///
/// Anything other than a non-empty array yields an empty table. Elements
/// that fail the record shape check are skipped.
pub fn standings_from_json(value: &Value) -> Vec<TeamStanding> {
    let Some(items) = value.as_array() else {
        debug!("standings input is not an array");
        return Vec::new();
    };

    let records: Vec<MatchRecord> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match MatchRecord::try_from(item) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!(index, "skipping match record: {}", e);
                None
            }
        })
        .collect();

    compute_standings(&records)
}

/// Parse JSON text and compute standings. Only text that is not JSON at all
/// is an error; malformed records inside valid JSON are skipped.
pub fn standings_from_json_str(json: &str) -> Result<Vec<TeamStanding>, serde_json::Error> {
    let value: Value = serde_json::from_str(json)?;
    Ok(standings_from_json(&value))
}

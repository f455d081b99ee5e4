use serde_json::Value;

use crate::constants::{RESULT_NO_RESULT, RESULT_TIE, RESULT_WIN};
use crate::error::RecordError;

/// Outcome category of a single fixture.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// A decided match. `winner` is whatever the source supplied and is only
    /// honoured when it names one of the two teams.
    Win { winner: Option<String> },
    Tie,
    NoResult,
    /// Any other label. Counts as played, nothing else.
    Unrecognized,
}

impl MatchResult {
    /// Build a result from its text label and the optional winner field.
    pub fn from_label(label: Option<&str>, winner: Option<String>) -> Self {
        match label {
            Some(RESULT_WIN) => MatchResult::Win { winner },
            Some(RESULT_TIE) => MatchResult::Tie,
            Some(RESULT_NO_RESULT) => MatchResult::NoResult,
            _ => MatchResult::Unrecognized,
        }
    }
}

/// One fixture result between two teams.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub team1: String,
    pub team2: String,
    pub result: MatchResult,
}

impl MatchRecord {
    pub fn new(team1: impl Into<String>, team2: impl Into<String>, result: MatchResult) -> Self {
        MatchRecord {
            team1: team1.into(),
            team2: team2.into(),
            result,
        }
    }

    pub fn win(team1: impl Into<String>, team2: impl Into<String>, winner: impl Into<String>) -> Self {
        Self::new(team1, team2, MatchResult::Win { winner: Some(winner.into()) })
    }

    pub fn tie(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self::new(team1, team2, MatchResult::Tie)
    }

    pub fn no_result(team1: impl Into<String>, team2: impl Into<String>) -> Self {
        Self::new(team1, team2, MatchResult::NoResult)
    }

    /// Returns `(winner, loser)` for a win whose winner names one of the teams.
    pub fn decided(&self) -> Option<(&str, &str)> {
        let MatchResult::Win { winner: Some(winner) } = &self.result else {
            return None;
        };

        if *winner == self.team1 {
            Some((&self.team1, &self.team2))
        } else if *winner == self.team2 {
            Some((&self.team2, &self.team1))
        } else {
            None
        }
    }
}

impl TryFrom<&Value> for MatchRecord {
    type Error = RecordError;

    /// Shape-check a JSON object of the form
    /// `{ "team1": "CSK", "team2": "MI", "result": "win", "winner": "CSK" }`.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let obj = value.as_object().ok_or(RecordError::NotAnObject)?;

        let team1 = obj
            .get("team1")
            .and_then(Value::as_str)
            .ok_or(RecordError::MissingTeam { field: "team1" })?;
        let team2 = obj
            .get("team2")
            .and_then(Value::as_str)
            .ok_or(RecordError::MissingTeam { field: "team2" })?;

        let winner = obj.get("winner").and_then(Value::as_str).map(str::to_owned);
        let result = MatchResult::from_label(obj.get("result").and_then(Value::as_str), winner);

        Ok(MatchRecord::new(team1, team2, result))
    }
}

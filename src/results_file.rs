use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::ResultsFileError;
use crate::match_record::{MatchRecord, MatchResult};

/// Read match results from a CSV file.
/// Format: team1,team2,result[,winner]
///
/// Blank lines and lines starting with `#` are ignored. Lines with fewer
/// than three fields are skipped like any other malformed record.
pub fn read_results_file(filepath: impl AsRef<Path>) -> Result<Vec<MatchRecord>, ResultsFileError> {
    let path = filepath.as_ref();
    let io_err = |source| ResultsFileError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::open(path).map_err(io_err)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(io_err)?;
        if let Some(record) = parse_line(index + 1, &line) {
            records.push(record);
        }
    }

    debug!(path = %path.display(), records = records.len(), "read results file");
    Ok(records)
}

/// Same as [`read_results_file`] for text already in memory.
pub fn parse_results(text: &str) -> Vec<MatchRecord> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(line_no: usize, line: &str) -> Option<MatchRecord> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        debug!(line = line_no, "skipping results line with {} fields", parts.len());
        return None;
    }

    let winner = parts
        .get(3)
        .filter(|w| !w.is_empty())
        .map(|w| w.to_string());
    let result = MatchResult::from_label(Some(parts[2]), winner);

    Some(MatchRecord::new(parts[0], parts[1], result))
}

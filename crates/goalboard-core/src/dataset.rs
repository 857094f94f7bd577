// Goal record loading.
//
// Reads the goal CSV once at startup into an immutable `Dataset`. Every
// required column must be present in the header; a missing column, an I/O
// failure, or a structurally broken row aborts the load so that no partial
// dataset is ever served. Dates are the one tolerated defect: a value that
// matches none of the configured formats is kept as `None`.

use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{info, warn};

use crate::record::MatchGoalRecord;

/// Header names the source CSV must contain.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Date",
    "Season",
    "Competition",
    "Club",
    "Opponent",
    "Minute",
    "Result",
    "Venue",
    "Playing_Position",
    "Type",
    "Goal_assist",
];

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} has no header row")]
    EmptyHeader { path: String },

    #[error("{path} is missing required column `{column}`")]
    MissingColumn { path: String, column: &'static str },
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// The full, read-only set of goal records for one session.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<MatchGoalRecord>,
    source: PathBuf,
}

impl Dataset {
    /// Load the dataset from a CSV file.
    pub fn load(path: &Path, date_formats: &[String]) -> Result<Self, DatasetError> {
        let file = std::fs::File::open(path).map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        let records = load_records_from_reader(file, &path.display().to_string(), date_formats)?;
        info!("Loaded {} goal records from {}", records.len(), path.display());
        if records.is_empty() {
            warn!("{} contains no goal records", path.display());
        }
        Ok(Dataset {
            records,
            source: path.to_path_buf(),
        })
    }

    /// Wrap records that were built in memory.
    pub fn from_records(records: Vec<MatchGoalRecord>) -> Self {
        Dataset {
            records,
            source: PathBuf::new(),
        }
    }

    pub fn records(&self) -> &[MatchGoalRecord] {
        &self.records
    }

    /// Where the records were loaded from; empty for in-memory datasets.
    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// One CSV row as written. Extra columns are ignored by the CSV deserializer.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawGoalRow {
    Date: String,
    Season: String,
    Competition: String,
    Club: String,
    Opponent: String,
    Minute: String,
    Result: String,
    Venue: String,
    Playing_Position: String,
    Type: String,
    Goal_assist: String,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a date with the first matching format, or `None`.
pub fn parse_date(raw: &str, formats: &[String]) -> Option<NaiveDate> {
    if raw.is_empty() {
        return None;
    }
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Read and normalize records. `source` names the input in error messages.
pub fn load_records_from_reader<R: Read>(
    rdr: R,
    source: &str,
    date_formats: &[String],
) -> Result<Vec<MatchGoalRecord>, DatasetError> {
    let csv_err = |e: csv::Error| DatasetError::Csv {
        path: source.to_string(),
        source: e,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader.headers().map_err(csv_err)?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(DatasetError::EmptyHeader {
            path: source.to_string(),
        });
    }
    if let Some(column) = REQUIRED_COLUMNS
        .iter()
        .copied()
        .find(|col| !headers.iter().any(|h| h == *col))
    {
        return Err(DatasetError::MissingColumn {
            path: source.to_string(),
            column,
        });
    }

    let mut records = Vec::new();
    let mut bad_dates = 0usize;
    for result in reader.deserialize::<RawGoalRow>() {
        let raw = result.map_err(csv_err)?;

        let date = parse_date(&raw.Date, date_formats);
        if date.is_none() && !raw.Date.is_empty() {
            bad_dates += 1;
        }

        records.push(MatchGoalRecord {
            date,
            season: raw.Season,
            competition: raw.Competition,
            club: raw.Club,
            opponent: raw.Opponent,
            minute_raw: raw.Minute,
            result_raw: raw.Result,
            venue: raw.Venue,
            playing_position: raw.Playing_Position,
            goal_type: raw.Type,
            assist_provider: non_empty(raw.Goal_assist),
        });
    }

    if bad_dates > 0 {
        warn!("{}: {} dates matched no configured format and were left empty", source, bad_dates);
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

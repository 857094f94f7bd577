// Goal record: one row of the source CSV after normalization.

use chrono::NaiveDate;

/// Label used when grouping goals that have no assist provider.
pub const UNASSISTED_LABEL: &str = "Unassisted";

/// One logged goal. Never mutated after the dataset is loaded; derived values
/// (numeric minute, result label, quarter) are computed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchGoalRecord {
    /// Match date, or `None` when the source value was absent or unparseable.
    pub date: Option<NaiveDate>,
    pub season: String,
    pub competition: String,
    pub club: String,
    pub opponent: String,
    /// Match minute as written in the source, e.g. `"45+2"`.
    pub minute_raw: String,
    /// Scoreline as written in the source, e.g. `"3-1"`.
    pub result_raw: String,
    pub venue: String,
    pub playing_position: String,
    pub goal_type: String,
    /// `None` for an unassisted goal.
    pub assist_provider: Option<String>,
}

impl MatchGoalRecord {
    /// Assist provider name, or [`UNASSISTED_LABEL`] for unassisted goals.
    pub fn assist_label(&self) -> &str {
        self.assist_provider.as_deref().unwrap_or(UNASSISTED_LABEL)
    }
}

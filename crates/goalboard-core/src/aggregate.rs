// Aggregation engine: group records by a categorical dimension and count.
//
// Groups are collected in first-seen order and then stable-sorted, so equal
// counts always keep the order in which their labels first appeared in the
// input. Output never depends on hash iteration order.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::record::{MatchGoalRecord, UNASSISTED_LABEL};

// ---------------------------------------------------------------------------
// Selector types
// ---------------------------------------------------------------------------

/// A categorical field that records can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Season,
    Competition,
    Club,
    Opponent,
    AssistProvider,
    PlayingPosition,
    GoalType,
    Venue,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Dimension::Season,
        Dimension::Competition,
        Dimension::Club,
        Dimension::Opponent,
        Dimension::AssistProvider,
        Dimension::PlayingPosition,
        Dimension::GoalType,
        Dimension::Venue,
    ];

    /// Display name for axis titles and table headers.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Season => "Season",
            Dimension::Competition => "Competition",
            Dimension::Club => "Club",
            Dimension::Opponent => "Opponent",
            Dimension::AssistProvider => "Assist Provider",
            Dimension::PlayingPosition => "Playing Position",
            Dimension::GoalType => "Goal Type",
            Dimension::Venue => "Venue",
        }
    }

    /// The grouping value of `record` for this dimension.
    ///
    /// Unassisted goals group under [`UNASSISTED_LABEL`] so that every record
    /// lands in exactly one group.
    pub fn value<'a>(&self, record: &'a MatchGoalRecord) -> &'a str {
        match self {
            Dimension::Season => &record.season,
            Dimension::Competition => &record.competition,
            Dimension::Club => &record.club,
            Dimension::Opponent => &record.opponent,
            Dimension::AssistProvider => record.assist_label(),
            Dimension::PlayingPosition => &record.playing_position,
            Dimension::GoalType => &record.goal_type,
            Dimension::Venue => &record.venue,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordering applied to grouped counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Largest count first.
    Descending,
    /// Smallest count first.
    Ascending,
    /// Lexicographic by label, ignoring counts. Season labels such as
    /// "2008-2009" sort chronologically this way.
    Label,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Descending => "Descending",
            SortOrder::Ascending => "Ascending",
            SortOrder::Label => "By label",
        }
    }

    /// Flip between the two count orders. `Label` switches to `Descending`.
    pub fn toggle(&self) -> Self {
        match self {
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending | SortOrder::Label => SortOrder::Descending,
        }
    }
}

// ---------------------------------------------------------------------------
// Output type
// ---------------------------------------------------------------------------

/// One group in an aggregation result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub label: String,
    pub count: usize,
}

impl GroupCount {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        GroupCount {
            label: label.into(),
            count,
        }
    }
}

// ---------------------------------------------------------------------------
// Core operations
// ---------------------------------------------------------------------------

/// Count occurrences of each label, keeping groups in first-seen order.
pub fn tally<'a, I>(labels: I) -> Vec<GroupCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<GroupCount> = Vec::new();

    for label in labels {
        match index.get(label) {
            Some(&i) => groups[i].count += 1,
            None => {
                index.insert(label, groups.len());
                groups.push(GroupCount::new(label, 1));
            }
        }
    }

    groups
}

/// Stable-sort groups in place. Ties keep their current relative order.
pub fn sort_groups(groups: &mut [GroupCount], order: SortOrder) {
    match order {
        SortOrder::Descending => groups.sort_by(|a, b| b.count.cmp(&a.count)),
        SortOrder::Ascending => groups.sort_by(|a, b| a.count.cmp(&b.count)),
        SortOrder::Label => groups.sort_by(|a, b| a.label.cmp(&b.label)),
    }
}

/// Group `records` by `dimension`, count each group, sort, and cap at `top_n`.
///
/// With `top_n` of `None` the counts sum to the number of records. Empty
/// input yields an empty result.
pub fn aggregate<'a, I>(
    records: I,
    dimension: Dimension,
    order: SortOrder,
    top_n: Option<usize>,
) -> Vec<GroupCount>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    let mut groups = tally(records.into_iter().map(|r| dimension.value(r)));
    sort_groups(&mut groups, order);
    if let Some(n) = top_n {
        groups.truncate(n);
    }
    groups
}

/// Keep only records whose competition is one of `selected`.
///
/// Names in `selected` that match no record are ignored. An empty selection
/// yields an empty subset.
pub fn filter_competitions<'a, I, S>(records: I, selected: &[S]) -> Vec<&'a MatchGoalRecord>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
    S: AsRef<str>,
{
    let wanted: HashSet<&str> = selected.iter().map(|s| s.as_ref()).collect();
    records
        .into_iter()
        .filter(|r| wanted.contains(r.competition.as_str()))
        .collect()
}

/// Rank assist providers by assists, most first, excluding unassisted goals.
pub fn top_assist_providers<'a, I>(records: I, top_n: Option<usize>) -> Vec<GroupCount>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    let mut groups = tally(
        records
            .into_iter()
            .filter_map(|r| r.assist_provider.as_deref()),
    );
    sort_groups(&mut groups, SortOrder::Descending);
    if let Some(n) = top_n {
        groups.truncate(n);
    }
    groups
}

/// Distinct values of `dimension` in first-seen order.
pub fn distinct_values<'a, I>(records: I, dimension: Dimension) -> Vec<String>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    tally(records.into_iter().map(|r| dimension.value(r)))
        .into_iter()
        .map(|g| g.label)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

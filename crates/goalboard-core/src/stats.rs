// Derived statistics built on the parsers and the aggregation engine.
//
// Minute policy per consumer:
// - average_minute_by_season: Fractional (stoppage as sixtieths of a minute)
// - minute_distribution, goals_by_quarter: Truncating (whole minutes)

use std::collections::BTreeMap;

use thiserror::Error;

use crate::aggregate::{sort_groups, tally, GroupCount, SortOrder};
use crate::minute::{parse_minute, MalformedMinuteError, MinutePolicy};
use crate::quarter::{bucket_quarter, MatchQuarter};
use crate::record::MatchGoalRecord;
use crate::result::{classify_result, MalformedResultError};

/// Failure of a transform that derives a value from a raw field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error(transparent)]
    Minute(#[from] MalformedMinuteError),

    #[error(transparent)]
    Result(#[from] MalformedResultError),
}

/// Mean goal minute for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonAverage {
    pub season: String,
    pub average_minute: f64,
    pub goals: usize,
}

/// Number of goals scored in one whole minute of play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteCount {
    pub minute: u32,
    pub count: usize,
}

/// A group's count together with its percentage of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

/// Goals scored in `season`.
pub fn season_goal_count<'a, I>(records: I, season: &str) -> usize
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    records.into_iter().filter(|r| r.season == season).count()
}

/// Average goal minute per season, seasons in label order.
///
/// Uses the fractional policy. A single malformed minute fails the whole
/// computation rather than being skipped or read as zero.
pub fn average_minute_by_season<'a, I>(records: I) -> Result<Vec<SeasonAverage>, MalformedMinuteError>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    let mut sums: BTreeMap<&'a str, (f64, usize)> = BTreeMap::new();
    for record in records {
        let minute = parse_minute(&record.minute_raw, MinutePolicy::Fractional)?;
        let entry = sums.entry(record.season.as_str()).or_insert((0.0, 0));
        entry.0 += minute;
        entry.1 += 1;
    }

    Ok(sums
        .into_iter()
        .map(|(season, (sum, goals))| SeasonAverage {
            season: season.to_string(),
            average_minute: sum / goals as f64,
            goals,
        })
        .collect())
}

/// The last `n` entries of `series`, or all of it when shorter.
pub fn tail<T>(series: &[T], n: usize) -> &[T] {
    &series[series.len().saturating_sub(n)..]
}

/// Goals per whole minute within `quarter`, ascending by minute.
///
/// Uses the truncating policy, so "45+2" counts as minute 47.
pub fn minute_distribution<'a, I>(
    records: I,
    quarter: MatchQuarter,
) -> Result<Vec<MinuteCount>, MalformedMinuteError>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for record in records {
        let minute = parse_minute(&record.minute_raw, MinutePolicy::Truncating)?;
        if quarter.contains(minute) {
            *counts.entry(minute as u32).or_insert(0) += 1;
        }
    }

    Ok(counts
        .into_iter()
        .map(|(minute, count)| MinuteCount { minute, count })
        .collect())
}

/// Goals per match quarter, Q1 through Q4, including empty quarters.
pub fn goals_by_quarter<'a, I>(records: I) -> Result<Vec<GroupCount>, MalformedMinuteError>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    let mut counts = [0usize; 4];
    for record in records {
        let minute = parse_minute(&record.minute_raw, MinutePolicy::Truncating)?;
        counts[bucket_quarter(minute) as usize] += 1;
    }

    Ok(MatchQuarter::ALL
        .iter()
        .zip(counts)
        .map(|(q, count)| GroupCount::new(q.label(), count))
        .collect())
}

/// Goals per match result, most frequent first.
pub fn goals_by_result<'a, I>(records: I) -> Result<Vec<GroupCount>, MalformedResultError>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    let labels = records
        .into_iter()
        .map(|r| classify_result(&r.result_raw).map(|res| res.label()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut groups = tally(labels);
    sort_groups(&mut groups, SortOrder::Descending);
    Ok(groups)
}

/// Convert counts into percentage shares of their total.
pub fn shares(groups: &[GroupCount]) -> Vec<Share> {
    let total: usize = groups.iter().map(|g| g.count).sum();
    groups
        .iter()
        .map(|g| Share {
            label: g.label.clone(),
            count: g.count,
            percent: if total == 0 {
                0.0
            } else {
                g.count as f64 * 100.0 / total as f64
            },
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

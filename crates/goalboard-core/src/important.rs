// Important-match selection.
//
// A goal counts as scored in an important match when its competition name
// contains the configured competition substring, or its opponent name
// contains the configured opponent substring. Both checks are plain,
// case-sensitive substring matches.

use crate::aggregate::{aggregate, Dimension, GroupCount, SortOrder};
use crate::config::ImportantMatchConfig;
use crate::record::MatchGoalRecord;

/// Records from important matches, in their original relative order.
pub fn filter_important<'a, I>(
    records: I,
    competition_substring: &str,
    opponent_substring: &str,
) -> Vec<&'a MatchGoalRecord>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    records
        .into_iter()
        .filter(|r| {
            r.competition.contains(competition_substring) || r.opponent.contains(opponent_substring)
        })
        .collect()
}

/// Goals in important matches per season, seasons in label order.
pub fn important_goals_by_season<'a, I>(records: I, config: &ImportantMatchConfig) -> Vec<GroupCount>
where
    I: IntoIterator<Item = &'a MatchGoalRecord>,
{
    let important = filter_important(records, &config.competition, &config.opponent);
    aggregate(important, Dimension::Season, SortOrder::Label, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::fixtures::goal;

    fn sample() -> Vec<MatchGoalRecord> {
        vec![
            goal("2013-2014", "UEFA Champions League Final", "Atlético de Madrid", "120"),
            goal("2013-2014", "LaLiga", "FC Barcelona", "55"),
            goal("2013-2014", "LaLiga", "Real Betis Balompié", "14"),
            goal("2016-2017", "UEFA Champions League Final", "Juventus FC", "20"),
            goal("2016-2017", "UEFA Champions League Final", "Juventus FC", "64"),
            goal("2016-2017", "Supercopa", "FC Barcelona B", "80"),
            goal("2016-2017", "UEFA Champions League", "SSC Napoli", "31"),
        ]
    }

    #[test]
    fn selects_by_competition_or_opponent() {
        let records = sample();
        let important = filter_important(&records, "Champions League Final", "FC Barcelona");
        assert_eq!(important.len(), 5);
        assert!(important.iter().all(|r| {
            r.competition.contains("Champions League Final") || r.opponent.contains("FC Barcelona")
        }));
        assert!(!important.iter().any(|r| r.opponent == "SSC Napoli"));
        assert!(!important.iter().any(|r| r.opponent == "Real Betis Balompié"));
    }

    #[test]
    fn preserves_relative_order() {
        let records = sample();
        let important = filter_important(&records, "Champions League Final", "FC Barcelona");
        let minutes: Vec<&str> = important.iter().map(|r| r.minute_raw.as_str()).collect();
        assert_eq!(minutes, vec!["120", "55", "20", "64", "80"]);
    }

    #[test]
    fn match_is_case_sensitive() {
        let records = sample();
        assert!(filter_important(&records, "champions league final", "fc barcelona").is_empty());
    }

    #[test]
    fn no_match_gives_empty_subset() {
        let records = sample();
        assert!(filter_important(&records, "World Cup", "Brazil").is_empty());
    }

    #[test]
    fn important_goals_grouped_by_season() {
        let records = sample();
        let config = ImportantMatchConfig {
            competition: "Champions League Final".to_string(),
            opponent: "FC Barcelona".to_string(),
        };
        assert_eq!(
            important_goals_by_season(&records, &config),
            vec![GroupCount::new("2013-2014", 2), GroupCount::new("2016-2017", 3)]
        );
    }
}

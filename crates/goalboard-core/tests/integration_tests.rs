// Integration tests for the analytics core.
//
// These load the fixture CSV through the public API and check the derived
// views end to end: loading, aggregation, important-match selection, minute
// statistics, and result classification.

use std::path::Path;

use goalboard_core::aggregate::{
    aggregate, distinct_values, filter_competitions, top_assist_providers, Dimension, GroupCount,
    SortOrder,
};
use goalboard_core::config::ImportantMatchConfig;
use goalboard_core::dataset::{Dataset, DatasetError};
use goalboard_core::important::{filter_important, important_goals_by_season};
use goalboard_core::quarter::MatchQuarter;
use goalboard_core::record::UNASSISTED_LABEL;
use goalboard_core::stats::{
    average_minute_by_season, goals_by_quarter, goals_by_result, minute_distribution,
    season_goal_count, shares, tail,
};

// ===========================================================================
// Test helpers
// ===========================================================================

/// Fixture directory path (relative to the crate root, which is the cwd for
/// `cargo test`).
const FIXTURES: &str = "tests/fixtures";

fn date_formats() -> Vec<String> {
    vec!["%Y-%m-%d".into(), "%m/%d/%y".into()]
}

fn load_fixture() -> Dataset {
    Dataset::load(&Path::new(FIXTURES).join("goals.csv"), &date_formats())
        .expect("fixture should load")
}

fn important_config() -> ImportantMatchConfig {
    ImportantMatchConfig {
        competition: "Champions League Final".into(),
        opponent: "FC Barcelona".into(),
    }
}

fn labels(groups: &[GroupCount]) -> Vec<&str> {
    groups.iter().map(|g| g.label.as_str()).collect()
}

// ===========================================================================
// Loading
// ===========================================================================

#[test]
fn fixture_loads_every_row() {
    let dataset = load_fixture();
    assert_eq!(dataset.len(), 21);
    assert!(dataset.source().ends_with("goals.csv"));
}

#[test]
fn unparseable_date_does_not_drop_row() {
    let dataset = load_fixture();
    let napoli = dataset
        .records()
        .iter()
        .find(|r| r.opponent == "SSC Napoli")
        .expect("row with bad date should be kept");
    assert!(napoli.date.is_none());
    assert_eq!(napoli.assist_provider.as_deref(), Some("Mario Mandžukić"));

    let dated = dataset.records().iter().filter(|r| r.date.is_some()).count();
    assert_eq!(dated, 20);
}

#[test]
fn missing_file_is_fatal() {
    let err = Dataset::load(Path::new("tests/fixtures/absent.csv"), &date_formats()).unwrap_err();
    assert!(matches!(err, DatasetError::Io { .. }));
}

#[test]
fn loading_twice_gives_identical_aggregations() {
    let first = load_fixture();
    let second = load_fixture();
    for dim in Dimension::ALL {
        assert_eq!(
            aggregate(first.records(), dim, SortOrder::Descending, None),
            aggregate(second.records(), dim, SortOrder::Descending, None),
            "{dim}"
        );
    }
}

// ===========================================================================
// Aggregation
// ===========================================================================

#[test]
fn every_dimension_accounts_for_every_goal() {
    let dataset = load_fixture();
    for dim in Dimension::ALL {
        for order in [SortOrder::Descending, SortOrder::Ascending] {
            let total: usize = aggregate(dataset.records(), dim, order, None)
                .iter()
                .map(|g| g.count)
                .sum();
            assert_eq!(total, dataset.len(), "{dim} {order:?}");
        }
    }
}

#[test]
fn top_three_competitions() {
    let dataset = load_fixture();
    let groups = aggregate(dataset.records(), Dimension::Competition, SortOrder::Descending, Some(3));
    assert_eq!(
        groups,
        vec![
            GroupCount::new("LaLiga", 7),
            GroupCount::new("Premier League", 4),
            GroupCount::new("UEFA Champions League Final", 4),
        ]
    );
}

#[test]
fn goals_by_season_in_label_order() {
    let dataset = load_fixture();
    let groups = aggregate(dataset.records(), Dimension::Season, SortOrder::Label, None);
    assert_eq!(groups.first(), Some(&GroupCount::new("2002-2003", 2)));
    assert_eq!(groups.last(), Some(&GroupCount::new("2018-2019", 3)));
    assert_eq!(groups.len(), 10);
    assert_eq!(season_goal_count(dataset.records(), "2007-2008"), 4);
}

#[test]
fn club_shares() {
    let dataset = load_fixture();
    let groups = aggregate(dataset.records(), Dimension::Club, SortOrder::Descending, None);
    assert_eq!(labels(&groups), vec!["Real Madrid", "Manchester United", "Juventus FC", "Sporting CP"]);
    let shares = shares(&groups);
    let total: f64 = shares.iter().map(|s| s.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert!((shares[0].percent - 11.0 * 100.0 / 21.0).abs() < 1e-9);
}

#[test]
fn venue_counts() {
    let dataset = load_fixture();
    let groups = aggregate(dataset.records(), Dimension::Venue, SortOrder::Descending, None);
    assert_eq!(
        groups,
        vec![GroupCount::new("H", 9), GroupCount::new("A", 8), GroupCount::new("N", 4)]
    );
}

#[test]
fn assist_rankings() {
    let dataset = load_fixture();

    let with_unassisted =
        aggregate(dataset.records(), Dimension::AssistProvider, SortOrder::Descending, Some(1));
    assert_eq!(with_unassisted, vec![GroupCount::new(UNASSISTED_LABEL, 8)]);

    let top = top_assist_providers(dataset.records(), Some(3));
    assert_eq!(
        top,
        vec![
            GroupCount::new("Wayne Rooney", 2),
            GroupCount::new("Karim Benzema", 2),
            GroupCount::new("Rui Jorge", 1),
        ]
    );
}

#[test]
fn competition_multiselect() {
    let dataset = load_fixture();
    let all = distinct_values(dataset.records(), Dimension::Competition);
    assert_eq!(all.len(), 7);
    assert_eq!(all[0], "Liga Portugal");

    let subset = filter_competitions(dataset.records(), &["Serie A", "Copa del Rey", "Bundesliga"]);
    let groups = aggregate(subset, Dimension::Competition, SortOrder::Descending, None);
    assert_eq!(
        groups,
        vec![GroupCount::new("Copa del Rey", 1), GroupCount::new("Serie A", 1)]
    );

    let nothing: Vec<String> = Vec::new();
    assert!(filter_competitions(dataset.records(), &nothing).is_empty());
}

// ===========================================================================
// Important matches
// ===========================================================================

#[test]
fn important_matches_by_competition_or_opponent() {
    let dataset = load_fixture();
    let important = filter_important(dataset.records(), "Champions League Final", "FC Barcelona");
    assert_eq!(important.len(), 8);
    for record in dataset.records() {
        let expected = record.competition.contains("Champions League Final")
            || record.opponent.contains("FC Barcelona");
        let included = important.iter().any(|r| std::ptr::eq(*r, record));
        assert_eq!(expected, included, "{record:?}");
    }

    let by_season = important_goals_by_season(dataset.records(), &important_config());
    assert_eq!(
        by_season,
        vec![
            GroupCount::new("2007-2008", 1),
            GroupCount::new("2009-2010", 2),
            GroupCount::new("2010-2011", 1),
            GroupCount::new("2011-2012", 1),
            GroupCount::new("2013-2014", 1),
            GroupCount::new("2016-2017", 2),
        ]
    );
}

// ===========================================================================
// Minutes and results
// ===========================================================================

#[test]
fn quarter_tally() {
    let dataset = load_fixture();
    let groups = goals_by_quarter(dataset.records()).unwrap();
    let counts: Vec<usize> = groups.iter().map(|g| g.count).collect();
    assert_eq!(counts, vec![2, 7, 4, 8]);
}

#[test]
fn first_quarter_distribution() {
    let dataset = load_fixture();
    let q1 = minute_distribution(dataset.records(), MatchQuarter::Q1).unwrap();
    let minutes: Vec<u32> = q1.iter().map(|m| m.minute).collect();
    assert_eq!(minutes, vec![19, 20]);
}

#[test]
fn average_goal_minute_per_season() {
    let dataset = load_fixture();
    let averages = average_minute_by_season(dataset.records()).unwrap();
    assert_eq!(averages.len(), 10);

    let season = averages.iter().find(|a| a.season == "2007-2008").unwrap();
    let expected = (19.0 + 45.0 + 1.0 / 60.0 + 26.0 + 47.0) / 4.0;
    assert!((season.average_minute - expected).abs() < 1e-9);

    let last_two = tail(&averages, 2);
    assert_eq!(last_two[0].season, "2016-2017");
    assert_eq!(last_two[1].season, "2018-2019");
}

#[test]
fn win_draw_loss_tally() {
    let dataset = load_fixture();
    let groups = goals_by_result(dataset.records()).unwrap();
    assert_eq!(
        groups,
        vec![
            GroupCount::new("Win", 16),
            GroupCount::new("Loss", 4),
            GroupCount::new("Draw", 1),
        ]
    );
}

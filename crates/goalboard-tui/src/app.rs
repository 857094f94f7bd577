// Session state and panel derivation.
//
// `AppState` holds the shared, read-only dataset plus the configuration.
// `Controls` holds one session's selections. Every user interaction that
// changes `Controls` or the active `Section` triggers exactly one call to
// `AppState::compute_panel`, which runs the relevant transforms against the
// full dataset and returns a render-ready `PanelContent`. Nothing is cached
// between calls.

use std::collections::HashMap;
use std::sync::Arc;

use goalboard_core::aggregate::{
    aggregate, distinct_values, filter_competitions, top_assist_providers, Dimension, GroupCount,
    SortOrder,
};
use goalboard_core::config::Config;
use goalboard_core::dataset::Dataset;
use goalboard_core::important::important_goals_by_season;
use goalboard_core::quarter::MatchQuarter;
use goalboard_core::stats::{
    average_minute_by_season, goals_by_quarter, goals_by_result, minute_distribution,
    season_goal_count, shares, tail, Share, TransformError,
};
use tracing::debug;

// ---------------------------------------------------------------------------
// Selector enums
// ---------------------------------------------------------------------------

/// Sidebar menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    GoalsBySeason,
    GoalsByCompetition,
    AverageGoalMinute,
    AssistProviders,
    GoalsPerClub,
    MatchQuarters,
    GoalTypes,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::GoalsBySeason,
        Section::GoalsByCompetition,
        Section::AverageGoalMinute,
        Section::AssistProviders,
        Section::GoalsPerClub,
        Section::MatchQuarters,
        Section::GoalTypes,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::GoalsBySeason => "Goals by Season",
            Section::GoalsByCompetition => "Goals by Competition",
            Section::AverageGoalMinute => "Average Goal Minute",
            Section::AssistProviders => "Assist Providers",
            Section::GoalsPerClub => "Goals per Club",
            Section::MatchQuarters => "Goals by Match Quarter",
            Section::GoalTypes => "Goal Types",
        }
    }

    fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next menu entry, stopping at the last one.
    pub fn next(&self) -> Self {
        Section::ALL[(self.index() + 1).min(Section::ALL.len() - 1)]
    }

    /// Previous menu entry, stopping at the first one.
    pub fn prev(&self) -> Self {
        Section::ALL[self.index().saturating_sub(1)]
    }
}

/// How a share-of-total breakdown is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Share,
}

impl ChartKind {
    pub fn toggle(&self) -> Self {
        match self {
            ChartKind::Bar => ChartKind::Share,
            ChartKind::Share => ChartKind::Bar,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar chart",
            ChartKind::Share => "Share table",
        }
    }
}

/// Sub-views of the Goal Types section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTypeView {
    PlayingPosition,
    FavoriteOpponents,
    GoalType,
    ImportantMatches,
    WinDrawLoss,
    HomeAway,
}

impl GoalTypeView {
    pub const ALL: [GoalTypeView; 6] = [
        GoalTypeView::PlayingPosition,
        GoalTypeView::FavoriteOpponents,
        GoalTypeView::GoalType,
        GoalTypeView::ImportantMatches,
        GoalTypeView::WinDrawLoss,
        GoalTypeView::HomeAway,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GoalTypeView::PlayingPosition => "Goals by Playing Position",
            GoalTypeView::FavoriteOpponents => "Favorite Opponents",
            GoalTypeView::GoalType => "Goals by Type",
            GoalTypeView::ImportantMatches => "Goals in Important Matches",
            GoalTypeView::WinDrawLoss => "Goals per Win/Draw/Loss",
            GoalTypeView::HomeAway => "Home vs Away Goals",
        }
    }

    fn index(&self) -> usize {
        GoalTypeView::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        GoalTypeView::ALL[(self.index() + 1) % GoalTypeView::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = GoalTypeView::ALL.len();
        GoalTypeView::ALL[(self.index() + len - 1) % len]
    }
}

/// Initial length of the assist list table.
const DEFAULT_ASSIST_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// Session selections
// ---------------------------------------------------------------------------

/// One session's widget selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    /// Index into `Catalog::seasons`.
    pub season_index: usize,
    /// Cursor position in the competition multi-select.
    pub competition_cursor: usize,
    /// Parallel to `Catalog::competitions`.
    pub competition_selected: Vec<bool>,
    pub order: SortOrder,
    /// Slider values keyed by section; a missing entry means the default.
    pub sliders: HashMap<Section, usize>,
    pub show_values: bool,
    /// Index into the configured palette.
    pub color_index: usize,
    pub chart_kind: ChartKind,
    pub quarter: MatchQuarter,
    pub goal_type_view: GoalTypeView,
    /// Rows in the assist list table; `None` means the default.
    pub assist_rows: Option<usize>,
}

/// Selector options derived once from the dataset.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Distinct seasons in label order.
    pub seasons: Vec<String>,
    /// Distinct competitions in first-seen order.
    pub competitions: Vec<String>,
    pub clubs: usize,
    /// Distinct assist providers, unassisted goals excluded.
    pub assist_providers: usize,
}

/// Inclusive slider bounds; the lower bound is always 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub max: usize,
    pub default: usize,
}

// ---------------------------------------------------------------------------
// Panel model
// ---------------------------------------------------------------------------

/// Render-ready content for the main panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelContent {
    pub title: String,
    pub items: Vec<PanelItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelItem {
    Text(Vec<String>),
    Metric { label: String, value: String },
    Bars(BarSeries),
    Shares { title: String, shares: Vec<Share> },
    Table {
        title: String,
        headers: [String; 2],
        rows: Vec<[String; 2]>,
    },
    Picker {
        title: String,
        options: Vec<PickerOption>,
        cursor: usize,
    },
    /// A transform failed; shown in place of that widget only.
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub title: String,
    pub bars: Vec<BarDatum>,
    pub show_values: bool,
    /// Color name understood by ratatui's `Color::from_str`.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
    /// Text shown on the bar when values are visible.
    pub display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerOption {
    pub label: String,
    pub selected: bool,
}

fn count_bars(groups: &[GroupCount]) -> Vec<BarDatum> {
    groups
        .iter()
        .map(|g| BarDatum {
            label: g.label.clone(),
            value: g.count as f64,
            display: g.count.to_string(),
        })
        .collect()
}

fn series(title: impl Into<String>, groups: &[GroupCount], show_values: bool, color: &str) -> PanelItem {
    PanelItem::Bars(BarSeries {
        title: title.into(),
        bars: count_bars(groups),
        show_values,
        color: color.to_string(),
    })
}

fn error_item(err: impl Into<TransformError>) -> PanelItem {
    PanelItem::Error(err.into().to_string())
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    dataset: Arc<Dataset>,
    config: Config,
    catalog: Catalog,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>, config: Config) -> Self {
        let records = dataset.records();
        let mut seasons = distinct_values(records, Dimension::Season);
        seasons.sort();
        let catalog = Catalog {
            seasons,
            competitions: distinct_values(records, Dimension::Competition),
            clubs: distinct_values(records, Dimension::Club).len(),
            assist_providers: top_assist_providers(records, None).len(),
        };
        AppState {
            dataset,
            config,
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Selections a new session starts with: every competition selected,
    /// descending order, first palette color.
    pub fn initial_controls(&self) -> Controls {
        Controls {
            season_index: 0,
            competition_cursor: 0,
            competition_selected: vec![true; self.catalog.competitions.len()],
            order: SortOrder::Descending,
            sliders: HashMap::new(),
            show_values: true,
            color_index: 0,
            chart_kind: ChartKind::Bar,
            quarter: MatchQuarter::Q1,
            goal_type_view: GoalTypeView::PlayingPosition,
            assist_rows: None,
        }
    }

    /// Slider bounds for a section, or `None` if it has no slider.
    pub fn slider_range(&self, section: Section, controls: &Controls) -> Option<SliderRange> {
        let display = &self.config.display;
        match section {
            Section::GoalsByCompetition => {
                let n = self.catalog.competitions.len();
                Some(SliderRange { max: n, default: n })
            }
            Section::AverageGoalMinute => {
                let n = self.catalog.seasons.len();
                Some(SliderRange { max: n, default: n })
            }
            Section::AssistProviders => Some(SliderRange {
                max: display.max_top_n,
                default: display.default_top_n,
            }),
            Section::GoalTypes if controls.goal_type_view == GoalTypeView::FavoriteOpponents => {
                Some(SliderRange {
                    max: display.max_top_n,
                    default: display.default_top_n,
                })
            }
            _ => None,
        }
    }

    /// Current slider value for a section, clamped to `1..=max`.
    pub fn slider_value(&self, section: Section, controls: &Controls) -> Option<usize> {
        let range = self.slider_range(section, controls)?;
        let value = controls.sliders.get(&section).copied().unwrap_or(range.default);
        Some(value.clamp(1, range.max.max(1)))
    }

    /// Move a section's slider by `delta`, staying within its bounds.
    pub fn adjust_slider(&self, section: Section, controls: &mut Controls, delta: isize) {
        let (Some(range), Some(current)) = (
            self.slider_range(section, controls),
            self.slider_value(section, controls),
        ) else {
            return;
        };
        let next = current.saturating_add_signed(delta).clamp(1, range.max.max(1));
        controls.sliders.insert(section, next);
    }

    /// Bounds of the assist list table: up to every provider, 10 by default.
    pub fn assist_rows_range(&self) -> SliderRange {
        let n = self.catalog.assist_providers;
        SliderRange {
            max: n,
            default: n.min(DEFAULT_ASSIST_ROWS),
        }
    }

    /// Current assist list length, clamped to `1..=max`.
    pub fn assist_rows(&self, controls: &Controls) -> usize {
        let range = self.assist_rows_range();
        controls
            .assist_rows
            .unwrap_or(range.default)
            .clamp(1, range.max.max(1))
    }

    pub fn adjust_assist_rows(&self, controls: &mut Controls, delta: isize) {
        let max = self.assist_rows_range().max.max(1);
        let next = self.assist_rows(controls).saturating_add_signed(delta).clamp(1, max);
        controls.assist_rows = Some(next);
    }

    /// Palette color name for the current color selection.
    pub fn color(&self, controls: &Controls) -> &str {
        let palette = &self.config.display.palette;
        palette
            .get(controls.color_index % palette.len().max(1))
            .map(String::as_str)
            .unwrap_or("cyan")
    }

    pub fn selected_competitions(&self, controls: &Controls) -> Vec<&str> {
        self.catalog
            .competitions
            .iter()
            .zip(&controls.competition_selected)
            .filter(|(_, selected)| **selected)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Run the transforms for `section` and build its panel.
    pub fn compute_panel(&self, section: Section, controls: &Controls) -> PanelContent {
        debug!(?section, "recomputing panel");
        let items = match section {
            Section::Home => self.home_items(),
            Section::GoalsBySeason => self.season_items(controls),
            Section::GoalsByCompetition => self.competition_items(controls),
            Section::AverageGoalMinute => self.average_minute_items(controls),
            Section::AssistProviders => self.assist_items(controls),
            Section::GoalsPerClub => self.club_items(controls),
            Section::MatchQuarters => self.quarter_items(controls),
            Section::GoalTypes => self.goal_type_items(controls),
        };
        PanelContent {
            title: section.title().to_string(),
            items,
        }
    }

    // -- Section builders --

    fn home_items(&self) -> Vec<PanelItem> {
        vec![
            PanelItem::Text(vec![
                "Goal record analysis".to_string(),
                String::new(),
                "Explore every recorded goal by season, competition, club, assist".to_string(),
                "provider, time of match and goal type. Pick a section on the left.".to_string(),
            ]),
            PanelItem::Metric {
                label: "Total goals".to_string(),
                value: self.dataset.len().to_string(),
            },
            PanelItem::Metric {
                label: "Seasons".to_string(),
                value: self.catalog.seasons.len().to_string(),
            },
            PanelItem::Metric {
                label: "Clubs".to_string(),
                value: self.catalog.clubs.to_string(),
            },
        ]
    }

    fn season_items(&self, controls: &Controls) -> Vec<PanelItem> {
        let records = self.dataset.records();
        let mut items = Vec::new();

        match self.catalog.seasons.get(controls.season_index) {
            Some(season) => items.push(PanelItem::Metric {
                label: format!("Goals in {season}"),
                value: season_goal_count(records, season).to_string(),
            }),
            None => items.push(PanelItem::Text(vec!["No seasons recorded.".to_string()])),
        }

        let groups = aggregate(records, Dimension::Season, SortOrder::Label, None);
        items.push(series("Goals by Season", &groups, controls.show_values, "lightblue"));
        items
    }

    fn competition_items(&self, controls: &Controls) -> Vec<PanelItem> {
        let records = self.dataset.records();
        let options = self
            .catalog
            .competitions
            .iter()
            .zip(&controls.competition_selected)
            .map(|(name, selected)| PickerOption {
                label: name.clone(),
                selected: *selected,
            })
            .collect();

        let selected = self.selected_competitions(controls);
        let subset = filter_competitions(records, &selected);
        let filtered = aggregate(subset, Dimension::Competition, SortOrder::Descending, None);

        let top_n = self.slider_value(Section::GoalsByCompetition, controls);
        let ranked = aggregate(records, Dimension::Competition, controls.order, top_n);

        vec![
            PanelItem::Picker {
                title: "Competitions".to_string(),
                options,
                cursor: controls.competition_cursor,
            },
            series("Selected competitions", &filtered, controls.show_values, "cyan"),
            series(
                format!(
                    "All competitions ({}, top {})",
                    controls.order.label(),
                    top_n.unwrap_or(0)
                ),
                &ranked,
                controls.show_values,
                "cyan",
            ),
        ]
    }

    fn average_minute_items(&self, controls: &Controls) -> Vec<PanelItem> {
        let averages = match average_minute_by_season(self.dataset.records()) {
            Ok(averages) => averages,
            Err(e) => return vec![error_item(e)],
        };
        let max_seasons = self
            .slider_value(Section::AverageGoalMinute, controls)
            .unwrap_or(averages.len());

        let bars = tail(&averages, max_seasons)
            .iter()
            .map(|a| BarDatum {
                label: a.season.clone(),
                value: a.average_minute,
                display: format!("{:.1}", a.average_minute),
            })
            .collect();

        vec![PanelItem::Bars(BarSeries {
            title: format!("Average goal minute, last {max_seasons} seasons"),
            bars,
            show_values: controls.show_values,
            color: self.color(controls).to_string(),
        })]
    }

    fn assist_items(&self, controls: &Controls) -> Vec<PanelItem> {
        let records = self.dataset.records();
        let top_n = self.slider_value(Section::AssistProviders, controls);
        let providers = top_assist_providers(records, top_n);
        let table_rows = self.assist_rows(controls);
        let rows = top_assist_providers(records, Some(table_rows))
            .iter()
            .map(|g| [g.label.clone(), g.count.to_string()])
            .collect();

        vec![
            series(
                format!("Top {} assist providers", top_n.unwrap_or(0)),
                &providers,
                controls.show_values,
                self.color(controls),
            ),
            PanelItem::Table {
                title: format!("Assist list (top {table_rows})"),
                headers: ["Player".to_string(), "Assists".to_string()],
                rows,
            },
        ]
    }

    fn club_items(&self, controls: &Controls) -> Vec<PanelItem> {
        let groups = aggregate(self.dataset.records(), Dimension::Club, SortOrder::Descending, None);
        let chart = match controls.chart_kind {
            ChartKind::Bar => series("Goals per club", &groups, controls.show_values, "yellow"),
            ChartKind::Share => PanelItem::Shares {
                title: "Share of goals per club".to_string(),
                shares: shares(&groups),
            },
        };
        vec![
            PanelItem::Text(vec![format!("View: {}", controls.chart_kind.label())]),
            chart,
        ]
    }

    fn quarter_items(&self, controls: &Controls) -> Vec<PanelItem> {
        let records = self.dataset.records();
        let quarter = controls.quarter;
        let mut items = vec![PanelItem::Text(vec![format!(
            "Quarter {}: {}",
            quarter.label(),
            quarter.range_label()
        )])];

        match goals_by_quarter(records) {
            Ok(groups) => items.push(series("Goals per quarter", &groups, true, "lightgreen")),
            Err(e) => items.push(error_item(e)),
        }

        match minute_distribution(records, quarter) {
            Ok(minutes) => {
                let bars = minutes
                    .iter()
                    .map(|m| BarDatum {
                        label: format!("{}'", m.minute),
                        value: m.count as f64,
                        display: m.count.to_string(),
                    })
                    .collect();
                items.push(PanelItem::Bars(BarSeries {
                    title: format!("Goals per minute, {}", quarter.range_label()),
                    bars,
                    show_values: controls.show_values,
                    color: self.color(controls).to_string(),
                }));
            }
            Err(e) => items.push(error_item(e)),
        }
        items
    }

    fn goal_type_items(&self, controls: &Controls) -> Vec<PanelItem> {
        let records = self.dataset.records();
        let view = controls.goal_type_view;
        let header = PanelItem::Text(vec![format!("View: {}", view.label())]);

        let chart = match view {
            GoalTypeView::PlayingPosition => {
                let groups = aggregate(records, Dimension::PlayingPosition, controls.order, None);
                series(
                    format!("Goals by playing position ({})", controls.order.label()),
                    &groups,
                    controls.show_values,
                    "lightgreen",
                )
            }
            GoalTypeView::FavoriteOpponents => {
                let top_n = self.slider_value(Section::GoalTypes, controls);
                let groups = aggregate(records, Dimension::Opponent, SortOrder::Descending, top_n);
                series(
                    format!("Top {} opponents", top_n.unwrap_or(0)),
                    &groups,
                    controls.show_values,
                    "magenta",
                )
            }
            GoalTypeView::GoalType => {
                let groups = aggregate(records, Dimension::GoalType, controls.order, None);
                series(
                    format!("Goals by type ({})", controls.order.label()),
                    &groups,
                    controls.show_values,
                    "blue",
                )
            }
            GoalTypeView::ImportantMatches => {
                let important = &self.config.important_matches;
                let groups = important_goals_by_season(records, important);
                series(
                    format!(
                        "Goals in important matches (\"{}\" or vs \"{}\")",
                        important.competition, important.opponent
                    ),
                    &groups,
                    true,
                    "yellow",
                )
            }
            GoalTypeView::WinDrawLoss => match goals_by_result(records) {
                Ok(groups) => series("Goals per result", &groups, true, "green"),
                Err(e) => error_item(e),
            },
            GoalTypeView::HomeAway => {
                let groups = aggregate(records, Dimension::Venue, SortOrder::Descending, None);
                series("Home vs away goals", &groups, true, "lightblue")
            }
        };

        vec![header, chart]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use goalboard_core::config::{DataConfig, DisplayConfig, ImportantMatchConfig};
    use goalboard_core::record::MatchGoalRecord;

    fn record(season: &str, competition: &str, opponent: &str, minute: &str) -> MatchGoalRecord {
        MatchGoalRecord {
            date: None,
            season: season.to_string(),
            competition: competition.to_string(),
            club: "Real Madrid".to_string(),
            opponent: opponent.to_string(),
            minute_raw: minute.to_string(),
            result_raw: "3-1".to_string(),
            venue: "H".to_string(),
            playing_position: "LW".to_string(),
            goal_type: "Header".to_string(),
            assist_provider: Some("Marcelo".to_string()),
        }
    }

    pub(crate) fn test_config() -> Config {
        Config {
            data: DataConfig {
                path: "data/goals.csv".to_string(),
                date_formats: vec!["%Y-%m-%d".to_string()],
            },
            important_matches: ImportantMatchConfig {
                competition: "Champions League Final".to_string(),
                opponent: "FC Barcelona".to_string(),
            },
            display: DisplayConfig {
                default_top_n: 2,
                max_top_n: 4,
                palette: vec!["cyan".to_string(), "magenta".to_string()],
            },
        }
    }

    pub(crate) fn test_app() -> AppState {
        let records = vec![
            record("2011-2012", "LaLiga", "FC Barcelona", "70"),
            record("2010-2011", "LaLiga", "Getafe CF", "12"),
            record("2010-2011", "Copa del Rey", "FC Barcelona", "103"),
            record("2013-2014", "UEFA Champions League Final", "Atlético de Madrid", "120"),
            record("2013-2014", "LaLiga", "Sevilla FC", "45+2"),
        ];
        AppState::new(Arc::new(Dataset::from_records(records)), test_config())
    }

    fn bars(item: &PanelItem) -> &BarSeries {
        match item {
            PanelItem::Bars(series) => series,
            other => panic!("expected bars, got {other:?}"),
        }
    }

    #[test]
    fn catalog_orders_seasons_by_label() {
        let app = test_app();
        assert_eq!(app.catalog().seasons, vec!["2010-2011", "2011-2012", "2013-2014"]);
        assert_eq!(
            app.catalog().competitions,
            vec!["LaLiga", "Copa del Rey", "UEFA Champions League Final"]
        );
        assert_eq!(app.catalog().clubs, 1);
    }

    #[test]
    fn section_navigation_stops_at_ends() {
        assert_eq!(Section::Home.prev(), Section::Home);
        assert_eq!(Section::GoalTypes.next(), Section::GoalTypes);
        assert_eq!(Section::Home.next(), Section::GoalsBySeason);
    }

    #[test]
    fn goal_type_view_cycles() {
        assert_eq!(GoalTypeView::HomeAway.next(), GoalTypeView::PlayingPosition);
        assert_eq!(GoalTypeView::PlayingPosition.prev(), GoalTypeView::HomeAway);
    }

    #[test]
    fn slider_defaults_and_clamping() {
        let app = test_app();
        let mut controls = app.initial_controls();

        assert_eq!(app.slider_value(Section::AssistProviders, &controls), Some(2));
        app.adjust_slider(Section::AssistProviders, &mut controls, 10);
        assert_eq!(app.slider_value(Section::AssistProviders, &controls), Some(4));
        app.adjust_slider(Section::AssistProviders, &mut controls, -10);
        assert_eq!(app.slider_value(Section::AssistProviders, &controls), Some(1));

        assert_eq!(app.slider_value(Section::GoalsByCompetition, &controls), Some(3));
        assert_eq!(app.slider_value(Section::Home, &controls), None);
        assert_eq!(app.slider_value(Section::GoalTypes, &controls), None);

        controls.goal_type_view = GoalTypeView::FavoriteOpponents;
        assert_eq!(app.slider_value(Section::GoalTypes, &controls), Some(2));
    }

    #[test]
    fn season_panel_shows_metric_for_selected_season() {
        let app = test_app();
        let mut controls = app.initial_controls();
        controls.season_index = 0;
        let panel = app.compute_panel(Section::GoalsBySeason, &controls);
        assert_eq!(
            panel.items[0],
            PanelItem::Metric {
                label: "Goals in 2010-2011".to_string(),
                value: "2".to_string(),
            }
        );
        let chart = bars(&panel.items[1]);
        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["2010-2011", "2011-2012", "2013-2014"]);
    }

    #[test]
    fn deselecting_all_competitions_gives_empty_chart() {
        let app = test_app();
        let mut controls = app.initial_controls();
        controls.competition_selected = vec![false; 3];
        let panel = app.compute_panel(Section::GoalsByCompetition, &controls);
        assert!(bars(&panel.items[1]).bars.is_empty());
        // The ranked chart ignores the multi-select.
        assert_eq!(bars(&panel.items[2]).bars.len(), 3);
    }

    #[test]
    fn competition_ranking_respects_order_and_top_n() {
        let app = test_app();
        let mut controls = app.initial_controls();
        controls.order = SortOrder::Ascending;
        controls.sliders.insert(Section::GoalsByCompetition, 2);
        let panel = app.compute_panel(Section::GoalsByCompetition, &controls);
        let ranked = bars(&panel.items[2]);
        let labels: Vec<&str> = ranked.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["Copa del Rey", "UEFA Champions League Final"]);
    }

    #[test]
    fn average_minute_panel_uses_palette_color() {
        let app = test_app();
        let mut controls = app.initial_controls();
        controls.color_index = 1;
        controls.sliders.insert(Section::AverageGoalMinute, 2);
        let panel = app.compute_panel(Section::AverageGoalMinute, &controls);
        let chart = bars(&panel.items[0]);
        assert_eq!(chart.color, "magenta");
        assert_eq!(chart.bars.len(), 2);
        assert_eq!(chart.bars[0].label, "2011-2012");
        assert_eq!(chart.bars[0].display, "70.0");
    }

    #[test]
    fn malformed_minute_becomes_panel_error() {
        let mut records = test_app().dataset().records().to_vec();
        records[0].minute_raw = "abc".to_string();
        let app = AppState::new(Arc::new(Dataset::from_records(records)), test_config());
        let controls = app.initial_controls();

        let panel = app.compute_panel(Section::AverageGoalMinute, &controls);
        assert!(matches!(&panel.items[0], PanelItem::Error(msg) if msg.contains("abc")));

        // Other sections are unaffected.
        let panel = app.compute_panel(Section::GoalsPerClub, &controls);
        assert!(panel.items.iter().all(|i| !matches!(i, PanelItem::Error(_))));
    }

    #[test]
    fn club_panel_switches_to_shares() {
        let app = test_app();
        let mut controls = app.initial_controls();
        controls.chart_kind = ChartKind::Share;
        let panel = app.compute_panel(Section::GoalsPerClub, &controls);
        match &panel.items[1] {
            PanelItem::Shares { shares, .. } => {
                assert_eq!(shares.len(), 1);
                assert!((shares[0].percent - 100.0).abs() < 1e-9);
            }
            other => panic!("expected shares, got {other:?}"),
        }
    }

    #[test]
    fn important_matches_view() {
        let app = test_app();
        let mut controls = app.initial_controls();
        controls.goal_type_view = GoalTypeView::ImportantMatches;
        let panel = app.compute_panel(Section::GoalTypes, &controls);
        let chart = bars(&panel.items[1]);
        let pairs: Vec<(&str, f64)> = chart.bars.iter().map(|b| (b.label.as_str(), b.value)).collect();
        assert_eq!(
            pairs,
            vec![("2010-2011", 1.0), ("2011-2012", 1.0), ("2013-2014", 1.0)]
        );
    }

    #[test]
    fn assist_panel_has_chart_and_table() {
        let app = test_app();
        let controls = app.initial_controls();
        let panel = app.compute_panel(Section::AssistProviders, &controls);
        assert_eq!(bars(&panel.items[0]).bars[0].label, "Marcelo");
        match &panel.items[1] {
            PanelItem::Table { rows, .. } => {
                assert_eq!(rows, &vec![["Marcelo".to_string(), "5".to_string()]]);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }

    #[test]
    fn assist_table_has_its_own_length() {
        let mut records = test_app().dataset().records().to_vec();
        let providers = [Some("Özil"), Some("Benzema"), Some("Benzema"), Some("Di María"), None];
        for (record, provider) in records.iter_mut().zip(providers) {
            record.assist_provider = provider.map(str::to_string);
        }
        let app = AppState::new(Arc::new(Dataset::from_records(records)), test_config());
        let mut controls = app.initial_controls();

        // Three providers, fewer than the default of 10.
        assert_eq!(app.assist_rows_range(), SliderRange { max: 3, default: 3 });
        assert_eq!(app.assist_rows(&controls), 3);

        app.adjust_assist_rows(&mut controls, -1);
        controls.sliders.insert(Section::AssistProviders, 1);
        let panel = app.compute_panel(Section::AssistProviders, &controls);

        assert_eq!(bars(&panel.items[0]).bars.len(), 1);
        match &panel.items[1] {
            PanelItem::Table { title, rows, .. } => {
                assert_eq!(title, "Assist list (top 2)");
                assert_eq!(rows[0], ["Benzema".to_string(), "2".to_string()]);
                assert_eq!(rows.len(), 2);
            }
            other => panic!("expected table, got {other:?}"),
        }

        app.adjust_assist_rows(&mut controls, 10);
        assert_eq!(app.assist_rows(&controls), 3);
    }

    #[test]
    fn quarter_panel_lists_minutes_in_quarter() {
        let app = test_app();
        let mut controls = app.initial_controls();
        controls.quarter = MatchQuarter::Q4;
        let panel = app.compute_panel(Section::MatchQuarters, &controls);
        let per_minute = bars(&panel.items[2]);
        let labels: Vec<&str> = per_minute.bars.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, vec!["103'", "120'"]);
    }

    #[test]
    fn compute_panel_is_repeatable() {
        let app = test_app();
        let controls = app.initial_controls();
        for section in Section::ALL {
            assert_eq!(
                app.compute_panel(section, &controls),
                app.compute_panel(section, &controls)
            );
        }
    }
}

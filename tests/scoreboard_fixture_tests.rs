//! Parsing and projection against a recorded bowl season scoreboard.

use bowl_scoreboard_exporter::{
    constants::scoreboard::OVERALL_RECORD_KEY,
    data_fetcher::{
        api::parse_scoreboard_at,
        models::{GameResult, Snapshot},
    },
    exporter::needs_refresh_at,
    metrics::{BowlMetrics, GaugeFamily, MetricsProjector, read_snapshot},
    testing_utils::ScoreboardBuilder,
};
use chrono::{DateTime, Duration, SecondsFormat, Utc};

const FIXTURE: &str = include_str!("testdata/bowl-scoreboard.json");

fn fixture_snapshot() -> Snapshot {
    let fetched_at = "2023-01-02T23:30:00Z".parse::<DateTime<Utc>>().unwrap();
    parse_scoreboard_at(FIXTURE.as_bytes(), fetched_at).unwrap()
}

fn projected(record_key: &str) -> MetricsProjector {
    let mut projector = MetricsProjector::new(BowlMetrics::new().unwrap(), record_key);
    projector.project(&fixture_snapshot());
    projector
}

/// Label values of the Rose Bowl away team, with or without `team_location`.
fn penn_state_labels(family: GaugeFamily) -> Vec<&'static str> {
    let mut labels = vec![
        "Rose Bowl Game Presented by Prudential",
        "Rose Bowl",
        "Mon, 02 Jan 2023",
        "2023-01-02T22:00Z",
        "away",
    ];
    if family.includes_location() {
        labels.push("Penn State");
    }
    labels.extend(["Nittany Lions", "0-0"]);
    labels
}

fn utah_labels(family: GaugeFamily) -> Vec<&'static str> {
    let mut labels = vec![
        "Rose Bowl Game Presented by Prudential",
        "Rose Bowl",
        "Mon, 02 Jan 2023",
        "2023-01-02T22:00Z",
        "home",
    ];
    if family.includes_location() {
        labels.push("Utah");
    }
    labels.extend(["Utes", "0-0"]);
    labels
}

#[test]
fn test_fixture_parses_in_descending_kickoff_order() {
    let snapshot = fixture_snapshot();
    let ids: Vec<&str> = snapshot.events().iter().map(|e| e.id.as_str()).collect();

    // Rose, Armed Forces, Myrtle Beach, LA, then the unparsable Sugar Bowl
    assert_eq!(
        ids,
        vec!["401437030", "401437023", "401437017", "401437015", "401437034"]
    );

    let kickoffs: Vec<DateTime<Utc>> = snapshot
        .events()
        .iter()
        .filter_map(|e| e.kickoff().ok())
        .collect();
    assert_eq!(kickoffs.len(), 4);
    assert!(kickoffs.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn test_myrtle_beach_bowl_is_final() {
    let snapshot = fixture_snapshot();
    let event = snapshot
        .events()
        .iter()
        .find(|e| e.bowl_name() == "Myrtle Beach Bowl")
        .unwrap();

    assert_eq!(event.game_status(), GameResult::Final);
    assert_eq!(event.venue_name(), "Brooks Stadium");
}

#[test]
fn test_one_sample_per_family_and_competitor() {
    let projector = projected(OVERALL_RECORD_KEY);
    let text = projector.metrics().render().unwrap();

    for family in GaugeFamily::ALL {
        let prefix = format!("{}{{", family.qualified_name());
        let samples = text.lines().filter(|line| line.starts_with(&prefix)).count();
        assert_eq!(samples, 10, "unexpected sample count for {}", family.name());
    }
}

#[test]
fn test_in_progress_game_values() {
    let projector = projected(OVERALL_RECORD_KEY);
    let metrics = projector.metrics();
    let value = |family: GaugeFamily, labels: Vec<&str>| metrics.gauge_value(family, &labels);

    for labels in [penn_state_labels, utah_labels] {
        assert_eq!(value(GaugeFamily::Quarter, labels(GaugeFamily::Quarter)), Some(3.0));
        assert_eq!(
            value(GaugeFamily::TimeRemaining, labels(GaugeFamily::TimeRemaining)),
            Some(452.0)
        );
        assert_eq!(value(GaugeFamily::Winner, labels(GaugeFamily::Winner)), Some(0.0));
        assert_eq!(
            value(GaugeFamily::InProgress, labels(GaugeFamily::InProgress)),
            Some(1.0)
        );
    }

    assert_eq!(
        value(GaugeFamily::Score, penn_state_labels(GaugeFamily::Score)),
        Some(21.0)
    );
    assert_eq!(value(GaugeFamily::Score, utah_labels(GaugeFamily::Score)), Some(17.0));
    assert_eq!(
        value(GaugeFamily::HomeTeam, utah_labels(GaugeFamily::HomeTeam)),
        Some(1.0)
    );
    assert_eq!(
        value(GaugeFamily::HomeTeam, penn_state_labels(GaugeFamily::HomeTeam)),
        Some(0.0)
    );
}

#[test]
fn test_lookups_miss_unwritten_series() {
    let projector = projected(OVERALL_RECORD_KEY);
    let metrics = projector.metrics();

    let mut wrong_record = penn_state_labels(GaugeFamily::Winner);
    wrong_record[6] = "11-2";
    assert_eq!(metrics.gauge_value(GaugeFamily::Winner, &wrong_record), None);

    let mut wrong_side = utah_labels(GaugeFamily::HomeTeam);
    wrong_side[4] = "away";
    assert_eq!(metrics.gauge_value(GaugeFamily::HomeTeam, &wrong_side), None);

    let text = metrics.render().unwrap();
    assert!(!text.contains("record=\"11-2\""));
    assert_eq!(
        text.lines()
            .filter(|line| line.starts_with("bowl_exporter_home_team{"))
            .count(),
        10
    );
}

#[test]
fn test_field_anomalies_are_defaulted() {
    let snapshot = fixture_snapshot();
    let readings = read_snapshot(&snapshot, OVERALL_RECORD_KEY);

    // Sugar Bowl: no parsable kickoff and an empty score
    let kansas_state = readings
        .iter()
        .find(|r| r.labels.team_name == "Wildcats")
        .unwrap();
    assert_eq!(kansas_state.labels.date, "");
    assert_eq!(kansas_state.labels.date_time, "TBD");
    assert_eq!(kansas_state.score, 0.0);
    assert!(kansas_state.score_defaulted);

    // Armed Forces Bowl carries no notes
    let air_force = readings
        .iter()
        .find(|r| r.labels.team_name == "Falcons")
        .unwrap();
    assert_eq!(air_force.labels.bowl_name, "");
    assert_eq!(air_force.score, 30.0);
    assert_eq!(air_force.winner, 1.0);

    let projector = projected(OVERALL_RECORD_KEY);
    let defaults = &projector.metrics().value_defaults;
    assert_eq!(defaults.with_label_values(&["score"]).get(), 1);
    assert_eq!(defaults.with_label_values(&["record"]).get(), 10);
}

#[test]
fn test_record_labels_by_key() {
    let readings = read_snapshot(&fixture_snapshot(), OVERALL_RECORD_KEY);
    assert!(readings.iter().all(|r| r.labels.record == "0-0"));

    let readings = read_snapshot(&fixture_snapshot(), "overall");
    let marshall = readings
        .iter()
        .find(|r| r.labels.team_location == "Marshall")
        .unwrap();
    assert_eq!(marshall.labels.record, "9-4");
}

#[test]
fn test_reprojection_is_idempotent() {
    let snapshot = fixture_snapshot();
    let mut projector = MetricsProjector::new(BowlMetrics::new().unwrap(), OVERALL_RECORD_KEY);

    let first = projector.project(&snapshot);
    let before: Vec<Option<f64>> = read_snapshot(&snapshot, OVERALL_RECORD_KEY)
        .iter()
        .map(|r| {
            projector
                .metrics()
                .gauge_value(GaugeFamily::Score, &r.labels.values_for(GaugeFamily::Score))
        })
        .collect();

    let second = projector.project(&snapshot);
    let after: Vec<Option<f64>> = read_snapshot(&snapshot, OVERALL_RECORD_KEY)
        .iter()
        .map(|r| {
            projector
                .metrics()
                .gauge_value(GaugeFamily::Score, &r.labels.values_for(GaugeFamily::Score))
        })
        .collect();

    assert_eq!(first.samples, 60);
    assert_eq!(second.samples, 60);
    assert_eq!(second.pruned, 0);
    assert_eq!(before, after);
}

#[test]
fn test_fixture_needs_refresh_while_rose_bowl_is_live() {
    let snapshot = fixture_snapshot();
    assert!(needs_refresh_at(Some(&snapshot), snapshot.fetched_at()));
}

#[test]
fn test_scheduled_game_in_the_future() {
    let now = Utc::now();
    let kickoff = (now + Duration::hours(2)).to_rfc3339_opts(SecondsFormat::Secs, true);
    let event = ScoreboardBuilder::scheduled_event(
        "Cotton Bowl Classic",
        &kickoff,
        ("USC", "Trojans"),
        ("Tulane", "Green Wave"),
    );
    let snapshot = Snapshot::new(vec![event], now);

    assert!(!needs_refresh_at(Some(&snapshot), now));

    let readings = read_snapshot(&snapshot, OVERALL_RECORD_KEY);
    assert_eq!(readings.len(), 2);
    assert!(readings.iter().all(|r| r.in_progress == 0.0));
    assert!(readings.iter().all(|r| r.quarter == 0.0));
}

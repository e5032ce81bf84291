mod common;

use common::{sample_tracks, TrackBuilder};
use tracklens::aggregate::Field;
use tracklens::config::Config;
use tracklens::selection::{Action, Coordinator, RecordFilter, YearRange};
use tracklens::views::highlight::Emphasis;
use tracklens::views::palette::{ramp_for, DEFAULT_RAMP};
use tracklens::views::perceptive::{self, hover_emphasis, PerceptiveFeature};
use tracklens::views::technical::{self, TechnicalAttribute};
use tracklens::views::{genres, ChartOutcome};

fn pop_filter() -> RecordFilter {
    RecordFilter {
        genre: Some("pop".to_string()),
        years: None,
    }
}

// --- GENRES ---

#[test]
fn test_genre_chart_stats_and_points() {
    let records = sample_tracks();
    let c = Coordinator::new();
    let chart = genres::build(&records, c.state(), &Config::default());
    let chart = chart.ready().unwrap();

    // polka is outside the charted genres
    assert_eq!(chart.points.len(), 4);
    assert_eq!(chart.stats.len(), 10);
    assert_eq!(chart.year_extent, (1970.0, 2010.0));
    assert!(chart
        .points
        .iter()
        .all(|p| p.emphasis == Emphasis::FULL && p.jitter.abs() <= genres::JITTER_SPAN / 2.0));
}

#[test]
fn test_genre_chart_highlights_selection() {
    let records = sample_tracks();
    let mut c = Coordinator::new();
    c.dispatch(Action::ClickCategory("pop".into()));
    let config = Config::default();
    let outcome = genres::build(&records, c.state(), &config);
    let chart = outcome.ready().unwrap();

    for p in &chart.points {
        if p.point.genre == "pop" {
            assert_eq!(p.emphasis, Emphasis::FULL);
        } else {
            assert_eq!(p.emphasis.opacity, config.highlight.dim_opacity);
            assert!(p.emphasis.outlined);
        }
    }
    // Selecting a genre highlights; it does not filter this chart.
    assert_eq!(chart.points.len(), 4);
}

#[test]
fn test_genre_chart_rerender_is_identical() {
    let records = sample_tracks();
    let c = Coordinator::new();
    let config = Config::default();
    assert_eq!(
        genres::build(&records, c.state(), &config),
        genres::build(&records, c.state(), &config)
    );
}

#[test]
fn test_genre_chart_pins_clicked_point() {
    let records = sample_tracks();
    let mut c = Coordinator::new();
    c.dispatch(Action::ClickPoint(records[2].point_ref()));
    let outcome = genres::build(&records, c.state(), &Config::default());
    let pinned: Vec<_> = outcome
        .ready()
        .unwrap()
        .points
        .iter()
        .filter(|p| p.pinned)
        .collect();
    assert_eq!(pinned.len(), 1);
    assert_eq!(pinned[0].point.track_name, "Enter Sandman");
}

#[test]
fn test_genre_chart_empty_range_is_no_data() {
    let records = sample_tracks();
    let mut c = Coordinator::new();
    c.dispatch(Action::SetYearRange(YearRange::new(1800.0, 1801.0)));
    assert!(genres::build(&records, c.state(), &Config::default()).is_no_data());
}

// --- TECHNICAL ---

#[test]
fn test_technical_chart_aggregates_by_year() {
    let mut records = sample_tracks();
    records.push(
        TrackBuilder::new("pop", 2000.0)
            .set(Field::Duration, 189_000.0)
            .set(Field::Popularity, 20.0)
            .build(),
    );

    let outcome = technical::build(&records, &pop_filter(), TechnicalAttribute::Duration);
    let chart = outcome.ready().unwrap();

    assert_eq!(chart.points.len(), 2);
    let y2000 = &chart.points[0];
    assert_eq!(y2000.year, 2000);
    assert_eq!(y2000.value, 200_000.0);
    assert_eq!(y2000.popularity, Some(50.0));
    assert_eq!(y2000.tier, Some(2));
    assert_eq!(chart.palette, ramp_for(Some("pop")));
    assert_eq!(y2000.color, chart.palette[2]);
    assert_eq!(chart.x_extent, (1970.0, 2010.0));
    assert_eq!(chart.y_extent, (199_000.0, 200_000.0));
}

#[test]
fn test_technical_chart_default_palette_without_genre() {
    let records = sample_tracks();
    let outcome = technical::build(&records, &RecordFilter::default(), TechnicalAttribute::Explicit);
    let chart = outcome.ready().unwrap();
    assert_eq!(chart.palette, DEFAULT_RAMP.map(str::to_string));
    assert_eq!(chart.legend.len(), 5);
    // explicit is always present, so every dated track contributes
    assert_eq!(chart.points.len(), 5);
}

#[test]
fn test_technical_chart_no_data_for_unknown_genre() {
    let records = sample_tracks();
    let filter = RecordFilter {
        genre: Some("k-pop".to_string()),
        years: None,
    };
    match technical::build(&records, &filter, TechnicalAttribute::Tempo) {
        ChartOutcome::NoData { reason } => assert!(reason.contains("k-pop")),
        other => panic!("expected no data, got {:?}", other),
    }
}

#[test]
fn test_attribute_names() {
    assert_eq!(
        "time_signature".parse::<TechnicalAttribute>().unwrap(),
        TechnicalAttribute::TimeSignature
    );
    assert_eq!(TechnicalAttribute::Loudness.axis_label(), "Loudness");
    assert_eq!(TechnicalAttribute::TimeSignature.axis_label(), "Time_signature");
    assert!("bpm".parse::<TechnicalAttribute>().is_err());
}

// --- PERCEPTIVE ---

#[test]
fn test_perceptive_buckets_and_means() {
    let records = sample_tracks();
    let outcome = perceptive::build(&records, &RecordFilter::default(), 10);
    let chart = outcome.ready().unwrap();

    assert_eq!(chart.buckets.len(), 10);
    assert_eq!(chart.buckets.iter().map(|b| b.count).sum::<usize>(), records.len());

    let top = &chart.buckets[8];
    assert_eq!(top.count, 1);
    assert_eq!(top.mean(PerceptiveFeature::Valence), Some(0.9));

    // polka sits in the last bucket but carries no perceptive features
    let last = &chart.buckets[9];
    assert_eq!(last.count, 1);
    assert_eq!(last.mean(PerceptiveFeature::Energy), None);

    let empty = &chart.buckets[1];
    assert_eq!(empty.count, 0);
    assert_eq!(empty.mean(PerceptiveFeature::Energy), None);

    assert_eq!(chart.trends.len(), 3);
    assert!(chart.trends.iter().all(|t| t.points.len() == 10));
    assert_eq!(chart.y_max, 0.95);
}

#[test]
fn test_perceptive_keeps_bins_stable_under_selection() {
    let records = sample_tracks();
    let all = perceptive::build(&records, &RecordFilter::default(), 10);
    let pop = perceptive::build(&records, &pop_filter(), 10);

    let labels = |o: &ChartOutcome<perceptive::PerceptiveChart>| -> Vec<String> {
        o.ready().unwrap().buckets.iter().map(|b| b.label.clone()).collect()
    };
    assert_eq!(labels(&all), labels(&pop));
    assert_eq!(
        pop.ready().unwrap().buckets.iter().map(|b| b.count).sum::<usize>(),
        2
    );
}

#[test]
fn test_perceptive_no_data_without_popularity() {
    let records = vec![TrackBuilder::new("pop", 2000.0).build()];
    assert!(perceptive::build(&records, &RecordFilter::default(), 10).is_no_data());
}

#[test]
fn test_hover_emphasis_fades_other_features() {
    let all = hover_emphasis(None);
    assert!(all.iter().all(|e| !e.faded && e.bar_opacity == 1.0));

    let energy = hover_emphasis(Some(PerceptiveFeature::Energy));
    for e in &energy {
        if e.feature == PerceptiveFeature::Energy {
            assert!(!e.faded);
        } else {
            assert!(e.faded);
            assert_eq!(e.bar_opacity, 0.45);
            assert_eq!(e.line_opacity, 0.3);
        }
    }
}

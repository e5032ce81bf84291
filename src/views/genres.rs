use super::highlight::{Emphasis, HighlightPolicy};
use super::{describe_selection, ChartOutcome};
use crate::aggregate::{self, GenreGrouping, Grouping, StatsMode, Summary};
use crate::config::Config;
use crate::dataset::{self, Field, Record};
use crate::selection::{Focus, PointRef, RecordFilter, SelectionState};
use serde::Serialize;

/// Horizontal spread of a point inside its genre band, as a band fraction.
pub const JITTER_SPAN: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub point: PointRef,
    pub year: f64,
    /// Offset from the band centre in `[-JITTER_SPAN / 2, JITTER_SPAN / 2)`.
    pub jitter: f64,
    pub emphasis: Emphasis,
    pub pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreChart {
    pub selected: Option<String>,
    pub year_extent: (f64, f64),
    pub points: Vec<ScatterPoint>,
    /// Mean ± std of the release year per genre, in display order.
    pub stats: Vec<Summary<String>>,
    pub genre_emphasis: Vec<(String, Emphasis)>,
}

/// Genre-vs-year scatter. The year range filters; the selected genre only
/// changes emphasis, since this chart is where genres get picked.
pub fn build(records: &[Record], state: &SelectionState, config: &Config) -> ChartOutcome<GenreChart> {
    let grouping = GenreGrouping::new();
    let policy = HighlightPolicy::from(&config.highlight);
    let selected = state.active_category();

    let visible = RecordFilter {
        genre: None,
        years: state.year_range,
    };
    let in_chart: Vec<&Record> = visible
        .apply(records)
        .into_iter()
        .filter(|r| r.year.is_some() && grouping.key_of(r).is_some())
        .collect();

    let stats = aggregate::aggregate(
        in_chart.iter().copied(),
        &grouping,
        &[Field::Year],
        StatsMode::MeanAndDeviation,
    );
    let Some(year_extent) = dataset::extent(in_chart.iter().copied(), Field::Year) else {
        return ChartOutcome::no_data(describe_selection(None));
    };

    let pinned_point = match &state.focus {
        Focus::Point { point, .. } if state.tooltip_pinned => Some(point),
        _ => None,
    };

    let mut rng = fastrand::Rng::with_seed(config.highlight.jitter_seed);
    let points = in_chart
        .iter()
        .filter_map(|r| {
            let year = r.year?;
            let point = r.point_ref();
            Some(ScatterPoint {
                year,
                jitter: (rng.f64() - 0.5) * JITTER_SPAN,
                emphasis: policy.emphasis(&r.genre, selected),
                pinned: pinned_point == Some(&point),
                point,
            })
        })
        .collect();

    let genre_emphasis = grouping
        .genres()
        .iter()
        .map(|g| (g.clone(), policy.emphasis(g, selected)))
        .collect();

    ChartOutcome::Ready(GenreChart {
        selected: selected.map(str::to_string),
        year_extent,
        points,
        stats,
        genre_emphasis,
    })
}

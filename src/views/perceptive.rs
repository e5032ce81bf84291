use super::{describe_selection, ChartOutcome};
use crate::aggregate::{self, NumericBins, StatsMode};
use crate::dataset::{Field, Record};
use crate::selection::RecordFilter;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PerceptiveFeature {
    Valence,
    Energy,
    Danceability,
}

impl PerceptiveFeature {
    pub fn field(self) -> Field {
        match self {
            PerceptiveFeature::Valence => Field::Valence,
            PerceptiveFeature::Energy => Field::Energy,
            PerceptiveFeature::Danceability => Field::Danceability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularityBucket {
    pub index: usize,
    pub label: String,
    pub low: f64,
    pub high: f64,
    pub count: usize,
    /// `None` where the bucket has no track carrying the feature.
    pub means: Vec<(PerceptiveFeature, Option<f64>)>,
}

impl PopularityBucket {
    pub fn mean(&self, feature: PerceptiveFeature) -> Option<f64> {
        self.means
            .iter()
            .find(|(f, _)| *f == feature)
            .and_then(|(_, m)| *m)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub feature: PerceptiveFeature,
    pub points: Vec<(usize, Option<f64>)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerceptiveChart {
    pub genre: Option<String>,
    pub buckets: Vec<PopularityBucket>,
    pub trends: Vec<TrendSeries>,
    pub y_max: f64,
}

/// Drawing weights for one feature while the user hovers another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureEmphasis {
    pub feature: PerceptiveFeature,
    pub bar_opacity: f32,
    pub line_opacity: f32,
    pub point_opacity: f32,
    pub faded: bool,
}

pub fn hover_emphasis(hovered: Option<PerceptiveFeature>) -> Vec<FeatureEmphasis> {
    PerceptiveFeature::iter()
        .map(|feature| match hovered {
            Some(h) if h != feature => FeatureEmphasis {
                feature,
                bar_opacity: 0.45,
                line_opacity: 0.3,
                point_opacity: 0.35,
                faded: true,
            },
            _ => FeatureEmphasis {
                feature,
                bar_opacity: 1.0,
                line_opacity: 1.0,
                point_opacity: 1.0,
                faded: false,
            },
        })
        .collect()
}

/// Popularity-bucketed means of the perceptive features.
///
/// Bins span the popularity extent of the whole table so bucket labels do
/// not move when the selection narrows the data.
pub fn build(
    records: &[Record],
    filter: &RecordFilter,
    bucket_count: usize,
) -> ChartOutcome<PerceptiveChart> {
    let Some(bins) = NumericBins::observe(records, Field::Popularity, bucket_count) else {
        return ChartOutcome::no_data("No numeric popularity data found");
    };

    let filtered = filter.apply(records);
    let counts = aggregate::aggregate(
        filtered.iter().copied(),
        &bins,
        &[Field::Popularity],
        StatsMode::Mean,
    );
    if counts.is_empty() {
        return ChartOutcome::no_data(describe_selection(filter.genre.as_deref()));
    }

    let per_feature: Vec<(PerceptiveFeature, Vec<Option<f64>>)> = PerceptiveFeature::iter()
        .map(|feature| {
            let summaries = aggregate::aggregate(
                filtered.iter().copied(),
                &bins,
                &[Field::Popularity, feature.field()],
                StatsMode::Mean,
            );
            let means = (0..bins.count)
                .map(|i| summaries.get(i).and_then(|s| s.mean(feature.field())))
                .collect();
            (feature, means)
        })
        .collect();

    let buckets: Vec<PopularityBucket> = counts
        .iter()
        .map(|s| {
            let (low, high) = bins.bounds(s.key);
            PopularityBucket {
                index: s.key,
                label: s.label.clone(),
                low,
                high,
                count: s.count,
                means: per_feature
                    .iter()
                    .map(|(f, means)| (*f, means[s.key]))
                    .collect(),
            }
        })
        .collect();

    let trends = per_feature
        .iter()
        .map(|(feature, means)| TrendSeries {
            feature: *feature,
            points: means.iter().copied().enumerate().collect(),
        })
        .collect();

    let y_max = buckets
        .iter()
        .flat_map(|b| b.means.iter().filter_map(|(_, m)| *m))
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
        .filter(|m| *m > 0.0)
        .unwrap_or(1.0);

    ChartOutcome::Ready(PerceptiveChart {
        genre: filter.genre.clone(),
        buckets,
        trends,
        y_max,
    })
}

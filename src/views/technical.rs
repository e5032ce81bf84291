use super::palette::{popularity_tier, ramp_for, POPULARITY_LEGEND};
use super::{describe_selection, ChartOutcome};
use crate::aggregate::{self, StatsMode, YearGrouping};
use crate::dataset::{self, Field, Record};
use crate::selection::RecordFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

/// Attributes selectable on the y axis of the technical chart.
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
    Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TechnicalAttribute {
    #[default]
    Duration,
    Tempo,
    TimeSignature,
    Explicit,
    Loudness,
}

impl TechnicalAttribute {
    pub fn field(self) -> Field {
        match self {
            TechnicalAttribute::Duration => Field::Duration,
            TechnicalAttribute::Tempo => Field::Tempo,
            TechnicalAttribute::TimeSignature => Field::TimeSignature,
            TechnicalAttribute::Explicit => Field::Explicit,
            TechnicalAttribute::Loudness => Field::Loudness,
        }
    }

    /// Axis title: the attribute name with its first letter capitalised.
    pub fn axis_label(self) -> String {
        let name = self.to_string();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearPoint {
    pub year: i32,
    pub value: f64,
    pub popularity: Option<f64>,
    pub tier: Option<usize>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalChart {
    pub attribute: TechnicalAttribute,
    pub genre: Option<String>,
    /// Year extent of the whole table, so the x axis stays put across selections.
    pub x_extent: (f64, f64),
    pub y_extent: (f64, f64),
    pub palette: [String; 5],
    pub legend: Vec<(String, String)>,
    pub points: Vec<YearPoint>,
}

pub fn build(
    records: &[Record],
    filter: &RecordFilter,
    attribute: TechnicalAttribute,
) -> ChartOutcome<TechnicalChart> {
    let field = attribute.field();
    let filtered = filter.apply(records);

    let values = aggregate::aggregate(
        filtered.iter().copied(),
        &YearGrouping,
        &[field],
        StatsMode::Mean,
    );
    let popularity: BTreeMap<i32, f64> = aggregate::aggregate(
        filtered.iter().copied(),
        &YearGrouping,
        &[Field::Popularity],
        StatsMode::Mean,
    )
    .into_iter()
    .filter_map(|s| s.mean(Field::Popularity).map(|m| (s.key, m)))
    .collect();

    let palette = ramp_for(filter.genre.as_deref());

    let points: Vec<YearPoint> = values
        .iter()
        .filter_map(|s| {
            let value = s.mean(field)?;
            let popularity = popularity.get(&s.key).copied();
            let tier = popularity.map(popularity_tier);
            Some(YearPoint {
                year: s.key,
                value,
                popularity,
                tier,
                color: palette[tier.unwrap_or(0)].clone(),
            })
        })
        .collect();

    if points.is_empty() {
        return ChartOutcome::no_data(describe_selection(filter.genre.as_deref()));
    }

    let y_extent = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });
    let x_extent = dataset::extent(records, Field::Year).unwrap_or_else(|| {
        let first = points[0].year as f64;
        let last = points[points.len() - 1].year as f64;
        (first, last)
    });

    let legend = POPULARITY_LEGEND
        .iter()
        .zip(palette.iter())
        .map(|(range, color)| (range.to_string(), color.clone()))
        .collect();

    ChartOutcome::Ready(TechnicalChart {
        attribute,
        genre: filter.genre.clone(),
        x_extent,
        y_extent,
        palette,
        legend,
        points,
    })
}

//! Bucketing of records into per-bucket summary statistics.
//!
//! Everything here is a pure function of its inputs, so views can rerun it
//! on every selection change.

pub mod binning;
pub mod grouping;
pub mod stats;

pub use self::binning::NumericBins;
pub use self::grouping::{GenreGrouping, Grouping, YearGrouping, TOP_GENRES};
pub use self::stats::{Deviation, FieldStats};
pub use crate::dataset::Field;

use self::stats::Accumulator;
use crate::dataset::Record;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsMode {
    #[default]
    Mean,
    MeanAndDeviation,
}

/// Read-only result for one bucket. `stats` follows the order of the
/// requested fields and is `None` throughout for an empty bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary<K> {
    pub key: K,
    pub label: String,
    pub count: usize,
    pub stats: Vec<(Field, Option<FieldStats>)>,
}

impl<K> Summary<K> {
    pub fn stat(&self, field: Field) -> Option<&FieldStats> {
        self.stats
            .iter()
            .find(|(f, _)| *f == field)
            .and_then(|(_, s)| s.as_ref())
    }

    pub fn mean(&self, field: Field) -> Option<f64> {
        self.stat(field).map(|s| s.mean)
    }

    pub fn deviation(&self, field: Field) -> Option<&Deviation> {
        self.stat(field).and_then(|s| s.deviation.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

struct Bucket {
    count: usize,
    accs: Vec<Accumulator>,
}

impl Bucket {
    fn new(width: usize) -> Self {
        Self {
            count: 0,
            accs: vec![Accumulator::new(); width],
        }
    }
}

/// Groups `records` by `grouping` and summarises `fields` per bucket in a
/// single pass.
///
/// A record is counted only if it has a key and a value for every requested
/// field. Returns an empty vector when no record qualifies.
pub fn aggregate<'a, G, I>(
    records: I,
    grouping: &G,
    fields: &[Field],
    mode: StatsMode,
) -> Vec<Summary<G::Key>>
where
    G: Grouping,
    I: IntoIterator<Item = &'a Record>,
{
    let domain = grouping.domain();
    let allowed: Option<BTreeSet<&G::Key>> = domain.as_ref().map(|d| d.iter().collect());

    let mut buckets: BTreeMap<G::Key, Bucket> = BTreeMap::new();
    let mut values = Vec::with_capacity(fields.len());
    let mut valid = 0usize;

    'records: for record in records {
        let Some(key) = grouping.key_of(record) else {
            continue;
        };
        if let Some(allowed) = &allowed {
            if !allowed.contains(&key) {
                continue;
            }
        }

        values.clear();
        for &field in fields {
            match record.value(field) {
                Some(v) => values.push(v),
                None => continue 'records,
            }
        }

        let bucket = buckets
            .entry(key)
            .or_insert_with(|| Bucket::new(fields.len()));
        bucket.count += 1;
        for (acc, &v) in bucket.accs.iter_mut().zip(values.iter()) {
            acc.push(v);
        }
        valid += 1;
    }

    if valid == 0 {
        return Vec::new();
    }

    let keys: Vec<G::Key> = match domain {
        Some(d) => d,
        None => buckets.keys().cloned().collect(),
    };
    let with_deviation = mode == StatsMode::MeanAndDeviation;

    keys.into_iter()
        .map(|key| {
            let label = grouping.label(&key);
            match buckets.remove(&key) {
                Some(bucket) => Summary {
                    label,
                    count: bucket.count,
                    stats: fields
                        .iter()
                        .zip(bucket.accs.iter())
                        .map(|(&f, acc)| (f, acc.finish(with_deviation)))
                        .collect(),
                    key,
                },
                None => Summary {
                    label,
                    count: 0,
                    stats: fields.iter().map(|&f| (f, None)).collect(),
                    key,
                },
            }
        })
        .collect()
}

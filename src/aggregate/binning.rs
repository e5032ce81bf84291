use super::grouping::Grouping;
use crate::dataset::{self, Field, Record};
use crate::error::{TlResult, TrackLensError};

/// `count` equal-width bins over the observed `[min, max]` of one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBins {
    pub field: Field,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

impl NumericBins {
    pub fn new(field: Field, min: f64, max: f64, count: usize) -> TlResult<Self> {
        if count == 0 {
            return Err(TrackLensError::Validation(
                "bin count must be at least 1".to_string(),
            ));
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(TrackLensError::Validation(format!(
                "invalid bin range [{}, {}]",
                min, max
            )));
        }
        Ok(Self {
            field,
            min,
            max,
            count,
        })
    }

    /// Bins over the extent of `field` in `records`; `None` when no record
    /// carries the field.
    pub fn observe<'a, I>(records: I, field: Field, count: usize) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let (min, max) = dataset::extent(records, field)?;
        Self::new(field, min, max, count).ok()
    }

    /// Width of the whole range; a degenerate range counts as 1.
    #[inline]
    pub fn range(&self) -> f64 {
        let r = self.max - self.min;
        if r == 0.0 {
            1.0
        } else {
            r
        }
    }

    #[inline]
    pub fn index_of(&self, value: f64) -> usize {
        let raw = ((value - self.min) / self.range() * self.count as f64).floor();
        if raw.is_nan() || raw < 0.0 {
            0
        } else {
            (raw as usize).min(self.count - 1)
        }
    }

    pub fn bounds(&self, index: usize) -> (f64, f64) {
        let width = self.range() / self.count as f64;
        (
            self.min + index as f64 * width,
            self.min + (index + 1) as f64 * width,
        )
    }
}

impl Grouping for NumericBins {
    type Key = usize;

    fn key_of(&self, record: &Record) -> Option<usize> {
        record.value(self.field).map(|v| self.index_of(v))
    }

    fn domain(&self) -> Option<Vec<usize>> {
        Some((0..self.count).collect())
    }

    fn label(&self, key: &usize) -> String {
        let (low, high) = self.bounds(*key);
        format!("{}–{}", low.round(), high.round())
    }
}

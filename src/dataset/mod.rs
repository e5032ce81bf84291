pub mod loader;
pub mod record;

pub use self::record::{Field, Record};

use crate::error::TlResult;
use std::collections::BTreeSet;
use std::path::Path;

/// The loaded table. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    /// Rows dropped at load time for lacking a genre.
    pub skipped: usize,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P, genre_column: &str) -> TlResult<Self> {
        loader::load_tracks_from_file(path, genre_column)
    }

    pub fn from_reader<R: std::io::Read>(reader: R, genre_column: &str) -> TlResult<Self> {
        loader::load_tracks(reader, genre_column)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn genres(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.genre.as_str()).collect()
    }

    /// Observed (min, max) of a field over the records that carry it.
    pub fn extent(&self, field: Field) -> Option<(f64, f64)> {
        extent(self.records.iter(), field)
    }

    pub fn find_track(&self, track_name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|r| r.track_name.eq_ignore_ascii_case(track_name))
    }
}

pub fn extent<'a, I>(records: I, field: Field) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|r| r.value(field))
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

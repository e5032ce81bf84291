use crate::dataset::{Field, Record};
use std::fmt::Debug;

/// The ten genres the genre chart is drawn over, in display order.
pub const TOP_GENRES: [&str; 10] = [
    "hard-rock",
    "metal",
    "punk",
    "classical",
    "hip-hop",
    "electronic",
    "alternative",
    "folk",
    "pop",
    "alt-rock",
];

/// Maps records onto bucket keys.
///
/// `key_of` returning `None` marks the record invalid for this grouping.
/// When `domain` is `Some`, buckets come out in that order (empty ones
/// included); otherwise the discovered keys are emitted in ascending order.
pub trait Grouping {
    type Key: Clone + Ord + Debug;

    fn key_of(&self, record: &Record) -> Option<Self::Key>;

    fn domain(&self) -> Option<Vec<Self::Key>> {
        None
    }

    fn label(&self, key: &Self::Key) -> String;
}

#[derive(Debug, Clone)]
pub struct GenreGrouping {
    genres: Vec<String>,
}

impl GenreGrouping {
    pub fn new() -> Self {
        Self::with_domain(TOP_GENRES.iter().map(|g| g.to_string()).collect())
    }

    pub fn with_domain(genres: Vec<String>) -> Self {
        Self { genres }
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}

impl Default for GenreGrouping {
    fn default() -> Self {
        Self::new()
    }
}

impl Grouping for GenreGrouping {
    type Key = String;

    fn key_of(&self, record: &Record) -> Option<String> {
        self.contains(&record.genre).then(|| record.genre.clone())
    }

    fn domain(&self) -> Option<Vec<String>> {
        Some(self.genres.clone())
    }

    fn label(&self, key: &String) -> String {
        key.clone()
    }
}

/// Groups by whole release year.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearGrouping;

impl Grouping for YearGrouping {
    type Key = i32;

    fn key_of(&self, record: &Record) -> Option<i32> {
        record.value(Field::Year).map(|y| y.round() as i32)
    }

    fn label(&self, key: &i32) -> String {
        key.to_string()
    }
}

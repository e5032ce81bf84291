use crate::selection::PointRef;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Numeric dimensions a track can be summarised over.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Field {
    Year,
    Duration,
    Tempo,
    TimeSignature,
    Explicit,
    Loudness,
    Popularity,
    Valence,
    Energy,
    Danceability,
}

/// One track row. Only `genre` is mandatory; every numeric column that
/// failed coercion is `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub track_name: String,
    pub artist: String,
    pub genre: String,
    pub year: Option<f64>,
    pub duration: Option<f64>,
    pub tempo: Option<f64>,
    pub time_signature: Option<f64>,
    pub explicit: bool,
    pub loudness: Option<f64>,
    pub popularity: Option<f64>,
    pub valence: Option<f64>,
    pub energy: Option<f64>,
    pub danceability: Option<f64>,
}

impl Record {
    pub fn new(genre: &str) -> Self {
        Self {
            track_name: String::new(),
            artist: String::new(),
            genre: genre.to_string(),
            year: None,
            duration: None,
            tempo: None,
            time_signature: None,
            explicit: false,
            loudness: None,
            popularity: None,
            valence: None,
            energy: None,
            danceability: None,
        }
    }

    pub fn named(mut self, track_name: &str, artist: &str) -> Self {
        self.track_name = track_name.to_string();
        self.artist = artist.to_string();
        self
    }

    /// Builder-style setter; `Explicit` treats any non-zero value as true.
    pub fn with(mut self, field: Field, value: f64) -> Self {
        let v = Some(value);
        match field {
            Field::Year => self.year = v,
            Field::Duration => self.duration = v,
            Field::Tempo => self.tempo = v,
            Field::TimeSignature => self.time_signature = v,
            Field::Explicit => self.explicit = value != 0.0,
            Field::Loudness => self.loudness = v,
            Field::Popularity => self.popularity = v,
            Field::Valence => self.valence = v,
            Field::Energy => self.energy = v,
            Field::Danceability => self.danceability = v,
        }
        self
    }

    #[inline]
    pub fn value(&self, field: Field) -> Option<f64> {
        match field {
            Field::Year => self.year,
            Field::Duration => self.duration,
            Field::Tempo => self.tempo,
            Field::TimeSignature => self.time_signature,
            Field::Explicit => Some(if self.explicit { 1.0 } else { 0.0 }),
            Field::Loudness => self.loudness,
            Field::Popularity => self.popularity,
            Field::Valence => self.valence,
            Field::Energy => self.energy,
            Field::Danceability => self.danceability,
        }
    }

    pub fn point_ref(&self) -> PointRef {
        PointRef {
            track_name: self.track_name.clone(),
            artist: self.artist.clone(),
            genre: self.genre.clone(),
        }
    }
}

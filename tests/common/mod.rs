#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;
use tracklens::dataset::{Field, Record};

pub const HEADER: &str = "track_name,artists,track_genre,release_year,duration_ms_x,tempo_x,time_signature_x,explicit_x,loudness_x,popularity,valence,energy,danceability";

/// Builder for test tracks.
pub struct TrackBuilder {
    record: Record,
}

impl TrackBuilder {
    pub fn new(genre: &str, year: f64) -> Self {
        Self {
            record: Record::new(genre).with(Field::Year, year),
        }
    }

    pub fn name(mut self, track: &str, artist: &str) -> Self {
        self.record = self.record.named(track, artist);
        self
    }

    pub fn set(mut self, field: Field, value: f64) -> Self {
        self.record = self.record.with(field, value);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}

pub fn track(genre: &str, year: f64) -> Record {
    TrackBuilder::new(genre, year).build()
}

/// A small table covering several genres, years and popularity levels.
pub fn sample_tracks() -> Vec<Record> {
    vec![
        TrackBuilder::new("pop", 2000.0)
            .name("Oops", "Britney")
            .set(Field::Duration, 211_000.0)
            .set(Field::Popularity, 80.0)
            .set(Field::Valence, 0.9)
            .set(Field::Energy, 0.8)
            .set(Field::Danceability, 0.7)
            .build(),
        TrackBuilder::new("pop", 2010.0)
            .name("Tik Tok", "Kesha")
            .set(Field::Duration, 199_000.0)
            .set(Field::Popularity, 60.0)
            .set(Field::Valence, 0.7)
            .set(Field::Energy, 0.9)
            .set(Field::Danceability, 0.8)
            .build(),
        TrackBuilder::new("metal", 1990.0)
            .name("Enter Sandman", "Metallica")
            .set(Field::Duration, 331_000.0)
            .set(Field::Popularity, 40.0)
            .set(Field::Valence, 0.3)
            .set(Field::Energy, 0.95)
            .set(Field::Danceability, 0.4)
            .build(),
        TrackBuilder::new("folk", 1970.0)
            .name("Harvest", "Neil Young")
            .set(Field::Duration, 180_000.0)
            .set(Field::Popularity, 0.0)
            .set(Field::Valence, 0.5)
            .set(Field::Energy, 0.2)
            .set(Field::Danceability, 0.3)
            .build(),
        TrackBuilder::new("polka", 1985.0)
            .name("Beer Barrel", "Band")
            .set(Field::Popularity, 100.0)
            .build(),
    ]
}

pub fn write_csv(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file.flush().unwrap();
    file
}

pub fn sample_csv() -> NamedTempFile {
    write_csv(&[
        "Oops,Britney,pop,2000,211000,95,4,False,-5.1,80,0.9,0.8,0.7",
        "Tik Tok,Kesha,pop,2010,199000,120,4,True,-3.2,60,0.7,0.9,0.8",
        "Enter Sandman,Metallica,metal,1990,331000,123,4,false,-6.0,40,0.3,0.95,0.4",
        "Harvest,Neil Young,folk,1970,180000,80,3,0,-12.0,0,0.5,0.2,0.3",
        "Ghost,Nobody,,1999,1,1,1,true,1,1,1,1,1",
    ])
}

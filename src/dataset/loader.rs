use super::record::{Field, Record};
use super::Dataset;
use crate::error::{TlResult, TrackLensError};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

// First header present wins.
const TRACK_NAME_COLUMNS: &[&str] = &["track_name"];
const ARTIST_COLUMNS: &[&str] = &["artists", "artist"];

fn numeric_columns(field: Field) -> &'static [&'static str] {
    match field {
        Field::Year => &["release_year", "year"],
        Field::Duration => &["duration_ms_x", "duration_ms"],
        Field::Tempo => &["tempo_x", "tempo"],
        Field::TimeSignature => &["time_signature_x", "time_signature"],
        Field::Explicit => &["explicit_x", "explicit"],
        Field::Loudness => &["loudness_x", "loudness"],
        Field::Popularity => &["popularity", "popularity_x"],
        Field::Valence => &["valence"],
        Field::Energy => &["energy"],
        Field::Danceability => &["danceability"],
    }
}

/// Header positions resolved once per file.
struct ColumnMap {
    genre: usize,
    track_name: Option<usize>,
    artist: Option<usize>,
    numeric: Vec<(Field, usize)>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord, genre_column: &str) -> TlResult<Self> {
        let find = |candidates: &[&str]| {
            candidates
                .iter()
                .find_map(|name| headers.iter().position(|h| h.trim() == *name))
        };

        let genre = find(&[genre_column]).ok_or_else(|| {
            TrackLensError::Validation(format!(
                "Required column '{}' not found in header",
                genre_column
            ))
        })?;

        let numeric = [
            Field::Year,
            Field::Duration,
            Field::Tempo,
            Field::TimeSignature,
            Field::Explicit,
            Field::Loudness,
            Field::Popularity,
            Field::Valence,
            Field::Energy,
            Field::Danceability,
        ]
        .into_iter()
        .filter_map(|f| find(numeric_columns(f)).map(|idx| (f, idx)))
        .collect();

        Ok(Self {
            genre,
            track_name: find(TRACK_NAME_COLUMNS),
            artist: find(ARTIST_COLUMNS),
            numeric,
        })
    }
}

/// Trimmed text as a finite number; anything else is missing.
pub fn coerce_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Only the encodings the source data is known to use count as true.
pub fn coerce_flag(raw: &str) -> bool {
    matches!(raw.trim(), "true" | "True" | "1")
}

fn cell(rec: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| rec.get(i)).unwrap_or("")
}

fn parse_row(rec: &StringRecord, cols: &ColumnMap) -> Option<Record> {
    let genre = rec.get(cols.genre)?.trim();
    if genre.is_empty() {
        return None;
    }

    let mut record = Record::new(genre).named(
        cell(rec, cols.track_name).trim(),
        cell(rec, cols.artist).trim(),
    );

    for &(field, idx) in &cols.numeric {
        let raw = rec.get(idx).unwrap_or("");
        if field == Field::Explicit {
            record.explicit = coerce_flag(raw);
        } else if let Some(v) = coerce_number(raw) {
            record = record.with(field, v);
        }
    }

    Some(record)
}

pub fn load_tracks<R: Read>(reader: R, genre_column: &str) -> TlResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let cols = ColumnMap::resolve(&headers, genre_column)?;

    let mut records = Vec::new();
    let mut skipped = 0;

    for (row_idx, result) in rdr.records().enumerate() {
        let rec = result?;
        match parse_row(&rec, &cols) {
            Some(r) => records.push(r),
            None => {
                skipped += 1;
                debug!("[Row {}] missing '{}', skipped", row_idx + 1, genre_column);
            }
        }
    }

    if skipped > 0 {
        debug!("Skipped {} rows without a genre.", skipped);
    }

    Ok(Dataset { records, skipped })
}

pub fn load_tracks_from_file<P: AsRef<Path>>(path: P, genre_column: &str) -> TlResult<Dataset> {
    let path = path.as_ref();
    info!("📂 Loading tracks from: {}", path.display());

    let file = File::open(path).map_err(|e| {
        TrackLensError::Io(std::io::Error::new(
            e.kind(),
            format!("Could not open dataset at '{}': {}", path.display(), e),
        ))
    })?;

    let dataset = load_tracks(file, genre_column)?;
    info!(
        "   -> Loaded {} tracks ({} skipped).",
        dataset.records.len(),
        dataset.skipped
    );
    Ok(dataset)
}

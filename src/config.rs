use crate::error::{TlResult, TrackLensError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub dataset: DatasetParams,
    #[command(flatten)]
    pub binning: BinningParams,
    #[command(flatten)]
    pub highlight: HighlightParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetParams {
    #[arg(global = true, long = "data", default_value = "data/merged_tracks.csv")]
    pub data_path: String,
    #[arg(global = true, long, default_value = "track_genre")]
    pub genre_column: String,
}

impl Default for DatasetParams {
    fn default() -> Self {
        Self {
            data_path: "data/merged_tracks.csv".to_string(),
            genre_column: "track_genre".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BinningParams {
    /// Number of equal-width popularity buckets.
    #[arg(global = true, long, default_value_t = 10)]
    pub bucket_count: usize,
}

impl Default for BinningParams {
    fn default() -> Self {
        Self { bucket_count: 10 }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightParams {
    /// Opacity of items outside the selected genre.
    #[arg(global = true, long, default_value_t = 0.25)]
    pub dim_opacity: f32,
    /// Seed for scatter jitter; a fixed seed keeps re-renders identical.
    #[arg(global = true, long, default_value_t = 7)]
    pub jitter_seed: u64,
}

impl Default for HighlightParams {
    fn default() -> Self {
        Self {
            dim_opacity: 0.25,
            jitter_seed: 7,
        }
    }
}

pub const DIM_OPACITY_RANGE: (f32, f32) = (0.2, 0.3);

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TlResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TrackLensError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn validate(&self) -> TlResult<()> {
        if self.binning.bucket_count == 0 {
            return Err(TrackLensError::Config(
                "bucket_count must be at least 1".to_string(),
            ));
        }
        let (lo, hi) = DIM_OPACITY_RANGE;
        let o = self.highlight.dim_opacity;
        if !(lo..=hi).contains(&o) {
            return Err(TrackLensError::Config(format!(
                "dim_opacity {} outside [{}, {}]",
                o, lo, hi
            )));
        }
        if self.dataset.genre_column.trim().is_empty() {
            return Err(TrackLensError::Config(
                "genre_column must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Overwrites file-provided values with the ones the user typed on the command line.
    ///
    /// Flags are global, so the value source is looked up on the subcommand
    /// matches as well as the root ones.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident, $arg_name:expr) => {
                if typed_on_command_line(matches, $arg_name) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(dataset.data_path, "data_path");
        update_if_present!(dataset.genre_column, "genre_column");
        update_if_present!(binning.bucket_count, "bucket_count");
        update_if_present!(highlight.dim_opacity, "dim_opacity");
        update_if_present!(highlight.jitter_seed, "jitter_seed");
    }
}

fn typed_on_command_line(matches: &ArgMatches, id: &str) -> bool {
    if matches.value_source(id) == Some(ValueSource::CommandLine) {
        return true;
    }
    matches
        .subcommand()
        .is_some_and(|(_, sub)| typed_on_command_line(sub, id))
}

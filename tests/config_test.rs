use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::io::Write;
use tempfile::NamedTempFile;
use tracklens::config::Config;
use tracklens::views::highlight::HighlightPolicy;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

#[derive(Parser, Debug)]
struct TestCliWithCommand {
    #[command(subcommand)]
    command: TestCommand,

    #[command(flatten)]
    config: Config,
}

#[derive(Subcommand, Debug)]
enum TestCommand {
    Run,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_defaults_are_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.binning.bucket_count, 10);
    assert_eq!(config.highlight.dim_opacity, 0.25);
    assert_eq!(config.dataset.genre_column, "track_genre");
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (config, _) = parse(&["test"]);
    assert_eq!(config.binning.bucket_count, Config::default().binning.bucket_count);
    assert_eq!(config.dataset.data_path, Config::default().dataset.data_path);
    assert_eq!(config.highlight.jitter_seed, Config::default().highlight.jitter_seed);
}

#[test]
fn test_zero_buckets_rejected() {
    let mut config = Config::default();
    config.binning.bucket_count = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_dim_opacity_must_stay_in_documented_band() {
    let mut config = Config::default();
    config.highlight.dim_opacity = 0.5;
    assert!(config.validate().is_err());
    config.highlight.dim_opacity = 0.2;
    assert!(config.validate().is_ok());
    assert_eq!(HighlightPolicy::from(&config.highlight).dim_opacity, 0.2);
}

#[test]
fn test_partial_json_fills_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "binning": {{ "bucket_count": 5 }} }}"#).unwrap();
    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(config.binning.bucket_count, 5);
    assert_eq!(config.highlight.dim_opacity, 0.25);
    assert_eq!(config.dataset.data_path, "data/merged_tracks.csv");
}

#[test]
fn test_bad_json_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "not json").unwrap();
    assert!(Config::load_from_file(file.path()).is_err());
    assert!(Config::load_from_file("/no/such/config.json").is_err());
}

#[test]
fn test_cli_flags_override_file_values_only_when_typed() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "binning": {{ "bucket_count": 5 }}, "highlight": {{ "dim_opacity": 0.3, "jitter_seed": 1 }} }}"#
    )
    .unwrap();

    let (cli_config, matches) = parse(&["test", "--bucket-count", "20", "--data", "other.csv"]);
    let mut config = Config::load_from_file(file.path()).unwrap();
    config.merge_from_cli(&cli_config, &matches);

    assert_eq!(config.binning.bucket_count, 20);
    assert_eq!(config.dataset.data_path, "other.csv");
    // not typed: file value survives
    assert_eq!(config.highlight.dim_opacity, 0.3);
    assert_eq!(config.highlight.jitter_seed, 1);
}

#[test]
fn test_flags_typed_after_subcommand_still_override_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "binning": {{ "bucket_count": 5 }}, "highlight": {{ "jitter_seed": 1 }} }}"#
    )
    .unwrap();

    let matches = TestCliWithCommand::command()
        .get_matches_from(["test", "run", "--bucket-count", "20", "--data", "late.csv"]);
    let cli = TestCliWithCommand::from_arg_matches(&matches).unwrap();
    assert!(matches!(cli.command, TestCommand::Run));

    let mut config = Config::load_from_file(file.path()).unwrap();
    config.merge_from_cli(&cli.config, &matches);

    assert_eq!(config.binning.bucket_count, 20);
    assert_eq!(config.dataset.data_path, "late.csv");
    assert_eq!(config.highlight.jitter_seed, 1);
}

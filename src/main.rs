use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use std::rc::Rc;
use tracing::{error, info, warn, Level};
use tracklens::config::Config;
use tracklens::dataset::Dataset;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Genre, technical and perceptive views over a track table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    config: Config,

    /// JSON config file; explicit command-line flags still win.
    #[arg(global = true, long)]
    config_file: Option<String>,

    /// Print view models as JSON instead of tables.
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Genre vs release year with mean ± std per genre
    Genres(cmd::genres::GenresArgs),
    /// Per-year mean of a technical attribute
    Technical(cmd::technical::TechnicalArgs),
    /// Perceptive feature averages per popularity bucket
    Perceptive(cmd::perceptive::PerceptiveArgs),
    /// Replay an interaction script through the linked charts
    Select(cmd::select::SelectArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config_file {
        Some(path) => {
            info!("⚖️  Loading config from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(&cli.config, &matches);
            file_config
        }
        None => cli.config.clone(),
    };

    if let Err(e) = config.validate() {
        error!("{}", e);
        process::exit(1);
    }

    let dataset = match Dataset::load_from_file(&config.dataset.data_path, &config.dataset.genre_column) {
        Ok(d) => d,
        Err(e) => {
            error!("❌ Failed to load dataset. No charts can be drawn.");
            error!("   {}", e);
            process::exit(1);
        }
    };

    if dataset.is_empty() {
        warn!("⚠️  Dataset has no usable rows.");
    }

    match cli.command {
        Commands::Genres(args) => cmd::genres::run(args, &dataset, &config, cli.json),
        Commands::Technical(args) => cmd::technical::run(args, &dataset, cli.json),
        Commands::Perceptive(args) => cmd::perceptive::run(args, &dataset, &config, cli.json),
        Commands::Select(args) => {
            if let Err(e) = cmd::select::run(args, Rc::new(dataset), &config, cli.json) {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}

use super::SelectionArgs;
use crate::reports;
use clap::Args;
use tracklens::config::Config;
use tracklens::dataset::Dataset;
use tracklens::views::genres;

#[derive(Args, Debug, Clone)]
pub struct GenresArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub fn run(args: GenresArgs, dataset: &Dataset, config: &Config, json: bool) {
    let state = args.selection.state();
    let outcome = genres::build(&dataset.records, &state, config);
    reports::emit(&outcome, json, reports::print_genre_chart);
}

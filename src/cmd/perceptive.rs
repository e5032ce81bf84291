use super::SelectionArgs;
use crate::reports;
use clap::Args;
use tracklens::config::Config;
use tracklens::dataset::Dataset;
use tracklens::views::perceptive;

#[derive(Args, Debug, Clone)]
pub struct PerceptiveArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,
}

pub fn run(args: PerceptiveArgs, dataset: &Dataset, config: &Config, json: bool) {
    let filter = args.selection.state().filter();
    let outcome = perceptive::build(&dataset.records, &filter, config.binning.bucket_count);
    reports::emit(&outcome, json, reports::print_perceptive_chart);
}

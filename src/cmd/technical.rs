use super::SelectionArgs;
use crate::reports;
use clap::Args;
use tracklens::dataset::Dataset;
use tracklens::views::technical::{self, TechnicalAttribute};

#[derive(Args, Debug, Clone)]
pub struct TechnicalArgs {
    #[command(flatten)]
    pub selection: SelectionArgs,

    /// duration | tempo | time_signature | explicit | loudness
    #[arg(short, long, default_value = "duration")]
    pub attribute: TechnicalAttribute,
}

pub fn run(args: TechnicalArgs, dataset: &Dataset, json: bool) {
    let filter = args.selection.state().filter();
    let outcome = technical::build(&dataset.records, &filter, args.attribute);
    reports::emit(&outcome, json, reports::print_technical_chart);
}

use crate::reports;
use clap::Args;
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use tracklens::config::Config;
use tracklens::dataset::Dataset;
use tracklens::error::TlResult;
use tracklens::selection::script::parse_actions;
use tracklens::selection::{Action, Coordinator, RecordFilter, SelectionState};
use tracklens::views::genres::GenreChart;
use tracklens::views::perceptive::PerceptiveChart;
use tracklens::views::technical::{TechnicalAttribute, TechnicalChart};
use tracklens::views::{genres, perceptive, technical, ChartOutcome};

#[derive(Args, Debug, Clone)]
pub struct SelectArgs {
    /// `;`-separated steps: genre:<name>, track:<name>, range:<from>-<to>,
    /// background, clear-range, reset
    #[arg(short = 'A', long)]
    pub actions: String,

    #[arg(short, long, default_value = "duration")]
    pub attribute: TechnicalAttribute,
}

/// The genre chart. It hears both buses and rebuilds from the full state,
/// since it also draws the pinned point.
#[derive(Default)]
struct GenreView {
    stale: bool,
    chart: Option<ChartOutcome<GenreChart>>,
}

/// The dependent charts. They know nothing of the genre chart; they only
/// keep the filter the coordinator's broadcasts describe.
#[derive(Default)]
struct LinkedViews {
    filter: RecordFilter,
    stale: bool,
    technical: Option<ChartOutcome<TechnicalChart>>,
    perceptive: Option<ChartOutcome<PerceptiveChart>>,
}

/// One line of `--json` output per replayed step.
#[derive(Serialize)]
struct StepFrame<'a> {
    step: usize,
    action: &'a Action,
    state: &'a SelectionState,
    genres: Option<&'a ChartOutcome<GenreChart>>,
    technical: Option<&'a ChartOutcome<TechnicalChart>>,
    perceptive: Option<&'a ChartOutcome<PerceptiveChart>>,
}

pub fn run(args: SelectArgs, dataset: Rc<Dataset>, config: &Config, json: bool) -> TlResult<()> {
    let actions = parse_actions(&args.actions, &dataset)?;

    let genre_view = Rc::new(RefCell::new(GenreView::default()));
    let linked = Rc::new(RefCell::new(LinkedViews::default()));

    // Listeners only record what changed; rendering happens once per step.
    let mut coordinator = Coordinator::new();
    {
        let view = Rc::clone(&genre_view);
        coordinator.subscribe(move |_| {
            view.borrow_mut().stale = true;
            Ok(())
        });
        let view = Rc::clone(&genre_view);
        coordinator.subscribe_range(move |_| {
            view.borrow_mut().stale = true;
            Ok(())
        });
    }
    {
        let views = Rc::clone(&linked);
        coordinator.subscribe(move |signal| {
            let mut v = views.borrow_mut();
            v.filter.genre = signal.genre.clone();
            v.stale = true;
            Ok(())
        });
        let views = Rc::clone(&linked);
        coordinator.subscribe_range(move |range| {
            let mut v = views.borrow_mut();
            v.filter.years = *range;
            v.stale = true;
            Ok(())
        });
    }

    let records = &dataset.records;
    for (index, action) in actions.iter().enumerate() {
        let step = index + 1;
        let report = coordinator.dispatch(action.clone());
        debug!(
            "step {}: delivered to {}, {} failed",
            step, report.delivered, report.failed
        );
        let state = coordinator.state();

        let genres_fresh = {
            let mut view = genre_view.borrow_mut();
            let fresh = std::mem::take(&mut view.stale);
            if fresh {
                view.chart = Some(genres::build(records, state, config));
            }
            fresh
        };
        let linked_fresh = {
            let mut guard = linked.borrow_mut();
            let views = &mut *guard;
            let fresh = std::mem::take(&mut views.stale);
            if fresh {
                views.technical = Some(technical::build(records, &views.filter, args.attribute));
                views.perceptive = Some(perceptive::build(
                    records,
                    &views.filter,
                    config.binning.bucket_count,
                ));
            }
            fresh
        };

        let genre_ref = genre_view.borrow();
        let linked_ref = linked.borrow();
        if json {
            reports::print_json_line(&StepFrame {
                step,
                action,
                state,
                genres: genre_ref.chart.as_ref(),
                technical: linked_ref.technical.as_ref(),
                perceptive: linked_ref.perceptive.as_ref(),
            });
            continue;
        }

        reports::print_selection(step, &format!("{:?}", action), state);
        if genres_fresh {
            if let Some(chart) = &genre_ref.chart {
                reports::emit(chart, false, reports::print_genre_chart);
            }
        }
        if linked_fresh {
            if let Some(chart) = &linked_ref.technical {
                reports::emit(chart, false, reports::print_technical_chart);
            }
            if let Some(chart) = &linked_ref.perceptive {
                reports::emit(chart, false, reports::print_perceptive_chart);
            }
        }
    }

    Ok(())
}

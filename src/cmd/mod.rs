pub mod genres;
pub mod perceptive;
pub mod select;
pub mod technical;

use clap::Args;
use tracklens::selection::{Action, Coordinator, SelectionState, YearRange};

/// Selection to apply before a one-shot chart render.
#[derive(Args, Debug, Clone, Default)]
pub struct SelectionArgs {
    /// Genre to select, as if clicked on the genre chart.
    #[arg(short, long)]
    pub genre: Option<String>,

    #[arg(long)]
    pub from: Option<f64>,

    #[arg(long)]
    pub to: Option<f64>,
}

impl SelectionArgs {
    pub fn actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(g) = &self.genre {
            actions.push(Action::ClickCategory(g.clone()));
        }
        match (self.from, self.to) {
            (None, None) => {}
            (from, to) => actions.push(Action::SetYearRange(YearRange::new(
                from.unwrap_or(f64::NEG_INFINITY),
                to.unwrap_or(f64::INFINITY),
            ))),
        }
        actions
    }

    pub fn state(&self) -> SelectionState {
        let mut coordinator = Coordinator::new();
        for action in self.actions() {
            coordinator.dispatch(action);
        }
        coordinator.state().clone()
    }
}

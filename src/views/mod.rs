//! View models for the three charts. Each `build` is a pure function of the
//! table, the current selection and the config, so a view can simply be
//! rebuilt whenever the coordinator publishes.

pub mod genres;
pub mod highlight;
pub mod palette;
pub mod perceptive;
pub mod technical;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartOutcome<T> {
    Ready(T),
    NoData { reason: String },
}

impl<T> ChartOutcome<T> {
    pub fn no_data(reason: impl Into<String>) -> Self {
        ChartOutcome::NoData {
            reason: reason.into(),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartOutcome::Ready(t) => Some(t),
            ChartOutcome::NoData { .. } => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartOutcome::NoData { .. })
    }
}

pub(crate) fn describe_selection(genre: Option<&str>) -> String {
    match genre {
        Some(g) => format!("No data for genre '{}' in this selection", g),
        None => "No data for this selection".to_string(),
    }
}

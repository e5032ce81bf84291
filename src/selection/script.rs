use super::state::{Action, YearRange};
use crate::dataset::Dataset;
use crate::error::{TlResult, TrackLensError};

/// Parses a `;`-separated interaction script, e.g.
/// `genre:pop; range:1990-2010; track:Song 2; background`.
pub fn parse_actions(script: &str, dataset: &Dataset) -> TlResult<Vec<Action>> {
    script
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|step| parse_step(step, dataset))
        .collect()
}

fn parse_step(step: &str, dataset: &Dataset) -> TlResult<Action> {
    let bad = |msg: &str| TrackLensError::Validation(format!("Bad action '{}': {}", step, msg));

    match step.split_once(':') {
        Some(("genre", g)) => {
            let g = g.trim();
            if g.is_empty() {
                return Err(bad("empty genre"));
            }
            Ok(Action::ClickCategory(g.to_string()))
        }
        Some(("track", name)) => dataset
            .find_track(name.trim())
            .map(|r| Action::ClickPoint(r.point_ref()))
            .ok_or_else(|| bad("no such track")),
        Some(("range", span)) => {
            let (a, b) = span
                .trim()
                .split_once('-')
                .ok_or_else(|| bad("expected <from>-<to>"))?;
            let a: f64 = a.trim().parse().map_err(|_| bad("invalid year"))?;
            let b: f64 = b.trim().parse().map_err(|_| bad("invalid year"))?;
            Ok(Action::SetYearRange(YearRange::new(a, b)))
        }
        Some(_) => Err(bad("unknown action")),
        None => match step {
            "background" => Ok(Action::ClickBackground),
            "clear-range" => Ok(Action::ClearYearRange),
            "reset" => Ok(Action::Reset),
            _ => Err(bad("unknown action")),
        },
    }
}

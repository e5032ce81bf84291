use crate::dataset::Record;
use serde::Serialize;

/// Inclusive release-year window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearRange {
    pub min: f64,
    pub max: f64,
}

impl YearRange {
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn contains(&self, year: f64) -> bool {
        year >= self.min && year <= self.max
    }
}

/// Identity of a single plotted track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PointRef {
    pub track_name: String,
    pub artist: String,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Focus {
    Idle,
    Category(String),
    /// `restore` is the category that was active before the first point pick.
    Point {
        point: PointRef,
        restore: Option<String>,
    },
}

/// User input the coordinator understands. A background click deselects
/// everything, year range included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Action {
    ClickCategory(String),
    ClickPoint(PointRef),
    ClickBackground,
    SetYearRange(YearRange),
    ClearYearRange,
    Reset,
}

impl Action {
    pub fn touches_focus(&self) -> bool {
        !matches!(self, Action::SetYearRange(_) | Action::ClearYearRange)
    }

    pub fn touches_range(&self) -> bool {
        matches!(
            self,
            Action::SetYearRange(_)
                | Action::ClearYearRange
                | Action::ClickBackground
                | Action::Reset
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionState {
    pub focus: Focus,
    pub year_range: Option<YearRange>,
    pub tooltip_pinned: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            focus: Focus::Idle,
            year_range: None,
            tooltip_pinned: false,
        }
    }
}

impl SelectionState {
    /// The genre dependent views should filter on, if any.
    pub fn active_category(&self) -> Option<&str> {
        match &self.focus {
            Focus::Idle => None,
            Focus::Category(c) => Some(c),
            Focus::Point { point, .. } => Some(&point.genre),
        }
    }

    /// Pure transition function over the closed action set.
    pub fn reduce(&self, action: &Action) -> SelectionState {
        let mut next = self.clone();
        match action {
            Action::ClickCategory(c) => {
                next.focus = match &self.focus {
                    Focus::Category(current) if current == c => Focus::Idle,
                    _ => Focus::Category(c.clone()),
                };
                next.tooltip_pinned = false;
            }
            Action::ClickPoint(p) => {
                next.focus = match &self.focus {
                    Focus::Point { point, restore } if point == p => match restore {
                        Some(c) => Focus::Category(c.clone()),
                        None => Focus::Idle,
                    },
                    Focus::Point { restore, .. } => Focus::Point {
                        point: p.clone(),
                        restore: restore.clone(),
                    },
                    Focus::Category(c) => Focus::Point {
                        point: p.clone(),
                        restore: Some(c.clone()),
                    },
                    Focus::Idle => Focus::Point {
                        point: p.clone(),
                        restore: None,
                    },
                };
                next.tooltip_pinned = matches!(next.focus, Focus::Point { .. });
            }
            Action::SetYearRange(range) => next.year_range = Some(*range),
            Action::ClearYearRange => next.year_range = None,
            Action::ClickBackground | Action::Reset => next = SelectionState::default(),
        }
        next
    }

    pub fn filter(&self) -> RecordFilter {
        RecordFilter {
            genre: self.active_category().map(str::to_string),
            years: self.year_range,
        }
    }
}

/// Predicate a dependent view applies to the raw table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordFilter {
    pub genre: Option<String>,
    pub years: Option<YearRange>,
}

impl RecordFilter {
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(g) = &self.genre {
            if &record.genre != g {
                return false;
            }
        }
        match (&self.years, record.year) {
            (Some(range), Some(y)) => range.contains(y),
            (Some(_), None) => false,
            (None, _) => true,
        }
    }

    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn without_genre(&self) -> RecordFilter {
        RecordFilter {
            genre: None,
            years: self.years,
        }
    }
}

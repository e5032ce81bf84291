use crate::config::HighlightParams;
use serde::Serialize;

/// How one plotted item should be drawn relative to the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Emphasis {
    pub opacity: f32,
    pub outlined: bool,
}

impl Emphasis {
    pub const FULL: Emphasis = Emphasis {
        opacity: 1.0,
        outlined: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightPolicy {
    pub dim_opacity: f32,
}

impl Default for HighlightPolicy {
    fn default() -> Self {
        Self { dim_opacity: 0.25 }
    }
}

impl From<&HighlightParams> for HighlightPolicy {
    fn from(p: &HighlightParams) -> Self {
        Self {
            dim_opacity: p.dim_opacity,
        }
    }
}

impl HighlightPolicy {
    /// Matching items stay fully opaque; the rest are dimmed and outlined.
    /// With nothing selected every item is drawn the same way.
    pub fn emphasis(&self, item_genre: &str, selected: Option<&str>) -> Emphasis {
        match selected {
            Some(g) if g != item_genre => Emphasis {
                opacity: self.dim_opacity,
                outlined: true,
            },
            _ => Emphasis::FULL,
        }
    }
}

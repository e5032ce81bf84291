use serde::Serialize;

/// Popularity ramp used when no genre is selected.
pub const DEFAULT_RAMP: [&str; 5] = ["#f0f0f0", "#bdd7e7", "#6baed6", "#3182bd", "#08519c"];

pub const POPULARITY_LEGEND: [&str; 5] = ["0-20", "21-40", "41-60", "61-80", "81-100"];

const GENRE_COLORS: [(&str, &str); 10] = [
    ("hard-rock", "#e63946"),
    ("metal", "#6a0572"),
    ("punk", "#ff006e"),
    ("classical", "#8338ec"),
    ("hip-hop", "#fb5607"),
    ("electronic", "#3a86ff"),
    ("alternative", "#06a77d"),
    ("folk", "#52b788"),
    ("pop", "#ff006e"),
    ("alt-rock", "#4361ee"),
];

const DARKER: f64 = 0.7;
const BRIGHTER: f64 = 1.0 / DARKER;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn from_hex(hex: &str) -> Option<Self> {
        let h = hex.strip_prefix('#')?;
        if h.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(h.get(i..i + 2)?, 16).ok();
        Some(Self {
            r: channel(0)? as f64,
            g: channel(2)? as f64,
            b: channel(4)? as f64,
        })
    }

    fn scaled(&self, k: f64) -> Self {
        Self {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
        }
    }

    pub fn brighter(&self, k: f64) -> Self {
        self.scaled(BRIGHTER.powf(k))
    }

    pub fn darker(&self, k: f64) -> Self {
        self.scaled(DARKER.powf(k))
    }

    pub fn to_hex(&self) -> String {
        let c = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        format!("#{:02x}{:02x}{:02x}", c(self.r), c(self.g), c(self.b))
    }
}

pub fn genre_color(genre: &str) -> Option<Rgb> {
    GENRE_COLORS
        .iter()
        .find(|(g, _)| *g == genre)
        .and_then(|(_, hex)| Rgb::from_hex(hex))
}

/// Five steps from light to dark around `base`.
pub fn stepped_ramp(base: Rgb) -> [String; 5] {
    [
        base.brighter(1.5).to_hex(),
        base.brighter(0.8).to_hex(),
        base.to_hex(),
        base.darker(0.5).to_hex(),
        base.darker(1.2).to_hex(),
    ]
}

/// Ramp for the selected genre, or the default one.
pub fn ramp_for(genre: Option<&str>) -> [String; 5] {
    match genre.and_then(genre_color) {
        Some(base) => stepped_ramp(base),
        None => DEFAULT_RAMP.map(str::to_string),
    }
}

/// Index into a five-step ramp; upper bounds are inclusive.
pub fn popularity_tier(popularity: f64) -> usize {
    match popularity {
        p if p <= 20.0 => 0,
        p if p <= 40.0 => 1,
        p if p <= 60.0 => 2,
        p if p <= 80.0 => 3,
        _ => 4,
    }
}

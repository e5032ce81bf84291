use serde::Serialize;

/// Mean ± population standard deviation band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Deviation {
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStats {
    pub mean: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deviation: Option<Deviation>,
}

/// Running mean and sum of squared deviations (Welford), plus the observed
/// extent so the reported mean never leaves it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Accumulator {
    n: usize,
    mean: f64,
    m2: f64,
    lo: f64,
    hi: f64,
}

impl Accumulator {
    pub(crate) fn new() -> Self {
        Self {
            n: 0,
            mean: 0.0,
            m2: 0.0,
            lo: f64::INFINITY,
            hi: f64::NEG_INFINITY,
        }
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
        self.lo = self.lo.min(x);
        self.hi = self.hi.max(x);
    }

    pub(crate) fn finish(&self, with_deviation: bool) -> Option<FieldStats> {
        if self.n == 0 {
            return None;
        }
        let mean = self.mean.clamp(self.lo, self.hi);
        let deviation = with_deviation.then(|| {
            let std = (self.m2.max(0.0) / self.n as f64).sqrt();
            Deviation {
                std,
                min: mean - std,
                max: mean + std,
            }
        });
        Some(FieldStats { mean, deviation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn population_std_of_known_series() {
        let mut acc = Accumulator::new();
        for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            acc.push(x);
        }
        let stats = acc.finish(true).unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-12);
        let dev = stats.deviation.unwrap();
        assert!((dev.std - 2.0).abs() < 1e-12);
        assert!((dev.min - 3.0).abs() < 1e-12);
        assert!((dev.max - 7.0).abs() < 1e-12);
    }

    #[test]
    fn identical_values_keep_exact_mean() {
        let mut acc = Accumulator::new();
        for _ in 0..3 {
            acc.push(0.1);
        }
        let stats = acc.finish(true).unwrap();
        assert_eq!(stats.mean, 0.1);
        assert_eq!(stats.deviation.unwrap().std, 0.0);
    }

    #[test]
    fn empty_accumulator_has_no_stats() {
        assert!(Accumulator::new().finish(true).is_none());
    }
}

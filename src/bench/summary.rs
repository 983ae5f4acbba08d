use super::{Measurement, Variant};
use std::time::Duration;

/// Minimum, mean and maximum time of one variant over repeated runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeStats {
    pub min: Duration,
    pub mean: Duration,
    pub max: Duration,
}

/// Accumulator of repeated [`Suite`](struct.Suite.html) runs.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    runs: Vec<[Measurement; 3]>,
}

impl Summary {
    pub fn new() -> Self {
        Summary { runs: Vec::new() }
    }

    pub fn push(&mut self, run: [Measurement; 3]) {
        self.runs.push(run);
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn runs(&self) -> &[[Measurement; 3]] {
        &self.runs
    }

    fn measurements(
        &self,
        variant: Variant,
    ) -> impl Iterator<Item = &Measurement> + '_ {
        self.runs.iter().map(move |run| &run[variant.index()])
    }

    /// Time statistics of `variant`, or `None` without any run.
    pub fn stats(&self, variant: Variant) -> Option<TimeStats> {
        let min = self.measurements(variant).map(|m| m.elapsed).min()?;
        let max = self.measurements(variant).map(|m| m.elapsed).max()?;
        let total: u128 =
            self.measurements(variant).map(|m| m.elapsed.as_nanos()).sum();
        let mean = total / self.runs.len() as u128;
        Some(TimeStats {
            min,
            mean: Duration::from_nanos(mean as u64),
            max,
        })
    }

    /// The fastest measurement of every variant, in run order.
    pub fn best(&self) -> Option<[Measurement; 3]> {
        let mut best = *self.runs.first()?;
        for run in self.runs.iter().skip(1) {
            for (b, m) in best.iter_mut().zip(run.iter()) {
                if m.elapsed < b.elapsed {
                    *b = *m;
                }
            }
        }
        Some(best)
    }
}

impl FromIterator<[Measurement; 3]> for Summary {
    fn from_iter<I: IntoIterator<Item = [Measurement; 3]>>(iter: I) -> Self {
        Summary {
            runs: iter.into_iter().collect(),
        }
    }
}

use super::{Measurement, Summary, Value, Variant, DEFAULT_COUNT};
use crate::config::ConfigError;
use crate::List;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::info;

/// Container used by the [`Variant::PreallocatedVector`] measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreallocatedMode {
    /// Measure a second round of insertions in the vector of the
    /// [`Variant::Vector`] run, which already holds `count` elements.
    /// A vector with reserved capacity is allocated but left untouched.
    Reuse,
    /// Measure insertions in a fresh empty vector with `count` elements
    /// reserved.
    Reserved,
}

impl Default for PreallocatedMode {
    fn default() -> Self {
        PreallocatedMode::Reuse
    }
}

impl PreallocatedMode {
    pub const NAMES: [&'static str; 2] = ["reuse", "reserved"];
}

impl FromStr for PreallocatedMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reuse" => Ok(PreallocatedMode::Reuse),
            "reserved" => Ok(PreallocatedMode::Reserved),
            s => Err(ConfigError::ConfigFormatError(format!(
                "Invalid preallocated mode: {}. Expected one of: {}",
                s,
                PreallocatedMode::NAMES.join(", ")
            ))),
        }
    }
}

/// The vector, list and preallocated vector measurements, run one after
/// the other.
///
/// ## Examples
///
/// ```
/// use midbench::bench::{PreallocatedMode, Suite};
///
/// let suite = Suite::new(64).with_preallocated(PreallocatedMode::Reserved);
/// let [vector, list, preallocated] = suite.run();
/// assert_eq!(vector.final_size, 64);
/// assert_eq!(list.final_size, 64);
/// assert_eq!(preallocated.initial_size, 0);
///
/// // Default mode: the third run reuses the first vector.
/// let [_, _, reused] = Suite::new(64).run();
/// assert_eq!(reused.initial_size, 64);
/// assert_eq!(reused.final_size, 128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suite {
    count: usize,
    preallocated: PreallocatedMode,
}

impl Default for Suite {
    fn default() -> Self {
        Suite::new(DEFAULT_COUNT)
    }
}

impl Suite {
    pub fn new(count: usize) -> Self {
        Suite {
            count,
            preallocated: PreallocatedMode::default(),
        }
    }

    pub fn with_preallocated(mut self, preallocated: PreallocatedMode) -> Self {
        self.preallocated = preallocated;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn preallocated(&self) -> PreallocatedMode {
        self.preallocated
    }

    /// Run the three measurements on fresh containers, in the order of
    /// [`Variant::ALL`].
    pub fn run(&self) -> [Measurement; 3] {
        let n = self.count;
        let mut vector: Vec<Value> = Vec::new();
        let mut list: List<Value> = List::new();
        let mut reserved: Vec<Value> = Vec::with_capacity(n);

        let vector_run = Measurement::run(Variant::Vector, &mut vector, n);
        let list_run = Measurement::run(Variant::List, &mut list, n);
        let preallocated_run = match self.preallocated {
            PreallocatedMode::Reuse => {
                info!(
                    size = vector.len(),
                    "preallocated run reuses the populated vector"
                );
                Measurement::run(Variant::PreallocatedVector, &mut vector, n)
            }
            PreallocatedMode::Reserved => Measurement::run(
                Variant::PreallocatedVector,
                &mut reserved,
                n,
            ),
        };

        [vector_run, list_run, preallocated_run]
    }

    /// Run the suite `times` times.
    pub fn repeat(&self, times: usize) -> Summary {
        (0..times).map(|_| self.run()).collect()
    }
}

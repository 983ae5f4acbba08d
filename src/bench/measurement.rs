use super::{middle_insertions, Value};
use crate::Sequence;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// The three measurements of a [`Suite`](struct.Suite.html), in run
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Empty vector.
    Vector,
    /// Empty linked list.
    List,
    /// Vector with reserved capacity.
    PreallocatedVector,
}

impl Variant {
    pub const ALL: [Variant; 3] =
        [Variant::Vector, Variant::List, Variant::PreallocatedVector];

    /// Label printed in front of the measured time.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Vector => "Vector",
            Variant::List => "List",
            Variant::PreallocatedVector => "Preallocated Vector",
        }
    }

    /// Position of this variant in [`Variant::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one timed run of midpoint insertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub variant: Variant,
    /// Number of insertions.
    pub count: usize,
    /// Container size before the run.
    pub initial_size: usize,
    /// Container size after the run.
    pub final_size: usize,
    pub elapsed: Duration,
}

impl Measurement {
    /// Time `count` midpoint insertions into `container`.
    pub fn run<C>(variant: Variant, container: &mut C, count: usize) -> Self
    where
        C: Sequence<Value> + ?Sized,
    {
        let initial_size = container.count();
        let elapsed = middle_insertions(container, count);
        let m = Measurement {
            variant,
            count,
            initial_size,
            final_size: container.count(),
            elapsed,
        };
        debug!(
            variant = variant.label(),
            count,
            initial_size,
            final_size = m.final_size,
            capacity = container.capacity(),
            elapsed_ns = elapsed.as_nanos() as u64,
            "measured midpoint insertions"
        );
        m
    }

    /// Elapsed whole milliseconds, truncated.
    pub fn millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

//! Timed midpoint insertion benchmark.
//!
//! The core of this module is [`middle_insertions()`]: insert the values
//! `0..n`, in order, each at index `count() / 2` of the container at the
//! time of the insertion, and measure the total time with a monotonic
//! clock.
//!
//! A [`Suite`] runs that routine on a vector, a [`List`](../struct.List.html)
//! and a vector labelled "preallocated", in that order.
//!
//! ```
//! use midbench::bench::{middle_insertions, Suite, Variant};
//!
//! let mut v: Vec<i32> = Vec::new();
//! middle_insertions(&mut v, 4);
//! assert_eq!(v, vec![1, 3, 2, 0]);
//!
//! let results = Suite::new(100).run();
//! assert_eq!(results[0].variant, Variant::Vector);
//! assert_eq!(results[1].final_size, 100);
//! ```

use crate::Sequence;
use std::time::{Duration, Instant};

/// Value type stored by the benchmarked containers.
pub type Value = i32;

/// Default number of insertions per measurement.
pub const DEFAULT_COUNT: usize = 10000;

/// Insert `0..n` at the midpoint of `container` and return the elapsed
/// time.
///
/// The midpoint is recomputed before every insertion. When the
/// container is empty the value goes to the front. The container ends up
/// with `n` more elements.
pub fn middle_insertions<C>(container: &mut C, n: usize) -> Duration
where
    C: Sequence<Value> + ?Sized,
{
    let t = Instant::now();
    for i in 0..n {
        container.insert_middle(i as Value);
    }
    t.elapsed()
}

mod measurement;
pub use measurement::{Measurement, Variant};
mod suite;
pub use suite::{PreallocatedMode, Suite};
mod summary;
pub use summary::{Summary, TimeStats};

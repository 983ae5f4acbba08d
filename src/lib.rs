/// Ordered container supporting insertion at an arbitrary position.
///
/// `Sequence` trait defines the primitives the midpoint insertion
/// benchmark needs from a container. Implementers decide how the
/// insertion position is reached: a contiguous array computes it by
/// index arithmetic while a linked list has to walk there from its front.
/// The cost of reaching the position is part of what is measured.
///
/// See
/// [`Sequence` implementors](trait.Sequence.html#implementors)
/// for the containers available in this crate.
///
/// ## Examples
///
/// ```
/// use midbench::{List, Sequence};
///
/// let mut l = List::new();
/// for i in 0..4 {
///     l.insert_middle(i);
/// }
/// assert_eq!(Sequence::to_vec(&l), vec![1, 3, 2, 0]);
/// ```
pub trait Sequence<T> {
    /// Get the number of elements in the container.
    fn count(&self) -> usize;

    /// Get the number of elements fitting in the container before its
    /// storage has to grow.
    fn capacity(&self) -> usize;

    /// Make room for at least `additional` more elements.
    fn reserve(&mut self, additional: usize);

    /// Insert `value` at index `count() / 2`.
    /// When the container is empty, `value` becomes its only element.
    fn insert_middle(&mut self, value: T);

    /// Copy the container elements, from start to end.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone;
}

/// Contiguous dynamic array implementation of [`Sequence`].
mod vector;

/// Doubly linked list with a cursor API.
///
/// [`List`] nodes are stored in a slot arena and linked with indices.
/// Reaching a position requires walking the links from one end of the
/// list, which is what makes the list variant of the benchmark quadratic.
pub mod list;
pub use list::List;

/// Timed midpoint insertion benchmark.
pub mod bench;

/// Plain model of the midpoint insertion algorithm.
///
/// Tests compare the final content of benchmarked containers against this
/// model, independently of any timing.
pub mod reference;

/// Formatting of benchmark results.
pub mod report;

/// Benchmark settings read from a [`toml`](https://toml.io/en/) file.
pub mod config;

/// Public test module available at test time.
/// This module tests the expected behavior of
/// [`Sequence`](trait.Sequence.html) implementers with
/// `test_sequence()`.
#[cfg(test)]
mod tests;

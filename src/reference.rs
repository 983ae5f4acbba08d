//! The expected outcome of a midpoint insertion run, computed without
//! any of the benchmarked containers.
//!
//! ```
//! use midbench::reference::{midpoint_positions, reference_sequence};
//!
//! assert_eq!(midpoint_positions(0, 4), vec![0, 0, 1, 1]);
//! assert_eq!(reference_sequence(&[], 4), vec![1, 3, 2, 0]);
//! ```

/// Index used by each of the `n` insertions of a run starting on a
/// container of `initial` elements.
pub fn midpoint_positions(initial: usize, n: usize) -> Vec<usize> {
    (0..n).map(|i| (initial + i) / 2).collect()
}

/// Content of a container holding `initial` after inserting `0..n` one
/// by one, each at the midpoint of the container at that time.
///
/// The sequence is rebuilt from slices at every step instead of shifting
/// elements in place, so it shares no code with the `Vec` implementation
/// of [`Sequence`](../trait.Sequence.html).
pub fn reference_sequence(initial: &[i32], n: usize) -> Vec<i32> {
    let positions = midpoint_positions(initial.len(), n);
    positions
        .into_iter()
        .zip(0..)
        .fold(initial.to_vec(), |values, (at, value)| {
            let (front, back) = values.split_at(at);
            front
                .iter()
                .copied()
                .chain(std::iter::once(value))
                .chain(back.iter().copied())
                .collect()
        })
}

#[cfg(test)]
mod tests {
    use super::{midpoint_positions, reference_sequence};

    #[test]
    fn test_no_insertion() {
        assert!(midpoint_positions(7, 0).is_empty());
        assert_eq!(reference_sequence(&[], 0), Vec::<i32>::new());
        assert_eq!(reference_sequence(&[5, 6], 0), vec![5, 6]);
    }

    #[test]
    fn test_trace_from_empty() {
        assert_eq!(midpoint_positions(0, 6), vec![0, 0, 1, 1, 2, 2]);
        assert_eq!(reference_sequence(&[], 1), vec![0]);
        assert_eq!(reference_sequence(&[], 2), vec![1, 0]);
        assert_eq!(reference_sequence(&[], 3), vec![1, 2, 0]);
        assert_eq!(reference_sequence(&[], 4), vec![1, 3, 2, 0]);
        assert_eq!(reference_sequence(&[], 5), vec![1, 3, 4, 2, 0]);
    }

    #[test]
    fn test_trace_from_prefilled() {
        // [a b c] -> [a 0 b c] -> [a 0 1 b c]
        assert_eq!(midpoint_positions(3, 2), vec![1, 2]);
        assert_eq!(reference_sequence(&[7, 8, 9], 2), vec![7, 0, 1, 8, 9]);
    }

    #[test]
    fn test_length() {
        for n in [0usize, 1, 2, 17, 100] {
            assert_eq!(reference_sequence(&[1, 2, 3], n).len(), 3 + n);
        }
    }
}

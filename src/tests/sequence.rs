use crate::bench::middle_insertions;
use crate::reference::{midpoint_positions, reference_sequence};
use crate::Sequence;

pub type TestValue = i32;

fn test_insert_middle<C>(c: &mut C, value: TestValue)
where
    C: Sequence<TestValue>,
{
    let before = c.to_vec();
    let at = before.len() / 2;
    c.insert_middle(value);
    let after = c.to_vec();

    // One more element.
    assert_eq!(after.len(), before.len() + 1);
    // The value lands at the midpoint.
    assert_eq!(after[at], value);
    // Other elements keep their relative order.
    assert_eq!(&after[..at], &before[..at]);
    assert_eq!(&after[at + 1..], &before[at..]);
}

fn test_against_reference<C>(c: &mut C, n: usize)
where
    C: Sequence<TestValue>,
{
    let initial = c.to_vec();
    middle_insertions(c, n);
    assert_eq!(c.count(), initial.len() + n);
    assert_eq!(c.to_vec(), reference_sequence(&initial, n));
}

fn test_zero_insertion<C>(c: &mut C)
where
    C: Sequence<TestValue>,
{
    let initial = c.to_vec();
    middle_insertions(c, 0);
    assert_eq!(c.to_vec(), initial);
}

/// Check midpoint insertion on a container, starting from whatever it
/// holds.
pub fn test_sequence<C>(mut c: C)
where
    C: Sequence<TestValue>,
{
    let initial = c.count();
    assert_eq!(c.to_vec().len(), initial);
    assert_eq!(midpoint_positions(initial, 1), vec![initial / 2]);

    test_zero_insertion(&mut c);
    for value in -5..0 {
        test_insert_middle(&mut c, value);
    }
    for n in [1, 2, 3, 4, 33] {
        test_against_reference(&mut c, n);
    }
    assert_eq!(c.count(), initial + 5 + 43);
}

/// Check that reserving room on an empty container avoids growth during
/// a run.
pub fn test_reserve<C>(mut c: C)
where
    C: Sequence<TestValue>,
{
    let n = 64;
    c.reserve(n);
    let capacity = c.capacity();
    assert!(capacity >= n);
    middle_insertions(&mut c, n);
    assert_eq!(c.count(), n);
    assert_eq!(c.capacity(), capacity);
}

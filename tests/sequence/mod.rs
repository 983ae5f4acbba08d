use midbench::bench::middle_insertions;
use midbench::reference::reference_sequence;
use midbench::Sequence;
use rand::random;

#[allow(dead_code)]
pub fn rand(a: u64, b: u64) -> u64 {
    if a >= b {
        panic!("Empty range for random number");
    }
    a + (random::<u64>() % (b - a))
}

/// Run `n` midpoint insertions and compare against the reference model.
pub fn test_n_insertions<C>(c: &mut C, n: usize)
where
    C: Sequence<i32>,
{
    let initial = c.to_vec();
    middle_insertions(c, n);

    assert_eq!(c.count(), initial.len() + n);
    assert_eq!(c.to_vec(), reference_sequence(&initial, n));
}

/// Apply runs of random lengths, starting from the container content.
pub fn test_sequence<C>(mut c: C)
where
    C: Sequence<i32>,
{
    test_n_insertions(&mut c, 0);
    for _ in 0..8 {
        test_n_insertions(&mut c, rand(0, 64) as usize);
    }
}

use crate::{bit_iter::BitIter, bit_set::BitSet};

#[test]
fn test_scan_order() {
    // First word only
    let iter = BitIter::new(0b1001_0001, &[]);
    assert_eq!(iter.collect::<Vec<_>>(), vec![0, 4, 7]);

    // Across word boundaries, skipping all-zero words
    let rest = [0u64, 1 | (1 << 63), 0, 1 << 5];
    let iter = BitIter::new(1 << 63, &rest);
    assert_eq!(iter.collect::<Vec<_>>(), vec![63, 128, 191, 261]);

    // All-zero storage yields nothing
    assert_eq!(BitIter::new(0, &[0, 0]).count(), 0);
}

#[test]
fn test_exhaustion_is_permanent() {
    let mut iter = BitIter::new(0b10, &[]);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), None);
    for _ in 0..10 {
        assert_eq!(iter.next(), None);
    }
}

#[test]
fn test_restart_from_scratch() {
    // The cursor is single-pass; a fresh traversal takes a fresh cursor.
    let set = BitSet::from_indices([2, 5, 80]);
    let first_pass: Vec<usize> = set.iter().collect();
    let second_pass: Vec<usize> = set.iter().collect();
    assert_eq!(first_pass, vec![2, 5, 80]);
    assert_eq!(second_pass, first_pass);
}

#[test]
fn test_clone_is_independent() {
    let words = [0b100u64];
    let mut iter = BitIter::new(0b11, &words);
    assert_eq!(iter.next(), Some(0));

    let mut forked = iter.clone();
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(66));
    assert_eq!(forked.next(), Some(1));
    assert_eq!(forked.next(), Some(66));
    assert_eq!(forked.next(), None);
}

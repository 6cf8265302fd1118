use crate::word_ops;

#[test]
fn test_or_assign() {
    let mut dst = [0b0001u64, 0, u64::MAX];
    let src = [0b0110u64, 0, u64::MAX];
    assert!(word_ops::or_assign(&mut dst, &src));
    assert_eq!(dst, [0b0111, 0, u64::MAX]);

    // ORing the same source again changes nothing.
    assert!(!word_ops::or_assign(&mut dst, &src));
    assert_eq!(dst, [0b0111, 0, u64::MAX]);

    // Empty buffers are a valid no-op.
    assert!(!word_ops::or_assign(&mut [], &[]));
}

#[test]
fn test_and_assign() {
    let mut dst = [0b0111u64, u64::MAX, 0];
    let src = [0b0101u64, u64::MAX, 0];
    assert!(word_ops::and_assign(&mut dst, &src));
    assert_eq!(dst, [0b0101, u64::MAX, 0]);

    // An all-ones source leaves every word intact.
    assert!(!word_ops::and_assign(&mut dst, &[u64::MAX; 3]));
    assert_eq!(dst, [0b0101, u64::MAX, 0]);
}

#[test]
fn test_xor_assign() {
    let mut dst = [0b1100u64, 7];
    assert!(word_ops::xor_assign(&mut dst, &[0b1010, 0]));
    assert_eq!(dst, [0b0110, 7]);

    // XOR with itself zeroes everything.
    let src = dst;
    assert!(word_ops::xor_assign(&mut dst, &src));
    assert_eq!(dst, [0, 0]);

    // A zero source changes nothing.
    assert!(!word_ops::xor_assign(&mut dst, &[0, 0]));
}

#[test]
fn test_and_not_assign() {
    let mut dst = [0b1111u64, 0b1000];
    assert!(word_ops::and_not_assign(&mut dst, &[0b0101, 0]));
    assert_eq!(dst, [0b1010, 0b1000]);

    // Removing bits that are not present changes nothing.
    assert!(!word_ops::and_not_assign(&mut dst, &[0b0101, 0b0111]));
    assert_eq!(dst, [0b1010, 0b1000]);
}

#[test]
fn test_change_detection_visits_every_word() {
    // The first word already changes; the later words must still be
    // combined rather than skipped.
    let mut dst = [0u64, 0, 0];
    assert!(word_ops::or_assign(&mut dst, &[1, 2, 4]));
    assert_eq!(dst, [1, 2, 4]);
}

#[test]
#[should_panic(expected = "word buffers must have the same length")]
fn test_length_mismatch_panics() {
    let mut dst = [0u64; 2];
    word_ops::or_assign(&mut dst, &[1u64]);
}

#[test]
fn test_not_assign() {
    let mut words = [0u64, u64::MAX, 0b1010];
    word_ops::not_assign(&mut words);
    assert_eq!(words, [u64::MAX, 0, !0b1010u64]);

    word_ops::not_assign(&mut []);
}

#[test]
fn test_trim_trailing_zeros() {
    assert_eq!(word_ops::trim_trailing_zeros(&[]), &[] as &[u64]);
    assert_eq!(word_ops::trim_trailing_zeros(&[0]), &[] as &[u64]);
    assert_eq!(word_ops::trim_trailing_zeros(&[0, 0, 0]), &[] as &[u64]);
    assert_eq!(word_ops::trim_trailing_zeros(&[1, 0, 0]), &[1]);
    assert_eq!(word_ops::trim_trailing_zeros(&[0, 2]), &[0, 2]);
    assert_eq!(word_ops::trim_trailing_zeros(&[3, 0, 5]), &[3, 0, 5]);

    // The result is a view into the input, not a copy.
    let words = [7u64, 0];
    let trimmed = word_ops::trim_trailing_zeros(&words);
    assert_eq!(trimmed.as_ptr(), words.as_ptr());
}

#[test]
fn test_first_n_bits_mask() {
    assert_eq!(word_ops::first_n_bits_mask(0), 0);
    assert_eq!(word_ops::first_n_bits_mask(1), 1);
    assert_eq!(word_ops::first_n_bits_mask(4), 0b1111);
    assert_eq!(word_ops::first_n_bits_mask(63), u64::MAX >> 1);
    assert_eq!(word_ops::first_n_bits_mask(64), u64::MAX);
}

#[test]
#[should_panic(expected = "exceeds the word width")]
fn test_first_n_bits_mask_rejects_wide_masks() {
    word_ops::first_n_bits_mask(65);
}

#[test]
fn test_and_not() {
    assert_eq!(word_ops::and_not(0b1100, 0b1010), 0b0100);
    assert_eq!(word_ops::and_not(u64::MAX, 0), u64::MAX);
    assert_eq!(word_ops::and_not(u64::MAX, u64::MAX), 0);

    fastrand::seed(630095113);
    for _ in 0..1000 {
        let x = fastrand::u64(..);
        let y = fastrand::u64(..);
        assert_eq!(word_ops::and_not(x, y), x & !y);
    }
}

//! Word-level kernels shared by [`BitSet`](crate::BitSet) and
//! [`BitArray`](crate::BitArray).
//!
//! The slice kernels combine equal-length `u64` buffers in LSB-first word
//! order and report whether any destination word changed. Change detection
//! visits every word rather than stopping at the first difference, so the
//! full combine always completes.

use std::fmt;

/// Combines `dst[i] &= src[i]` over equal-length slices.
///
/// Returns `true` if any destination word changed.
///
/// # Panics
///
/// Panics if the slice lengths differ.
pub fn and_assign(dst: &mut [u64], src: &[u64]) -> bool {
    combine(dst, src, |d, s| d & s)
}

/// Combines `dst[i] |= src[i]` over equal-length slices.
///
/// Returns `true` if any destination word changed.
///
/// # Panics
///
/// Panics if the slice lengths differ.
pub fn or_assign(dst: &mut [u64], src: &[u64]) -> bool {
    combine(dst, src, |d, s| d | s)
}

/// Combines `dst[i] ^= src[i]` over equal-length slices.
///
/// Returns `true` if any destination word changed.
///
/// # Panics
///
/// Panics if the slice lengths differ.
pub fn xor_assign(dst: &mut [u64], src: &[u64]) -> bool {
    combine(dst, src, |d, s| d ^ s)
}

/// Combines `dst[i] &= !src[i]` over equal-length slices.
///
/// Returns `true` if any destination word changed.
///
/// # Panics
///
/// Panics if the slice lengths differ.
pub fn and_not_assign(dst: &mut [u64], src: &[u64]) -> bool {
    combine(dst, src, and_not)
}

fn combine(dst: &mut [u64], src: &[u64], op: impl Fn(u64, u64) -> u64) -> bool {
    assert_eq!(
        dst.len(),
        src.len(),
        "word buffers must have the same length: {} != {}",
        dst.len(),
        src.len()
    );
    let mut changed = false;
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        let next = op(*d, *s);
        changed |= next != *d;
        *d = next;
    }
    changed
}

/// Complements every word in place.
///
/// Callers are responsible for clearing bits beyond their semantic capacity
/// afterwards (see [`BitArray::not`](crate::BitArray::not)).
pub fn not_assign(words: &mut [u64]) {
    for word in words.iter_mut() {
        *word = !*word;
    }
}

/// Returns the longest prefix of `words` whose last word (if any) is
/// nonzero.
///
/// This is a borrowed view of the input, not a copy.
pub fn trim_trailing_zeros(words: &[u64]) -> &[u64] {
    let len = words
        .iter()
        .rposition(|&word| word != 0)
        .map_or(0, |last| last + 1);
    &words[..len]
}

/// Returns a word with exactly the lowest `n` bits set, for `n` in `0..=64`.
///
/// `n == 64` yields all-ones without shifting by the word width.
///
/// # Panics
///
/// Panics if `n > 64`.
#[inline]
pub fn first_n_bits_mask(n: usize) -> u64 {
    assert!(n <= 64, "mask width {n} exceeds the word width");
    if n == 64 { u64::MAX } else { (1u64 << n) - 1 }
}

/// Computes `x & !y`.
///
/// A hardware AND-NOT may be substituted here as long as it keeps these
/// exact semantics.
#[inline]
pub fn and_not(x: u64, y: u64) -> u64 {
    x & !y
}

/// Renders `overflow` most-significant word first, then `inline`, as
/// lowercase 16-digit hex with `-` separators between words.
pub fn format_words(f: &mut fmt::Formatter<'_>, inline: u64, overflow: &[u64]) -> fmt::Result {
    for word in overflow.iter().rev() {
        write!(f, "{word:016x}-")?;
    }
    write!(f, "{inline:016x}")
}

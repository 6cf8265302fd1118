//! A mutable, fixed-capacity bit array with change-reporting mutators.

use std::fmt;

use bitspan_common::{Result, error::Error, verify_arg};

use crate::{bit_iter::BitIter, bit_set::BitSet, word_ops};

/// A fixed-capacity array of bits with `Box<[u64]>` storage, mutated in
/// place.
///
/// The capacity is fixed for the object's life; the storage holds
/// `capacity.div_ceil(64)` LSB-ordered words (capacity 0 means no words),
/// with `words[0]` covering indices 0..64. Bits at or beyond the capacity
/// in the last word are always zero; bulk operations such as
/// [`not`](BitArray::not) re-enforce this tail invariant so that equality
/// against [`BitSet`] and conversion stay correct.
///
/// Mutators report whether they actually changed the content. Reads are
/// total and never fail; writes past the capacity fail before any mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitArray {
    capacity: usize,
    words: Box<[u64]>,
}

impl BitArray {
    /// Creates an array of `capacity` zero bits.
    pub fn new(capacity: usize) -> BitArray {
        BitArray {
            capacity,
            words: vec![0u64; capacity.div_ceil(64)].into_boxed_slice(),
        }
    }

    /// Imports a [`BitSet`] into a fresh array.
    ///
    /// The storage is sized to cover the set's highest word and the
    /// capacity is the word count times 64. The set's words are deep-copied;
    /// no storage is shared afterwards.
    pub fn from_bit_set(set: &BitSet) -> BitArray {
        let (inline, overflow) = set.parts();
        if inline == 0 && overflow.is_empty() {
            return BitArray::new(0);
        }
        let mut words = vec![0u64; overflow.len() + 1];
        words[0] = inline;
        words[1..].copy_from_slice(overflow);
        BitArray {
            capacity: words.len() * 64,
            words: words.into_boxed_slice(),
        }
    }

    /// Returns the fixed capacity in bits.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Reads the bit at `index`.
    ///
    /// Total: any index at or beyond the capacity reads as zero.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        self.words
            .get(index / 64)
            .is_some_and(|&word| word & (1u64 << (index % 64)) != 0)
    }

    /// Writes the bit at `index` and reports whether the content changed.
    ///
    /// Fails with `IndexOutOfRange` when `index >= capacity`, before any
    /// mutation.
    pub fn set(&mut self, index: usize, value: bool) -> Result<bool> {
        if index >= self.capacity {
            return Err(Error::index_out_of_range(index, self.capacity));
        }
        let word = &mut self.words[index / 64];
        let mask = 1u64 << (index % 64);
        let prev = *word;
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
        Ok(*word != prev)
    }

    /// ORs `other` into `self`, reporting whether the content changed.
    ///
    /// Fails with `InvalidArgument` when the capacities differ.
    pub fn or(&mut self, other: &BitArray) -> Result<bool> {
        self.check_capacity(other)?;
        Ok(word_ops::or_assign(&mut self.words, &other.words))
    }

    /// ANDs `other` into `self`, reporting whether the content changed.
    ///
    /// Fails with `InvalidArgument` when the capacities differ.
    pub fn and(&mut self, other: &BitArray) -> Result<bool> {
        self.check_capacity(other)?;
        Ok(word_ops::and_assign(&mut self.words, &other.words))
    }

    /// XORs `other` into `self`, reporting whether the content changed.
    ///
    /// Fails with `InvalidArgument` when the capacities differ.
    pub fn xor(&mut self, other: &BitArray) -> Result<bool> {
        self.check_capacity(other)?;
        Ok(word_ops::xor_assign(&mut self.words, &other.words))
    }

    fn check_capacity(&self, other: &BitArray) -> Result<()> {
        verify_arg!(other, self.capacity == other.capacity);
        Ok(())
    }

    /// Complements every bit in place.
    ///
    /// The final word is re-masked so bits at or beyond the capacity stay
    /// zero. A no-op on a zero-capacity array.
    pub fn not(&mut self) {
        word_ops::not_assign(&mut self.words);
        self.mask_tail();
    }

    /// Clears all bits.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Sets all bits within the capacity.
    pub fn set_all(&mut self) {
        self.words.fill(u64::MAX);
        self.mask_tail();
    }

    /// Counts the set bits.
    pub fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    fn mask_tail(&mut self) {
        let partial = self.capacity % 64;
        if partial != 0
            && let Some(last) = self.words.last_mut()
        {
            *last &= word_ops::first_n_bits_mask(partial);
        }
    }

    /// Copies the content out as a canonical [`BitSet`].
    pub fn to_bit_set(&self) -> BitSet {
        match self.words.split_first() {
            Some((&inline, rest)) => BitSet::from_words(inline, rest.to_vec()),
            None => BitSet::empty(),
        }
    }

    /// Returns an iterator over the set-bit indices in ascending order.
    pub fn iter(&self) -> BitIter<'_> {
        match self.words.split_first() {
            Some((&first, rest)) => BitIter::new(first, rest),
            None => BitIter::new(0, &[]),
        }
    }
}

impl PartialEq<BitSet> for BitArray {
    /// Compares meaningful bits only: the capacity and any trailing zero
    /// words are ignored, so an array with unused trailing capacity can
    /// equal a smaller canonical set.
    fn eq(&self, other: &BitSet) -> bool {
        let (first, rest) = match self.words.split_first() {
            Some((&first, rest)) => (first, rest),
            None => (0, &[][..]),
        };
        let (inline, overflow) = other.parts();
        first == inline && word_ops::trim_trailing_zeros(rest) == overflow
    }
}

impl PartialEq<BitArray> for BitSet {
    fn eq(&self, other: &BitArray) -> bool {
        other == self
    }
}

impl<'a> IntoIterator for &'a BitArray {
    type Item = usize;
    type IntoIter = BitIter<'a>;

    fn into_iter(self) -> BitIter<'a> {
        self.iter()
    }
}

impl fmt::Display for BitArray {
    /// Renders the raw words, unused capacity included, in the same
    /// high-to-low hex form as [`BitSet`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.words.split_first() {
            Some((&inline, rest)) => word_ops::format_words(f, inline, rest),
            None => word_ops::format_words(f, 0, &[]),
        }
    }
}

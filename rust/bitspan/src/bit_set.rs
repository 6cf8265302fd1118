//! An immutable bit set in canonical form.
//!
//! BitSet models a set S of `usize` indices as one inline word (indices
//! 0..64) plus a trimmed overflow word sequence (indices 64 and up, stored
//! least-significant word first).
//!
//! Key properties and invariants
//! - Canonical form: the overflow never ends in an all-zero word, so the
//!   last overflow word, when present, is nonzero.
//! - Structural equality and hashing over `(inline, overflow)` are
//!   therefore semantic, and the overflow length is meaningful for ordering.
//! - Instances never alias writable storage: every constructor copies into
//!   an exclusively owned buffer, and every operation returns a new value.
//!
//! Typical usage
//! - Construct via [`BitSet::empty`], [`BitSet::singleton`],
//!   [`BitSet::universe`] or [`BitSet::from_indices`].
//! - Combine with [`union`](BitSet::union) / [`intersect`](BitSet::intersect) /
//!   [`difference`](BitSet::difference) /
//!   [`symmetric_difference`](BitSet::symmetric_difference), or the
//!   `|` / `&` / `-` / `^` operators on references.
//! - Query membership with [`contains`](BitSet::contains) and iterate the
//!   ascending set indices with [`iter`](BitSet::iter).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use bitspan_common::{Result, verify_arg};

use crate::{bit_iter::BitIter, word_ops};

/// An immutable set of `usize` indices over packed `u64` words.
///
/// Index `i < 64` lives in bit `i` of the inline word; index `i >= 64`
/// lives in bit `i % 64` of overflow word `i / 64 - 1`. The overflow is
/// always trimmed (no trailing all-zero word).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitSet {
    inline: u64,
    overflow: Box<[u64]>,
}

impl BitSet {
    /// Creates the empty set.
    pub fn empty() -> BitSet {
        BitSet {
            inline: 0,
            overflow: Box::new([]),
        }
    }

    /// Creates the set containing exactly `index`.
    pub fn singleton(index: usize) -> BitSet {
        if index < 64 {
            BitSet {
                inline: 1u64 << index,
                overflow: Box::new([]),
            }
        } else {
            // The overflow length equals the word index containing `index`,
            // and only the last word is nonzero.
            let word_count = index / 64;
            let mut overflow = vec![0u64; word_count];
            overflow[word_count - 1] = 1u64 << (index % 64);
            BitSet {
                inline: 0,
                overflow: overflow.into_boxed_slice(),
            }
        }
    }

    /// Creates the set `{0, .., count - 1}`.
    pub fn universe(count: usize) -> BitSet {
        if count <= 64 {
            return BitSet {
                inline: word_ops::first_n_bits_mask(count),
                overflow: Box::new([]),
            };
        }
        let overflow_len = (count - 1) / 64;
        let mut overflow = vec![u64::MAX; overflow_len];
        overflow[overflow_len - 1] = word_ops::first_n_bits_mask((count - 1) % 64 + 1);
        BitSet {
            inline: u64::MAX,
            overflow: overflow.into_boxed_slice(),
        }
    }

    /// Builds a set from an iterator of indices.
    ///
    /// Duplicates are ignored and order is irrelevant. An empty input yields
    /// [`BitSet::empty`].
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> BitSet {
        let indices: Vec<usize> = indices.into_iter().collect();
        let Some(&max) = indices.iter().max() else {
            return BitSet::empty();
        };
        let mut inline = 0u64;
        let mut overflow = vec![0u64; max / 64];
        for index in indices {
            if index < 64 {
                inline |= 1u64 << index;
            } else {
                overflow[index / 64 - 1] |= 1u64 << (index % 64);
            }
        }
        // The word holding `max` is the last one and is nonzero, so the
        // overflow is already trimmed.
        BitSet {
            inline,
            overflow: overflow.into_boxed_slice(),
        }
    }

    /// The trimming factory: drops trailing all-zero overflow words before
    /// wrapping, restoring canonical form after any operation that may have
    /// zeroed a tail.
    pub(crate) fn from_words(inline: u64, mut overflow: Vec<u64>) -> BitSet {
        overflow.truncate(word_ops::trim_trailing_zeros(&overflow).len());
        BitSet {
            inline,
            overflow: overflow.into_boxed_slice(),
        }
    }

    /// Tests membership of `index` in the set.
    ///
    /// Total: indices beyond the represented range read as absent.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        if index < 64 {
            self.inline & (1u64 << index) != 0
        } else {
            self.overflow
                .get(index / 64 - 1)
                .is_some_and(|&word| word & (1u64 << (index % 64)) != 0)
        }
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inline == 0 && self.overflow.is_empty()
    }

    /// Counts the elements of the set.
    pub fn count_ones(&self) -> usize {
        self.inline.count_ones() as usize
            + self
                .overflow
                .iter()
                .map(|word| word.count_ones() as usize)
                .sum::<usize>()
    }

    /// Returns a new set with the bit at `index` set to `value`.
    ///
    /// When the bit already equals `value`, the result is an equal value
    /// (the overflow is cloned, never shared). Clearing the only set bit of
    /// the last overflow word shrinks the overflow back down, so the result
    /// is always canonical.
    pub fn set(&self, index: usize, value: bool) -> BitSet {
        if self.contains(index) == value {
            return self.clone();
        }
        if index < 64 {
            return BitSet {
                inline: self.inline ^ (1u64 << index),
                overflow: self.overflow.clone(),
            };
        }
        let word_index = index / 64 - 1;
        let mut overflow = vec![0u64; self.overflow.len().max(word_index + 1)];
        overflow[..self.overflow.len()].copy_from_slice(&self.overflow);
        overflow[word_index] ^= 1u64 << (index % 64);
        Self::from_words(self.inline, overflow)
    }

    /// Returns the union of `self` and `other`.
    pub fn union(&self, other: &BitSet) -> BitSet {
        let (longer, shorter) = if self.overflow.len() >= other.overflow.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut overflow = longer.overflow.to_vec();
        word_ops::or_assign(&mut overflow[..shorter.overflow.len()], &shorter.overflow);
        // OR cannot zero a nonzero tail, so the result is already canonical.
        BitSet {
            inline: self.inline | other.inline,
            overflow: overflow.into_boxed_slice(),
        }
    }

    /// Returns the intersection of `self` and `other`.
    pub fn intersect(&self, other: &BitSet) -> BitSet {
        let overlap = self.overflow.len().min(other.overflow.len());
        let mut overflow = self.overflow[..overlap].to_vec();
        word_ops::and_assign(&mut overflow, &other.overflow[..overlap]);
        Self::from_words(self.inline & other.inline, overflow)
    }

    /// Returns the elements of `self` that are not in `other`.
    ///
    /// The overflow length of the result never exceeds `self`'s; words
    /// beyond `other`'s length are copied through unchanged.
    pub fn difference(&self, other: &BitSet) -> BitSet {
        let mut overflow = self.overflow.to_vec();
        let overlap = overflow.len().min(other.overflow.len());
        word_ops::and_not_assign(&mut overflow[..overlap], &other.overflow[..overlap]);
        Self::from_words(word_ops::and_not(self.inline, other.inline), overflow)
    }

    /// Returns the elements present in exactly one of `self` and `other`.
    pub fn symmetric_difference(&self, other: &BitSet) -> BitSet {
        let (longer, shorter) = if self.overflow.len() >= other.overflow.len() {
            (self, other)
        } else {
            (other, self)
        };
        let mut overflow = longer.overflow.to_vec();
        word_ops::xor_assign(&mut overflow[..shorter.overflow.len()], &shorter.overflow);
        Self::from_words(self.inline ^ other.inline, overflow)
    }

    /// Returns the union of all sets in the sequence.
    ///
    /// An empty sequence yields [`BitSet::empty`], the union's identity.
    pub fn union_many<'a>(sets: impl IntoIterator<Item = &'a BitSet>) -> BitSet {
        let mut inline = 0u64;
        let mut overflow: Vec<u64> = Vec::new();
        for set in sets {
            inline |= set.inline;
            if set.overflow.len() > overflow.len() {
                overflow.resize(set.overflow.len(), 0);
            }
            word_ops::or_assign(&mut overflow[..set.overflow.len()], &set.overflow);
        }
        Self::from_words(inline, overflow)
    }

    /// Returns the intersection of all sets in the sequence.
    ///
    /// Fails with `InvalidArgument` on an empty sequence: the intersection
    /// of nothing is undefined, not universal.
    pub fn intersect_many<'a>(sets: impl IntoIterator<Item = &'a BitSet>) -> Result<BitSet> {
        let sets: Vec<&BitSet> = sets.into_iter().collect();
        verify_arg!(sets, !sets.is_empty());
        let overlap = sets
            .iter()
            .map(|set| set.overflow.len())
            .min()
            .unwrap_or(0);
        let mut inline = u64::MAX;
        let mut overflow = vec![u64::MAX; overlap];
        for set in sets {
            inline &= set.inline;
            word_ops::and_assign(&mut overflow, &set.overflow[..overlap]);
        }
        Ok(Self::from_words(inline, overflow))
    }

    /// Returns an iterator over the set indices in ascending order.
    pub fn iter(&self) -> BitIter<'_> {
        BitIter::new(self.inline, &self.overflow)
    }

    /// The inline word and the trimmed overflow words.
    #[inline]
    pub(crate) fn parts(&self) -> (u64, &[u64]) {
        (self.inline, &self.overflow)
    }
}

impl Default for BitSet {
    fn default() -> Self {
        BitSet::empty()
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> BitSet {
        BitSet::from_indices(iter)
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = BitIter<'a>;

    fn into_iter(self) -> BitIter<'a> {
        self.iter()
    }
}

impl Ord for BitSet {
    /// Orders by overflow length first, then by overflow contents
    /// most-significant word first, then by the inline word: a set spanning
    /// a wider index range sorts after a narrower one regardless of
    /// magnitude within that range.
    fn cmp(&self, other: &Self) -> Ordering {
        self.overflow
            .len()
            .cmp(&other.overflow.len())
            .then_with(|| self.overflow.iter().rev().cmp(other.overflow.iter().rev()))
            .then_with(|| self.inline.cmp(&other.inline))
    }
}

impl PartialOrd for BitSet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        word_ops::format_words(f, self.inline, &self.overflow)
    }
}

impl BitOr for &BitSet {
    type Output = BitSet;

    fn bitor(self, rhs: &BitSet) -> BitSet {
        self.union(rhs)
    }
}

impl BitAnd for &BitSet {
    type Output = BitSet;

    fn bitand(self, rhs: &BitSet) -> BitSet {
        self.intersect(rhs)
    }
}

impl BitXor for &BitSet {
    type Output = BitSet;

    fn bitxor(self, rhs: &BitSet) -> BitSet {
        self.symmetric_difference(rhs)
    }
}

impl Sub for &BitSet {
    type Output = BitSet;

    fn sub(self, rhs: &BitSet) -> BitSet {
        self.difference(rhs)
    }
}

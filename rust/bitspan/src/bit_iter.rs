//! Lazy enumeration of set-bit indices.

/// An iterator over the ascending indices of set bits in packed `u64`
/// storage.
///
/// The cursor is built from a first word (indices 0..64) plus the remaining
/// words, so both [`BitSet`](crate::BitSet) and [`BitArray`](crate::BitArray)
/// drive it from their own storage without a shared base type. It is
/// forward-only and single-pass: once exhausted, `next` keeps returning
/// `None`.
#[derive(Clone)]
pub struct BitIter<'a> {
    words: std::slice::Iter<'a, u64>,
    current_word: u64,
    base_index: usize,
    next_base_index: usize,
}

impl<'a> BitIter<'a> {
    /// Creates a cursor over `first` (indices 0..64) followed by `rest`
    /// (indices 64 and up, least-significant word first).
    pub fn new(first: u64, rest: &'a [u64]) -> BitIter<'a> {
        BitIter {
            words: rest.iter(),
            current_word: first,
            base_index: 0,
            next_base_index: 64,
        }
    }
}

impl Iterator for BitIter<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current_word != 0 {
                let bit_offset = self.current_word.trailing_zeros() as usize;
                // Clear the least significant set bit for the next call.
                self.current_word &= self.current_word - 1;
                return Some(self.base_index + bit_offset);
            }

            match self.words.next() {
                Some(&word) => {
                    self.current_word = word;
                    self.base_index = self.next_base_index;
                    self.next_base_index += 64;
                }
                None => return None,
            }
        }
    }
}

impl std::iter::FusedIterator for BitIter<'_> {}

//! Bit-indexed collection types over packed `u64` words.
//!
//! Two collection types share one representation and one word-level
//! algorithm library:
//!
//! - [`BitSet`]: an immutable bit set in canonical (trimmed) form,
//!   optimized for sparse and small indices. Every mutating-looking
//!   operation returns a new value.
//! - [`BitArray`]: a mutable, fixed-capacity bit array whose mutators
//!   report whether the content changed.
//!
//! Bit `b` of word `w` represents index `w * 64 + b`. Both types delegate
//! bulk bitwise work to [`word_ops`] and enumerate set-bit indices through
//! the shared [`BitIter`] cursor.

pub mod bit_array;
pub mod bit_iter;
pub mod bit_set;
pub mod word_ops;
#[cfg(test)]
mod tests;

pub use bit_array::BitArray;
pub use bit_iter::BitIter;
pub use bit_set::BitSet;

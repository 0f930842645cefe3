//! Fixed-size bitsets over `u32` indices such as nodes and edge ids

use fixedbitset::FixedBitSet;

/// A bitset of fixed size over indices `0..n`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IndexBitSet {
    bits: FixedBitSet,
}

impl IndexBitSet {
    /// Creates a bitset for indices `0..n` with all bits unset
    pub fn new(n: u32) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(n as usize),
        }
    }

    /// Sets bit `i` and returns its previous value
    /// ** Panics if `i >= n` **
    pub fn set_bit(&mut self, i: u32) -> bool {
        self.bits.put(i as usize)
    }

    /// Returns *true* if bit `i` is set; indices out of range are never set
    pub fn get_bit(&self, i: u32) -> bool {
        self.bits.contains(i as usize)
    }

    /// Iterates over all set bits in ascending order
    pub fn iter_set_bits(&self) -> impl Iterator<Item = u32> + '_ {
        self.bits.ones().map(|i| i as u32)
    }
}

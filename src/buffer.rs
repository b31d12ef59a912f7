//! Growable block storage
//!
//! This module defines `BlockBuf`, the exclusive-owning, resizable store of
//! 32-bit blocks backing every magnitude in the crate.
//!
//! Capacity is managed explicitly rather than left to `Vec`'s defaults:
//! `push` doubles capacity whenever the buffer is full, and `pop` halves it
//! whenever no more than a quarter is in use and capacity exceeds a small
//! floor. The asymmetric thresholds create hysteresis, so alternating
//! push/pop near a boundary never thrashes between allocations.
//!
//! Indexed access is plain slice indexing; callers guarantee bounds. This
//! is an internal module, not part of the public value contract.

use std::ops::{Index, IndexMut};

/// Fixed-width unsigned limb, the positional radix unit.
pub(crate) type Block = u32;

/// Capacity never shrinks at or below this many blocks.
const SHRINK_FLOOR: usize = 8;

/// Resizable contiguous store of `Block`s with explicit capacity policy.
///
/// Cloning deep-duplicates the allocation; moving transfers it, and
/// `std::mem::take` leaves the canonical empty state behind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct BlockBuf {
    blocks: Vec<Block>,
}

impl BlockBuf {
    pub(crate) fn new() -> Self {
        BlockBuf { blocks: Vec::new() }
    }

    /// Creates a buffer of `len` zero blocks.
    pub(crate) fn zeroed(len: usize) -> Self {
        BlockBuf {
            blocks: vec![0; len],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.blocks.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.blocks.capacity()
    }

    /// Appends a block, doubling capacity when the buffer is full.
    ///
    /// Allocation failure aborts the process; growth is the only operation
    /// in the crate that allocates.
    pub(crate) fn push(&mut self, block: Block) {
        let cap = self.blocks.capacity();
        if self.blocks.len() == cap {
            let grown = if cap == 0 { 1 } else { cap * 2 };
            self.blocks.reserve_exact(grown - self.blocks.len());
        }
        self.blocks.push(block);
    }

    /// Removes the most-significant block, halving capacity once no more
    /// than a quarter of it is in use (and it exceeds the shrink floor).
    pub(crate) fn pop(&mut self) -> Option<Block> {
        let popped = self.blocks.pop()?;
        let cap = self.blocks.capacity();
        if cap > SHRINK_FLOOR && self.blocks.len() <= cap / 4 {
            self.blocks.shrink_to(cap / 2);
        }
        Some(popped)
    }

    pub(crate) fn last(&self) -> Option<Block> {
        self.blocks.last().copied()
    }

    /// Returns the block at `index`, or zero past the end.
    ///
    /// Arithmetic loops walk two operands in lockstep; the shorter one
    /// reads as zero-extended.
    pub(crate) fn get(&self, index: usize) -> Block {
        self.blocks.get(index).copied().unwrap_or(0)
    }

    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.blocks.swap(a, b);
    }

    /// Strips most-significant zero blocks, restoring canonical form.
    pub(crate) fn trim(&mut self) {
        while self.last() == Some(0) {
            self.pop();
        }
    }
}

impl Index<usize> for BlockBuf {
    type Output = Block;

    fn index(&self, index: usize) -> &Block {
        &self.blocks[index]
    }
}

impl IndexMut<usize> for BlockBuf {
    fn index_mut(&mut self, index: usize) -> &mut Block {
        &mut self.blocks[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_doubles_capacity() {
        let mut buf = BlockBuf::new();
        let mut seen = Vec::new();
        for i in 0..9 {
            buf.push(i);
            seen.push(buf.capacity());
        }
        assert_eq!(seen, vec![1, 2, 2, 4, 4, 8, 8, 8, 16]);
    }

    #[test]
    fn pop_halves_capacity_at_quarter_use() {
        let mut buf = BlockBuf::new();
        for i in 0..16 {
            buf.push(i);
        }
        assert_eq!(buf.capacity(), 16);

        // Above a quarter in use: no shrink.
        for _ in 0..11 {
            buf.pop();
        }
        assert_eq!(buf.capacity(), 16);

        // 4 <= 16/4 triggers the halving.
        buf.pop();
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn capacity_never_shrinks_below_floor() {
        let mut buf = BlockBuf::new();
        for i in 0..8 {
            buf.push(i);
        }
        while buf.pop().is_some() {}
        assert_eq!(buf.capacity(), 8);
    }

    #[test]
    fn get_reads_zero_past_the_end() {
        let mut buf = BlockBuf::new();
        buf.push(7);
        assert_eq!(buf.get(0), 7);
        assert_eq!(buf.get(1), 0);
        assert_eq!(buf.get(100), 0);
    }

    #[test]
    fn trim_strips_high_zero_blocks() {
        let mut buf = BlockBuf::new();
        buf.push(5);
        buf.push(0);
        buf.push(0);
        buf.trim();
        assert_eq!(buf.len(), 1);
        assert_eq!(buf[0], 5);

        let mut zeros = BlockBuf::zeroed(3);
        zeros.trim();
        assert!(zeros.is_empty());
    }

    #[test]
    fn take_leaves_empty_source() {
        let mut buf = BlockBuf::new();
        buf.push(1);
        buf.push(2);
        let moved = std::mem::take(&mut buf);
        assert_eq!(moved.len(), 2);
        assert!(buf.is_empty());
    }
}

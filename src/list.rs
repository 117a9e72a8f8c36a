//! Cube list storage
//!
//! A [`List`] is the sum-of-products representation: an ordered sequence
//! of cubes plus a parallel byte-per-cube flag array. Bit 0 of a flag
//! marks the cube as deleted. Algorithms mark cubes while iterating and
//! compact once with [`List::purge`]; both phases are deliberately
//! visible in the API so callers can batch.
//!
//! The cube bytes live in one flat block buffer. Buffers grow in chunks
//! of [`CHUNK`] cubes; a failed reservation surfaces as
//! [`CapacityError`] and leaves the list unchanged.

use crate::cube::{self, Block};
use crate::error::CapacityError;

/// Growth chunk, in cubes.
pub(crate) const CHUNK: usize = 32;

/// A growable list of cubes with deletion flags.
///
/// The list denotes the OR of its live cubes. Order is not semantically
/// significant, but indices are stable between [`List::purge`] calls and
/// the algorithms rely on that.
#[derive(Debug, Clone)]
pub struct List {
    blk_per_cube: usize,
    blocks: Vec<Block>,
    flags: Vec<u8>,
}

impl List {
    /// Create an empty list for cubes of `blk_per_cube` blocks.
    ///
    /// Usually obtained through [`Context::new_list`](crate::Context::new_list).
    pub fn new(blk_per_cube: usize) -> Self {
        List {
            blk_per_cube,
            blocks: Vec::new(),
            flags: Vec::new(),
        }
    }

    /// Create a fresh deep copy of `other`, including its flags.
    pub fn from_list(other: &List) -> Result<Self, CapacityError> {
        let mut l = List::new(other.blk_per_cube);
        l.copy_from(other)?;
        Ok(l)
    }

    /// Number of cubes in the list, deleted ones included.
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// True when the list holds no cubes at all.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Blocks per cube in this list.
    pub fn blk_per_cube(&self) -> usize {
        self.blk_per_cube
    }

    /// Borrow the cube at `pos`.
    pub fn cube(&self, pos: usize) -> &[Block] {
        let start = pos * self.blk_per_cube;
        &self.blocks[start..start + self.blk_per_cube]
    }

    /// Mutably borrow the cube at `pos`.
    pub fn cube_mut(&mut self, pos: usize) -> &mut [Block] {
        let start = pos * self.blk_per_cube;
        &mut self.blocks[start..start + self.blk_per_cube]
    }

    /// Raw flag byte of the cube at `pos`.
    pub fn flag(&self, pos: usize) -> u8 {
        self.flags[pos]
    }

    /// True when the cube at `pos` is marked deleted.
    pub fn is_deleted(&self, pos: usize) -> bool {
        self.flags[pos] & 1 != 0
    }

    /// Mark the cube at `pos` as deleted. The cube stays in place until
    /// the next [`List::purge`].
    pub fn mark_deleted(&mut self, pos: usize) {
        self.flags[pos] |= 1;
    }

    /// Reserve room for one more cube, growing by [`CHUNK`] cubes at a
    /// time. On failure the list is unchanged.
    fn grow_for_one(&mut self) -> Result<(), CapacityError> {
        if self.flags.len() == self.flags.capacity() {
            self.flags.try_reserve(CHUNK)?;
        }
        let need = self.blk_per_cube;
        if self.blocks.len() + need > self.blocks.capacity() {
            self.blocks.try_reserve(CHUNK * self.blk_per_cube)?;
        }
        Ok(())
    }

    /// Append a fresh all-don't-care cube and return its position.
    pub fn add_cube(&mut self) -> Result<usize, CapacityError> {
        self.grow_for_one()?;
        self.blocks
            .extend(std::iter::repeat(cube::DC_BLOCK).take(self.blk_per_cube));
        self.flags.push(0);
        Ok(self.flags.len() - 1)
    }

    /// Append a copy of cube `c` and return its position.
    pub fn add_cube_from(&mut self, c: &[Block]) -> Result<usize, CapacityError> {
        debug_assert_eq!(c.len(), self.blk_per_cube);
        self.grow_for_one()?;
        self.blocks.extend_from_slice(c);
        self.flags.push(0);
        Ok(self.flags.len() - 1)
    }

    /// Append the live cubes of `b`. This is the union of the two lists
    /// without any simplification.
    pub fn add_cubes_from_list(&mut self, b: &List) -> Result<(), CapacityError> {
        for i in 0..b.len() {
            if !b.is_deleted(i) {
                self.add_cube_from(b.cube(i))?;
            }
        }
        Ok(())
    }

    /// Make this list an exact copy of `b`, flags included.
    pub fn copy_from(&mut self, b: &List) -> Result<(), CapacityError> {
        debug_assert_eq!(self.blk_per_cube, b.blk_per_cube);
        self.blocks
            .try_reserve(b.blocks.len().saturating_sub(self.blocks.len()))?;
        self.flags
            .try_reserve(b.flags.len().saturating_sub(self.flags.len()))?;
        self.blocks.clear();
        self.blocks.extend_from_slice(&b.blocks);
        self.flags.clear();
        self.flags.extend_from_slice(&b.flags);
        Ok(())
    }

    /// Truncate to zero cubes without releasing storage.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.flags.clear();
    }

    /// Truncate the list to `cnt` cubes. Used by the scope stack.
    pub(crate) fn truncate(&mut self, cnt: usize) {
        self.blocks.truncate(cnt * self.blk_per_cube);
        self.flags.truncate(cnt);
    }

    /// Compact the list in place, dropping cubes marked as deleted.
    ///
    /// Live cubes keep their relative order and all flags are reset to
    /// zero afterwards.
    pub fn purge(&mut self) {
        let bpc = self.blk_per_cube;
        let mut j = 0;
        for i in 0..self.flags.len() {
            if self.flags[i] & 1 == 0 {
                if i != j {
                    self.blocks.copy_within(i * bpc..(i + 1) * bpc, j * bpc);
                }
                j += 1;
            }
        }
        self.blocks.truncate(j * bpc);
        self.flags.truncate(j);
        self.flags.fill(0);
    }

    /// Mutably borrow two distinct cubes at once.
    pub fn cube_pair_mut(&mut self, i: usize, j: usize) -> (&mut [Block], &mut [Block]) {
        assert_ne!(i, j);
        let bpc = self.blk_per_cube;
        if i < j {
            let (lo, hi) = self.blocks.split_at_mut(j * bpc);
            (&mut lo[i * bpc..(i + 1) * bpc], &mut hi[..bpc])
        } else {
            let (lo, hi) = self.blocks.split_at_mut(i * bpc);
            let (a, b) = (&mut hi[..bpc], &mut lo[j * bpc..(j + 1) * bpc]);
            (a, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::Field;

    #[test]
    fn test_add_and_index() {
        let mut l = List::new(1);
        let a = l.add_cube().unwrap();
        let b = l.add_cube().unwrap();
        assert_eq!((a, b), (0, 1));
        assert_eq!(l.len(), 2);
        cube::set_var(l.cube_mut(0), 0, Field::One);
        assert_eq!(cube::get_var(l.cube(0), 0), Field::One);
        assert_eq!(cube::get_var(l.cube(1), 0), Field::DontCare);
    }

    #[test]
    fn test_mark_and_purge_preserves_order() {
        let mut l = List::new(1);
        for var in 0..5 {
            let pos = l.add_cube().unwrap();
            cube::set_var(l.cube_mut(pos), var, Field::One);
        }
        l.mark_deleted(1);
        l.mark_deleted(3);
        l.purge();
        assert_eq!(l.len(), 3);
        assert_eq!(cube::get_var(l.cube(0), 0), Field::One);
        assert_eq!(cube::get_var(l.cube(1), 2), Field::One);
        assert_eq!(cube::get_var(l.cube(2), 4), Field::One);
        assert!((0..3).all(|i| !l.is_deleted(i)));
    }

    #[test]
    fn test_copy_from_includes_flags() {
        let mut a = List::new(1);
        let mut b = List::new(1);
        b.add_cube().unwrap();
        b.add_cube().unwrap();
        b.mark_deleted(0);
        a.copy_from(&b).unwrap();
        assert_eq!(a.len(), 2);
        assert!(a.is_deleted(0));
        assert!(!a.is_deleted(1));
    }

    #[test]
    fn test_growth_past_chunk() {
        let mut l = List::new(2);
        for _ in 0..(3 * CHUNK + 1) {
            l.add_cube().unwrap();
        }
        assert_eq!(l.len(), 3 * CHUNK + 1);
        assert!(cube::is_tautology_cube(l.cube(3 * CHUNK)));
    }

    #[test]
    fn test_cube_pair_mut_disjoint() {
        let mut l = List::new(1);
        l.add_cube().unwrap();
        l.add_cube().unwrap();
        let (a, b) = l.cube_pair_mut(1, 0);
        cube::set_var(a, 0, Field::One);
        cube::set_var(b, 0, Field::Zero);
        assert_eq!(cube::get_var(l.cube(1), 0), Field::One);
        assert_eq!(cube::get_var(l.cube(0), 0), Field::Zero);
    }

    #[test]
    fn test_zero_variable_cubes() {
        // a zero-variable problem has zero-block cubes
        let mut l = List::new(0);
        l.add_cube().unwrap();
        assert_eq!(l.len(), 1);
        assert!(cube::is_tautology_cube(l.cube(0)));
    }
}

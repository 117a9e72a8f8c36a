//! Single-cube and multi-cube containment
//!
//! Two cleanup passes keep covers small. Single-cube containment (SCC)
//! drops every cube that lies inside another single cube. Multi-cube
//! containment (MCC, the irredundancy pass) drops every cube covered by
//! the union of the remaining ones, detected with a cube cofactor
//! followed by a tautology check.

use crate::context::Context;
use crate::cube::{self, Block};
use crate::error::CapacityError;
use crate::list::List;

impl Context {
    /// Mark every other live cube that is a subset of the cube at
    /// `pos`. The marks are cleaned up by a later [`List::purge`].
    pub fn mark_subsets_of(&self, l: &mut List, pos: usize) {
        for j in 0..l.len() {
            if j != pos && !l.is_deleted(j) && cube::is_subset(l.cube(pos), l.cube(j)) {
                l.mark_deleted(j);
            }
        }
    }

    /// Single-cube containment: after this no live cube of `l` is a
    /// subset of another. Ends with a purge.
    ///
    /// A cube with fewer literals can never be a proper subset of one
    /// with more, so the literal counts prune most of the pair tests.
    pub fn single_cube_containment(&self, l: &mut List) {
        let vcl = self.var_cnt_list(l);
        let cnt = l.len();
        for i in 0..cnt {
            if l.is_deleted(i) {
                continue;
            }
            for j in 0..cnt {
                if j == i || l.is_deleted(j) {
                    continue;
                }
                if vcl[j] >= vcl[i] && cube::is_subset(l.cube(i), l.cube(j)) {
                    l.mark_deleted(j);
                }
            }
        }
        l.purge();
    }

    /// Is cube `c` covered by the union of the live cubes of `l`?
    pub fn is_cube_covered(&self, l: &List, c: &[Block]) -> Result<bool, CapacityError> {
        let cof = self.cofactor_by_cube(l, c, None)?;
        self.is_tautology(&cof)
    }

    /// Is the cube at `pos` covered by the union of the other live
    /// cubes of `l`?
    pub fn is_cube_redundant(&self, l: &List, pos: usize) -> Result<bool, CapacityError> {
        let cof = self.cofactor_by_cube(l, l.cube(pos), Some(pos))?;
        self.is_tautology(&cof)
    }

    /// Multi-cube containment: remove every cube covered by the union
    /// of the others, leaving an irredundant cover. Ends with a purge.
    ///
    /// Candidates are visited in order of decreasing literal count;
    /// discarding the most specific cubes first converges faster.
    pub fn multi_cube_containment(&self, l: &mut List) -> Result<(), CapacityError> {
        let vcl = self.var_cnt_list(l);
        let mut order: Vec<usize> = (0..l.len()).filter(|&i| !l.is_deleted(i)).collect();
        order.sort_by(|&a, &b| vcl[b].cmp(&vcl[a]));
        for &i in &order {
            if l.is_deleted(i) {
                continue;
            }
            if self.is_cube_redundant(l, i)? {
                l.mark_deleted(i);
            }
        }
        l.purge();
        Ok(())
    }
}

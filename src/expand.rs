//! Cube expansion
//!
//! Expansion relaxes literals of a cube to don't care without changing
//! the covered set of the whole list. The simple form merges cube pairs
//! that conflict in exactly one variable; the offset-guided form grows
//! each cube as far as it stays disjoint from a given off-set.

use crate::context::Context;
use crate::cube::{self, Field};
use crate::list::List;

impl Context {
    /// Pairwise merge of cubes differing in exactly one variable.
    ///
    /// For such a pair the conflicting literal of one cube is flipped;
    /// if the other cube then contains it, the literal can be promoted
    /// to don't care. The symmetric move is tried when the first fails.
    /// Cubes dominated by an expanded cube are dropped. Ends with a
    /// purge.
    pub fn simple_expand(&self, l: &mut List) {
        let cnt = l.len();
        for i in 0..cnt {
            if l.is_deleted(i) {
                continue;
            }
            for j in (i + 1)..cnt {
                if l.is_deleted(i) {
                    break;
                }
                if l.is_deleted(j) {
                    continue;
                }
                if cube::delta(l.cube(i), l.cube(j)) != 1 {
                    continue;
                }
                let var = (0..self.var_cnt()).find(|&v| {
                    cube::get_var(l.cube(i), v).bits() & cube::get_var(l.cube(j), v).bits() == 0
                });
                let Some(var) = var else { continue };
                let cval = cube::get_var(l.cube(i), var);
                let dval = cube::get_var(l.cube(j), var);

                cube::set_var(l.cube_mut(i), var, cval.opposite());
                if cube::is_subset(l.cube(j), l.cube(i)) {
                    // the flipped half of i lies inside j, widen i
                    cube::set_var(l.cube_mut(i), var, Field::DontCare);
                    self.mark_subsets_of(l, i);
                } else {
                    cube::set_var(l.cube_mut(i), var, cval);
                    cube::set_var(l.cube_mut(j), var, dval.opposite());
                    if cube::is_subset(l.cube(i), l.cube(j)) {
                        cube::set_var(l.cube_mut(j), var, Field::DontCare);
                        self.mark_subsets_of(l, j);
                    } else {
                        cube::set_var(l.cube_mut(j), var, dval);
                    }
                }
            }
        }
        l.purge();
    }

    /// Grow every cube of `l` as long as it stays disjoint from `off`.
    ///
    /// Each fixed literal is tentatively relaxed to don't care and
    /// restored as soon as the widened cube intersects the off-set.
    /// `off` is typically the complement of `l`. No containment pass
    /// runs here.
    pub fn expand_with_offset(&self, l: &mut List, off: &List) {
        for i in 0..l.len() {
            if l.is_deleted(i) {
                continue;
            }
            for var in 0..self.var_cnt() {
                let cval = cube::get_var(l.cube(i), var);
                if cval == Field::DontCare {
                    continue;
                }
                cube::set_var(l.cube_mut(i), var, Field::DontCare);
                let hits_offset = (0..off.len()).any(|j| {
                    !off.is_deleted(j) && cube::is_intersecting(l.cube(i), off.cube(j))
                });
                if hits_offset {
                    cube::set_var(l.cube_mut(i), var, cval);
                }
            }
        }
    }
}

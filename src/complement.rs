//! Complement of a cube list
//!
//! Two algorithms produce the complement. Subtracting the list from the
//! universal cube is the workhorse. The recursive cofactor split is kept
//! as an alternative; it falls back to subtraction once the list is
//! unate, and in practice the subtraction form is faster.

use crate::context::{Context, GlobalCube};
use crate::cube::{self, Field};
use crate::error::CapacityError;
use crate::list::List;
use std::cmp::Ordering;

impl Context {
    /// Complement of `l` as a fresh list.
    pub fn complement(&mut self, l: &List) -> Result<List, CapacityError> {
        self.complement_with_subtract(l)
    }

    /// Complement by subtracting `l` from the universal cube.
    ///
    /// The irredundancy pass inside the subtraction only runs when `l`
    /// is binate. The raw difference is then lightly minimized by
    /// growing its cubes against `l` and dropping redundant ones.
    pub fn complement_with_subtract(&mut self, l: &List) -> Result<List, CapacityError> {
        let mut result = self.new_list();
        let do_mcc = !self.binate_split_table(l).is_unate();
        result.add_cube_from(self.global_cube(GlobalCube::Universal))?;
        self.subtract(&mut result, l, do_mcc)?;
        self.expand_with_offset(&mut result, l);
        self.multi_cube_containment(&mut result)?;
        Ok(result)
    }

    /// Complement by recursive Shannon decomposition.
    pub fn complement_with_cofactor(&mut self, l: &List) -> Result<List, CapacityError> {
        let mut n = self.complement_with_cofactor_sub(l)?;
        self.multi_cube_containment(&mut n)?;
        Ok(n)
    }

    fn complement_with_cofactor_sub(&mut self, l: &List) -> Result<List, CapacityError> {
        let var = match self.binate_split_table(l).max_binate_var() {
            Some(var) => var,
            None => {
                // unate leaf: plain subtraction, no irredundancy needed
                let mut result = self.new_list();
                result.add_cube_from(self.global_cube(GlobalCube::Universal))?;
                self.subtract(&mut result, l, false)?;
                return Ok(result);
            }
        };

        let mut f0 = self.cofactor_by_variable(l, var, Field::Zero)?;
        self.simple_expand(&mut f0);
        let mut f1 = self.cofactor_by_variable(l, var, Field::One)?;
        self.simple_expand(&mut f1);

        let mut cf0 = self.complement_with_cofactor_sub(&f0)?;
        let mut cf1 = self.complement_with_cofactor_sub(&f1)?;

        // NOT f = NOT x * NOT f(x=0)  OR  x * NOT f(x=1),
        // so the split literal goes back into each branch result
        for i in 0..cf0.len() {
            if !cf0.is_deleted(i) {
                cube::set_var(cf0.cube_mut(i), var, Field::Zero);
            }
        }
        self.single_cube_containment(&mut cf0);
        for i in 0..cf1.len() {
            if !cf1.is_deleted(i) {
                cube::set_var(cf1.cube_mut(i), var, Field::One);
            }
        }
        self.single_cube_containment(&mut cf1);

        // merge branch pairs that differ only in the split variable
        for i in 0..cf1.len() {
            if cf1.is_deleted(i) {
                continue;
            }
            cube::set_var(cf1.cube_mut(i), var, Field::Zero);
            let mut merged = false;
            for j in 0..cf0.len() {
                if cf0.is_deleted(j) {
                    continue;
                }
                if cube::compare(cf1.cube(i), cf0.cube(j)) == Ordering::Equal {
                    cube::set_var(cf0.cube_mut(j), var, Field::DontCare);
                    cf1.mark_deleted(i);
                    merged = true;
                    break;
                }
            }
            if !merged {
                cube::set_var(cf1.cube_mut(i), var, Field::One);
            }
        }

        cf0.add_cubes_from_list(&cf1)?;
        self.expand_with_offset(&mut cf0, l);
        self.single_cube_containment(&mut cf0);
        Ok(cf0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(ctx: &Context, s: &str) -> List {
        let mut l = ctx.new_list();
        ctx.add_cubes_from_string(&mut l, s).unwrap();
        l
    }

    fn assert_is_complement(ctx: &mut Context, l: &List, n: &List) {
        // disjoint
        let mut inter = ctx.new_list();
        ctx.intersection(&mut inter, l, n).unwrap();
        assert!(inter.is_empty(), "complement intersects the input");
        // covering
        let mut union = List::from_list(l).unwrap();
        union.add_cubes_from_list(n).unwrap();
        assert!(
            ctx.is_tautology(&union).unwrap(),
            "union with complement is not a tautology"
        );
    }

    #[test]
    fn test_complement_round_trip_four_vars() {
        let mut ctx = Context::new(4);
        let l = list_of(&ctx, "-0-1\n1-0-\n-1--\n0--1");
        let n = ctx.complement_with_subtract(&l).unwrap();
        assert!(!n.is_empty());
        assert_is_complement(&mut ctx, &l, &n);
    }

    #[test]
    fn test_complement_with_cofactor_matches_subtract() {
        let mut ctx = Context::new(4);
        let l = list_of(&ctx, "-0-1\n1-0-\n-1--\n0--1");
        let a = ctx.complement_with_subtract(&l).unwrap();
        let b = ctx.complement_with_cofactor(&l).unwrap();
        assert!(ctx.is_list_equal(&a, &b).unwrap());
        assert_is_complement(&mut ctx, &l, &b);
    }

    #[test]
    fn test_double_complement_is_identity() {
        let mut ctx = Context::new(4);
        let l = list_of(&ctx, "-11-\n11-0\n1-11\n0-11");
        let n = ctx.complement(&l).unwrap();
        let back = ctx.complement(&n).unwrap();
        assert!(ctx.is_list_equal(&l, &back).unwrap());
    }

    #[test]
    fn test_complement_of_empty_is_universal() {
        let mut ctx = Context::new(3);
        let l = ctx.new_list();
        let n = ctx.complement(&l).unwrap();
        assert!(ctx.is_tautology(&n).unwrap());
    }

    #[test]
    fn test_complement_of_universal_is_empty() {
        let mut ctx = Context::new(3);
        let l = list_of(&ctx, "---");
        let n = ctx.complement(&l).unwrap();
        assert!(n.is_empty());
    }

    #[test]
    fn test_complement_of_single_minterm() {
        let mut ctx = Context::new(2);
        let l = list_of(&ctx, "11");
        let n = ctx.complement(&l).unwrap();
        assert_is_complement(&mut ctx, &l, &n);
        // the two prime cubes 0- and -0
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn test_complement_spanning_blocks() {
        let mut ctx = Context::new(65);
        let mut l = ctx.new_list();
        let pos = l.add_cube().unwrap();
        cube::set_var(l.cube_mut(pos), 0, Field::One);
        cube::set_var(l.cube_mut(pos), 64, Field::Zero);
        let n = ctx.complement(&l).unwrap();
        assert_is_complement(&mut ctx, &l, &n);
    }
}

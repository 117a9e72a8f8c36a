//! Tautology check by recursive Shannon decomposition
//!
//! A cover is a tautology when the OR of its cubes is true for every
//! assignment. The check splits on the best binate variable until the
//! remaining list is unate in every variable; a unate list is a
//! tautology exactly when it contains the all-don't-care cube.

use crate::context::Context;
use crate::cube::{self, Field};
use crate::error::CapacityError;
use crate::list::List;

/// Hard cap on the recursion depth. The recursion consumes one binate
/// variable per level, so realistic inputs stay far below this.
const MAX_TAUTOLOGY_DEPTH: usize = 2000;

impl Context {
    /// Does the list cover the whole space? The empty list covers
    /// nothing and is not a tautology.
    pub fn is_tautology(&self, l: &List) -> Result<bool, CapacityError> {
        self.is_tautology_sub(l, 0)
    }

    fn is_tautology_sub(&self, l: &List, depth: usize) -> Result<bool, CapacityError> {
        assert!(depth < MAX_TAUTOLOGY_DEPTH, "tautology recursion too deep");
        if l.is_empty() {
            return Ok(false);
        }
        let table = self.binate_split_table(l);
        match table.max_binate_var() {
            None => {
                // unate leaf: only the universal cube can witness a
                // tautology here
                Ok((0..l.len())
                    .any(|i| !l.is_deleted(i) && cube::is_tautology_cube(l.cube(i))))
            }
            Some(var) => {
                let f0 = self.cofactor_by_variable(l, var, Field::Zero)?;
                if !self.is_tautology_sub(&f0, depth + 1)? {
                    return Ok(false);
                }
                drop(f0);
                let f1 = self.cofactor_by_variable(l, var, Field::One)?;
                self.is_tautology_sub(&f1, depth + 1)
            }
        }
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

    #[test]
    fn test_decision_tree_is_tautology() {
        let ctx = Context::new(5);
        let l = list_of(&ctx, "----1\n---10\n---00");
        assert!(ctx.is_tautology(&l).unwrap());
    }

    #[test]
    fn test_empty_list_is_not_tautology() {
        let ctx = Context::new(3);
        let l = ctx.new_list();
        assert!(!ctx.is_tautology(&l).unwrap());
    }

    #[test]
    fn test_universal_cube_is_tautology() {
        let ctx = Context::new(4);
        let l = list_of(&ctx, "----");
        assert!(ctx.is_tautology(&l).unwrap());
    }

    #[test]
    fn test_split_pair_is_tautology() {
        let ctx = Context::new(2);
        let l = list_of(&ctx, "0-\n1-");
        assert!(ctx.is_tautology(&l).unwrap());
    }

    #[test]
    fn test_missing_minterm_is_not_tautology() {
        let ctx = Context::new(2);
        let l = list_of(&ctx, "0-\n10");
        assert!(!ctx.is_tautology(&l).unwrap());
    }

    #[test]
    fn test_single_literal_is_not_tautology() {
        let ctx = Context::new(1);
        let l = list_of(&ctx, "1");
        assert!(!ctx.is_tautology(&l).unwrap());
    }

    #[test]
    fn test_tautology_across_block_boundary() {
        // split the space on the last variable of a 65-variable problem
        for var_cnt in [63, 64, 65] {
            let ctx = Context::new(var_cnt);
            let mut l = ctx.new_list();
            let a = l.add_cube().unwrap();
            cube::set_var(l.cube_mut(a), var_cnt - 1, Field::Zero);
            let b = l.add_cube().unwrap();
            cube::set_var(l.cube_mut(b), var_cnt - 1, Field::One);
            assert!(ctx.is_tautology(&l).unwrap(), "var_cnt {}", var_cnt);
            l.mark_deleted(b);
            l.purge();
            assert!(!ctx.is_tautology(&l).unwrap(), "var_cnt {}", var_cnt);
        }
    }

    #[test]
    fn test_zero_variable_problem() {
        let ctx = Context::new(0);
        let mut l = ctx.new_list();
        assert!(!ctx.is_tautology(&l).unwrap());
        l.add_cube().unwrap();
        assert!(ctx.is_tautology(&l).unwrap());
    }
}

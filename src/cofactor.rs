//! Cofactors and binate split-variable selection
//!
//! The recursive decision procedures (tautology, complement) follow the
//! Rudell heuristic: pick the binate variable occurring most often in
//! both polarities, Shannon-split on it, recurse on the two cofactors.
//! This module computes the per-variable occurrence counts, selects the
//! split variable and builds the cofactored lists.

use crate::context::Context;
use crate::cube::{self, Field};
use crate::error::CapacityError;
use crate::list::List;

/// Per-variable occurrence counts over the live cubes of a list.
///
/// For every variable the table holds how many cubes fix it to zero and
/// how many fix it to one, each saturating at `u16::MAX`. A variable is
/// binate when both counts are nonzero.
#[derive(Debug, Clone)]
pub struct SplitVarTable {
    zeros: Vec<u16>,
    ones: Vec<u16>,
}

impl SplitVarTable {
    /// Occurrence counts `(zero_cnt, one_cnt)` of one variable.
    pub fn counts(&self, var: usize) -> (u16, u16) {
        (self.zeros[var], self.ones[var])
    }

    /// True when no variable occurs in both polarities.
    pub fn is_unate(&self) -> bool {
        self.zeros
            .iter()
            .zip(&self.ones)
            .all(|(&z, &o)| z == 0 || o == 0)
    }

    /// Best binate split variable: the one with the largest
    /// `zero_cnt + one_cnt` among variables that are binate, ties going
    /// to the lowest index. `None` when the list is unate everywhere.
    pub fn max_binate_var(&self) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (var, (&z, &o)) in self.zeros.iter().zip(&self.ones).enumerate() {
            if z > 0 && o > 0 {
                let sum = z as u32 + o as u32;
                if best.map_or(true, |(_, s)| sum > s) {
                    best = Some((var, sum));
                }
            }
        }
        best.map(|(var, _)| var)
    }
}

impl Context {
    /// Count zero and one occurrences of every variable across the live
    /// cubes of `l`.
    pub fn binate_split_table(&self, l: &List) -> SplitVarTable {
        let mut table = SplitVarTable {
            zeros: vec![0; self.var_cnt()],
            ones: vec![0; self.var_cnt()],
        };
        for i in 0..l.len() {
            if l.is_deleted(i) {
                continue;
            }
            let c = l.cube(i);
            for var in 0..self.var_cnt() {
                match cube::get_var(c, var) {
                    Field::Zero => table.zeros[var] = table.zeros[var].saturating_add(1),
                    Field::One => table.ones[var] = table.ones[var].saturating_add(1),
                    _ => {}
                }
            }
        }
        table
    }

    /// Restrict `l` in place to the branch `var = value`.
    ///
    /// Cubes fixing `var` to `value` lose the literal (the field becomes
    /// don't care). Cubes fixing `var` to the opposite literal lie
    /// outside the branch and are dropped. A widened cube may then
    /// swallow cubes the pass left untouched; cubes widened by the same
    /// pass never absorb each other, so every input cube compatible with
    /// the branch keeps its own row. Afterwards `var` is don't care in
    /// every remaining cube.
    pub fn one_var_cofactor(&self, l: &mut List, var: usize, value: Field) {
        assert!(value == Field::Zero || value == Field::One);
        let mut widened = vec![false; l.len()];
        for i in 0..l.len() {
            if l.is_deleted(i) {
                continue;
            }
            match cube::get_var(l.cube(i), var) {
                Field::DontCare => {}
                v if v == value => {
                    cube::set_var(l.cube_mut(i), var, Field::DontCare);
                    widened[i] = true;
                }
                _ => l.mark_deleted(i),
            }
        }
        for i in 0..l.len() {
            if !widened[i] {
                continue;
            }
            for j in 0..l.len() {
                if j != i
                    && !widened[j]
                    && !l.is_deleted(j)
                    && cube::is_subset(l.cube(i), l.cube(j))
                {
                    l.mark_deleted(j);
                }
            }
        }
        l.purge();
    }

    /// The cofactor of `l` with respect to `var = value` as a fresh list.
    pub fn cofactor_by_variable(
        &self,
        l: &List,
        var: usize,
        value: Field,
    ) -> Result<List, CapacityError> {
        let mut n = List::from_list(l)?;
        self.one_var_cofactor(&mut n, var, value);
        Ok(n)
    }

    /// Generalized cofactor of `l` against an entire cube `c`.
    ///
    /// Every live cube `d` (except the one at `exclude`) is widened to
    /// `d OR NOT c` at the field level, so the literals `c` fixes vanish
    /// from cubes that agree with them. The result is cleaned with
    /// single-cube containment. Feeding it to the tautology check yields
    /// the covered-by-list test.
    pub fn cofactor_by_cube(
        &self,
        l: &List,
        c: &[crate::cube::Block],
        exclude: Option<usize>,
    ) -> Result<List, CapacityError> {
        let mut n = self.new_list();
        for i in 0..l.len() {
            if l.is_deleted(i) || Some(i) == exclude {
                continue;
            }
            let pos = n.add_cube()?;
            let d = l.cube(i);
            let t = n.cube_mut(pos);
            for k in 0..t.len() {
                t[k] = d[k] | !c[k];
            }
        }
        self.single_cube_containment(&mut n);
        Ok(n)
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
    fn test_split_table_counts() {
        let ctx = Context::new(3);
        let l = list_of(&ctx, "110\n1-0\n0-1");
        let table = ctx.binate_split_table(&l);
        assert_eq!(table.counts(0), (1, 2));
        assert_eq!(table.counts(1), (0, 1));
        assert_eq!(table.counts(2), (2, 1));
        assert!(!table.is_unate());
        // both variable 0 and variable 2 are binate with sum 3, the
        // lowest index wins
        assert_eq!(table.max_binate_var(), Some(0));
    }

    #[test]
    fn test_unate_list_has_no_split_var() {
        let ctx = Context::new(3);
        let l = list_of(&ctx, "1-0\n--0\n1--");
        let table = ctx.binate_split_table(&l);
        assert!(table.is_unate());
        assert_eq!(table.max_binate_var(), None);
    }

    #[test]
    fn test_one_var_cofactor_scenario() {
        // cofactor at variable 0 = one: the conflicting third cube is
        // eliminated and variable 0 drops to don't care in the rest
        let ctx = Context::new(3);
        let mut l = list_of(&ctx, "110\n1-0\n0-1");
        ctx.one_var_cofactor(&mut l, 0, Field::One);
        let strings = ctx.list_strings(&l);
        assert_eq!(strings, vec!["-10".to_string(), "--0".to_string()]);
    }

    #[test]
    fn test_one_var_cofactor_absorbs_subsets() {
        // under variable 0 = one the first cube widens to --1 and
        // swallows the second
        let ctx = Context::new(3);
        let mut l = list_of(&ctx, "1-1\n-11");
        ctx.one_var_cofactor(&mut l, 0, Field::One);
        assert_eq!(ctx.list_strings(&l), vec!["--1".to_string()]);
    }

    #[test]
    fn test_cofactor_by_variable_leaves_source_untouched() {
        let ctx = Context::new(3);
        let l = list_of(&ctx, "110\n1-0\n0-1");
        let n = ctx.cofactor_by_variable(&l, 0, Field::One).unwrap();
        assert_eq!(l.len(), 3);
        assert_eq!(n.len(), 2);
    }

    #[test]
    fn test_cofactor_by_cube_tautology_when_covered() {
        let ctx = Context::new(2);
        let l = list_of(&ctx, "1-\n-1");
        let mut c = ctx.new_list();
        let pos = c.add_cube().unwrap();
        ctx.set_cube_by_string(c.cube_mut(pos), "11");
        let cof = ctx.cofactor_by_cube(&l, c.cube(pos), None).unwrap();
        assert!(ctx.is_tautology(&cof).unwrap());
    }
}

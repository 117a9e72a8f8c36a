//! Heuristic two-level minimization
//!
//! The pipeline follows the classic heuristic loop: clean the cover,
//! compute the off-set, grow every cube against it, then drop cubes
//! made redundant by the growth. It does not invent primes beyond what
//! expansion discovers and does not attempt global cover selection.

use crate::context::Context;
use crate::error::CapacityError;
use crate::list::List;

impl Context {
    /// Minimize `l` in place while preserving the covered set.
    ///
    /// Steps: single-cube containment, complement, offset-guided
    /// expansion, single-cube containment again, irredundancy.
    pub fn minimize(&mut self, l: &mut List) -> Result<(), CapacityError> {
        self.single_cube_containment(l);
        let off = self.complement_with_subtract(l)?;
        self.expand_with_offset(l, &off);
        self.single_cube_containment(l);
        self.multi_cube_containment(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube;

    fn list_of(ctx: &Context, s: &str) -> List {
        let mut l = ctx.new_list();
        ctx.add_cubes_from_string(&mut l, s).unwrap();
        l
    }

    #[test]
    fn test_minimize_preserves_function() {
        let mut ctx = Context::new(4);
        let mut l = list_of(&ctx, "-11-\n11-0\n1-11\n0-11");
        let original = List::from_list(&l).unwrap();
        ctx.minimize(&mut l).unwrap();
        assert!(ctx.is_list_equal(&l, &original).unwrap());
        assert!(l.len() <= original.len());
    }

    #[test]
    fn test_minimize_result_is_scc_and_irredundant() {
        let mut ctx = Context::new(4);
        let mut l = list_of(&ctx, "-11-\n11-0\n1-11\n0-11");
        ctx.minimize(&mut l).unwrap();
        for i in 0..l.len() {
            for j in 0..l.len() {
                if i != j {
                    assert!(!cube::is_subset(l.cube(i), l.cube(j)));
                }
            }
            assert!(!ctx.is_cube_redundant(&l, i).unwrap());
        }
    }

    #[test]
    fn test_minimize_collapses_split_pair() {
        let mut ctx = Context::new(3);
        let mut l = list_of(&ctx, "110\n111");
        ctx.minimize(&mut l).unwrap();
        assert_eq!(ctx.list_strings(&l), vec!["11-".to_string()]);
    }

    #[test]
    fn test_minimize_detects_tautology_cover() {
        let mut ctx = Context::new(2);
        let mut l = list_of(&ctx, "0-\n1-\n-1");
        ctx.minimize(&mut l).unwrap();
        assert_eq!(ctx.list_strings(&l), vec!["--".to_string()]);
    }

    #[test]
    fn test_minimize_empty_list() {
        let mut ctx = Context::new(3);
        let mut l = ctx.new_list();
        ctx.minimize(&mut l).unwrap();
        assert!(l.is_empty());
    }
}

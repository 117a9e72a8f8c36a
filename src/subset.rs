//! List subset and equality tests
//!
//! The fast subset test checks each cube of the candidate against the
//! covering list with the cofactor machinery and fails on the first
//! uncovered cube. The subtraction form is retained as a cross check;
//! it is much slower.

use crate::context::Context;
use crate::error::CapacityError;
use crate::list::List;

impl Context {
    /// Is `b` a subset of `a`? Preferred form.
    pub fn is_subset(&self, a: &List, b: &List) -> Result<bool, CapacityError> {
        for i in 0..b.len() {
            if b.is_deleted(i) {
                continue;
            }
            if !self.is_cube_covered(a, b.cube(i))? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Is `b` a subset of `a`, decided by computing `b - a`?
    pub fn is_subset_with_subtract(&mut self, a: &List, b: &List) -> Result<bool, CapacityError> {
        let mut tmp = List::from_list(b)?;
        self.subtract(&mut tmp, a, true)?;
        Ok(tmp.is_empty())
    }

    /// Do `a` and `b` cover the same set of minterms?
    pub fn is_list_equal(&self, a: &List, b: &List) -> Result<bool, CapacityError> {
        Ok(self.is_subset(a, b)? && self.is_subset(b, a)?)
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
    fn test_minterm_inside_halves() {
        let ctx = Context::new(2);
        let a = list_of(&ctx, "1-\n-1");
        let b = list_of(&ctx, "11");
        assert!(ctx.is_subset(&a, &b).unwrap());
        assert!(!ctx.is_subset(&b, &a).unwrap());
    }

    #[test]
    fn test_subset_needs_union() {
        // 1- is inside {10, 11} although neither single cube holds it
        let ctx = Context::new(2);
        let a = list_of(&ctx, "10\n11");
        let b = list_of(&ctx, "1-");
        assert!(ctx.is_subset(&a, &b).unwrap());
    }

    #[test]
    fn test_empty_list_is_subset_of_anything() {
        let ctx = Context::new(2);
        let a = ctx.new_list();
        let b = list_of(&ctx, "1-");
        assert!(ctx.is_subset(&b, &a).unwrap());
        assert!(!ctx.is_subset(&a, &b).unwrap());
        assert!(ctx.is_subset(&a, &a).unwrap());
    }

    #[test]
    fn test_subtract_form_agrees() {
        let mut ctx = Context::new(3);
        let a = list_of(&ctx, "1--\n-1-\n--1");
        let b = list_of(&ctx, "11-\n1-1");
        assert!(ctx.is_subset(&a, &b).unwrap());
        assert!(ctx.is_subset_with_subtract(&a, &b).unwrap());
        assert!(!ctx.is_subset(&b, &a).unwrap());
        assert!(!ctx.is_subset_with_subtract(&b, &a).unwrap());
    }

    #[test]
    fn test_equality_of_different_covers() {
        // two different covers of the same function
        let ctx = Context::new(2);
        let a = list_of(&ctx, "1-\n-1");
        let b = list_of(&ctx, "10\n-1");
        assert!(ctx.is_list_equal(&a, &b).unwrap());
        let c = list_of(&ctx, "10\n01");
        assert!(!ctx.is_list_equal(&a, &c).unwrap());
    }
}

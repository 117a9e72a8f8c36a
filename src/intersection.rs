//! List intersection
//!
//! The intersection of two covers is the pairwise cube intersection of
//! their live cubes, cleaned with single-cube containment.

use crate::context::Context;
use crate::error::CapacityError;
use crate::list::List;

impl Context {
    /// `result := a AND b` over all live cube pairs, followed by SCC.
    pub fn intersection(
        &mut self,
        result: &mut List,
        a: &List,
        b: &List,
    ) -> Result<(), CapacityError> {
        result.clear();
        self.start_frame();
        let r = self.intersection_frame(result, a, b);
        self.end_frame();
        r
    }

    fn intersection_frame(
        &mut self,
        result: &mut List,
        a: &List,
        b: &List,
    ) -> Result<(), CapacityError> {
        let t = self.temp_cube()?;
        for i in 0..b.len() {
            if b.is_deleted(i) {
                continue;
            }
            for j in 0..a.len() {
                if a.is_deleted(j) {
                    continue;
                }
                let nonempty = {
                    let tc = self.stack_cube_mut(t);
                    crate::cube::intersect(tc, a.cube(j), b.cube(i))
                };
                if nonempty {
                    result.add_cube_from(self.stack_cube(t))?;
                }
            }
        }
        self.single_cube_containment(result);
        Ok(())
    }

    /// In-place form `a := a AND b`.
    pub fn intersection_in_place(&mut self, a: &mut List, b: &List) -> Result<(), CapacityError> {
        let mut result = self.new_list();
        self.intersection(&mut result, a, b)?;
        a.copy_from(&result)
    }
}

//! Cube sharp and list subtraction
//!
//! `a # b` splits the part of cube `a` outside cube `b` into at most one
//! result cube per fixed literal of `b`. List subtraction applies the
//! sharp for every cube of the subtrahend and compacts the intermediate
//! covers with containment passes.

use crate::context::Context;
use crate::cube::{self, Block, Field};
use crate::error::CapacityError;
use crate::list::List;

impl Context {
    /// Append the cubes of `a # b` to `l`.
    ///
    /// For every variable `b` fixes, the corresponding field of `a` is
    /// narrowed to `a_i AND NOT b_i`; a nonzero remainder yields one
    /// result cube. The cubes are appended unconditionally, a later
    /// SCC or MCC pass cleans up.
    pub fn sharp_append(
        &mut self,
        l: &mut List,
        a: &[Block],
        b: &[Block],
    ) -> Result<(), CapacityError> {
        self.start_frame();
        let result = self.sharp_append_frame(l, a, b);
        self.end_frame();
        result
    }

    fn sharp_append_frame(
        &mut self,
        l: &mut List,
        a: &[Block],
        b: &[Block],
    ) -> Result<(), CapacityError> {
        let t = self.temp_cube()?;
        for var in 0..self.var_cnt() {
            let bb = cube::get_var(b, var).bits();
            if bb == 0b11 {
                continue;
            }
            let aa = cube::get_var(a, var).bits();
            let remainder = aa & (bb ^ 0b11);
            if remainder != 0 {
                let tc = self.stack_cube_mut(t);
                tc.copy_from_slice(a);
                cube::set_var(tc, var, Field::from_bits(remainder));
                l.add_cube_from(self.stack_cube(t))?;
            }
        }
        Ok(())
    }

    /// List subtraction `a := a - b`.
    ///
    /// Every cube of `b` is sharped out of the running cover, followed
    /// by single-cube containment. With `do_mcc` the irredundancy pass
    /// runs as well; that pays off when `b` is binate and is wasted
    /// work when `b` is unate.
    pub fn subtract(&mut self, a: &mut List, b: &List, do_mcc: bool) -> Result<(), CapacityError> {
        let mut result = self.new_list();
        for i in 0..b.len() {
            if b.is_deleted(i) {
                continue;
            }
            result.clear();
            for j in 0..a.len() {
                if a.is_deleted(j) {
                    continue;
                }
                self.sharp_append(&mut result, a.cube(j), b.cube(i))?;
            }
            a.copy_from(&result)?;
            self.single_cube_containment(a);
            if do_mcc {
                self.multi_cube_containment(a)?;
            }
        }
        Ok(())
    }
}

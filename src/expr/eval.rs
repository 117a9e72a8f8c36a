//! Expression evaluation into cube lists
//!
//! Evaluation walks the tree with a negation accumulator, so NOT is
//! pushed to the leaves by De Morgan instead of ever building an
//! intermediate complement list. Identifiers must have been interned
//! into the context's name table beforehand (the collection pass).

use super::{Expr, ExprKind};
use crate::context::Context;
use crate::cube::{self, Field};
use crate::error::CapacityError;
use crate::list::List;

impl Context {
    /// Evaluate an expression into a cube list over this context.
    ///
    /// Every identifier of `expr` must already be present in
    /// [`Context::names`]; evaluating an uncollected identifier is a
    /// programming error and aborts.
    pub fn eval_expr(&mut self, expr: &Expr) -> Result<List, CapacityError> {
        self.eval_negated(expr, false)
    }

    fn eval_negated(&mut self, expr: &Expr, negate: bool) -> Result<List, CapacityError> {
        let neg = negate ^ expr.is_negated();
        match expr.kind() {
            ExprKind::Ident(name) => {
                let idx = self
                    .names()
                    .index_of(name)
                    .expect("identifier not collected before evaluation");
                let mut l = self.new_list();
                let pos = l.add_cube()?;
                cube::set_var(
                    l.cube_mut(pos),
                    idx,
                    if neg { Field::Zero } else { Field::One },
                );
                Ok(l)
            }
            ExprKind::Num(value) => {
                let truthy = (*value != 0) ^ neg;
                let mut l = self.new_list();
                if truthy {
                    l.add_cube()?;
                }
                Ok(l)
            }
            ExprKind::And(operands) if !neg => self.eval_conjunction(operands, false),
            ExprKind::And(operands) => self.eval_disjunction(operands, true),
            ExprKind::Or(operands) if !neg => self.eval_disjunction(operands, false),
            ExprKind::Or(operands) => self.eval_conjunction(operands, true),
        }
    }

    fn eval_conjunction(
        &mut self,
        operands: &[Expr],
        negate: bool,
    ) -> Result<List, CapacityError> {
        let mut acc: Option<List> = None;
        for op in operands {
            let l = self.eval_negated(op, negate)?;
            acc = Some(match acc {
                None => l,
                Some(mut prev) => {
                    self.intersection_in_place(&mut prev, &l)?;
                    prev
                }
            });
        }
        Ok(acc.unwrap_or_else(|| self.new_list()))
    }

    fn eval_disjunction(
        &mut self,
        operands: &[Expr],
        negate: bool,
    ) -> Result<List, CapacityError> {
        let mut acc = self.new_list();
        for op in operands {
            let l = self.eval_negated(op, negate)?;
            acc.add_cubes_from_list(&l)?;
        }
        self.single_cube_containment(&mut acc);
        Ok(acc)
    }
}

//! Rendering expressions and cube lists as text

use super::{Expr, ExprKind};
use crate::context::Context;
use crate::cube::{self, Field};
use crate::list::List;
use std::fmt;

/// Operator context for minimal parenthesisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None,
    And,
}

impl Expr {
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        if self.is_negated() {
            write!(f, "!")?;
        }
        let grouped = self.is_negated() && matches!(self.kind(), ExprKind::And(_) | ExprKind::Or(_));
        match self.kind() {
            ExprKind::Ident(name) => write!(f, "{}", name),
            ExprKind::Num(value) => write!(f, "{}", value),
            ExprKind::And(operands) => {
                if grouped {
                    write!(f, "(")?;
                }
                for (i, op) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, "&")?;
                    }
                    op.fmt_with_context(f, OpContext::And)?;
                }
                if grouped {
                    write!(f, ")")?;
                }
                Ok(())
            }
            ExprKind::Or(operands) => {
                let parens = grouped || ctx == OpContext::And;
                if parens {
                    write!(f, "(")?;
                }
                for (i, op) in operands.iter().enumerate() {
                    if i > 0 {
                        write!(f, "|")?;
                    }
                    op.fmt_with_context(f, OpContext::None)?;
                }
                if parens {
                    write!(f, ")")?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}

impl Context {
    /// Render a cube list as an OR of ANDs over the known variable
    /// names.
    ///
    /// Zero literals render with a leading `!`, don't-care fields are
    /// skipped. A cube without any literal renders as the constant `1`
    /// and the empty list as `0`. Variables beyond the name table fall
    /// back to positional `x<i>` names.
    pub fn list_to_expr_string(&self, l: &List) -> String {
        let mut out = String::new();
        let mut first_cube = true;
        for i in 0..l.len() {
            if l.is_deleted(i) {
                continue;
            }
            if !first_cube {
                out.push('|');
            }
            first_cube = false;
            let c = l.cube(i);
            let mut first_lit = true;
            for var in 0..self.var_cnt() {
                let polarity = match cube::get_var(c, var) {
                    Field::One => true,
                    Field::Zero => false,
                    _ => continue,
                };
                if !first_lit {
                    out.push('&');
                }
                first_lit = false;
                if !polarity {
                    out.push('!');
                }
                match self.names().name(var) {
                    Some(name) => out.push_str(name),
                    None => out.push_str(&format!("x{}", var)),
                }
            }
            if first_lit {
                out.push('1');
            }
        }
        if first_cube {
            out.push('0');
        }
        out
    }
}

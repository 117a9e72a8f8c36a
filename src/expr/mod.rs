//! Boolean expression front-end
//!
//! Expressions are the human-friendly way into the cube engine: an
//! infix string such as `a&b|!c` parses to an [`Expr`] tree, identifier
//! collection sizes the [`Context`](crate::Context), and evaluation
//! turns the tree into a cube list. The reverse rendering emits a cube
//! list as an OR of ANDs over the known variable names.
//!
//! Typical two-pass use:
//!
//! ```
//! use boolcube::{parse_expr, Context};
//!
//! let expr = parse_expr("a&b | c&b").unwrap();
//! let mut names = boolcube::expr::NameTable::default();
//! expr.collect_idents(&mut names);
//!
//! let mut ctx = Context::new(names.len());
//! *ctx.names_mut() = names;
//! let list = ctx.eval_expr(&expr).unwrap();
//! assert_eq!(list.len(), 2);
//! ```

mod display;
mod error;
mod eval;
mod names;
mod parser;

pub use error::ParseExprError;
pub use names::NameTable;
pub use parser::{parse_expr, parse_expr_with, ExprSyntax};

use std::ops::{BitAnd, BitOr, Not};

/// Node payload of an expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprKind {
    /// A named variable.
    Ident(String),
    /// A numeric constant; zero is false, anything else is true.
    Num(u32),
    /// Conjunction of two or more operands.
    And(Vec<Expr>),
    /// Disjunction of two or more operands.
    Or(Vec<Expr>),
}

/// A boolean expression tree.
///
/// Negation is a flag on the node rather than a node of its own, which
/// keeps De Morgan push-down during evaluation trivial. Trees are fully
/// owned by their root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    negated: bool,
    kind: ExprKind,
}

impl Expr {
    /// A variable reference.
    pub fn ident(name: &str) -> Expr {
        Expr {
            negated: false,
            kind: ExprKind::Ident(name.to_string()),
        }
    }

    /// A numeric constant.
    pub fn num(value: u32) -> Expr {
        Expr {
            negated: false,
            kind: ExprKind::Num(value),
        }
    }

    /// Conjunction of the given operands.
    pub fn and(operands: Vec<Expr>) -> Expr {
        Expr {
            negated: false,
            kind: ExprKind::And(operands),
        }
    }

    /// Disjunction of the given operands.
    pub fn or(operands: Vec<Expr>) -> Expr {
        Expr {
            negated: false,
            kind: ExprKind::Or(operands),
        }
    }

    /// Flip the negation flag.
    pub fn negate(mut self) -> Expr {
        self.negated = !self.negated;
        self
    }

    /// Is the node negated?
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Borrow the node payload.
    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    /// Intern every identifier of the tree into `names`, left to right.
    pub fn collect_idents(&self, names: &mut NameTable) {
        match &self.kind {
            ExprKind::Ident(name) => {
                names.intern(name);
            }
            ExprKind::Num(_) => {}
            ExprKind::And(operands) | ExprKind::Or(operands) => {
                for op in operands {
                    op.collect_idents(names);
                }
            }
        }
    }
}

impl Not for Expr {
    type Output = Expr;

    fn not(self) -> Expr {
        self.negate()
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        match self {
            Expr {
                negated: false,
                kind: ExprKind::And(mut operands),
            } => {
                operands.push(rhs);
                Expr::and(operands)
            }
            lhs => Expr::and(vec![lhs, rhs]),
        }
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        match self {
            Expr {
                negated: false,
                kind: ExprKind::Or(mut operands),
            } => {
                operands.push(rhs);
                Expr::or(operands)
            }
            lhs => Expr::or(vec![lhs, rhs]),
        }
    }
}

//! # Boolcube
//!
//! A binary-valued logic minimizer in the Rudell/Espresso tradition.
//! Boolean functions are represented as sums of products: lists of
//! cubes over {0, 1, -}, bit-packed two bits per variable. On top of
//! the cube algebra the crate provides the classic cover operations,
//! intersection, subtraction, complement, cofactor, tautology check,
//! containment, expansion, and a heuristic two-level minimizer built
//! from them.
//!
//! ## Layers
//!
//! - [`cube`] holds the block-parallel primitives on single cubes.
//! - [`List`] is the growable cube list with mark/purge deletion.
//! - [`Context`] fixes the variable count and carries the shared
//!   resources; all cover algorithms are methods on it.
//! - [`expr`] parses infix boolean expressions and evaluates them into
//!   cube lists.
//! - [`script`] executes JSON step arrays against nine list slots.
//!
//! ## Example
//!
//! ```
//! use boolcube::{Context, List};
//!
//! let mut ctx = Context::new(3);
//! let mut on = ctx.new_list();
//! ctx.add_cubes_from_string(&mut on, "11-\n1-1")?;
//!
//! // the complement is disjoint from the input and together they
//! // cover the whole space
//! let off = ctx.complement(&on)?;
//! let mut meet = ctx.new_list();
//! ctx.intersection(&mut meet, &on, &off)?;
//! assert!(meet.is_empty());
//!
//! let mut both = List::from_list(&on)?;
//! both.add_cubes_from_list(&off)?;
//! assert!(ctx.is_tautology(&both)?);
//! # Ok::<(), boolcube::CapacityError>(())
//! ```
//!
//! ## Threading
//!
//! A [`Context`] is not shared between threads; each thread builds its
//! own. Lists are owned by one thread at a time and may move across
//! threads with their context.

pub mod context;
pub mod cube;
pub mod error;
pub mod expr;
pub mod list;
pub mod script;

mod cofactor;
mod complement;
mod containment;
mod expand;
mod intersection;
mod minimize;
mod subset;
mod subtract;
mod tautology;

pub use cofactor::SplitVarTable;
pub use context::{get_var_cnt_from_string, Context, GlobalCube, MAX_SCOPE_DEPTH};
pub use cube::{Block, Field, VARS_PER_BLOCK};
pub use error::CapacityError;
pub use expr::{parse_expr, parse_expr_with, Expr, ExprSyntax, ParseExprError};
pub use list::List;
pub use script::{run_script, run_steps, ScriptError};

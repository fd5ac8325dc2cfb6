// ferrograd-core/src/autograd/mod.rs

//! # Autograd
//!
//! Graph recording and reverse-mode traversal.
//!
//! - [`function`]: the [`Function`] trait implemented by every operation kind,
//!   and [`FunctionNode`], the record of one call (inputs, weak outputs,
//!   generation).
//! - [`graph`]: the generation-ordered backward traversal.
//! - [`grad_check`]: finite-difference helpers used to validate formulas.

pub mod function;
pub mod grad_check;
pub(crate) mod graph;

pub use function::{Function, FunctionId, FunctionNode};
pub use grad_check::{check_grad, numerical_diff, GradCheckError};

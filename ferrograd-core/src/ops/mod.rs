// ferrograd-core/src/ops/mod.rs

//! # Operations Module (`ops`)
//!
//! Every differentiable primitive the engine ships with, plus the operator
//! sugar on [`Variable`](crate::Variable).
//!
//! ## Structure:
//!
//! - **Function kinds:** each operation is a small struct (e.g. `Mul`,
//!   `Pow { exponent }`) implementing [`Function`](crate::autograd::Function).
//!   It only carries the numeric formulas; recording and traversal are done
//!   by the autograd module.
//! - **Convenience functions:** each kind has a module-level function (`add`,
//!   `mul`, `pow`, `sin`, ...) that accepts variables or raw values and runs
//!   the call protocol. They return `Result` and never panic.
//! - **Operators (`overload`):** `+ - * /` and unary `-` on variables,
//!   forwarding to the functions above. These panic on error, like
//!   ndarray's own operators.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: `Add`, `Sub`, `Mul`, `Div` (broadcasting), `Neg`, `Pow`.
//! - [`math_elem`]: `Square`, `Exp`, `Sin`, `Cos`.

pub mod arithmetic;
pub mod math_elem;
mod overload;

pub use arithmetic::{add, div, mul, neg, pow, rdiv, rsub, sub};
pub use math_elem::{cos, exp, sin, square};

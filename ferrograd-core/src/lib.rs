// ferrograd-core/src/lib.rs

//! Define-by-run reverse-mode automatic differentiation over `ndarray` payloads.
//!
//! Computations on [`Variable`]s are recorded as they run; calling
//! [`Variable::backward`] on the result propagates gradients back to every
//! leaf that contributed to it.
//!
//! ```
//! use ferrograd_core::{ops, Variable};
//! use ndarray::arr0;
//!
//! let x = Variable::new(arr0(2.0));
//! let y = ops::add(ops::square(&x).unwrap(), &x * 3.0).unwrap();
//! y.backward().unwrap();
//! assert_eq!(x.grad().unwrap(), arr0(7.0).into_dyn());
//! ```

// Core modules
pub mod autograd;
pub mod config;
pub mod error;
pub mod ops;
pub mod types;
pub mod utils;
pub mod variable;

pub use autograd::{Function, FunctionNode};
pub use config::{is_backprop_enabled, no_grad};
pub use error::AutogradError;
pub use types::DType;
pub use variable::{as_array, AsArray, Operand, Variable};

// Re-export the payload crate so callers build arrays with the same version.
pub use ndarray;

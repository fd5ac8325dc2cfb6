// ferrograd-core/src/ops/math_elem/mod.rs

//! Element-wise math kinds: `Square`, `Exp`, `Sin`, `Cos`.

pub mod cos;
pub mod exp;
pub mod sin;
pub mod square;

pub use cos::{cos, Cos};
pub use exp::{exp, Exp};
pub use sin::{sin, Sin};
pub use square::{square, Square};

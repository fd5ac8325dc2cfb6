// ferrograd-core/src/ops/overload.rs

//! Operator sugar for `Variable`.
//!
//! Raw operands (`f64`, `i32`, `Array<f64, D>`) are promoted to leaf
//! variables on either side of the operator, so `2.0 * &x` and `&x * 2.0`
//! record the same graph shape. Failures (incompatible shapes, missing data)
//! panic; use the functions in [`crate::ops`] to get them as `Result`.

use crate::error::AutogradError;
use crate::ops::{add, cos, div, exp, mul, neg, pow, sin, square, sub};
use crate::variable::Variable;
use ndarray::{Array, Dimension};

fn expect_variable(result: Result<Variable, AutogradError>, op: &str) -> Variable {
    result.unwrap_or_else(|e| panic!("Variable {} failed: {}", op, e))
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $func:path) => {
        impl_binary_op!(@impl $trait, $method, $func, [Variable], [Variable]);
        impl_binary_op!(@impl $trait, $method, $func, [Variable], [&Variable]);
        impl_binary_op!(@impl $trait, $method, $func, [&Variable], [Variable]);
        impl_binary_op!(@impl $trait, $method, $func, [&Variable], [&Variable]);

        impl_binary_op!(@impl $trait, $method, $func, [Variable], [f64]);
        impl_binary_op!(@impl $trait, $method, $func, [&Variable], [f64]);
        impl_binary_op!(@impl $trait, $method, $func, [f64], [Variable]);
        impl_binary_op!(@impl $trait, $method, $func, [f64], [&Variable]);

        impl_binary_op!(@impl $trait, $method, $func, [Variable], [i32]);
        impl_binary_op!(@impl $trait, $method, $func, [&Variable], [i32]);
        impl_binary_op!(@impl $trait, $method, $func, [i32], [Variable]);
        impl_binary_op!(@impl $trait, $method, $func, [i32], [&Variable]);

        impl<D: Dimension> std::ops::$trait<Array<f64, D>> for Variable {
            type Output = Variable;
            fn $method(self, rhs: Array<f64, D>) -> Variable {
                expect_variable($func(self, rhs), stringify!($method))
            }
        }

        impl<D: Dimension> std::ops::$trait<Array<f64, D>> for &Variable {
            type Output = Variable;
            fn $method(self, rhs: Array<f64, D>) -> Variable {
                expect_variable($func(self, rhs), stringify!($method))
            }
        }

        impl<D: Dimension> std::ops::$trait<Variable> for Array<f64, D> {
            type Output = Variable;
            fn $method(self, rhs: Variable) -> Variable {
                expect_variable($func(self, rhs), stringify!($method))
            }
        }

        impl<D: Dimension> std::ops::$trait<&Variable> for Array<f64, D> {
            type Output = Variable;
            fn $method(self, rhs: &Variable) -> Variable {
                expect_variable($func(self, rhs), stringify!($method))
            }
        }
    };
    (@impl $trait:ident, $method:ident, $func:path, [$lhs:ty], [$rhs:ty]) => {
        impl std::ops::$trait<$rhs> for $lhs {
            type Output = Variable;
            fn $method(self, rhs: $rhs) -> Variable {
                expect_variable($func(self, rhs), stringify!($method))
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, div);

impl std::ops::Neg for Variable {
    type Output = Variable;
    fn neg(self) -> Variable {
        expect_variable(neg(self), "neg")
    }
}

impl std::ops::Neg for &Variable {
    type Output = Variable;
    fn neg(self) -> Variable {
        expect_variable(neg(self), "neg")
    }
}

impl Variable {
    /// `self^exponent`. Panics like the arithmetic operators; see [`crate::ops::pow`].
    pub fn pow(&self, exponent: f64) -> Variable {
        expect_variable(pow(self, exponent), "pow")
    }

    pub fn square(&self) -> Variable {
        expect_variable(square(self), "square")
    }

    pub fn exp(&self) -> Variable {
        expect_variable(exp(self), "exp")
    }

    pub fn sin(&self) -> Variable {
        expect_variable(sin(self), "sin")
    }

    pub fn cos(&self) -> Variable {
        expect_variable(cos(self), "cos")
    }
}

#[cfg(test)]
#[path = "overload_test.rs"]
mod tests;

// ferrograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::utils::{broadcast_shapes, sum_to};
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

// --- Function kind ---

/// `y = x0 * x1` (element-wise), broadcasting the operands against each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mul;

impl Function for Mul {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let &[x0, x1] = unpack(self.name(), xs)?;
        broadcast_shapes(x0.shape(), x1.shape())?;
        Ok(vec![x0 * x1])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let &[x0, x1] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;

        // grad_x0 = gy * x1
        let gx0 = sum_to(gy * x1, x0.shape())?;
        // grad_x1 = gy * x0
        let gx1 = sum_to(gy * x0, x1.shape())?;

        Ok(vec![gx0, gx1])
    }
}

// --- Forward Operation ---

/// Multiplies two operands element-wise, recording the call.
///
/// # Errors
/// `BroadcastError` if the shapes are incompatible.
pub fn mul(x0: impl Into<Operand>, x1: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Mul, vec![x0.into(), x1.into()])
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;

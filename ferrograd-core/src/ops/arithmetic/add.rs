// ferrograd-core/src/ops/arithmetic/add.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::utils::{broadcast_shapes, sum_to};
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = x0 + x1`, broadcasting the operands against each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

impl Function for Add {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let &[x0, x1] = unpack(self.name(), xs)?;
        broadcast_shapes(x0.shape(), x1.shape())?;
        Ok(vec![x0 + x1])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let &[x0, x1] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;
        // dy/dx0 = dy/dx1 = 1
        let gx0 = sum_to(gy.clone(), x0.shape())?;
        let gx1 = sum_to(gy.clone(), x1.shape())?;
        Ok(vec![gx0, gx1])
    }
}

/// Adds two operands, recording the call.
///
/// # Errors
/// `BroadcastError` if the shapes are incompatible, `MissingData` if a
/// variable operand has no data.
pub fn add(x0: impl Into<Operand>, x1: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Add, vec![x0.into(), x1.into()])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;

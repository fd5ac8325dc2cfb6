// ferrograd-core/src/ops/arithmetic/sub.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::utils::{broadcast_shapes, sum_to};
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = x0 - x1`, broadcasting the operands against each other.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sub;

impl Function for Sub {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let &[x0, x1] = unpack(self.name(), xs)?;
        broadcast_shapes(x0.shape(), x1.shape())?;
        Ok(vec![x0 - x1])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let &[x0, x1] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;
        let gx0 = sum_to(gy.clone(), x0.shape())?;
        let gx1 = sum_to(-gy, x1.shape())?;
        Ok(vec![gx0, gx1])
    }
}

/// `x0 - x1`, recording the call.
pub fn sub(x0: impl Into<Operand>, x1: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Sub, vec![x0.into(), x1.into()])
}

/// Reflected subtraction: `x1 - x0`.
pub fn rsub(x0: impl Into<Operand>, x1: impl Into<Operand>) -> Result<Variable, AutogradError> {
    sub(x1, x0)
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;

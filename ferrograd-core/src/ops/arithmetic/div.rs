// ferrograd-core/src/ops/arithmetic/div.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::utils::{broadcast_shapes, sum_to};
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = x0 / x1` (element-wise), broadcasting the operands against each other.
///
/// Division by zero follows IEEE semantics (`inf`/`NaN`), as ndarray does.
#[derive(Debug, Clone, Copy, Default)]
pub struct Div;

impl Function for Div {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let &[x0, x1] = unpack(self.name(), xs)?;
        broadcast_shapes(x0.shape(), x1.shape())?;
        Ok(vec![x0 / x1])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let &[x0, x1] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;

        // d(x0/x1)/dx0 = 1/x1, d(x0/x1)/dx1 = -x0/x1^2
        let gx0 = gy / x1;
        let gx1 = -(gy * x0) / &(x1 * x1);

        Ok(vec![sum_to(gx0, x0.shape())?, sum_to(gx1, x1.shape())?])
    }
}

/// `x0 / x1`, recording the call.
pub fn div(x0: impl Into<Operand>, x1: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Div, vec![x0.into(), x1.into()])
}

/// Reflected division: `x1 / x0`.
pub fn rdiv(x0: impl Into<Operand>, x1: impl Into<Operand>) -> Result<Variable, AutogradError> {
    div(x1, x0)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;

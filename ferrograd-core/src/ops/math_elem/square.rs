// ferrograd-core/src/ops/math_elem/square.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = x^2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Square;

impl Function for Square {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        Ok(vec![x.mapv(|v| v * v)])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;
        Ok(vec![gy * &x.mapv(|v| 2.0 * v)])
    }
}

pub fn square(x: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Square, vec![x.into()])
}

#[cfg(test)]
#[path = "square_test.rs"]
mod tests;

// ferrograd-core/src/ops/math_elem/sin.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = sin(x)`, `x` in radians.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sin;

impl Function for Sin {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        Ok(vec![x.mapv(f64::sin)])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;
        Ok(vec![gy * &x.mapv(f64::cos)])
    }
}

pub fn sin(x: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Sin, vec![x.into()])
}

#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;

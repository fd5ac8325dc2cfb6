// ferrograd-core/src/ops/math_elem/cos.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = cos(x)`, `x` in radians.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cos;

impl Function for Cos {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        Ok(vec![x.mapv(f64::cos)])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;
        Ok(vec![gy * &x.mapv(|v| -v.sin())])
    }
}

pub fn cos(x: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Cos, vec![x.into()])
}

#[cfg(test)]
#[path = "cos_test.rs"]
mod tests;

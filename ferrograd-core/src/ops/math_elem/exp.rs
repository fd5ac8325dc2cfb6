// ferrograd-core/src/ops/math_elem/exp.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = e^x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

impl Function for Exp {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        Ok(vec![x.mapv(f64::exp)])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;
        // d(e^x)/dx = e^x, recomputed from the input
        Ok(vec![gy * &x.mapv(f64::exp)])
    }
}

pub fn exp(x: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Exp, vec![x.into()])
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;

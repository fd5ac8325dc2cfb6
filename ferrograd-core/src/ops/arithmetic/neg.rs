// ferrograd-core/src/ops/arithmetic/neg.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = -x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Neg;

impl Function for Neg {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        Ok(vec![x.mapv(|v| -v)])
    }

    fn backward(
        &self,
        _xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [gy] = unpack(self.name(), gys)?;
        Ok(vec![gy.mapv(|v| -v)])
    }
}

pub fn neg(x: impl Into<Operand>) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Neg, vec![x.into()])
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;

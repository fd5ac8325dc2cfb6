// ferrograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::function::{unpack, Function, FunctionNode};
use crate::error::AutogradError;
use crate::variable::{Operand, Variable};
use ndarray::ArrayD;

/// `y = x^c` for a constant exponent `c`.
///
/// Only the base is differentiated; the exponent is a parameter of the kind,
/// not an input of the graph.
#[derive(Debug, Clone, Copy)]
pub struct Pow {
    pub exponent: f64,
}

impl Pow {
    pub fn new(exponent: f64) -> Self {
        Pow { exponent }
    }
}

impl Function for Pow {
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        let c = self.exponent;
        Ok(vec![x.mapv(|v| v.powf(c))])
    }

    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let [x] = unpack(self.name(), xs)?;
        let [gy] = unpack(self.name(), gys)?;
        let c = self.exponent;
        // dy/dx = c * x^(c-1)
        let local = x.mapv(|v| c * v.powf(c - 1.0));
        Ok(vec![gy * &local])
    }
}

/// Raises `x` to the constant power `exponent`, recording the call.
pub fn pow(x: impl Into<Operand>, exponent: f64) -> Result<Variable, AutogradError> {
    FunctionNode::call_single(Pow::new(exponent), vec![x.into()])
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;

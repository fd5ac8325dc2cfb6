// ferrograd-core/src/variable/autograd_methods.rs

use crate::autograd::graph;
use crate::autograd::FunctionNode;
use crate::error::AutogradError;
use crate::variable::Variable;
use ndarray::ArrayD;
use std::rc::Rc;

impl Variable {
    /// Links this freshly produced variable to the call that produced it.
    ///
    /// Part of the call protocol only. A variable's creator is written
    /// exactly once; a second attempt is reported as an internal error.
    pub(crate) fn set_creator(&self, function: &Rc<FunctionNode>) -> Result<(), AutogradError> {
        self.node
            .creator
            .set(Rc::clone(function))
            .map_err(|_| {
                AutogradError::InternalError(format!(
                    "creator of {:?} is already set; variables are never re-parented",
                    self
                ))
            })?;
        self.node.generation.set(function.generation() + 1);
        Ok(())
    }

    /// Resets the gradient to absent, e.g. between optimisation steps.
    pub fn clear_grad(&self) {
        self.node.grad.borrow_mut().take();
    }

    pub(crate) fn set_grad(&self, grad: Option<ArrayD<f64>>) {
        *self.node.grad.borrow_mut() = grad;
    }

    /// Adds `incoming` to the gradient, or stores it if there is none yet.
    pub(crate) fn accumulate_grad(&self, incoming: ArrayD<f64>) -> Result<(), AutogradError> {
        let expected = self.require_data("accumulate_grad")?.shape();
        if incoming.shape() != expected {
            return Err(AutogradError::ShapeMismatch {
                expected: expected.to_vec(),
                actual: incoming.shape().to_vec(),
                operation: "accumulate_grad".to_string(),
            });
        }

        let mut slot = self.node.grad.borrow_mut();
        let updated = match slot.take() {
            Some(existing) => existing + &incoming,
            None => incoming,
        };
        *slot = Some(updated);
        Ok(())
    }

    /// Back-propagates from this variable, keeping only leaf gradients.
    ///
    /// Equivalent to `backward_with(false)`.
    pub fn backward(&self) -> Result<(), AutogradError> {
        self.backward_with(false)
    }

    /// Back-propagates from this variable to every reachable leaf.
    ///
    /// If this variable has no gradient yet it is seeded with ones of its
    /// shape. When `retain_grad` is `false`, the gradient of every
    /// intermediate variable is dropped as soon as its producing function has
    /// been processed, so only leaves hold a gradient afterwards.
    ///
    /// # Errors
    /// * `MissingData` if this variable has no data to seed from.
    /// * Any error raised by a function's backward formula, or a
    ///   `ShapeMismatch` if a formula returned a wrongly shaped gradient.
    pub fn backward_with(&self, retain_grad: bool) -> Result<(), AutogradError> {
        graph::backward(self, retain_grad)
    }
}

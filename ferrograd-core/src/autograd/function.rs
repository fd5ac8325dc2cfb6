// ferrograd-core/src/autograd/function.rs

use crate::config::is_backprop_enabled;
use crate::error::{AutogradError, Pass};
use crate::variable::{as_array, Operand, Variable, VariableNode};
use log::{trace, warn};
use ndarray::{ArrayD, IxDyn};
use std::fmt::Debug;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

/// Defines the numeric behaviour of one differentiable operation kind.
///
/// Implementors only see raw payloads: `forward` maps input arrays to output
/// arrays, `backward` maps output gradients to input gradients. Neither may
/// touch `Variable` state; graph bookkeeping belongs to [`FunctionNode`].
///
/// Both methods default to `AutogradError::NotImplemented`, so a kind that
/// forgets one of them fails loudly the first time it is used.
pub trait Function: Debug {
    /// Display name used in logs and errors. Defaults to the type name
    /// without its module path or generic arguments (`Scaled<Exp>` is `Scaled`).
    fn name(&self) -> &'static str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Computes the outputs from the input payloads, in input order.
    fn forward(&self, xs: &[&ArrayD<f64>]) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let _ = xs;
        Err(AutogradError::NotImplemented {
            function: self.name().to_string(),
            pass: Pass::Forward,
        })
    }

    /// Computes one gradient per input, in input order and with input shapes.
    ///
    /// # Arguments
    /// * `xs`: the input payloads captured at call time.
    /// * `gys`: the gradient flowing into each output (dL/dOutput_j).
    fn backward(
        &self,
        xs: &[&ArrayD<f64>],
        gys: &[ArrayD<f64>],
    ) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let _ = (xs, gys);
        Err(AutogradError::NotImplemented {
            function: self.name().to_string(),
            pass: Pass::Backward,
        })
    }
}

/// Global counter for function call ids.
static FUNCTION_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique identifier of one recorded call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(u64);

impl FunctionId {
    fn next() -> Self {
        FunctionId(FUNCTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// One recorded call of a [`Function`].
///
/// Owns its inputs (strong `Variable` handles) but only observes its outputs
/// (`Weak`). The outputs own the node through their `creator` link, so the
/// record lives exactly as long as some output is reachable.
pub struct FunctionNode {
    id: FunctionId,
    function: Box<dyn Function>,
    generation: usize,
    inputs: Vec<Variable>,
    outputs: Vec<Weak<VariableNode>>,
    /// Shapes of the outputs, kept to build zero gradients for outputs
    /// that were dropped or never received a gradient.
    output_shapes: Vec<Vec<usize>>,
}

impl FunctionNode {
    /// Runs `function` on `inputs` and records the call in the graph.
    ///
    /// Raw operands are lifted to leaf variables first. When graph recording
    /// is disabled (see [`crate::no_grad`]) the outputs are returned as leaves
    /// and nothing is recorded.
    ///
    /// # Errors
    /// * `MissingData` if an input variable has no data.
    /// * Any error returned by `function.forward`.
    pub fn call<F>(function: F, inputs: Vec<Operand>) -> Result<Vec<Variable>, AutogradError>
    where
        F: Function + 'static,
    {
        let inputs: Vec<Variable> = inputs.into_iter().map(Operand::into_variable).collect();

        let ys = {
            let xs = inputs
                .iter()
                .map(|x| x.require_data(function.name()))
                .collect::<Result<Vec<_>, _>>()?;
            function.forward(&xs)?
        };
        let outputs: Vec<Variable> = ys
            .into_iter()
            .map(|y| Variable::new(as_array(y)))
            .collect();

        if !is_backprop_enabled() {
            return Ok(outputs);
        }

        let generation = inputs.iter().map(Variable::generation).max().unwrap_or(0);
        let output_shapes = outputs
            .iter()
            .map(|y| y.require_data(function.name()).map(|data| data.shape().to_vec()))
            .collect::<Result<Vec<_>, _>>()?;
        let node = Rc::new(FunctionNode {
            id: FunctionId::next(),
            function: Box::new(function),
            generation,
            inputs,
            outputs: outputs.iter().map(Variable::downgrade).collect(),
            output_shapes,
        });
        for output in &outputs {
            output.set_creator(&node)?;
        }
        trace!(
            "recorded {} {:?} (generation {}, {} input(s), {} output(s))",
            node.function.name(),
            node.id,
            node.generation,
            node.inputs.len(),
            node.outputs.len()
        );
        Ok(outputs)
    }

    /// Like [`FunctionNode::call`], for kinds producing exactly one output.
    ///
    /// # Errors
    /// `ArityMismatch` if the forward formula produced any other number of outputs.
    pub fn call_single<F>(function: F, inputs: Vec<Operand>) -> Result<Variable, AutogradError>
    where
        F: Function + 'static,
    {
        let name = function.name();
        let mut outputs = Self::call(function, inputs)?;
        if outputs.len() != 1 {
            return Err(AutogradError::ArityMismatch {
                function: name.to_string(),
                expected: 1,
                actual: outputs.len(),
            });
        }
        outputs.pop().ok_or_else(|| {
            AutogradError::InternalError(format!("{} produced no output", name))
        })
    }

    pub fn id(&self) -> FunctionId {
        self.id
    }

    /// `max` of the input generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn function(&self) -> &dyn Function {
        self.function.as_ref()
    }

    pub fn inputs(&self) -> &[Variable] {
        &self.inputs
    }

    /// Upgrades the output links; `None` marks an output that has been dropped.
    pub fn outputs(&self) -> Vec<Option<Variable>> {
        self.outputs
            .iter()
            .map(|output| output.upgrade().map(Variable::from_node))
            .collect()
    }

    /// Current gradient of every output. Outputs that are gone or have no
    /// gradient contribute zeros of their recorded shape.
    fn output_grads(&self) -> Vec<ArrayD<f64>> {
        self.outputs
            .iter()
            .zip(&self.output_shapes)
            .enumerate()
            .map(|(index, (output, shape))| match output.upgrade() {
                Some(node) => node
                    .grad
                    .borrow()
                    .clone()
                    .unwrap_or_else(|| ArrayD::zeros(IxDyn(shape))),
                None => {
                    warn!(
                        "{} {:?}: output {} was dropped before backward; using zeros",
                        self.function.name(),
                        self.id,
                        index
                    );
                    ArrayD::zeros(IxDyn(shape))
                }
            })
            .collect()
    }

    /// Applies the backward formula to the current output gradients.
    ///
    /// # Errors
    /// `GradientCountMismatch` if the formula does not return one gradient
    /// per input, plus anything the formula itself returns.
    pub(crate) fn input_grads(&self) -> Result<Vec<ArrayD<f64>>, AutogradError> {
        let name = self.function.name();
        let gys = self.output_grads();
        let xs = self
            .inputs
            .iter()
            .map(|x| x.require_data(name))
            .collect::<Result<Vec<_>, _>>()?;

        let gxs = self.function.backward(&xs, &gys)?;
        if gxs.len() != self.inputs.len() {
            return Err(AutogradError::GradientCountMismatch {
                function: name.to_string(),
                expected: self.inputs.len(),
                actual: gxs.len(),
            });
        }
        Ok(gxs)
    }
}

impl Debug for FunctionNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "FunctionNode({}, id={:?}, generation={}, inputs={}, outputs={})",
            self.function.name(),
            self.id,
            self.generation,
            self.inputs.len(),
            self.outputs.len()
        )
    }
}

// Releases upstream records iteratively so stack depth does not grow with chain length.
impl Drop for FunctionNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.inputs);
        while let Some(variable) = pending.pop() {
            let Ok(mut node) = Rc::try_unwrap(variable.node) else {
                continue;
            };
            let Some(creator) = node.creator.take() else {
                continue;
            };
            if let Ok(mut function) = Rc::try_unwrap(creator) {
                pending.append(&mut function.inputs);
            }
        }
    }
}

/// Checks the number of values handed to a formula and returns them as an array.
pub(crate) fn unpack<'a, T, const N: usize>(
    function: &str,
    values: &'a [T],
) -> Result<&'a [T; N], AutogradError> {
    <&[T; N]>::try_from(values).map_err(|_| AutogradError::ArityMismatch {
        function: function.to_string(),
        expected: N,
        actual: values.len(),
    })
}

#[cfg(test)]
#[path = "function_test.rs"]
mod tests;

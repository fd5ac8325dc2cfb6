// ferrograd-core/src/autograd/grad_check.rs

use crate::config::no_grad;
use crate::error::AutogradError;
use crate::variable::Variable;
use ndarray::ArrayD;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}, element index {element_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        element_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(AutogradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(AutogradError),
    #[error("Variable error during intermediate calculation: {0}")]
    TensorError(AutogradError),
    #[error("Input {input_index} has no gradient after the backward pass.")]
    MissingAnalyticalGrad { input_index: usize },
    #[error("Numerical gradient is NaN or infinite for input {input_index}, element {element_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        element_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Gradient check input must be a leaf variable. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
}

impl From<AutogradError> for GradCheckError {
    fn from(err: AutogradError) -> Self {
        GradCheckError::TensorError(err)
    }
}

/// Central-difference derivative of a single-input function at `x`.
///
/// Perturbs the whole payload at once: `(f(x + eps) - f(x - eps)) / (2 * eps)`.
/// For element-wise functions this is the element-wise derivative. Nothing is
/// recorded in the graph while `f` is evaluated.
pub fn numerical_diff<F>(f: F, x: &Variable, eps: f64) -> Result<ArrayD<f64>, AutogradError>
where
    F: Fn(&Variable) -> Result<Variable, AutogradError>,
{
    let data = x.require_data("numerical_diff")?;
    let x0 = Variable::new(data - eps);
    let x1 = Variable::new(data + eps);

    no_grad(|| {
        let y0 = f(&x0)?;
        let y1 = f(&x1)?;
        let y0 = y0.require_data("numerical_diff")?;
        let y1 = y1.require_data("numerical_diff")?;
        Ok((y1 - y0) / (2.0 * eps))
    })
}

/// Weighted scalar loss `sum(f(inputs) * output_grad)` evaluated without recording.
fn weighted_loss<F>(
    func: &F,
    inputs: &[Variable],
    output_grad: &ArrayD<f64>,
) -> Result<f64, GradCheckError>
where
    F: Fn(&[Variable]) -> Result<Variable, AutogradError>,
{
    no_grad(|| {
        let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
        let data = output.require_data("check_grad")?;
        if data.shape() != output_grad.shape() {
            return Err(GradCheckError::TensorError(AutogradError::ShapeMismatch {
                expected: data.shape().to_vec(),
                actual: output_grad.shape().to_vec(),
                operation: "check_grad".to_string(),
            }));
        }
        Ok((data * output_grad).sum())
    })
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` is run once with graph recording to obtain the analytical
/// gradients of every input (seeded with `output_grad`), then once per input
/// element and direction without recording. An element fails when the two
/// values are neither within `tolerance` of each other nor within `tolerance`
/// relative to the larger of them.
///
/// # Errors
/// * `InputNotLeaf` if an input was produced by a function.
/// * `GradientMismatch` for the first element that fails.
/// * `ForwardPassError` / `BackwardPassError` wrapping engine errors.
pub fn check_grad<F>(
    func: F,
    inputs: &[Variable],
    output_grad: &ArrayD<f64>,
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Variable]) -> Result<Variable, AutogradError>,
{
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
        input.clear_grad();
    }

    // --- Analytical gradients ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    let output_shape = output.shape()?;
    if output_shape != output_grad.shape() {
        return Err(GradCheckError::TensorError(AutogradError::ShapeMismatch {
            expected: output_shape,
            actual: output_grad.shape().to_vec(),
            operation: "check_grad".to_string(),
        }));
    }
    output.set_grad(Some(output_grad.clone()));
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    let analytical_grads = inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            input
                .grad()
                .ok_or(GradCheckError::MissingAnalyticalGrad { input_index: i })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // --- Numerical gradients, one element at a time ---
    for (i, original_input) in inputs.iter().enumerate() {
        let original_data = original_input.require_data("check_grad")?;
        let analytical = analytical_grads[i].iter().copied().collect::<Vec<_>>();

        for elem_idx in 0..original_data.len() {
            let perturbed = |delta: f64| -> Result<f64, GradCheckError> {
                let mut data = original_data.clone();
                if let Some(value) = data.iter_mut().nth(elem_idx) {
                    *value += delta;
                }
                let mut perturbed_inputs = inputs.to_vec();
                perturbed_inputs[i] = Variable::new(data);
                weighted_loss(&func, &perturbed_inputs, output_grad)
            };
            let loss_plus = perturbed(epsilon)?;
            let loss_minus = perturbed(-epsilon)?;

            let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
            if !numerical_grad.is_finite() {
                return Err(GradCheckError::NumericalGradNaNOrInfinite {
                    input_index: i,
                    element_index: elem_idx,
                    loss_plus,
                    loss_minus,
                });
            }

            let analytical_grad = analytical[elem_idx];
            if !approx::relative_eq!(
                analytical_grad,
                numerical_grad,
                epsilon = tolerance,
                max_relative = tolerance
            ) {
                return Err(GradCheckError::GradientMismatch {
                    input_index: i,
                    element_index: elem_idx,
                    analytical_grad,
                    numerical_grad,
                    difference: (analytical_grad - numerical_grad).abs(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;

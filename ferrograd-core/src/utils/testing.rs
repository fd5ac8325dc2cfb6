// ferrograd-core/src/utils/testing.rs

use crate::variable::Variable;
use ndarray::ArrayD;

/// Checks if an array is approximately equal to the expected shape and data.
/// Panics if shapes differ or data differs significantly.
pub fn check_array_near(
    actual: &ArrayD<f64>,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(actual.len(), expected_data.len(), "Data length mismatch");

    for (i, (a, e)) in actual.iter().zip(expected_data.iter()).enumerate() {
        let diff = (a - e).abs();
        if diff > tolerance || diff.is_nan() {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Same as [`check_array_near`], on the payload of a variable.
pub fn check_variable_near(
    actual: &Variable,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    let data = actual.data().expect("Variable has no data in check_variable_near");
    check_array_near(data, expected_shape, expected_data, tolerance);
}

/// Same as [`check_array_near`], on the gradient of a variable.
pub fn check_grad_near(
    actual: &Variable,
    expected_shape: &[usize],
    expected_data: &[f64],
    tolerance: f64,
) {
    let grad = actual.grad().expect("Variable has no grad in check_grad_near");
    check_array_near(&grad, expected_shape, expected_data, tolerance);
}

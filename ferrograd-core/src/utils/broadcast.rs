// ferrograd-core/src/utils/broadcast.rs

use crate::error::AutogradError;
use ndarray::{ArrayD, Axis};
use std::cmp::max;

/// Computes the broadcast shape of two shapes (numpy rules).
///
/// Shapes are aligned on their trailing axes; a missing axis counts as 1.
/// Two dimensions are compatible when they are equal or one of them is 1.
///
/// # Errors
/// `BroadcastError` naming both shapes when some dimension pair is incompatible.
pub fn broadcast_shapes(shape_a: &[usize], shape_b: &[usize]) -> Result<Vec<usize>, AutogradError> {
    let rank_a = shape_a.len();
    let rank_b = shape_b.len();
    let max_rank = max(rank_a, rank_b);
    let mut result_shape = vec![0; max_rank];

    for i in 0..max_rank {
        let dim_a = shape_a.get(rank_a.wrapping_sub(1 + i)).copied().unwrap_or(1);
        let dim_b = shape_b.get(rank_b.wrapping_sub(1 + i)).copied().unwrap_or(1);

        result_shape[max_rank - 1 - i] = if dim_a == dim_b || dim_b == 1 {
            dim_a
        } else if dim_a == 1 {
            dim_b
        } else {
            return Err(AutogradError::BroadcastError {
                shape1: shape_a.to_vec(),
                shape2: shape_b.to_vec(),
            });
        };
    }
    Ok(result_shape)
}

/// Sums `array` down to `target_shape`, undoing a broadcast.
///
/// Leading axes missing from `target_shape` are summed away; axes where the
/// target has size 1 are summed with the dimension kept.
///
/// # Errors
/// `ShapeMismatch` if `target_shape` could not have been broadcast to the
/// shape of `array`.
pub fn sum_to(array: ArrayD<f64>, target_shape: &[usize]) -> Result<ArrayD<f64>, AutogradError> {
    if array.shape() == target_shape {
        return Ok(array);
    }

    let current_shape = array.shape().to_vec();
    let mismatch = || AutogradError::ShapeMismatch {
        expected: target_shape.to_vec(),
        actual: current_shape.clone(),
        operation: "sum_to".to_string(),
    };
    if current_shape.len() < target_shape.len() {
        return Err(mismatch());
    }

    let rank_diff = current_shape.len() - target_shape.len();
    let mut reduced = array;
    for _ in 0..rank_diff {
        reduced = reduced.sum_axis(Axis(0));
    }
    for (axis, &target_dim) in target_shape.iter().enumerate() {
        let dim = reduced.shape()[axis];
        if dim == target_dim {
            continue;
        }
        if target_dim != 1 {
            return Err(mismatch());
        }
        reduced = reduced.sum_axis(Axis(axis)).insert_axis(Axis(axis));
    }
    Ok(reduced)
}

// ferrograd-core/src/ops/math_elem/cos_test.rs

use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_grad_near, check_variable_near};
use ndarray::{arr0, array, ArrayD, IxDyn};
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_cos_forward_backward() {
    let x = Variable::new(arr0(FRAC_PI_2));
    let y = cos(&x).unwrap();
    check_variable_near(&y, &[], &[0.0], 1e-12);

    y.backward().unwrap();
    check_grad_near(&x, &[], &[-1.0], 1e-12);
}

#[test]
fn test_cos_grad_check() {
    let x = Variable::new(array![-2.0, 0.0, 1.0]);
    let output_grad = ArrayD::<f64>::ones(IxDyn(&[3]));
    let result = check_grad(|xs| cos(&xs[0]), &[x], &output_grad, 1e-5, 1e-6);
    assert!(result.is_ok(), "{:?}", result);
}

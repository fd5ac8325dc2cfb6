// ferrograd-core/src/ops/arithmetic/add_test.rs

use super::*;
use crate::autograd::grad_check::check_grad;
use crate::utils::testing::{check_grad_near, check_variable_near};
use ndarray::{arr0, array, ArrayD, IxDyn};

#[test]
fn test_add_forward() {
    let a = Variable::new(array![1.0, 2.0, 3.0]);
    let b = Variable::new(array![4.0, 5.0, 6.0]);
    let y = add(&a, &b).unwrap();
    check_variable_near(&y, &[3], &[5.0, 7.0, 9.0], 1e-12);
    assert_eq!(y.creator().unwrap().function().name(), "Add");
}

#[test]
fn test_add_backward() {
    let a = Variable::new(arr0(2.0));
    let b = Variable::new(arr0(3.0));
    let y = add(&a, &b).unwrap();
    y.backward().unwrap();
    check_grad_near(&a, &[], &[1.0], 1e-12);
    check_grad_near(&b, &[], &[1.0], 1e-12);
}

#[test]
fn test_add_same_input_twice() {
    let x = Variable::new(arr0(3.0));
    let y = add(&x, &x).unwrap();
    y.backward().unwrap();
    check_grad_near(&x, &[], &[2.0], 1e-12);
}

#[test]
fn test_add_raw_operands() {
    let x = Variable::new(array![1.0, 2.0]);
    let y = add(&x, 10.0).unwrap();
    check_variable_near(&y, &[2], &[11.0, 12.0], 1e-12);

    let z = add(array![1.0, 1.0], &x).unwrap();
    check_variable_near(&z, &[2], &[2.0, 3.0], 1e-12);
    // The promoted operand is a fresh leaf.
    assert!(z.creator().unwrap().inputs()[0].is_leaf());
}

#[test]
fn test_add_broadcast_backward() {
    let a = Variable::new(array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = Variable::new(array![[10.0], [20.0]]);
    let y = add(&a, &b).unwrap();
    check_variable_near(&y, &[2, 3], &[11.0, 12.0, 13.0, 24.0, 25.0, 26.0], 1e-12);

    y.backward().unwrap();
    check_grad_near(&a, &[2, 3], &[1.0; 6], 1e-12);
    check_grad_near(&b, &[2, 1], &[3.0, 3.0], 1e-12);
}

#[test]
fn test_add_incompatible_shapes() {
    let a = Variable::new(array![1.0, 2.0]);
    let b = Variable::new(array![1.0, 2.0, 3.0]);
    let err = add(&a, &b).unwrap_err();
    assert_eq!(
        err,
        AutogradError::BroadcastError {
            shape1: vec![2],
            shape2: vec![3]
        }
    );
}

#[test]
fn test_add_grad_check() {
    let a = Variable::new(array![[0.1, 0.2], [0.3, 0.4]]);
    let b = Variable::new(array![1.0, -1.0]);
    let output_grad = ArrayD::<f64>::ones(IxDyn(&[2, 2]));
    let result = check_grad(|xs| add(&xs[0], &xs[1]), &[a, b], &output_grad, 1e-5, 1e-6);
    assert!(result.is_ok(), "{:?}", result);
}

// ferrograd-core/tests/variable_api.rs

use ferrograd_core::ndarray::{arr0, array, Array2};
use ferrograd_core::ops::{add, square};
use ferrograd_core::{as_array, is_backprop_enabled, no_grad, AutogradError, DType, Operand, Variable};

mod common;

#[test]
fn test_leaf_construction_and_introspection() {
    let x = Variable::new(Array2::<f64>::zeros((2, 3)));
    assert_eq!(x.shape().unwrap(), vec![2, 3]);
    assert_eq!(x.ndim().unwrap(), 2);
    assert_eq!(x.size().unwrap(), 6);
    assert_eq!(x.len().unwrap(), 2);
    assert_eq!(x.dtype().unwrap(), DType::F64);
    assert_eq!(DType::F64.to_string(), "float64");
    assert!(x.is_leaf());
}

#[test]
fn test_as_array_normalises_scalars() {
    let a = as_array(3.0);
    assert_eq!(a.ndim(), 0);
    assert_eq!(a, arr0(3.0).into_dyn());

    let t = as_array(array![[1.0, 2.0], [3.0, 4.0]].reversed_axes());
    assert!(t.is_standard_layout());
    assert_eq!(t, array![[1.0, 3.0], [2.0, 4.0]].into_dyn());
}

#[test]
fn test_forward_results_are_arrays() {
    // A 0-d operand yields a 0-d array payload, not a bare number.
    let x = Variable::new(arr0(2.0));
    let y = square(&x).unwrap();
    assert_eq!(y.ndim().unwrap(), 0);
    assert_eq!(y.dtype().unwrap(), DType::F64);
}

#[test]
fn test_operand_conversions() {
    let x = Variable::new(arr0(1.0));
    assert!(matches!(Operand::from(&x), Operand::Variable(_)));
    assert!(matches!(Operand::from(2.0f32), Operand::Scalar(v) if v == 2.0));
    assert!(matches!(Operand::from(3usize), Operand::Scalar(v) if v == 3.0));
    assert!(matches!(Operand::from(array![1.0]), Operand::Array(_)));
    assert!(Operand::from(5i32).into_variable().is_leaf());
}

#[test]
fn test_type_error_message() {
    let err = Variable::try_from_value("not an array").unwrap_err();
    assert!(matches!(err, AutogradError::TypeError { .. }));
    assert!(err.to_string().contains("&str"));
}

#[test]
fn test_display_and_debug() {
    let x = Variable::with_name(array![1.0, 2.0], "x");
    assert_eq!(format!("{}", x), "variable([1, 2])");
    let debug = format!("{:?}", x);
    assert!(debug.contains("name=Some(\"x\")"));
    assert!(debug.contains("shape=Some([2])"));
}

#[test]
fn test_no_grad_flag_is_restored() {
    assert!(is_backprop_enabled());
    let x = Variable::new(arr0(1.0));
    let y = no_grad(|| {
        assert!(!is_backprop_enabled());
        add(&x, 1.0)
    })
    .unwrap();
    assert!(is_backprop_enabled());
    assert!(y.is_leaf());

    let z = add(&x, 1.0).unwrap();
    assert!(!z.is_leaf());
}

// ferrograd-core/src/autograd/function_test.rs

use super::*;
use crate::ops::arithmetic::Add;
use crate::ops::{add, exp};
use ndarray::arr0;
use std::marker::PhantomData;

/// Generic kind relying on the default `name`.
#[derive(Debug)]
struct Scaled<K>(PhantomData<K>);

impl<K: Debug> Function for Scaled<K> {}

#[test]
fn test_default_name_strips_module_path() {
    assert_eq!(Add.name(), "Add");
}

#[test]
fn test_default_name_strips_generic_arguments() {
    let scaled = Scaled::<Add>(PhantomData);
    assert_eq!(scaled.name(), "Scaled");

    let nested = Scaled::<Scaled<Vec<f64>>>(PhantomData);
    assert_eq!(nested.name(), "Scaled");
}

#[test]
fn test_default_name_in_not_implemented_error() {
    let x = Variable::new(arr0(1.0));
    let err = FunctionNode::call(Scaled::<Add>(PhantomData), vec![x.into()]).unwrap_err();
    assert_eq!(
        err,
        AutogradError::NotImplemented {
            function: "Scaled".to_string(),
            pass: Pass::Forward,
        }
    );
}

#[test]
fn test_drop_releases_long_chain() {
    let x = Variable::new(arr0(0.0));
    let mut y = exp(&x).unwrap();
    let head = Rc::downgrade(&y.creator().unwrap());
    for _ in 0..50_000 {
        y = add(&y, 1.0).unwrap();
    }
    assert!(head.upgrade().is_some());

    drop(y);
    assert!(head.upgrade().is_none());
    assert_eq!(Rc::strong_count(&x.node), 1);
}

#[test]
fn test_drop_keeps_shared_upstream_alive() {
    let x = Variable::new(arr0(1.0));
    let shared = exp(&x).unwrap();
    let branch = add(&shared, 1.0).unwrap();
    let shared_creator = Rc::downgrade(&shared.creator().unwrap());

    drop(branch);
    // Still owned by `shared`.
    assert!(shared_creator.upgrade().is_some());
    assert!(!shared.is_leaf());

    drop(shared);
    assert!(shared_creator.upgrade().is_none());
}

// ferrograd-core/tests/memory_reclamation.rs

use ferrograd_core::ndarray::arr0;
use ferrograd_core::ops::{exp, square};
use ferrograd_core::{no_grad, Variable};
use std::rc::Rc;

mod common;

#[test]
fn test_dropping_result_frees_creator() {
    common::init_logger();
    let x = Variable::new(arr0(1.0));
    let y = square(&x).unwrap();
    let creator = Rc::downgrade(&y.creator().unwrap());
    assert!(creator.upgrade().is_some());

    drop(y);
    assert!(creator.upgrade().is_none());
    // The client still owns the input.
    assert_eq!(x.data().unwrap(), &arr0(1.0).into_dyn());
}

#[test]
fn test_dropping_result_frees_whole_chain() {
    let x = Variable::new(arr0(0.5));
    let (first, last, y) = {
        let a = square(&x).unwrap();
        let b = exp(&a).unwrap();
        let y = square(&b).unwrap();
        (
            Rc::downgrade(&a.creator().unwrap()),
            Rc::downgrade(&y.creator().unwrap()),
            y,
        )
    };
    // Intermediates are only reachable through y.
    assert!(first.upgrade().is_some());
    assert!(last.upgrade().is_some());

    drop(y);
    assert!(first.upgrade().is_none());
    assert!(last.upgrade().is_none());
}

#[test]
fn test_function_does_not_keep_outputs_alive() {
    let x = Variable::new(arr0(2.0));
    let y = square(&x).unwrap();
    let creator = y.creator().unwrap();
    assert!(creator.outputs()[0].is_some());

    drop(y);
    assert!(creator.outputs()[0].is_none());
    assert_eq!(creator.inputs()[0], x);
}

#[test]
fn test_backward_keeps_graph_usable() {
    let x = Variable::new(arr0(2.0));
    let y = square(&x).unwrap();
    let creator = Rc::downgrade(&y.creator().unwrap());
    y.backward().unwrap();
    assert!(creator.upgrade().is_some());
    drop(y);
    assert!(creator.upgrade().is_none());
}

#[test]
fn test_no_grad_retains_nothing() {
    let x = Variable::new(arr0(2.0));
    let y = no_grad(|| square(square(&x).unwrap()).unwrap());
    assert!(y.creator().is_none());
    assert_eq!(y.data().unwrap(), &arr0(16.0).into_dyn());
}

#[test]
fn test_dropping_deep_chain_does_not_overflow() {
    common::init_logger();
    let x = Variable::new(arr0(0.0));
    let mut y = x.clone();
    for _ in 0..100_000 {
        y = &y + 1.0;
    }
    assert_eq!(y.generation(), 100_000);
    y.backward().unwrap();
    assert_eq!(x.grad().unwrap(), arr0(1.0).into_dyn());

    let creator = Rc::downgrade(&y.creator().unwrap());
    drop(y);
    assert!(creator.upgrade().is_none());
    assert_eq!(x.data().unwrap(), &arr0(0.0).into_dyn());
}

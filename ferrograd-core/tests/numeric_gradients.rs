// ferrograd-core/tests/numeric_gradients.rs

use ferrograd_core::autograd::{check_grad, numerical_diff};
use ferrograd_core::ndarray::{ArrayD, IxDyn};
use ferrograd_core::ops::{add, cos, div, exp, mul, pow, sin, square, sub};
use ferrograd_core::{AutogradError, Variable};

mod common;

const EPS: f64 = 1e-4;
const TOLERANCE: f64 = 1e-4;

fn analytic_vs_numeric<F>(f: F, x: &Variable)
where
    F: Fn(&Variable) -> Result<Variable, AutogradError>,
{
    x.clear_grad();
    let y = f(x).unwrap();
    y.backward().unwrap();
    let analytic = x.grad().unwrap();
    let numeric = numerical_diff(&f, x, EPS).unwrap();
    common::assert_all_close(&analytic, &numeric, TOLERANCE);
}

#[test]
fn test_elementwise_kinds_at_random_points() {
    common::init_logger();
    let mut rng = common::seeded_rng(7);
    for _ in 0..5 {
        let x = common::randn(&mut rng, &[4]);
        analytic_vs_numeric(|x| square(x), &x);
        analytic_vs_numeric(|x| exp(x), &x);
        analytic_vs_numeric(|x| sin(x), &x);
        analytic_vs_numeric(|x| cos(x), &x);
        analytic_vs_numeric(|x| pow(x, 3.0), &x);
        analytic_vs_numeric(|x| Ok(-x), &x);
    }
}

#[test]
fn test_compositions_at_random_points() {
    let mut rng = common::seeded_rng(42);
    for _ in 0..5 {
        let x = common::randn(&mut rng, &[3]);
        // y = sin(x)^2 + cos(x)^2 (constant one)
        analytic_vs_numeric(|x| add(square(sin(x)?)?, square(cos(x)?)?), &x);
        // y = exp(-x^2 / 2)
        analytic_vs_numeric(|x| exp(div(-square(x)?, 2.0)?), &x);
        // y = x * sin(x) - 3x
        analytic_vs_numeric(|x| sub(mul(x, sin(x)?)?, mul(3.0, x)?), &x);
        // y = (x + 1) / (x^2 + 1)
        analytic_vs_numeric(|x| div(add(x, 1.0)?, add(square(x)?, 1.0)?), &x);
    }
}

#[test]
fn test_operator_sugar_composition() {
    let mut rng = common::seeded_rng(3);
    let x = common::randn(&mut rng, &[2, 2]);
    analytic_vs_numeric(|x| Ok(x.square() * 0.5 + 2.0 * x.sin() - 1.0), &x);
}

#[test]
fn test_check_grad_multi_input() {
    let mut rng = common::seeded_rng(11);
    let a = common::randn(&mut rng, &[2, 3]);
    let b = common::randn(&mut rng, &[3]);
    let output_grad = ArrayD::<f64>::ones(IxDyn(&[2, 3]));
    let result = check_grad(
        |xs| add(mul(&xs[0], &xs[1])?, exp(sub(&xs[0], &xs[1])?)?),
        &[a, b],
        &output_grad,
        1e-6,
        1e-5,
    );
    assert!(result.is_ok(), "{:?}", result);
}

// ferrograd-core/tests/common.rs

use ferrograd_core::ndarray::{ArrayD, IxDyn};
use ferrograd_core::Variable;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

// Shared helpers for integration tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Leaf variable with standard-normal entries.
#[allow(dead_code)]
pub fn randn(rng: &mut StdRng, shape: &[usize]) -> Variable {
    let normal = Normal::new(0.0, 1.0).expect("valid normal distribution");
    let data = ArrayD::from_shape_simple_fn(IxDyn(shape), || normal.sample(rng));
    Variable::new(data)
}

/// First element of an array (the value of a 0-d array).
#[allow(dead_code)]
pub fn first(array: &ArrayD<f64>) -> f64 {
    array.iter().copied().next().expect("empty array")
}

#[allow(dead_code)]
pub fn assert_all_close(actual: &ArrayD<f64>, expected: &ArrayD<f64>, tolerance: f64) {
    assert_eq!(actual.shape(), expected.shape(), "Shape mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            (a - e).abs() < tolerance,
            "Mismatch at index {}: actual={}, expected={}, tolerance={}",
            i,
            a,
            e,
            tolerance
        );
    }
}

// ferrograd-core/src/utils/mod.rs

pub mod broadcast;
pub mod testing;

pub use broadcast::{broadcast_shapes, sum_to};

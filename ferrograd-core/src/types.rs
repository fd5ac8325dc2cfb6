// ferrograd-core/src/types.rs

/// Element type of a `Variable` payload.
///
/// Payloads are always stored as `f64`; `f32` arrays are widened on
/// construction, so this is the only variant a `Variable` reports today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DType {
    /// 64-bit floating-point type.
    F64,
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DType::F64 => write!(f, "float64"),
        }
    }
}

// ferrograd-core/src/variable/create.rs

use crate::variable::Variable;
use ndarray::{arr0, Array, ArrayD, Dimension};
use num_traits::AsPrimitive;

/// Conversion into the payload representation (`ArrayD<f64>`, standard layout).
pub trait AsArray {
    fn as_array(self) -> ArrayD<f64>;
}

impl<D: Dimension> AsArray for Array<f64, D> {
    fn as_array(self) -> ArrayD<f64> {
        let array = self.into_dyn();
        if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        }
    }
}

macro_rules! impl_scalar_as_array {
    ($($t:ty),*) => {
        $(
            impl AsArray for $t {
                fn as_array(self) -> ArrayD<f64> {
                    arr0(AsPrimitive::<f64>::as_(self)).into_dyn()
                }
            }
        )*
    };
}

impl_scalar_as_array!(f64, f32, i32, i64, u32, usize);

/// Normalises a raw value to the payload representation.
///
/// Bare scalars become 0-dimensional arrays; arrays are made dynamic and
/// contiguous. Every forward result and every raw operand passes through here
/// before it is wrapped in a `Variable`.
pub fn as_array<T: AsArray>(x: T) -> ArrayD<f64> {
    x.as_array()
}

/// Anything accepted as an input by the call protocol.
#[derive(Debug, Clone)]
pub enum Operand {
    Variable(Variable),
    Array(ArrayD<f64>),
    Scalar(f64),
}

impl Operand {
    /// Lifts raw values into leaf variables; variables pass through unchanged.
    pub fn into_variable(self) -> Variable {
        match self {
            Operand::Variable(variable) => variable,
            Operand::Array(array) => Variable::new(array),
            Operand::Scalar(value) => Variable::new(as_array(value)),
        }
    }
}

impl From<Variable> for Operand {
    fn from(variable: Variable) -> Self {
        Operand::Variable(variable)
    }
}

impl From<&Variable> for Operand {
    fn from(variable: &Variable) -> Self {
        Operand::Variable(variable.clone())
    }
}

impl<D: Dimension> From<Array<f64, D>> for Operand {
    fn from(array: Array<f64, D>) -> Self {
        Operand::Array(as_array(array))
    }
}

impl<D: Dimension> From<&Array<f64, D>> for Operand {
    fn from(array: &Array<f64, D>) -> Self {
        Operand::Array(as_array(array.clone()))
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Scalar(AsPrimitive::<f64>::as_(value))
                }
            }
        )*
    };
}

impl_scalar_operand!(f64, f32, i32, i64, u32, usize);

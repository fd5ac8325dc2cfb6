// ferrograd-core/src/variable/mod.rs

use crate::autograd::FunctionNode;
use crate::error::AutogradError;
use crate::types::DType;
use ndarray::{Array, ArrayD, Dimension};
use std::any::{type_name, Any};
use std::cell::{Cell, OnceCell, RefCell};
use std::rc::{Rc, Weak};

mod autograd_methods;
pub mod create;
mod traits;

pub use create::{as_array, AsArray, Operand};

/// Internal storage of a graph node.
///
/// `data` never changes after construction. `grad` is written by the
/// backward traversal (or cleared by the client), `creator` is written once
/// by the call protocol.
pub struct VariableNode {
    pub(crate) data: Option<ArrayD<f64>>,
    pub(crate) name: RefCell<Option<String>>,
    pub(crate) grad: RefCell<Option<ArrayD<f64>>>,
    /// Owning link to the producing function. Leaves leave this empty.
    pub(crate) creator: OnceCell<Rc<FunctionNode>>,
    pub(crate) generation: Cell<usize>,
}

/// A value participating in the differentiable graph.
///
/// `Variable` is a cheap handle (`Rc`) to a [`VariableNode`]; clones share the
/// same node, so a gradient written through one clone is visible through
/// all of them. The handle is deliberately `!Send`: graphs are built and
/// differentiated on a single thread.
pub struct Variable {
    pub(crate) node: Rc<VariableNode>,
}

impl Variable {
    /// Creates a leaf from an `f64` array of any dimensionality.
    pub fn new<D: Dimension>(data: Array<f64, D>) -> Self {
        Self::from_parts(Some(as_array(data)), None)
    }

    /// Creates a named leaf. The name only affects display.
    pub fn with_name<D: Dimension>(data: Array<f64, D>, name: &str) -> Self {
        Self::from_parts(Some(as_array(data)), Some(name.to_string()))
    }

    /// Creates a leaf without data. Such a variable cannot enter an
    /// operation or seed a backward pass.
    pub fn empty() -> Self {
        Self::from_parts(None, None)
    }

    /// Creates a leaf from a dynamically typed value.
    ///
    /// Accepts `ArrayD<f64>`, `Array0/1/2<f64>` and `ArrayD<f32>` (widened to
    /// `f64`). Everything else, bare scalars included, is rejected.
    ///
    /// # Errors
    /// Returns `AutogradError::TypeError` naming the rejected type.
    pub fn try_from_value<T: Any>(value: T) -> Result<Self, AutogradError> {
        let boxed: Box<dyn Any> = Box::new(value);
        let boxed = match boxed.downcast::<ArrayD<f64>>() {
            Ok(array) => return Ok(Self::new(*array)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<ndarray::Array0<f64>>() {
            Ok(array) => return Ok(Self::new(*array)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<ndarray::Array1<f64>>() {
            Ok(array) => return Ok(Self::new(*array)),
            Err(other) => other,
        };
        let boxed = match boxed.downcast::<ndarray::Array2<f64>>() {
            Ok(array) => return Ok(Self::new(*array)),
            Err(other) => other,
        };
        if let Ok(array) = boxed.downcast::<ArrayD<f32>>() {
            return Ok(Self::new(array.mapv(f64::from)));
        }
        Err(AutogradError::TypeError {
            found: type_name::<T>().to_string(),
        })
    }

    pub(crate) fn from_parts(data: Option<ArrayD<f64>>, name: Option<String>) -> Self {
        Variable {
            node: Rc::new(VariableNode {
                data,
                name: RefCell::new(name),
                grad: RefCell::new(None),
                creator: OnceCell::new(),
                generation: Cell::new(0),
            }),
        }
    }

    pub(crate) fn from_node(node: Rc<VariableNode>) -> Self {
        Variable { node }
    }

    pub(crate) fn downgrade(&self) -> Weak<VariableNode> {
        Rc::downgrade(&self.node)
    }

    /// Returns the payload, or `None` for a variable built with [`Variable::empty`].
    pub fn data(&self) -> Option<&ArrayD<f64>> {
        self.node.data.as_ref()
    }

    /// Returns the payload or a `MissingData` error naming `operation`.
    pub(crate) fn require_data(&self, operation: &str) -> Result<&ArrayD<f64>, AutogradError> {
        self.node
            .data
            .as_ref()
            .ok_or_else(|| AutogradError::MissingData {
                operation: operation.to_string(),
            })
    }

    /// Returns a copy of the accumulated gradient, if any.
    pub fn grad(&self) -> Option<ArrayD<f64>> {
        self.node.grad.borrow().clone()
    }

    pub fn name(&self) -> Option<String> {
        self.node.name.borrow().clone()
    }

    pub fn set_name(&self, name: &str) {
        *self.node.name.borrow_mut() = Some(name.to_string());
    }

    pub fn shape(&self) -> Result<Vec<usize>, AutogradError> {
        Ok(self.require_data("shape")?.shape().to_vec())
    }

    pub fn ndim(&self) -> Result<usize, AutogradError> {
        Ok(self.require_data("ndim")?.ndim())
    }

    /// Total number of elements.
    pub fn size(&self) -> Result<usize, AutogradError> {
        Ok(self.require_data("size")?.len())
    }

    /// Length of the first axis.
    ///
    /// # Errors
    /// `UnsizedLen` for 0-dimensional data, `MissingData` for an empty variable.
    pub fn len(&self) -> Result<usize, AutogradError> {
        let data = self.require_data("len")?;
        data.shape().first().copied().ok_or(AutogradError::UnsizedLen)
    }

    /// `true` when there is no data or the data has no elements.
    pub fn is_empty(&self) -> bool {
        self.data().map_or(true, |data| data.is_empty())
    }

    pub fn dtype(&self) -> Result<DType, AutogradError> {
        self.require_data("dtype")?;
        Ok(DType::F64)
    }

    /// Graph depth: `0` for leaves, `creator.generation + 1` otherwise.
    pub fn generation(&self) -> usize {
        self.node.generation.get()
    }

    /// The function call that produced this variable.
    pub fn creator(&self) -> Option<Rc<FunctionNode>> {
        self.node.creator.get().cloned()
    }

    /// `true` for user-supplied inputs and constants.
    pub fn is_leaf(&self) -> bool {
        self.node.creator.get().is_none()
    }
}

// ferrograd-core/src/variable/traits.rs

use crate::variable::Variable;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Width of the `variable(` prefix; continuation lines of a multi-line
/// payload are indented by this much.
const DISPLAY_INDENT: usize = 9;

impl Clone for Variable {
    /// Shallow clone: the new handle shares the node (data, grad, creator).
    fn clone(&self) -> Self {
        Variable {
            node: Rc::clone(&self.node),
        }
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shape = self.data().map(|data| data.shape().to_vec());
        write!(
            f,
            "Variable(name={:?}, shape={:?}, generation={}, has_grad={}, has_creator={})",
            self.node.name.borrow(),
            shape,
            self.generation(),
            self.node.grad.borrow().is_some(),
            !self.is_leaf()
        )
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data() {
            None => write!(f, "variable(None)"),
            Some(data) => {
                let indent = format!("\n{}", " ".repeat(DISPLAY_INDENT));
                let body = data.to_string().replace('\n', &indent);
                write!(f, "variable({})", body)
            }
        }
    }
}

impl PartialEq for Variable {
    /// Identity comparison: two handles are equal when they share a node.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.node).hash(state);
    }
}

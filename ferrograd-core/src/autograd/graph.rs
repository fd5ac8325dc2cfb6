// ferrograd-core/src/autograd/graph.rs

use crate::autograd::function::{FunctionId, FunctionNode};
use crate::error::AutogradError;
use crate::variable::Variable;
use log::debug;
use ndarray::{ArrayD, IxDyn};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::rc::Rc;

/// Entry of the ready queue. Ordered by generation first, so the deepest
/// pending function is always processed next; `order` breaks ties by
/// favouring the most recently discovered function.
struct Candidate {
    generation: usize,
    order: usize,
    function: Rc<FunctionNode>,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation && self.order == other.order
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.generation
            .cmp(&other.generation)
            .then(self.order.cmp(&other.order))
    }
}

/// Functions waiting to propagate, each admitted at most once.
pub(crate) struct ReadyQueue {
    heap: BinaryHeap<Candidate>,
    seen: HashSet<FunctionId>,
    next_order: usize,
}

impl ReadyQueue {
    pub(crate) fn new() -> Self {
        ReadyQueue {
            heap: BinaryHeap::new(),
            seen: HashSet::new(),
            next_order: 0,
        }
    }

    /// Enqueues `function` unless it has been enqueued before.
    pub(crate) fn push(&mut self, function: Rc<FunctionNode>) {
        if !self.seen.insert(function.id()) {
            return;
        }
        self.heap.push(Candidate {
            generation: function.generation(),
            order: self.next_order,
            function,
        });
        self.next_order += 1;
    }

    /// Pops the pending function with the highest generation.
    pub(crate) fn pop(&mut self) -> Option<Rc<FunctionNode>> {
        self.heap.pop().map(|candidate| candidate.function)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Propagates gradients from `root` to every reachable leaf.
///
/// A function runs only after every function consuming its outputs has run,
/// which the generation order guarantees: a consumer always has a strictly
/// higher generation than the producer of any of its inputs. Every function
/// therefore sees fully accumulated output gradients.
pub(crate) fn backward(root: &Variable, retain_grad: bool) -> Result<(), AutogradError> {
    let seed_shape = root.require_data("backward")?.shape().to_vec();
    if root.grad().is_none() {
        root.set_grad(Some(ArrayD::ones(IxDyn(&seed_shape))));
    }

    let mut queue = ReadyQueue::new();
    match root.creator() {
        Some(creator) => queue.push(creator),
        None => {
            debug!("backward called on a leaf; nothing to propagate");
            return Ok(());
        }
    }

    let mut processed = 0usize;
    while let Some(function) = queue.pop() {
        debug!(
            "backward: {} {:?} (generation {}, {} pending)",
            function.function().name(),
            function.id(),
            function.generation(),
            queue.len()
        );

        let gxs = function.input_grads()?;
        for (input, gx) in function.inputs().iter().zip(gxs) {
            input.accumulate_grad(gx)?;
            if let Some(creator) = input.creator() {
                queue.push(creator);
            }
        }

        if !retain_grad {
            for output in function.outputs().into_iter().flatten() {
                output.clear_grad();
            }
        }
        processed += 1;
    }

    debug!("backward finished after {} function(s)", processed);
    Ok(())
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

// ferrograd-core/src/config.rs

//! Thread-local engine switches.
//!
//! The only switch today is `enable_backprop`: when it is off, the call
//! protocol still runs `forward` but does not record a `FunctionNode`, so the
//! outputs are leaves and nothing upstream is kept alive by them.

use std::cell::Cell;

thread_local! {
    static ENABLE_BACKPROP: Cell<bool> = const { Cell::new(true) };
}

/// Returns whether operations currently record the graph.
pub fn is_backprop_enabled() -> bool {
    ENABLE_BACKPROP.with(|enabled| enabled.get())
}

/// Restores the previous `enable_backprop` value when dropped, so the switch
/// is reset even if the closure passed to [`no_grad`] panics.
struct ConfigGuard {
    previous: bool,
}

impl Drop for ConfigGuard {
    fn drop(&mut self) {
        ENABLE_BACKPROP.with(|enabled| enabled.set(self.previous));
    }
}

fn using_backprop(value: bool) -> ConfigGuard {
    let previous = ENABLE_BACKPROP.with(|enabled| enabled.replace(value));
    log::trace!("enable_backprop: {} -> {}", previous, value);
    ConfigGuard { previous }
}

/// Runs `f` with graph recording disabled.
///
/// ```
/// use ferrograd_core::{no_grad, Variable};
/// use ndarray::arr0;
///
/// let x = Variable::new(arr0(2.0));
/// let y = no_grad(|| &x * &x);
/// assert!(y.is_leaf());
/// ```
pub fn no_grad<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = using_backprop(false);
    f()
}

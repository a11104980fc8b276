//! Scoped overrides of the process-wide print options
//!
//! [`PrintOptionsGuard`] snapshots the current options, applies an override
//! and puts the snapshot back when it goes out of scope. Restoration happens
//! exactly once on every exit path: normal return, early return, `?`
//! propagation, or a panic unwinding through the scope.
//!
//! Guards are not synchronized with each other. Overlapping guards on
//! different threads can restore each other's options; use them from a single
//! thread or serialize them externally.

use crate::global::{set_print_options, update_print_options};
use crate::options::{PrintOptions, PrintOptionsOverride};
use tracing::trace;

/// Restores the print options captured at construction when dropped
#[must_use = "print options are restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct PrintOptionsGuard {
    saved: PrintOptions,
    active: bool,
}

impl PrintOptionsGuard {
    /// Snapshot the current options and apply `overrides`
    pub fn new(overrides: &PrintOptionsOverride) -> Self {
        let saved = update_print_options(overrides);
        trace!("print options override entered");
        Self {
            saved,
            active: true,
        }
    }

    /// The options that will be restored
    pub fn snapshot(&self) -> &PrintOptions {
        &self.saved
    }

    /// Restore the snapshot now instead of at the end of the scope
    pub fn restore(mut self) {
        self.restore_once();
    }

    fn restore_once(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        set_print_options(self.saved.clone());
        trace!("print options restored");
    }
}

impl Drop for PrintOptionsGuard {
    fn drop(&mut self) {
        self.restore_once();
    }
}

/// Run `f` with `overrides` applied, restoring the previous options afterwards
///
/// Whatever `f` returns, including an `Err`, is passed through unchanged. If
/// `f` panics the options are restored while unwinding and the panic
/// continues.
///
/// # Examples
///
/// ```rust
/// use numkit_display::{get_print_options, with_print_options, PrintOptionsOverride};
///
/// let before = get_print_options();
/// let precision = with_print_options(&PrintOptionsOverride::new().precision(2), || {
///     get_print_options().precision
/// });
///
/// assert_eq!(precision, 2);
/// assert_eq!(get_print_options(), before);
/// ```
pub fn with_print_options<F, R>(overrides: &PrintOptionsOverride, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = PrintOptionsGuard::new(overrides);
    f()
}

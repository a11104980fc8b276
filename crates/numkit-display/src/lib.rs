//! Process-wide array print options with a scoped override guard
//!
//! The print options ([`PrintOptions`]) are global to the process, like
//! numpy's `set_printoptions`. [`PrintOptionsGuard`] and
//! [`with_print_options`] change them for the duration of a scope and put the
//! previous values back on every exit path. [`format_array`] renders a
//! one-dimensional array with whatever options are currently in effect.
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use numkit_display::{format_array, PrintOptionsGuard, PrintOptionsOverride};
//!
//! let values = array![0.123456, 2.0];
//! {
//!     let _guard = PrintOptionsGuard::new(&PrintOptionsOverride::new().precision(2));
//!     assert_eq!(format_array(&values), "[0.12 2.  ]");
//! }
//! ```
//!
//! Guards are not coordinated across threads; see [`scope`] for details.

pub mod format;
pub mod global;
pub mod options;
pub mod scope;

pub use format::{format_array, format_numeric_array, format_with, ArrayDisplay};
pub use global::{get_print_options, reset_print_options, set_print_options, update_print_options};
pub use options::{PrintOptions, PrintOptionsOverride, Sign};
pub use scope::{with_print_options, PrintOptionsGuard};

pub use numkit_core::Result;

#[cfg(test)]
pub(crate) mod test_support {
    use lazy_static::lazy_static;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    lazy_static! {
        static ref GLOBALS: Mutex<()> = Mutex::new(());
    }

    /// Serialize tests that touch the process-wide options
    pub(crate) fn lock_globals() -> MutexGuard<'static, ()> {
        GLOBALS.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

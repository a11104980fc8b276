//! Process-wide print options
//!
//! One set of options is shared by the whole process. Every function here
//! takes the lock for the duration of a single read or update only; callers
//! that need several updates to appear atomic to other threads must
//! serialize them themselves.

use crate::options::{PrintOptions, PrintOptionsOverride};
use lazy_static::lazy_static;
use std::sync::{PoisonError, RwLock};
use tracing::trace;

lazy_static! {
    static ref PRINT_OPTIONS: RwLock<PrintOptions> = RwLock::new(PrintOptions::default());
}

/// Snapshot of the current options
pub fn get_print_options() -> PrintOptions {
    PRINT_OPTIONS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the current options, returning the previous ones
pub fn set_print_options(options: PrintOptions) -> PrintOptions {
    let mut current = PRINT_OPTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    trace!(?options, "setting print options");
    std::mem::replace(&mut *current, options)
}

/// Apply a partial update, returning the options as they were before
///
/// The snapshot and the update happen under one write lock.
pub fn update_print_options(overrides: &PrintOptionsOverride) -> PrintOptions {
    let mut current = PRINT_OPTIONS
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let updated = overrides.apply_to(&current);
    trace!(?overrides, "updating print options");
    std::mem::replace(&mut *current, updated)
}

/// Restore the defaults, returning the previous options
pub fn reset_print_options() -> PrintOptions {
    set_print_options(PrintOptions::default())
}

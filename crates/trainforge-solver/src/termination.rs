//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Terminates a running solve when an external flag is set.
///
/// The solver checks the flag before scoring each combination, so a raised
/// flag stops the search within one evaluation. A search that runs to
/// completion returns the same sequence whether or not a flag is attached.
///
/// # Example
///
/// ```
/// use trainforge_solver::termination::ExternalTermination;
///
/// let termination = ExternalTermination::new();
/// let handle = termination.clone();
///
/// // Later, from another thread:
/// handle.terminate();
/// assert!(termination.is_terminated());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    /// Creates a termination with a fresh, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a termination that checks the given flag.
    pub fn from_flag(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }

    /// Returns a handle to the underlying flag.
    pub fn flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.flag)
    }

    /// Requests termination.
    pub fn terminate(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Clears a previous termination request.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::SeqCst);
    }

    /// Returns true once termination has been requested.
    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

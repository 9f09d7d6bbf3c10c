//! Error types for TrainForge

use thiserror::Error;

use crate::status::Status;

/// Main error type for TrainForge operations.
///
/// An exhausted search is not an error: solvers report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum TrainforgeError {
    /// The constraint profile has no goal predicate.
    #[error("Constraint profile has no goal predicate")]
    MissingGoal,

    /// The starting status fails the profile's validity predicate.
    #[error("Invalid starting status: {status}")]
    InvalidStatus { status: Status },

    /// The effective operation cap is not a positive bound.
    #[error("Invalid operation cap: {0} (must be at least 1)")]
    InvalidCap(usize),

    /// No profile is registered under the requested key.
    #[error("Unknown constraint profile: {0}")]
    UnknownProfile(String),

    /// Configuration could not be turned into a solver.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Solver was cancelled before completion
    #[error("Solver was cancelled")]
    Cancelled,
}

impl TrainforgeError {
    /// Returns true for errors caused by misuse of the solver contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            TrainforgeError::MissingGoal
                | TrainforgeError::InvalidStatus { .. }
                | TrainforgeError::InvalidCap(_)
        )
    }
}

/// Result type alias for TrainForge operations
pub type Result<T> = std::result::Result<T, TrainforgeError>;

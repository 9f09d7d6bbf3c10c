//! TrainForge - minimum training sequences for attribute targets
//!
//! Finds the shortest list of training operations that takes a character's
//! attribute status to a goal, under a named personality or a custom profile.
//!
//! # Example
//!
//! ```rust
//! use trainforge::prelude::*;
//!
//! let config = SolverConfig::new(12);
//! let ops = trainforge::solve_personality([22, 20, 25, 25], "dull", &config)
//!     .unwrap()
//!     .unwrap();
//!
//! let status = Status::new([22, 20, 25, 25]).apply(&ops);
//! assert!(status.is_all_equal());
//! assert_eq!(ops.len(), 2);
//! ```

// Domain types
pub use trainforge_core::{
    apply_operations, checklist, sorted_for_display, Attribute, Operation, RawStatus, Result,
    Status, TrainforgeError, TrainingScore, ALL_OPERATIONS, ALL_OPERATIONS_EXCEPT_HIGH_FOCUS,
};

// Configuration
pub use trainforge_config::{ConfigError, Enumeration, SolverConfig};

// Search
pub use trainforge_solver::{
    level_size, multisets, order_by_attribute, personalities, product, shortest_partition,
    shortest_score_partition, Combinations, ConstraintProfile, CustomProfile,
    ExternalTermination, MinimumOperationsSolver, Personality, PoolTransform, SolveReport,
    SolveStatistics, StatusPredicate, DEFAULT_ADDENDS,
};

#[cfg(feature = "console")]
pub use trainforge_console as console;

/// Solves for a registered personality over the full operation pool.
///
/// Looks `key` up in the personality registry and runs the solver with
/// `config`. The personality's own cap and order, when it has them, take
/// precedence over the configured ones.
///
/// # Errors
///
/// - [`TrainforgeError::UnknownProfile`] if no personality has that key
/// - [`TrainforgeError::Config`] if `config` fails validation
/// - any error [`MinimumOperationsSolver::solve`] reports
pub fn solve_personality(
    status: impl Into<Status>,
    key: &str,
    config: &SolverConfig,
) -> Result<Option<Vec<Operation>>> {
    #[cfg(feature = "console")]
    trainforge_console::init();

    let personality = Personality::from_key(key)
        .ok_or_else(|| TrainforgeError::UnknownProfile(key.to_string()))?;
    config
        .validate()
        .map_err(|e| TrainforgeError::Config(e.to_string()))?;

    MinimumOperationsSolver::new(config.clone()).solve(status, &ALL_OPERATIONS, &personality, None)
}

pub mod prelude {
    pub use super::{
        Attribute, ConstraintProfile, CustomProfile, Enumeration, MinimumOperationsSolver,
        Operation, Personality, SolverConfig, Status, TrainforgeError, TrainingScore,
        ALL_OPERATIONS, ALL_OPERATIONS_EXCEPT_HIGH_FOCUS,
    };
}

//! Minimum-operations solver.
//!
//! Iterative deepening over sequence length: for each length from 1 up to
//! the cap, every combination of the candidate pool is applied to the
//! starting status and checked against the profile's goal. The first hit
//! is returned, so the result is minimal in length and, among minimal
//! sequences, first in enumeration order.

use std::time::Instant;

use tracing::{debug, info};
use trainforge_config::{Enumeration, SolverConfig};
use trainforge_core::{Attribute, Operation, Result, Status, TrainforgeError};

use crate::generator::{level_size, Combinations};
use crate::profile::ConstraintProfile;
use crate::statistics::SolveStatistics;
use crate::termination::ExternalTermination;

/// Outcome of a solve together with its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    /// The shortest sequence found, or `None` if unreachable within the cap.
    pub operations: Option<Vec<Operation>>,
    /// Counters collected during the search.
    pub statistics: SolveStatistics,
}

impl SolveReport {
    /// Returns true if a sequence was found.
    pub fn is_solved(&self) -> bool {
        self.operations.is_some()
    }
}

/// Finds the shortest operation sequence driving a status into a goal.
///
/// # Example
///
/// ```
/// use trainforge_config::SolverConfig;
/// use trainforge_core::{Attribute, Status, TrainingScore, ALL_OPERATIONS};
/// use trainforge_solver::profile::CustomProfile;
/// use trainforge_solver::MinimumOperationsSolver;
///
/// let solver = MinimumOperationsSolver::new(SolverConfig::new(6));
/// let profile = CustomProfile::new("strong").with_goal(|s| s[Attribute::Strength] >= 18);
///
/// let ops = solver
///     .solve(Status::ZERO, &ALL_OPERATIONS, &profile, None)
///     .unwrap()
///     .expect("reachable");
///
/// assert_eq!(ops.len(), 2);
/// assert!(ops.iter().all(|op| op.score == TrainingScore::Perfect));
/// ```
#[derive(Debug, Clone)]
pub struct MinimumOperationsSolver {
    config: SolverConfig,
    termination: Option<ExternalTermination>,
}

impl MinimumOperationsSolver {
    /// Creates a solver from configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            termination: None,
        }
    }

    /// Creates a solver with the given cap and default settings.
    pub fn with_max_operations(max_operations: usize) -> Self {
        Self::new(SolverConfig::new(max_operations))
    }

    /// Attaches an external termination flag.
    pub fn with_termination(mut self, termination: ExternalTermination) -> Self {
        self.termination = Some(termination);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves and returns only the operation sequence.
    ///
    /// `Ok(None)` means no sequence within the cap reaches the goal.
    ///
    /// # Errors
    ///
    /// - [`TrainforgeError::MissingGoal`] if the profile has no goal
    /// - [`TrainforgeError::InvalidStatus`] if the start fails `is_valid`
    /// - [`TrainforgeError::InvalidCap`] if the effective cap is 0
    /// - [`TrainforgeError::Cancelled`] if the termination flag was raised
    pub fn solve<P>(
        &self,
        status: impl Into<Status>,
        pool: &[Operation],
        profile: &P,
        order: Option<&[Attribute]>,
    ) -> Result<Option<Vec<Operation>>>
    where
        P: ConstraintProfile + ?Sized,
    {
        self.solve_report(status, pool, profile, order)
            .map(|report| report.operations)
    }

    /// Solves and returns the sequence with search statistics.
    pub fn solve_report<P>(
        &self,
        status: impl Into<Status>,
        pool: &[Operation],
        profile: &P,
        order: Option<&[Attribute]>,
    ) -> Result<SolveReport>
    where
        P: ConstraintProfile + ?Sized,
    {
        let start = Instant::now();
        let status: Status = status.into();

        if !profile.has_goal() {
            return Err(TrainforgeError::MissingGoal);
        }
        if !profile.is_valid(&status) {
            return Err(TrainforgeError::InvalidStatus { status });
        }

        let max_operations = profile
            .max_operations()
            .unwrap_or(self.config.max_operations);
        let mut statistics = SolveStatistics {
            max_operations,
            ..SolveStatistics::default()
        };

        let satisfied = profile.is_goal(&status);
        if !satisfied && max_operations == 0 {
            return Err(TrainforgeError::InvalidCap(max_operations));
        }

        let mut candidates = profile.transform_operations(pool.to_vec());
        let order = order
            .or_else(|| profile.preferred_order())
            .or(self.config.preferred_order.as_deref());
        if let Some(order) = order {
            order_by_attribute(&mut candidates, order);
        }
        statistics.pool_size = candidates.len();

        let enumeration = self.config.enumeration;
        info!(
            event = "solve_start",
            profile = profile.key(),
            status = %status,
            cap = max_operations as u64,
            pool_size = candidates.len() as u64,
            enumeration = %enumeration,
        );

        if satisfied {
            statistics.elapsed = start.elapsed();
            info!(
                event = "solve_end",
                profile = profile.key(),
                outcome = "already_satisfied",
                length = 0u64,
                evaluated = 0u64,
                duration_ms = statistics.elapsed.as_millis() as u64,
            );
            return Ok(SolveReport {
                operations: Some(Vec::new()),
                statistics,
            });
        }

        let found = self.search(&status, &candidates, profile, enumeration, &mut statistics)?;
        statistics.elapsed = start.elapsed();

        let outcome = if found.is_some() { "solved" } else { "unreachable" };
        info!(
            event = "solve_end",
            profile = profile.key(),
            outcome,
            length = found.as_ref().map_or(0, Vec::len) as u64,
            evaluated = statistics.combinations_evaluated,
            duration_ms = statistics.elapsed.as_millis() as u64,
        );

        Ok(SolveReport {
            operations: found,
            statistics,
        })
    }

    fn search<P>(
        &self,
        status: &Status,
        candidates: &[Operation],
        profile: &P,
        enumeration: Enumeration,
        statistics: &mut SolveStatistics,
    ) -> Result<Option<Vec<Operation>>>
    where
        P: ConstraintProfile + ?Sized,
    {
        for num_ops in 1..=statistics.max_operations {
            statistics.levels_explored = num_ops;
            debug!(
                event = "level_start",
                level = num_ops as u64,
                combinations = level_size(candidates.len(), num_ops, enumeration).unwrap_or(u64::MAX),
            );

            let mut combinations = Combinations::new(candidates, num_ops, enumeration);
            while let Some(indices) = combinations.advance() {
                if self.is_terminated() {
                    return Err(TrainforgeError::Cancelled);
                }
                statistics.combinations_evaluated += 1;

                let trained = status.apply_all(indices.iter().map(|&i| &candidates[i]));
                if profile.is_goal(&trained) {
                    return Ok(Some(indices.iter().map(|&i| candidates[i]).collect()));
                }
            }
        }

        Ok(None)
    }

    fn is_terminated(&self) -> bool {
        self.termination
            .as_ref()
            .is_some_and(ExternalTermination::is_terminated)
    }
}

/// Stably sorts operations by their attribute's position in `order`.
///
/// Attributes missing from `order` keep their relative order after all
/// listed ones.
pub fn order_by_attribute(operations: &mut [Operation], order: &[Attribute]) {
    operations.sort_by_key(|op| {
        order
            .iter()
            .position(|&a| a == op.attribute)
            .unwrap_or(order.len())
    });
}

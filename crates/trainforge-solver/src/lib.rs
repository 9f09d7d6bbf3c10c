//! TrainForge Solver Engine
//!
//! This crate provides the search side of TrainForge:
//! - Combination generator (lazy product and multiset enumeration)
//! - Constraint profiles and the named personality registry
//! - Minimum-operations solver (iterative deepening)
//! - External termination and solve statistics
//! - Shortest-partition helper

pub mod generator;
pub mod partition;
pub mod profile;
pub mod solver;
pub mod statistics;
pub mod termination;

pub use generator::{level_size, multisets, product, Combinations};
pub use partition::{shortest_partition, shortest_score_partition, DEFAULT_ADDENDS};
pub use profile::{
    personalities, ConstraintProfile, CustomProfile, Personality, PoolTransform, StatusPredicate,
};
pub use solver::{order_by_attribute, MinimumOperationsSolver, SolveReport};
pub use statistics::SolveStatistics;
pub use termination::ExternalTermination;

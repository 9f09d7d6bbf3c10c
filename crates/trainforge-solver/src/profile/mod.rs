//! Constraint profiles that parameterize a single solve.
//!
//! A profile bundles a validity predicate, a goal predicate, an optional
//! candidate-pool transform, an optional operation cap and an optional
//! attribute priority. Profiles are evaluated many times per solve, so
//! every method must be pure and deterministic.
//!
//! Two implementations ship with the crate:
//! - [`Personality`] the static registry of named target profiles
//! - [`CustomProfile`] a profile assembled from plain function pointers

mod personality;

use std::fmt::Debug;

use trainforge_core::{Attribute, Operation, Status};

pub use personality::{personalities, Personality};

/// Predicate over a status.
pub type StatusPredicate = fn(&Status) -> bool;

/// Transform applied to the candidate pool before enumeration.
pub type PoolTransform = fn(Vec<Operation>) -> Vec<Operation>;

/// Rules defining one target outcome class.
pub trait ConstraintProfile: Debug {
    /// Short identifier used in logs.
    fn key(&self) -> &str;

    /// Returns false if the profile has no goal predicate.
    ///
    /// The solver rejects such a profile before searching.
    fn has_goal(&self) -> bool {
        true
    }

    /// Returns true if `status` satisfies the target condition.
    fn is_goal(&self, status: &Status) -> bool;

    /// Returns true if `status` is an acceptable starting point.
    fn is_valid(&self, _status: &Status) -> bool {
        true
    }

    /// Filters or reorders the candidate pool.
    ///
    /// Returning an empty pool is allowed: every depth then yields no
    /// combinations and the search ends unreachable.
    fn transform_operations(&self, pool: Vec<Operation>) -> Vec<Operation> {
        pool
    }

    /// Cap overriding the configured one for this profile.
    fn max_operations(&self) -> Option<usize> {
        None
    }

    /// Attribute priority overriding the configured one.
    fn preferred_order(&self) -> Option<&[Attribute]> {
        None
    }
}

/// A profile built from function pointers.
///
/// # Example
///
/// ```
/// use trainforge_core::{Attribute, Status};
/// use trainforge_solver::profile::{ConstraintProfile, CustomProfile};
///
/// let profile = CustomProfile::new("strong")
///     .with_goal(|s| s[Attribute::Strength] >= 18)
///     .with_max_operations(4);
///
/// assert!(profile.is_goal(&Status::new([0, 18, 0, 0])));
/// assert_eq!(profile.max_operations(), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct CustomProfile {
    key: String,
    valid: Option<StatusPredicate>,
    goal: Option<StatusPredicate>,
    transform: Option<PoolTransform>,
    max_operations: Option<usize>,
    preferred_order: Option<Vec<Attribute>>,
}

impl CustomProfile {
    /// Creates a profile with no predicates; a goal must be added.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            valid: None,
            goal: None,
            transform: None,
            max_operations: None,
            preferred_order: None,
        }
    }

    /// Sets the goal predicate.
    pub fn with_goal(mut self, goal: StatusPredicate) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Sets the validity predicate.
    pub fn with_valid(mut self, valid: StatusPredicate) -> Self {
        self.valid = Some(valid);
        self
    }

    /// Sets the candidate-pool transform.
    pub fn with_transform(mut self, transform: PoolTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Sets the operation cap for this profile.
    pub fn with_max_operations(mut self, max_operations: usize) -> Self {
        self.max_operations = Some(max_operations);
        self
    }

    /// Sets the attribute priority for this profile.
    pub fn with_preferred_order(mut self, order: impl Into<Vec<Attribute>>) -> Self {
        self.preferred_order = Some(order.into());
        self
    }
}

impl ConstraintProfile for CustomProfile {
    fn key(&self) -> &str {
        &self.key
    }

    fn has_goal(&self) -> bool {
        self.goal.is_some()
    }

    fn is_goal(&self, status: &Status) -> bool {
        self.goal.is_some_and(|goal| goal(status))
    }

    fn is_valid(&self, status: &Status) -> bool {
        self.valid.map_or(true, |valid| valid(status))
    }

    fn transform_operations(&self, pool: Vec<Operation>) -> Vec<Operation> {
        match self.transform {
            Some(transform) => transform(pool),
            None => pool,
        }
    }

    fn max_operations(&self) -> Option<usize> {
        self.max_operations
    }

    fn preferred_order(&self) -> Option<&[Attribute]> {
        self.preferred_order.as_deref()
    }
}

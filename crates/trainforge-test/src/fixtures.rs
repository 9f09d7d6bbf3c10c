//! Goal predicates, pool transforms and statuses used across test suites.
//!
//! Predicates are plain functions so they can be handed to profiles that
//! take function pointers.

use trainforge_core::{Attribute, Operation, Status, TrainingScore};

/// Goal: strength reaches 18.
pub fn strength_at_least_18(status: &Status) -> bool {
    status[Attribute::Strength] >= 18
}

/// Goal: intellect reaches 27 (three perfect operations from zero).
pub fn intellect_at_least_27(status: &Status) -> bool {
    status[Attribute::Intellect] >= 27
}

/// Goal: agility is exactly 14.
pub fn agility_exactly_14(status: &Status) -> bool {
    status[Attribute::Agility] == 14
}

/// Goal: focus reaches 10.
pub fn focus_at_least_10(status: &Status) -> bool {
    status[Attribute::Focus] >= 10
}

/// Goal: both strength and intellect reach 9.
pub fn strength_and_intellect_at_least_9(status: &Status) -> bool {
    status[Attribute::Strength] >= 9 && status[Attribute::Intellect] >= 9
}

/// Goal: any attribute reaches 9.
pub fn any_at_least_9(status: &Status) -> bool {
    status.values().iter().any(|&v| v >= 9)
}

/// Goal: attributes sum to exactly 20.
pub fn total_exactly_20(status: &Status) -> bool {
    status.total() == 20
}

/// Goal that no status satisfies.
pub fn never(_status: &Status) -> bool {
    false
}

/// Validity: every attribute is at most 30.
pub fn all_at_most_30(status: &Status) -> bool {
    status.values().iter().all(|&v| v <= 30)
}

/// Transform: remove every focus operation.
pub fn without_focus(pool: Vec<Operation>) -> Vec<Operation> {
    pool.into_iter()
        .filter(|op| op.attribute != Attribute::Focus)
        .collect()
}

/// Transform: keep only perfect operations.
pub fn only_perfect(pool: Vec<Operation>) -> Vec<Operation> {
    pool.into_iter()
        .filter(|op| op.score == TrainingScore::Perfect)
        .collect()
}

/// Transform: remove everything.
pub fn empty_pool(_pool: Vec<Operation>) -> Vec<Operation> {
    Vec::new()
}

/// A small pool for exhaustive cross-checks.
pub fn small_pool() -> Vec<Operation> {
    vec![
        Operation::new(Attribute::Agility, TrainingScore::SoSo),
        Operation::new(Attribute::Agility, TrainingScore::Good),
        Operation::new(Attribute::Strength, TrainingScore::Perfect),
        Operation::new(Attribute::Focus, TrainingScore::SoSo),
        Operation::new(Attribute::Intellect, TrainingScore::Good),
    ]
}

/// Starting statuses spanning empty, uneven and near-goal shapes.
pub fn sample_statuses() -> Vec<Status> {
    vec![
        Status::ZERO,
        Status::new([1, 2, 3, 4]),
        Status::new([10, 0, 7, 2]),
        Status::new([5, 9, 0, 8]),
        Status::new([13, 13, 13, 13]),
    ]
}

//! Brute-force reference search.
//!
//! Walks every ordered operation sequence depth-first, recursively, without
//! any of the solver's generator machinery. Only usable for small pools and
//! caps; intended as an independent cross-check.

use trainforge_core::{Operation, Status};

/// Returns the length of the shortest sequence reaching `goal`, if any.
///
/// Length 0 is returned when `status` already satisfies `goal`.
pub fn brute_force_min_length<G>(
    status: &Status,
    pool: &[Operation],
    goal: G,
    max_operations: usize,
) -> Option<usize>
where
    G: Fn(&Status) -> bool,
{
    brute_force_first_minimal(status, pool, goal, max_operations).map(|ops| ops.len())
}

/// Returns the first minimal sequence in lexicographic pool-index order.
///
/// This is the sequence a correct minimum-operations search over the full
/// Cartesian product must return.
pub fn brute_force_first_minimal<G>(
    status: &Status,
    pool: &[Operation],
    goal: G,
    max_operations: usize,
) -> Option<Vec<Operation>>
where
    G: Fn(&Status) -> bool,
{
    if goal(status) {
        return Some(Vec::new());
    }

    let mut path = Vec::new();
    for depth in 1..=max_operations {
        if dfs(status, pool, &goal, depth, &mut path) {
            return Some(path);
        }
    }
    None
}

fn dfs<G>(
    status: &Status,
    pool: &[Operation],
    goal: &G,
    remaining: usize,
    path: &mut Vec<Operation>,
) -> bool
where
    G: Fn(&Status) -> bool,
{
    if remaining == 0 {
        return goal(status);
    }
    for op in pool {
        path.push(*op);
        let next = status.with_added(op.attribute, op.score.value());
        if dfs(&next, pool, goal, remaining - 1, path) {
            return true;
        }
        path.pop();
    }
    false
}

//! Per-solve statistics.

use std::time::Duration;

/// Counters collected during one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStatistics {
    /// Effective operation cap after profile overrides.
    pub max_operations: usize,
    /// Candidate pool size after the profile transform.
    pub pool_size: usize,
    /// Number of sequence lengths that were enumerated.
    pub levels_explored: usize,
    /// Number of combinations scored against the goal.
    pub combinations_evaluated: u64,
    /// Wall-clock time spent in the solve.
    pub elapsed: Duration,
}

impl SolveStatistics {
    /// Returns combinations evaluated per second.
    pub fn evaluation_speed(&self) -> u64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.combinations_evaluated as f64 / secs) as u64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_speed() {
        let stats = SolveStatistics {
            combinations_evaluated: 1_000,
            elapsed: Duration::from_secs(2),
            ..SolveStatistics::default()
        };
        assert_eq!(stats.evaluation_speed(), 500);
    }

    #[test]
    fn test_evaluation_speed_without_elapsed_time() {
        let stats = SolveStatistics {
            combinations_evaluated: 1_000,
            ..SolveStatistics::default()
        };
        assert_eq!(stats.evaluation_speed(), 0);
    }
}

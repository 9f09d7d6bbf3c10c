//! Shortest partition of an integer into fixed addends.
//!
//! Bottom-up dynamic programming over every sum `0..=target`: the best
//! partition of `i` is the shortest `best(i - a) + [a]` over the addends
//! `a`, tried in the given order. On equal length the first addend found
//! wins, so the result depends on addend order.

use trainforge_core::TrainingScore;

/// Default addends: the non-zero training scores.
pub const DEFAULT_ADDENDS: [u32; 3] = [3, 5, 9];

/// Returns the shortest multiset of `addends` summing to `target`.
///
/// The result is in construction order: the partition of `target - a`
/// followed by `a`. Zero addends are ignored. `None` means no combination
/// of addends reaches `target` exactly.
///
/// The table holds one entry per sum in `0..=target`, so memory grows
/// linearly with `target` (12 bytes per sum, about 12 MB at one million).
/// Training totals stay in the hundreds; callers with arbitrary `u32`
/// targets must bound them first, since `u32::MAX` needs about 48 GiB.
///
/// # Examples
///
/// ```
/// use trainforge_solver::partition::{shortest_partition, DEFAULT_ADDENDS};
///
/// assert_eq!(shortest_partition(8, &DEFAULT_ADDENDS), Some(vec![5, 3]));
/// assert_eq!(shortest_partition(0, &DEFAULT_ADDENDS), Some(vec![]));
/// assert_eq!(shortest_partition(7, &DEFAULT_ADDENDS), None);
/// ```
pub fn shortest_partition(target: u32, addends: &[u32]) -> Option<Vec<u32>> {
    let target = target as usize;

    // best[i] = (partition length, last addend); best[0] is the empty partition.
    let mut best: Vec<Option<(u32, u32)>> = vec![None; target + 1];
    best[0] = Some((0, 0));

    for i in 1..=target {
        let mut shortest: Option<(u32, u32)> = None;
        for &addend in addends {
            let a = addend as usize;
            if a == 0 || a > i {
                continue;
            }
            if let Some((len, _)) = best[i - a] {
                if shortest.map_or(true, |(s, _)| len + 1 < s) {
                    shortest = Some((len + 1, addend));
                }
            }
        }
        best[i] = shortest;
    }

    let (len, _) = best[target]?;
    let mut parts = Vec::with_capacity(len as usize);
    let mut i = target;
    while i > 0 {
        let (_, addend) = best[i]?;
        parts.push(addend);
        i -= addend as usize;
    }
    parts.reverse();
    Some(parts)
}

/// Returns the shortest sequence of training scores adding up to `target`.
pub fn shortest_score_partition(target: u32) -> Option<Vec<TrainingScore>> {
    shortest_partition(target, &DEFAULT_ADDENDS).map(|parts| {
        parts
            .into_iter()
            .filter_map(TrainingScore::from_value)
            .collect()
    })
}

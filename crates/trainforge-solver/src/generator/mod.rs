//! Lazy combination generator over a fixed pool.
//!
//! Produces every length-`k` selection with repetition from a pool, one
//! tuple at a time, from an explicit arena of per-position indices. The
//! arena is owned by the generator, so every call to a constructor starts
//! a fresh enumeration and a consumer may stop at any point without the
//! remaining tuples ever being produced.
//!
//! # Enumeration orders
//!
//! - **Product**: every ordered tuple, `n^k` in total, in lexicographic
//!   order over pool indices.
//! - **Multiset**: only non-decreasing index tuples, `C(n+k-1, k)` in
//!   total, also in lexicographic order. Each multiset of pool items is
//!   visited exactly once.
//!
//! An empty pool yields nothing, whatever `k` is. `k = 0` over a non-empty
//! pool yields exactly one empty tuple.
//!
//! # Example
//!
//! ```
//! use trainforge_solver::generator::{multisets, product};
//!
//! let pool = ['a', 'b'];
//! let all: Vec<_> = product(&pool, 2).collect();
//! assert_eq!(all, vec![vec!['a', 'a'], vec!['a', 'b'], vec!['b', 'a'], vec!['b', 'b']]);
//!
//! let sorted: Vec<_> = multisets(&pool, 2).collect();
//! assert_eq!(sorted, vec![vec!['a', 'a'], vec!['a', 'b'], vec!['b', 'b']]);
//! ```

use std::fmt::{self, Debug};

use smallvec::SmallVec;
use trainforge_config::Enumeration;

/// Depth up to which the index arena lives inline.
const INLINE_DEPTH: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
    Fresh,
    Running,
    Exhausted,
}

/// Per-position pool indices for one enumeration.
#[derive(Debug, Clone)]
struct IndexArena {
    indices: SmallVec<[usize; INLINE_DEPTH]>,
    pool_len: usize,
    state: CursorState,
}

impl IndexArena {
    fn new(pool_len: usize, repeat: usize) -> Self {
        Self {
            indices: SmallVec::from_elem(0, repeat),
            pool_len,
            state: CursorState::Fresh,
        }
    }

    fn advance(&mut self, enumeration: Enumeration) -> Option<&[usize]> {
        match self.state {
            CursorState::Exhausted => return None,
            CursorState::Fresh => {
                if self.pool_len == 0 {
                    self.state = CursorState::Exhausted;
                    return None;
                }
                self.state = CursorState::Running;
                return Some(self.indices.as_slice());
            }
            CursorState::Running => {}
        }

        // Rightmost position that can still be incremented.
        let last = self.pool_len - 1;
        let Some(pos) = self.indices.iter().rposition(|&i| i < last) else {
            self.state = CursorState::Exhausted;
            return None;
        };

        self.indices[pos] += 1;
        let reset = match enumeration {
            Enumeration::Product => 0,
            Enumeration::Multiset => self.indices[pos],
        };
        for slot in &mut self.indices[pos + 1..] {
            *slot = reset;
        }

        Some(self.indices.as_slice())
    }
}

/// Lazy generator of length-`k` tuples drawn from a pool with repetition.
///
/// Drive it either as a cursor with [`advance`](Self::advance), which
/// exposes the current index tuple without allocating, or as an
/// [`Iterator`] of owned item tuples.
#[derive(Clone)]
pub struct Combinations<'a, T> {
    pool: &'a [T],
    arena: IndexArena,
    enumeration: Enumeration,
}

impl<T> Debug for Combinations<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combinations")
            .field("pool_len", &self.pool.len())
            .field("repeat", &self.arena.indices.len())
            .field("enumeration", &self.enumeration)
            .field("state", &self.arena.state)
            .finish()
    }
}

impl<'a, T> Combinations<'a, T> {
    /// Creates a generator of `repeat`-tuples in the given order.
    pub fn new(pool: &'a [T], repeat: usize, enumeration: Enumeration) -> Self {
        Self {
            pool,
            arena: IndexArena::new(pool.len(), repeat),
            enumeration,
        }
    }

    /// Creates a generator over the full Cartesian product.
    pub fn product(pool: &'a [T], repeat: usize) -> Self {
        Self::new(pool, repeat, Enumeration::Product)
    }

    /// Creates a generator over non-decreasing index tuples.
    pub fn multisets(pool: &'a [T], repeat: usize) -> Self {
        Self::new(pool, repeat, Enumeration::Multiset)
    }

    /// Moves to the next tuple and returns its pool indices.
    ///
    /// Returns `None` once the enumeration is exhausted, and keeps
    /// returning `None` afterwards.
    pub fn advance(&mut self) -> Option<&[usize]> {
        self.arena.advance(self.enumeration)
    }

    /// Returns the pool this generator draws from.
    pub fn pool(&self) -> &'a [T] {
        self.pool
    }

    /// Returns the tuple length.
    pub fn repeat(&self) -> usize {
        self.arena.indices.len()
    }

    /// Returns the enumeration order.
    pub fn enumeration(&self) -> Enumeration {
        self.enumeration
    }

    /// Returns the total number of tuples a fresh generator yields.
    ///
    /// `None` if the count does not fit in a `u64`.
    pub fn total(&self) -> Option<u64> {
        level_size(self.pool.len(), self.repeat(), self.enumeration)
    }
}

impl<T: Clone> Iterator for Combinations<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let pool = self.pool;
        self.advance()
            .map(|indices| indices.iter().map(|&i| pool[i].clone()).collect())
    }
}

/// Returns every ordered `repeat`-tuple of `pool`, lazily.
pub fn product<T>(pool: &[T], repeat: usize) -> Combinations<'_, T> {
    Combinations::product(pool, repeat)
}

/// Returns every `repeat`-multiset of `pool` as a sorted tuple, lazily.
pub fn multisets<T>(pool: &[T], repeat: usize) -> Combinations<'_, T> {
    Combinations::multisets(pool, repeat)
}

/// Number of tuples one depth of the search visits.
///
/// `None` if the count does not fit in a `u64`.
pub fn level_size(pool_len: usize, repeat: usize, enumeration: Enumeration) -> Option<u64> {
    if pool_len == 0 {
        return Some(0);
    }
    let n = pool_len as u64;
    let k = repeat as u64;
    match enumeration {
        Enumeration::Product => n.checked_pow(u32::try_from(repeat).ok()?),
        Enumeration::Multiset => {
            // C(n + k - 1, k), built incrementally so every step is exact.
            let mut acc: u64 = 1;
            for i in 1..=k {
                acc = acc.checked_mul(n - 1 + i)? / i;
            }
            Some(acc)
        }
    }
}

#[cfg(test)]
mod tests;

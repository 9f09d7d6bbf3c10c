//! Named personality profiles.
//!
//! The registry is a fixed table of enum variants; each variant carries its
//! rules in `match` arms rather than in stored closures.

use std::fmt;
use std::str::FromStr;

use trainforge_core::{Attribute, Operation, Status, TrainforgeError, TrainingScore};

use super::ConstraintProfile;

/// A named target personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Personality {
    Meticulous,
    Distracted,
    Dull,
    Solitary,
    Capable,
    Classy,
    Noble,
    Arrogant,
    Perfectionist,
    Immersed,
}

/// Minimum gap between every pair of attributes for [`Personality::Distracted`].
const DISTRACTED_GAP: u32 = 15;

impl Personality {
    /// Every registered personality, in registry order.
    pub const ALL: [Personality; 10] = [
        Personality::Meticulous,
        Personality::Distracted,
        Personality::Dull,
        Personality::Solitary,
        Personality::Capable,
        Personality::Classy,
        Personality::Noble,
        Personality::Arrogant,
        Personality::Perfectionist,
        Personality::Immersed,
    ];

    /// Returns the registry key.
    pub const fn key(self) -> &'static str {
        match self {
            Personality::Meticulous => "meticulous",
            Personality::Distracted => "distracted",
            Personality::Dull => "dull",
            Personality::Solitary => "solitary",
            Personality::Capable => "capable",
            Personality::Classy => "classy",
            Personality::Noble => "noble",
            Personality::Arrogant => "arrogant",
            Personality::Perfectionist => "perfectionist",
            Personality::Immersed => "immersed",
        }
    }

    /// Returns the human-readable title.
    pub const fn title(self) -> &'static str {
        match self {
            Personality::Meticulous => "Meticulous",
            Personality::Distracted => "Distracted",
            Personality::Dull => "Dull",
            Personality::Solitary => "Solitary",
            Personality::Capable => "Capable",
            Personality::Classy => "Classy",
            Personality::Noble => "Noble",
            Personality::Arrogant => "Arrogant",
            Personality::Perfectionist => "Perfectionist",
            Personality::Immersed => "Immersed",
        }
    }

    /// Returns the human-readable requirement description.
    pub const fn description(self) -> &'static str {
        match self {
            Personality::Meticulous => {
                "The four attributes (base + training) sum to exactly 100; \
                 all four at 25 gives Dull instead"
            }
            Personality::Distracted => {
                "Every pair of attributes (base + training) differs by at least 15, \
                 e.g. 0, 15, 30, 45; focus must not be trained"
            }
            Personality::Dull => {
                "All four attributes (base + training) are equal, summing to at most 100"
            }
            Personality::Solitary => {
                "Every attribute (base + training) ends in the digit 1; exactly one view"
            }
            Personality::Capable => {
                "All four attributes (base + training) are equal, summing to at least 104"
            }
            Personality::Classy => {
                "Every attribute (base + training) is at least 20; purebred within 3 generations"
            }
            Personality::Noble => {
                "Every attribute (base + training) is at least 20; purebred within 5 generations"
            }
            Personality::Arrogant => {
                "Every attribute (base + training) is at least 25; at least 200 views"
            }
            Personality::Perfectionist => {
                "Every attribute (base + training) is at least 20; \
                 reaches sub-adult within the time window"
            }
            Personality::Immersed => "Any single attribute (base + training) is at least 150",
        }
    }

    /// Looks up a personality by registry key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Returns the process-wide personality registry.
pub fn personalities() -> &'static [Personality] {
    &Personality::ALL
}

fn all_at_least(status: &Status, floor: u32) -> bool {
    status.values().iter().all(|&v| v >= floor)
}

fn pairwise_gap_at_least(status: &Status, gap: u32) -> bool {
    let values = status.values();
    (0..values.len()).all(|i| (i + 1..values.len()).all(|j| values[i].abs_diff(values[j]) >= gap))
}

impl ConstraintProfile for Personality {
    fn key(&self) -> &str {
        Personality::key(*self)
    }

    fn is_valid(&self, status: &Status) -> bool {
        match self {
            Personality::Meticulous => status.total() <= 100,
            Personality::Dull => status.values().iter().all(|&v| v <= 25),
            _ => true,
        }
    }

    fn is_goal(&self, status: &Status) -> bool {
        match self {
            Personality::Meticulous => status.total() == 100 && !status.is_all_equal(),
            Personality::Distracted => pairwise_gap_at_least(status, DISTRACTED_GAP),
            Personality::Dull => status.get(Attribute::Agility) <= 25 && status.is_all_equal(),
            Personality::Solitary => {
                status.values().iter().all(|v| v % 10 == 1) && !status.is_all_equal()
            }
            Personality::Capable => status.get(Attribute::Agility) >= 26 && status.is_all_equal(),
            Personality::Classy | Personality::Noble | Personality::Perfectionist => {
                all_at_least(status, 20) && !status.is_all_equal()
            }
            Personality::Arrogant => all_at_least(status, 25) && !status.is_all_equal(),
            Personality::Immersed => {
                status.values().iter().any(|&v| v >= 150) && !status.is_all_equal()
            }
        }
    }

    fn transform_operations(&self, pool: Vec<Operation>) -> Vec<Operation> {
        match self {
            Personality::Distracted => pool
                .into_iter()
                .filter(|op| op.attribute != Attribute::Focus)
                .collect(),
            Personality::Immersed => {
                if pool.iter().any(|op| op.score == TrainingScore::Perfect) {
                    pool.into_iter()
                        .filter(|op| op.score == TrainingScore::Perfect)
                        .collect()
                } else {
                    pool
                }
            }
            _ => pool,
        }
    }

    fn max_operations(&self) -> Option<usize> {
        match self {
            Personality::Dull => Some(12),
            Personality::Immersed => Some(20),
            _ => None,
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Personality {
    type Err = TrainforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Personality::from_key(s.trim()).ok_or_else(|| TrainforgeError::UnknownProfile(s.to_string()))
    }
}

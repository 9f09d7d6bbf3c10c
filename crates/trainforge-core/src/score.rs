//! TrainingScore - the closed set of operation magnitudes

use std::fmt;

/// Magnitude added to an attribute by a single training operation.
///
/// # Examples
///
/// ```
/// use trainforge_core::TrainingScore;
///
/// assert_eq!(TrainingScore::Perfect.value(), 9);
/// assert_eq!(TrainingScore::Good.to_string(), "+5 GOOD");
/// assert_eq!(TrainingScore::from_value(4), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub enum TrainingScore {
    Fail,
    SoSo,
    Good,
    Perfect,
}

impl TrainingScore {
    /// Every score that actually changes a status.
    pub const NON_ZERO: [TrainingScore; 3] = [
        TrainingScore::SoSo,
        TrainingScore::Good,
        TrainingScore::Perfect,
    ];

    /// Returns the amount this score adds to an attribute.
    #[inline]
    pub const fn value(self) -> u32 {
        match self {
            TrainingScore::Fail => 0,
            TrainingScore::SoSo => 3,
            TrainingScore::Good => 5,
            TrainingScore::Perfect => 9,
        }
    }

    /// Returns the score with the given magnitude.
    pub const fn from_value(value: u32) -> Option<Self> {
        match value {
            0 => Some(TrainingScore::Fail),
            3 => Some(TrainingScore::SoSo),
            5 => Some(TrainingScore::Good),
            9 => Some(TrainingScore::Perfect),
            _ => None,
        }
    }

    /// Returns the fixed display label for this score.
    pub const fn label(self) -> &'static str {
        match self {
            TrainingScore::Fail => "FAIL",
            TrainingScore::SoSo => "SO-SO",
            TrainingScore::Good => "GOOD",
            TrainingScore::Perfect => "PERFECT",
        }
    }
}

impl fmt::Display for TrainingScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.value(), self.label())
    }
}

impl From<TrainingScore> for u32 {
    fn from(score: TrainingScore) -> Self {
        score.value()
    }
}

impl TryFrom<u32> for TrainingScore {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        TrainingScore::from_value(value)
            .ok_or_else(|| format!("invalid training score {value} (expected 0, 3, 5 or 9)"))
    }
}

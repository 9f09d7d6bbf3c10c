//! Training operations and the canonical operation pools.

use std::fmt;

use crate::attribute::Attribute;
use crate::score::TrainingScore;

/// One atomic training action: add `score` to `attribute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    pub attribute: Attribute,
    pub score: TrainingScore,
}

impl Operation {
    /// Creates a new operation.
    #[inline]
    pub const fn new(attribute: Attribute, score: TrainingScore) -> Self {
        Operation { attribute, score }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{}", self.attribute, self.score.value())
    }
}

const fn op(attribute: Attribute, score: TrainingScore) -> Operation {
    Operation::new(attribute, score)
}

/// Every (attribute, non-zero score) operation, grouped by attribute.
pub static ALL_OPERATIONS: [Operation; 12] = [
    op(Attribute::Agility, TrainingScore::SoSo),
    op(Attribute::Agility, TrainingScore::Good),
    op(Attribute::Agility, TrainingScore::Perfect),
    op(Attribute::Strength, TrainingScore::SoSo),
    op(Attribute::Strength, TrainingScore::Good),
    op(Attribute::Strength, TrainingScore::Perfect),
    op(Attribute::Focus, TrainingScore::SoSo),
    op(Attribute::Focus, TrainingScore::Good),
    op(Attribute::Focus, TrainingScore::Perfect),
    op(Attribute::Intellect, TrainingScore::SoSo),
    op(Attribute::Intellect, TrainingScore::Good),
    op(Attribute::Intellect, TrainingScore::Perfect),
];

/// The canonical pool without focus +5 and focus +9.
///
/// High focus scores are hard to land in play, so this is the usual pool
/// for planning.
pub static ALL_OPERATIONS_EXCEPT_HIGH_FOCUS: [Operation; 10] = [
    op(Attribute::Agility, TrainingScore::SoSo),
    op(Attribute::Agility, TrainingScore::Good),
    op(Attribute::Agility, TrainingScore::Perfect),
    op(Attribute::Strength, TrainingScore::SoSo),
    op(Attribute::Strength, TrainingScore::Good),
    op(Attribute::Strength, TrainingScore::Perfect),
    op(Attribute::Focus, TrainingScore::SoSo),
    op(Attribute::Intellect, TrainingScore::SoSo),
    op(Attribute::Intellect, TrainingScore::Good),
    op(Attribute::Intellect, TrainingScore::Perfect),
];

/// Returns the operations stably sorted by attribute for display.
pub fn sorted_for_display(operations: &[Operation]) -> Vec<Operation> {
    let mut sorted = operations.to_vec();
    sorted.sort_by_key(|op| op.attribute);
    sorted
}

/// Renders operations as a checklist, one `[ ] <operation>` line each.
///
/// # Examples
///
/// ```
/// use trainforge_core::{checklist, Attribute, Operation, TrainingScore};
///
/// let notes = checklist(&[
///     Operation::new(Attribute::Intellect, TrainingScore::Good),
///     Operation::new(Attribute::Agility, TrainingScore::Perfect),
/// ]);
/// assert_eq!(notes, "[ ] agility +9\n[ ] intellect +5");
/// ```
pub fn checklist(operations: &[Operation]) -> String {
    sorted_for_display(operations)
        .iter()
        .map(|op| format!("[ ] {op}"))
        .collect::<Vec<_>>()
        .join("\n")
}

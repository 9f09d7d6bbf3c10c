//! Status vectors and the operation transform.

use std::fmt;
use std::ops::Index;

use crate::attribute::Attribute;
use crate::operation::Operation;

/// The four-attribute snapshot of a subject being trained.
///
/// A status always holds exactly one value per [`Attribute`], stored in
/// canonical attribute order. Applying operations never mutates the
/// receiver; every application produces a new `Status`.
///
/// # Examples
///
/// ```
/// use trainforge_core::{Attribute, Operation, Status, TrainingScore};
///
/// let status = Status::new([10, 0, 4, 7]);
/// let trained = status.apply(&[
///     Operation::new(Attribute::Strength, TrainingScore::Perfect),
///     Operation::new(Attribute::Strength, TrainingScore::SoSo),
/// ]);
///
/// assert_eq!(trained[Attribute::Strength], 12);
/// assert_eq!(status[Attribute::Strength], 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawStatus", into = "RawStatus"))]
pub struct Status {
    values: [u32; Attribute::COUNT],
}

impl Status {
    /// The all-zero status.
    pub const ZERO: Status = Status {
        values: [0; Attribute::COUNT],
    };

    /// Creates a status from values in canonical attribute order.
    #[inline]
    pub const fn new(values: [u32; Attribute::COUNT]) -> Self {
        Status { values }
    }

    /// Builds a status from sparse `(attribute, value)` pairs.
    ///
    /// Attributes that are not mentioned default to 0. When an attribute is
    /// mentioned twice the last value wins.
    pub fn from_partial<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Attribute, u32)>,
    {
        let mut values = [0; Attribute::COUNT];
        for (attribute, value) in pairs {
            values[attribute.index()] = value;
        }
        Status { values }
    }

    /// Returns the value of one attribute.
    #[inline]
    pub fn get(&self, attribute: Attribute) -> u32 {
        self.values[attribute.index()]
    }

    /// Returns all values in canonical attribute order.
    #[inline]
    pub fn values(&self) -> &[u32; Attribute::COUNT] {
        &self.values
    }

    /// Iterates `(attribute, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL
            .iter()
            .map(move |&attribute| (attribute, self.get(attribute)))
    }

    /// Returns the sum of all four values.
    ///
    /// Summed in `u64` so four saturated values cannot overflow.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&v| u64::from(v)).sum()
    }

    /// Returns true if all four values are equal.
    pub fn is_all_equal(&self) -> bool {
        self.values.iter().all(|&v| v == self.values[0])
    }

    /// Returns a copy with `amount` added to one attribute.
    #[inline]
    pub fn with_added(mut self, attribute: Attribute, amount: u32) -> Self {
        let slot = &mut self.values[attribute.index()];
        *slot = slot.saturating_add(amount);
        self
    }

    /// Applies a sequence of operations, returning the trained status.
    pub fn apply(&self, operations: &[Operation]) -> Status {
        self.apply_all(operations)
    }

    /// Applies any iterator of operations, returning the trained status.
    ///
    /// The result only depends on the multiset of operations, never on
    /// their order.
    pub fn apply_all<'a, I>(&self, operations: I) -> Status
    where
        I: IntoIterator<Item = &'a Operation>,
    {
        operations
            .into_iter()
            .fold(*self, |status, op| {
                status.with_added(op.attribute, op.score.value())
            })
    }
}

/// Applies `operations` to `status` left to right.
///
/// Each attribute of the result equals the input value plus the sum of
/// scores of every operation targeting it.
pub fn apply_operations(status: &Status, operations: &[Operation]) -> Status {
    status.apply(operations)
}

impl Index<Attribute> for Status {
    type Output = u32;

    #[inline]
    fn index(&self, attribute: Attribute) -> &u32 {
        &self.values[attribute.index()]
    }
}

impl From<[u32; Attribute::COUNT]> for Status {
    fn from(values: [u32; Attribute::COUNT]) -> Self {
        Status::new(values)
    }
}

impl FromIterator<(Attribute, u32)> for Status {
    fn from_iter<I: IntoIterator<Item = (Attribute, u32)>>(iter: I) -> Self {
        Status::from_partial(iter)
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Status")
            .field("agility", &self.values[0])
            .field("strength", &self.values[1])
            .field("focus", &self.values[2])
            .field("intellect", &self.values[3])
            .finish()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.values;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

/// Raw, possibly partial status as entered by a user or read from data.
///
/// Missing attributes are normalized to 0 by [`RawStatus::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct RawStatus {
    pub agility: Option<u32>,
    pub strength: Option<u32>,
    pub focus: Option<u32>,
    pub intellect: Option<u32>,
}

impl RawStatus {
    /// Fills unspecified attributes with 0 and fixes canonical order.
    pub fn normalize(&self) -> Status {
        Status::new([
            self.agility.unwrap_or(0),
            self.strength.unwrap_or(0),
            self.focus.unwrap_or(0),
            self.intellect.unwrap_or(0),
        ])
    }
}

impl From<RawStatus> for Status {
    fn from(raw: RawStatus) -> Self {
        raw.normalize()
    }
}

impl From<Status> for RawStatus {
    fn from(status: Status) -> Self {
        let [agility, strength, focus, intellect] = status.values;
        RawStatus {
            agility: Some(agility),
            strength: Some(strength),
            focus: Some(focus),
            intellect: Some(intellect),
        }
    }
}

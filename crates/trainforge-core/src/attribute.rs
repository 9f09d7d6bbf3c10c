//! The four trainable attributes.

use std::fmt;
use std::str::FromStr;

/// One of the four independent trainable quantities tracked by a [`Status`].
///
/// Declaration order is the canonical order: it fixes the status layout,
/// the display order and the default enumeration order.
///
/// [`Status`]: crate::Status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Attribute {
    Agility,
    Strength,
    Focus,
    Intellect,
}

impl Attribute {
    /// Number of attributes.
    pub const COUNT: usize = 4;

    /// All attributes in canonical order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Agility,
        Attribute::Strength,
        Attribute::Focus,
        Attribute::Intellect,
    ];

    /// Returns the slot of this attribute in a status vector.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the attribute stored at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the lowercase name used in configuration files.
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Agility => "agility",
            Attribute::Strength => "strength",
            Attribute::Focus => "focus",
            Attribute::Intellect => "intellect",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown attribute name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown attribute: {0}")]
pub struct ParseAttributeError(pub String);

impl FromStr for Attribute {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseAttributeError(s.to_string()))
    }
}

//! Subscription tier catalog.
//!
//! ```text
//! Starter → Growth → Wealth
//! ```
//!
//! The declaration order is the rank order and the only basis for
//! "required tier" and "upgrade to" computations.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EntitlementsError;

/// Subscription tier.
///
/// Serializes to the lowercase wire name. Deserialization goes through
/// [`Tier::parse`], so it accepts the same spellings as the session boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
#[repr(u8)]
pub enum Tier {
    /// Entry tier, granted to every account.
    Starter = 0,
    /// Mid tier.
    Growth = 1,
    /// Top tier.
    Wealth = 2,
}

impl Tier {
    /// Every tier in rank order, lowest first.
    pub const ALL: [Self; 3] = [Self::Starter, Self::Growth, Self::Wealth];

    /// Numeric rank, strictly increasing with declared order.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Compare two tiers by rank.
    #[must_use]
    pub fn compare(self, other: Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }

    /// The most restrictive tier.
    #[must_use]
    pub const fn lowest() -> Self {
        Self::Starter
    }

    /// The least restrictive tier.
    #[must_use]
    pub const fn highest() -> Self {
        Self::Wealth
    }

    /// Next tier strictly above this one, or `None` at the top.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::ALL.get(usize::from(self.rank()) + 1).copied()
    }

    /// Tier immediately below this one, or `None` at the bottom.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        usize::from(self.rank())
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Wire name of the tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Growth => "growth",
            Self::Wealth => "wealth",
        }
    }

    /// Strict parse used where a bad tier is a configuration error.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`EntitlementsError::UnknownTier`] if `value` is not a catalog tier.
    pub fn parse(value: &str) -> Result<Self, EntitlementsError> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EntitlementsError::unknown_tier(value))
    }

    /// Lenient parse used where tier strings enter from a session or a stored
    /// user record.
    ///
    /// Unknown values collapse to [`Tier::lowest`] and emit a warning.
    #[must_use]
    pub fn normalize(value: &str) -> Self {
        if let Ok(tier) = Self::parse(value) {
            return tier;
        }
        tracing::warn!(
            tier = value,
            fallback = Self::lowest().as_str(),
            "Unknown tier, falling back to the lowest tier"
        );
        Self::lowest()
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = EntitlementsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Tier {
    type Error = EntitlementsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

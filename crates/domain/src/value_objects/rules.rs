//! Lottery rules value object.
//!
//! One `LotteryRules` value describes a lottery variant: which numbers can be
//! drawn, how many a game may hold, and whether numbers must be unique and
//! sorted. Rules come from the catalog (or a caller's configuration) and are
//! never mutated by the generator.

use serde::{Deserialize, Serialize};

use super::{NumberRange, PickBounds};
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryRules {
    /// Inclusive bounds for drawable values
    pub range: NumberRange,
    /// Inclusive bounds on picks per game
    pub picks_allowed: PickBounds,
    pub unique_numbers: bool,
    pub sort_ascending: bool,
}

impl LotteryRules {
    /// Build rules from raw bounds, enforcing the value-object invariants.
    pub fn new(
        range_min: i32,
        range_max: i32,
        picks_min: usize,
        picks_max: usize,
        unique_numbers: bool,
        sort_ascending: bool,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            range: NumberRange::new(range_min, range_max)?,
            picks_allowed: PickBounds::new(picks_min, picks_max)?,
            unique_numbers,
            sort_ascending,
        })
    }

    /// Unique, ascending rules from literal bounds.
    ///
    /// Unchecked: only the catalog's literals go through here, and
    /// `catalog_rules_are_valid` rebuilds each one through `new`.
    pub(crate) const fn unique_sorted(
        range_min: i32,
        range_max: i32,
        picks_min: usize,
        picks_max: usize,
    ) -> Self {
        Self {
            range: NumberRange {
                min: range_min,
                max: range_max,
            },
            picks_allowed: PickBounds {
                min: picks_min,
                max: picks_max,
            },
            unique_numbers: true,
            sort_ascending: true,
        }
    }

    /// How many distinct values the range can supply.
    ///
    /// Zero for a malformed range.
    pub fn available_numbers(&self) -> u64 {
        u64::try_from(self.range.spread()).unwrap_or(0)
    }
}

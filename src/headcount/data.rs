//! Headcount structures for the three engineering tiers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, Result};

/// Seniority tier of an engineer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Junior,
    Mid,
    Senior,
}

impl Tier {
    /// All tiers in display order
    pub const ALL: [Tier; 3] = [Tier::Junior, Tier::Mid, Tier::Senior];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Junior => "Junior",
            Tier::Mid => "Mid",
            Tier::Senior => "Senior",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Engineer counts per tier
///
/// Counts are unsigned, so a constructed value is always valid. Untyped input
/// (command line, CSV) goes through [`HeadcountInput::from_signed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeadcountInput {
    pub junior: u32,
    pub mid: u32,
    pub senior: u32,
}

impl HeadcountInput {
    pub fn new(junior: u32, mid: u32, senior: u32) -> Self {
        Self { junior, mid, senior }
    }

    /// Validate signed counts, rejecting anything negative or too large
    pub fn from_signed(junior: i64, mid: i64, senior: i64) -> Result<Self> {
        Ok(Self {
            junior: checked_count(Tier::Junior, junior)?,
            mid: checked_count(Tier::Mid, mid)?,
            senior: checked_count(Tier::Senior, senior)?,
        })
    }

    /// Number of engineers in a tier
    pub fn count(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Junior => self.junior,
            Tier::Mid => self.mid,
            Tier::Senior => self.senior,
        }
    }

    /// Total engineers across all tiers
    pub fn total(&self) -> u64 {
        self.junior as u64 + self.mid as u64 + self.senior as u64
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

fn checked_count(tier: Tier, value: i64) -> Result<u32> {
    u32::try_from(value).map_err(|_| ExpenseError::InvalidInput { tier, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed_accepts_non_negative() {
        let input = HeadcountInput::from_signed(2, 1, 0).unwrap();
        assert_eq!(input, HeadcountInput::new(2, 1, 0));
        assert_eq!(input.total(), 3);
        assert!(!input.is_empty());
    }

    #[test]
    fn test_from_signed_rejects_negative() {
        let err = HeadcountInput::from_signed(1, -3, 0).unwrap_err();
        match err {
            ExpenseError::InvalidInput { tier, value } => {
                assert_eq!(tier, Tier::Mid);
                assert_eq!(value, -3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_signed_rejects_overflow() {
        let too_many = u32::MAX as i64 + 1;
        assert!(matches!(
            HeadcountInput::from_signed(0, 0, too_many),
            Err(ExpenseError::InvalidInput { tier: Tier::Senior, .. })
        ));
    }

    #[test]
    fn test_total_does_not_overflow() {
        let input = HeadcountInput::new(u32::MAX, u32::MAX, u32::MAX);
        assert_eq!(input.total(), 3 * u32::MAX as u64);
    }

    #[test]
    fn test_count_by_tier() {
        let input = HeadcountInput::new(4, 5, 6);
        let counts: Vec<u32> = Tier::ALL.iter().map(|&t| input.count(t)).collect();
        assert_eq!(counts, vec![4, 5, 6]);
        assert!(HeadcountInput::default().is_empty());
    }
}

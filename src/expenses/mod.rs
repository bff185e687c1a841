//! Current-period expense calculation

mod calculator;
mod snapshot;

pub use calculator::{compute_snapshot, ExpenseCalculator};
pub use snapshot::{CategoryLine, ExpenseCategory, ExpenseSnapshot, SalaryByTier, ScalingPolicy};

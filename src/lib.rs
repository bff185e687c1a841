//! Expense Projection - engineering team cost calculator and growth projector
//!
//! This library provides:
//! - Current-period expense snapshots from junior/mid/senior headcounts
//! - Quarterly projections under yearly inflation and quarterly headcount growth
//! - Rate assumptions with CSV overrides
//! - Batch scenario runs

pub mod error;
pub mod headcount;
pub mod assumptions;
pub mod expenses;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{ExpenseError, Result};
pub use headcount::{HeadcountInput, Tier};
pub use assumptions::{Assumptions, CostModel, GrowthRates};
pub use expenses::{compute_snapshot, ExpenseCalculator, ExpenseSnapshot};
pub use projection::{project_growth, GrowthProjector, ProjectedPeriod, ProjectionConfig, ProjectionResult};
pub use scenario::ScenarioRunner;

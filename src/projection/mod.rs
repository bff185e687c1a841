//! Quarterly growth projection of expense snapshots

mod state;
mod engine;
mod periods;

pub use state::QuarterState;
pub use engine::{project_growth, GrowthProjector, ProjectionConfig, DEFAULT_PROJECTION_YEARS};
pub use periods::{ProjectedPeriod, ProjectionResult, ProjectionSummary, HEADLINE_YEARS};

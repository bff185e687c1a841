//! Headcount inputs and scenario loading

mod data;
pub mod loader;

pub use data::{HeadcountInput, Tier};
pub use loader::{load_scenarios, load_scenarios_from_reader, load_default_scenarios, NamedScenario};

//! Scenario runner for batch calculations
//!
//! Holds one set of assumptions and runs the calculator and projector for many
//! headcount inputs or horizons. Each run starts from its own snapshot, so
//! batches can be evaluated in parallel.

use rayon::prelude::*;

use crate::error::Result;
use crate::expenses::{ExpenseCalculator, ExpenseSnapshot};
use crate::headcount::{HeadcountInput, NamedScenario};
use crate::projection::{GrowthProjector, ProjectionConfig, ProjectionResult};
use crate::Assumptions;

/// Snapshot and projection for one headcount input
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ScenarioOutcome {
    pub snapshot: ExpenseSnapshot,
    pub projection: ProjectionResult,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::from_csv(CostModel::RunRate)?;
///
/// for headcount in inputs {
///     let outcome = runner.run(&headcount, ProjectionConfig::default())?;
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create runner with default run-rate assumptions
    pub fn new() -> Self {
        Self {
            assumptions: Assumptions::default_pricing(),
        }
    }

    /// Create runner by loading assumptions from the default CSV directory
    pub fn from_csv(cost_model: crate::CostModel) -> Result<Self> {
        Ok(Self {
            assumptions: Assumptions::from_csv(cost_model)?,
        })
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Compute a snapshot and project it
    pub fn run(&self, headcount: &HeadcountInput, config: ProjectionConfig) -> Result<ScenarioOutcome> {
        let snapshot = ExpenseCalculator::new(self.assumptions.clone()).compute_snapshot(headcount);
        let projection = GrowthProjector::new(self.assumptions.growth.clone(), config).project(&snapshot)?;
        Ok(ScenarioOutcome { snapshot, projection })
    }

    /// Run many named scenarios in parallel, preserving input order
    pub fn run_batch(
        &self,
        scenarios: &[NamedScenario],
        config: ProjectionConfig,
    ) -> Vec<(String, Result<ScenarioOutcome>)> {
        scenarios
            .par_iter()
            .map(|s| (s.name.clone(), self.run(&s.headcount, config.clone())))
            .collect()
    }

    /// Project one headcount over several horizons
    pub fn run_horizons(&self, headcount: &HeadcountInput, years: &[u32]) -> Result<Vec<ScenarioOutcome>> {
        years
            .iter()
            .map(|&y| self.run(headcount, ProjectionConfig::with_years(y)))
            .collect()
    }

    /// Get reference to assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    /// Get mutable reference to assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpenseError;
    use crate::CostModel;

    fn scenarios() -> Vec<NamedScenario> {
        [("solo", 1, 0, 0), ("empty", 0, 0, 0), ("team", 6, 3, 1)]
            .iter()
            .map(|&(name, j, m, s)| NamedScenario {
                name: name.to_string(),
                headcount: HeadcountInput::new(j, m, s),
            })
            .collect()
    }

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let runner = ScenarioRunner::new();
        let results = runner.run_batch(&scenarios(), ProjectionConfig::default());

        let names: Vec<&str> = results.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["solo", "empty", "team"]);
        assert!(results[0].1.is_ok());
        assert!(matches!(results[1].1, Err(ExpenseError::DegenerateBaseline)));

        // Larger team costs more in every quarter
        let solo = results[0].1.as_ref().unwrap();
        let team = results[2].1.as_ref().unwrap();
        assert!(solo
            .projection
            .periods
            .iter()
            .zip(&team.projection.periods)
            .all(|(a, b)| b.total_expense > a.total_expense));
    }

    #[test]
    fn test_batch_matches_sequential_runs() {
        let runner = ScenarioRunner::with_assumptions(Assumptions::for_model(CostModel::QuarterlySpend));
        let batch = runner.run_batch(&scenarios(), ProjectionConfig::with_years(3));

        for (scenario, (_, outcome)) in scenarios().iter().zip(&batch) {
            match (runner.run(&scenario.headcount, ProjectionConfig::with_years(3)), outcome) {
                (Ok(a), Ok(b)) => assert_eq!(&a, b),
                (Err(_), Err(_)) => {}
                _ => panic!("batch and sequential runs disagree for {}", scenario.name),
            }
        }
    }

    #[test]
    fn test_from_csv_uses_assumption_files() {
        for model in [CostModel::RunRate, CostModel::QuarterlySpend] {
            let runner = ScenarioRunner::from_csv(model).expect("Failed to load assumptions");
            let expected = Assumptions::from_csv(model).unwrap();
            assert_eq!(runner.assumptions(), &expected);
            assert_eq!(runner.assumptions().cost_model, model);
        }
    }

    #[test]
    fn test_run_horizons() {
        let runner = ScenarioRunner::new();
        let outcomes = runner.run_horizons(&HeadcountInput::new(2, 1, 0), &[0, 1, 3]).unwrap();

        let lengths: Vec<usize> = outcomes.iter().map(|o| o.projection.periods.len()).collect();
        assert_eq!(lengths, vec![0, 4, 12]);
        assert!(outcomes.iter().all(|o| o.snapshot.total_expense == 7_028_000.0));
    }

    #[test]
    fn test_custom_growth_applies() {
        let mut runner = ScenarioRunner::new();
        runner.assumptions_mut().growth.quarterly_headcount_growth = 0.0;

        let outcome = runner.run(&HeadcountInput::new(3, 0, 0), ProjectionConfig::with_years(1)).unwrap();
        assert!(outcome.projection.periods.iter().all(|p| p.projected_employees == 3.0));
        assert_eq!(runner.assumptions().cost_model, CostModel::RunRate);
    }
}

//! Run projections for every scenario in a headcount CSV
//!
//! Usage: run_batch [SCENARIOS_CSV] [--quarterly-spend]
//! Defaults to data/scenarios.csv and the run-rate cost model. Writes one row
//! per scenario and quarter to batch_projection_output.csv.

use anyhow::{Context, Result};
use expense_projection::headcount::{load_scenarios, loader::DEFAULT_SCENARIOS_PATH};
use expense_projection::{CostModel, ProjectionConfig, ScenarioRunner};
use serde::Serialize;
use std::env;
use std::time::Instant;

const OUTPUT_PATH: &str = "batch_projection_output.csv";

#[derive(Serialize)]
struct BatchRow<'a> {
    scenario: &'a str,
    quarter: String,
    employees: f64,
    salary: f64,
    office: f64,
    legal: f64,
    accounting: f64,
    onboarding: f64,
    expenses: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let cost_model = if args.iter().any(|a| a == "--quarterly-spend") {
        CostModel::QuarterlySpend
    } else {
        CostModel::RunRate
    };
    let path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(String::as_str)
        .unwrap_or(DEFAULT_SCENARIOS_PATH);

    let start = Instant::now();
    println!("Loading scenarios from {}...", path);
    let scenarios = load_scenarios(path).with_context(|| format!("Failed to load {}", path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let runner = ScenarioRunner::from_csv(cost_model).context("Failed to load assumptions")?;
    let proj_start = Instant::now();
    let results = runner.run_batch(&scenarios, ProjectionConfig::default());
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = csv::Writer::from_path(OUTPUT_PATH)
        .with_context(|| format!("Failed to create {}", OUTPUT_PATH))?;

    println!("\nBatch Summary ({}):", cost_model);
    for (name, outcome) in &results {
        let outcome = match outcome {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("Skipping scenario '{}': {}", name, e);
                continue;
            }
        };

        for period in &outcome.projection.periods {
            writer.serialize(BatchRow {
                scenario: name,
                quarter: period.label(),
                employees: period.projected_employees,
                salary: period.salary,
                office: period.office,
                legal: period.legal,
                accounting: period.accounting,
                onboarding: period.onboarding,
                expenses: period.total_expense,
            })?;
        }

        let summary = outcome.projection.summary();
        println!(
            "  {:<16} engineers={:>4}  current={:>16.0}  headline={:>18.0}",
            name, outcome.snapshot.total_employees, outcome.snapshot.total_expense, summary.headline_total
        );
    }

    writer.flush()?;
    println!("\nOutput written to {}", OUTPUT_PATH);
    println!("Total time: {:?}", start.elapsed());
    Ok(())
}

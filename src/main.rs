//! Engineering Expense Calculator CLI
//!
//! Computes current expenses for a team and projects them quarterly.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

use expense_projection::expenses::ExpenseCategory;
use expense_projection::projection::{ProjectionSummary, DEFAULT_PROJECTION_YEARS};
use expense_projection::{
    Assumptions, CostModel, ExpenseCalculator, ExpenseSnapshot, GrowthProjector, GrowthRates,
    HeadcountInput, ProjectedPeriod, ProjectionConfig,
};

/// One crore in base currency units
const CRORE: f64 = 10_000_000.0;

#[derive(Parser, Debug)]
#[command(name = "expense-calc", version, about = "Engineering team expense calculator")]
struct Args {
    /// Junior engineers
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    junior: i64,

    /// Mid-level engineers
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    mid: i64,

    /// Senior engineers
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    senior: i64,

    /// Projection horizon in years
    #[arg(long, default_value_t = DEFAULT_PROJECTION_YEARS)]
    years: u32,

    /// Cost model: run-rate or quarterly-spend
    #[arg(long, default_value = "run-rate")]
    model: CostModel,

    /// Directory with rate override CSV files
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Write per-quarter projection to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the full report as JSON instead of the console summary
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    generated_at: DateTime<Utc>,
    headcount: HeadcountInput,
    snapshot: &'a ExpenseSnapshot,
    summary: Option<ProjectionSummary>,
    periods: &'a [ProjectedPeriod],
}

/// Flat CSV row for one projected quarter
#[derive(Serialize)]
struct PeriodRow<'a> {
    quarter: &'a str,
    employees: f64,
    salary: f64,
    office: f64,
    legal: f64,
    accounting: f64,
    onboarding: f64,
    expenses: f64,
}

fn crores(value: f64) -> String {
    format!("₹{:.1}Cr", value / CRORE)
}

fn write_periods_csv(path: &Path, periods: &[ProjectedPeriod]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    for period in periods {
        let label = period.label();
        writer.serialize(PeriodRow {
            quarter: &label,
            employees: period.projected_employees,
            salary: period.salary,
            office: period.office,
            legal: period.legal,
            accounting: period.accounting,
            onboarding: period.onboarding,
            expenses: period.total_expense,
        })?;
    }

    writer.flush()?;
    Ok(())
}

fn print_console(snapshot: &ExpenseSnapshot, summary: Option<&ProjectionSummary>, model: CostModel, growth: &GrowthRates) {
    println!("Engineering Expense Calculator ({})", model);
    println!("======================================\n");

    println!("Current Expenses ({} engineers):", snapshot.total_employees);
    for (label, value) in snapshot.breakdown() {
        println!("  {:<18} {:>16.2}", label, value);
    }
    println!("  {:<18} {:>16.2}", "Total", snapshot.total_expense);

    let Some(summary) = summary else {
        println!("\nAdd at least one engineer to see growth projections.");
        return;
    };

    println!("\nProjected Annual Totals:");
    for (year, total) in summary.year_end_totals.iter().enumerate().take(3) {
        let delta = match summary.team_growth_pct.get(year) {
            Some(pct) if year < 2 => format!("+{:.0}% Team Size", pct),
            _ => format!("+{:.0}% Inflation", growth.annual_inflation * 100.0),
        };
        println!("  Year {} Total: {:>10}  ({})", year + 1, crores(*total), delta);
    }
    println!("  {}-Year Total: {:>9}", summary.year_end_totals.len().min(3), crores(summary.headline_total));
    println!("  Final headcount: {:.1}", summary.final_employees);
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let headcount = HeadcountInput::from_signed(args.junior, args.mid, args.senior)?;

    let assumptions = match &args.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir, args.model)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::for_model(args.model),
    };
    log::info!("Calculating expenses for {} engineers", headcount.total());

    let snapshot = ExpenseCalculator::new(assumptions.clone()).compute_snapshot(&headcount);

    // Projection needs a non-zero baseline
    let projection = if headcount.is_empty() {
        log::warn!("Zero headcount, skipping projection");
        None
    } else {
        let projector = GrowthProjector::new(assumptions.growth.clone(), ProjectionConfig::with_years(args.years));
        Some(projector.project(&snapshot)?)
    };

    let periods = projection.as_ref().map(|p| p.periods.as_slice()).unwrap_or(&[]);
    let summary = projection.as_ref().map(|p| p.summary());

    if let Some(path) = &args.csv {
        write_periods_csv(path, periods)?;
        log::info!("Wrote {} quarters to {}", periods.len(), path.display());
    }

    if args.json {
        let report = Report {
            generated_at: Utc::now(),
            headcount,
            snapshot: &snapshot,
            summary,
            periods,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_console(&snapshot, summary.as_ref(), args.model, &assumptions.growth);
        if let Some(result) = &projection {
            let salary = result.category_series(ExpenseCategory::Salary);
            if let (Some(first), Some(last)) = (salary.first(), salary.last()) {
                println!("  Salary run from {} to {}", crores(*first), crores(*last));
            }
        }
    }

    Ok(())
}

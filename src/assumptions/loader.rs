//! CSV-based assumption loader
//!
//! Loads rate overrides from CSV files in data/assumptions/. Each file is a
//! two-column key/rate table; keys not present keep the cost model's default.

use std::fs::File;
use std::path::Path;

use crate::error::{ExpenseError, Result};
use crate::headcount::Tier;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

pub const SALARY_RATES_FILE: &str = "salary_rates.csv";
pub const OVERHEAD_RATES_FILE: &str = "overhead_rates.csv";
pub const GROWTH_RATES_FILE: &str = "growth_rates.csv";

/// Load a two-column key/rate table
///
/// Returns an empty table when the file does not exist.
pub fn load_rate_table(path: &Path, file_name: &str) -> Result<Vec<(String, f64)>> {
    let full_path = path.join(file_name);
    if !full_path.exists() {
        log::warn!("Assumption file {} not found, using defaults", full_path.display());
        return Ok(Vec::new());
    }

    let file = File::open(&full_path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let key = record
            .get(0)
            .map(|k| k.trim().to_string())
            .unwrap_or_default();
        let raw = record.get(1).unwrap_or("").trim();
        let rate: f64 = raw.parse().map_err(|_| ExpenseError::Parse {
            source_name: file_name.to_string(),
            message: format!("rate '{}' for '{}' is not a number", raw, key),
        })?;
        rows.push((key, rate));
    }

    Ok(rows)
}

/// Load salary rates keyed by tier name
pub fn load_salary_rates(path: &Path) -> Result<Vec<(Tier, f64)>> {
    load_rate_table(path, SALARY_RATES_FILE)?
        .into_iter()
        .map(|(key, rate)| {
            let tier = Tier::ALL
                .into_iter()
                .find(|t| t.as_str().eq_ignore_ascii_case(&key))
                .ok_or_else(|| ExpenseError::InvalidAssumption {
                    key: key.clone(),
                    message: "unknown tier".to_string(),
                })?;
            Ok((tier, rate))
        })
        .collect()
}

/// All rate overrides read from an assumptions directory
#[derive(Debug, Default)]
pub struct LoadedAssumptions {
    pub salary_rates: Vec<(Tier, f64)>,
    pub overhead_rates: Vec<(String, f64)>,
    pub growth_rates: Vec<(String, f64)>,
}

impl LoadedAssumptions {
    /// Load all overrides from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load all overrides from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(Self {
            salary_rates: load_salary_rates(path)?,
            overhead_rates: load_rate_table(path, OVERHEAD_RATES_FILE)?,
            growth_rates: load_rate_table(path, GROWTH_RATES_FILE)?,
        })
    }
}

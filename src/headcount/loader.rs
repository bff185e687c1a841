//! Load named headcount scenarios from CSV
//!
//! Expected columns: `name,junior,mid,senior`. Counts are read as signed
//! integers so that negative entries are reported rather than failing to parse.

use super::HeadcountInput;
use crate::error::{ExpenseError, Result};
use csv::Reader;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default scenarios file used by the batch runner
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// A headcount input with a caller-supplied label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub headcount: HeadcountInput,
}

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    junior: i64,
    mid: i64,
    senior: i64,
}

impl CsvRow {
    fn to_scenario(self) -> Result<NamedScenario> {
        let headcount = HeadcountInput::from_signed(self.junior, self.mid, self.senior)
            .map_err(|e| ExpenseError::Parse {
                source_name: format!("scenario '{}'", self.name),
                message: e.to_string(),
            })?;

        Ok(NamedScenario {
            name: self.name,
            headcount,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, stdin)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut scenarios = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        scenarios.push(row.to_scenario()?);
    }

    log::debug!("Loaded {} headcount scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from the default location
pub fn load_default_scenarios() -> Result<Vec<NamedScenario>> {
    load_scenarios(DEFAULT_SCENARIOS_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_reader() {
        let data = "name,junior,mid,senior\nseed,2,1,0\nseries_a,10,6,2\n";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "seed");
        assert_eq!(scenarios[0].headcount, HeadcountInput::new(2, 1, 0));
        assert_eq!(scenarios[1].headcount.total(), 18);
    }

    #[test]
    fn test_negative_count_names_scenario() {
        let data = "name,junior,mid,senior\nbroken,1,-1,0\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("broken"), "{message}");
        assert!(message.contains("Mid"), "{message}");
    }

    #[test]
    fn test_non_numeric_count_is_csv_error() {
        let data = "name,junior,mid,senior\nbad,one,0,0\n";
        assert!(matches!(
            load_scenarios_from_reader(data.as_bytes()),
            Err(ExpenseError::Csv(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,junior,mid,senior").unwrap();
        writeln!(file, "solo,1,0,0").unwrap();

        let scenarios = load_scenarios(file.path()).unwrap();
        assert_eq!(scenarios.len(), 1);
        assert_eq!(scenarios[0].headcount, HeadcountInput::new(1, 0, 0));
    }

    #[test]
    fn test_load_default_scenarios() {
        let scenarios = load_default_scenarios().expect("Failed to load scenarios");
        assert!(!scenarios.is_empty());
        assert!(scenarios.iter().all(|s| !s.headcount.is_empty()));
    }
}

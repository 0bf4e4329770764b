//! Reference market indicators feeding the projections
//!
//! Loads `market_rates.csv` from the data directory (default `data/`).
//! The file is a two-column `key,value` table; keys that are absent keep
//! their built-in default.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, FinanceError, Result};

/// Default path to the data directory
pub const DEFAULT_DATA_PATH: &str = "data";

/// File name of the market rate table inside the data directory
pub const MARKET_RATES_FILE: &str = "market_rates.csv";

/// Annual benchmark (interbank) rate, percent
pub const DEFAULT_REFERENCE_RATE: f64 = 11.15;

/// Annual inflation expectation, percent
pub const DEFAULT_INFLATION_RATE: f64 = 4.5;

/// Annual yield of the savings-account comparison series, percent
pub const DEFAULT_SAVINGS_RATE: f64 = 6.17;

/// Market indicators, all annual percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketRates {
    /// Benchmark rate used for risk profiles and product comparison
    pub reference_rate: f64,
    pub inflation_rate: f64,
    /// Low-yield rate used for the benchmark projection series
    pub savings_rate: f64,
}

impl MarketRates {
    pub fn default_reference() -> Self {
        Self {
            reference_rate: DEFAULT_REFERENCE_RATE,
            inflation_rate: DEFAULT_INFLATION_RATE,
            savings_rate: DEFAULT_SAVINGS_RATE,
        }
    }

    /// Load from `market_rates.csv` in the default data directory
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(DEFAULT_DATA_PATH))
    }

    /// Load from `market_rates.csv` in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let file = File::open(path.join(MARKET_RATES_FILE))?;
        let rates = Self::from_reader(file)?;
        info!(
            "Loaded market rates from {}: reference {:.2}%, inflation {:.2}%, savings {:.2}%",
            path.display(),
            rates.reference_rate,
            rates.inflation_rate,
            rates.savings_rate
        );
        Ok(rates)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rates = Self::default_reference();
        let mut reader = csv::Reader::from_reader(reader);

        for result in reader.records() {
            let record = result?;
            let key = record.get(0).unwrap_or("").trim();
            let raw = record.get(1).unwrap_or("").trim();
            let value: f64 = raw
                .parse()
                .map_err(|_| FinanceError::invalid("market_rates", format!("{} has non-numeric value '{}'", key, raw)))?;

            match key {
                "reference_rate" => rates.reference_rate = value,
                "inflation_rate" => rates.inflation_rate = value,
                "savings_rate" => rates.savings_rate = value,
                other => warn!("Ignoring unknown market rate key: {}", other),
            }
        }

        rates.validate()?;
        Ok(rates)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("reference_rate", self.reference_rate)?;
        ensure_non_negative("inflation_rate", self.inflation_rate)?;
        ensure_non_negative("savings_rate", self.savings_rate)?;
        Ok(())
    }
}

impl Default for MarketRates {
    fn default() -> Self {
        Self::default_reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_overrides_defaults() {
        let data = "key,value\nreference_rate,10.65\ninflation_rate,3.9\n";
        let rates = MarketRates::from_reader(data.as_bytes()).unwrap();

        assert_eq!(rates.reference_rate, 10.65);
        assert_eq!(rates.inflation_rate, 3.9);
        assert_eq!(rates.savings_rate, DEFAULT_SAVINGS_RATE);
    }

    #[test]
    fn test_unknown_keys_are_skipped() {
        let data = "key,value\nselic,10.5\nsavings_rate,6.0\n";
        let rates = MarketRates::from_reader(data.as_bytes()).unwrap();
        assert_eq!(rates.savings_rate, 6.0);
        assert_eq!(rates.reference_rate, DEFAULT_REFERENCE_RATE);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(MarketRates::from_reader("key,value\ninflation_rate,abc\n".as_bytes()).is_err());
        assert!(MarketRates::from_reader("key,value\nreference_rate,-1\n".as_bytes()).is_err());
    }
}

//! Investment product catalog entries

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, FinanceError, Result};

/// How a product's annual return is determined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateRule {
    /// Pre-set annual rate, percent
    Fixed(f64),
    /// Market-linked annual rate, percent (computed like `Fixed`)
    Variable(f64),
    /// Percentage of the benchmark rate (110 = 110% of the benchmark)
    BenchmarkIndexed(f64),
}

impl RateRule {
    /// Build from a catalog rule name and its numeric parameter
    pub fn parse(kind: &str, value: f64) -> Result<Self> {
        let rule = match kind.trim().to_ascii_uppercase().as_str() {
            "FIXED" => RateRule::Fixed(value),
            "VARIABLE" => RateRule::Variable(value),
            "BENCHMARK_INDEXED" => RateRule::BenchmarkIndexed(value),
            _ => {
                return Err(FinanceError::invalid(
                    "rate_rule",
                    format!("unrecognized rate rule '{}'", kind),
                ))
            }
        };
        rule.validate()?;
        Ok(rule)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RateRule::Fixed(_) => "FIXED",
            RateRule::Variable(_) => "VARIABLE",
            RateRule::BenchmarkIndexed(_) => "BENCHMARK_INDEXED",
        }
    }

    pub fn value(&self) -> f64 {
        match *self {
            RateRule::Fixed(v) | RateRule::Variable(v) | RateRule::BenchmarkIndexed(v) => v,
        }
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("rate_rule", self.value())
    }

    /// Effective annual rate as a decimal, compounded once a year
    pub fn effective_annual_rate(&self, benchmark_annual_rate_percent: f64) -> f64 {
        match *self {
            RateRule::Fixed(rate) | RateRule::Variable(rate) => rate / 100.0,
            RateRule::BenchmarkIndexed(multiplier) => (multiplier / 100.0) * (benchmark_annual_rate_percent / 100.0),
        }
    }
}

impl fmt::Display for RateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateRule::Fixed(rate) => write!(f, "{}% a.a.", rate),
            RateRule::Variable(rate) => write!(f, "~{}% a.a.", rate),
            RateRule::BenchmarkIndexed(multiplier) => write!(f, "{}% of benchmark", multiplier),
        }
    }
}

/// Risk band shown next to a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::Low => "Low",
            RiskLabel::Medium => "Medium",
            RiskLabel::High => "High",
        }
    }
}

impl FromStr for RiskLabel {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(RiskLabel::Low),
            "medium" => Ok(RiskLabel::Medium),
            "high" => Ok(RiskLabel::High),
            other => Err(FinanceError::invalid("risk_label", format!("unknown risk label '{}'", other))),
        }
    }
}

/// Immutable product description from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProduct {
    pub id: String,
    pub name: String,
    pub rate_rule: RateRule,
    pub is_tax_exempt: bool,
    pub risk_label: RiskLabel,
}

impl InvestmentProduct {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rate_rule: RateRule,
        is_tax_exempt: bool,
        risk_label: RiskLabel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rate_rule,
            is_tax_exempt,
            risk_label,
        }
    }
}

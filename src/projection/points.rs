//! Projection output structures

use serde::{Deserialize, Serialize};

/// Snapshot of a projection at the start of a year, rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Years of compounding already applied (0 = initial state)
    pub year_index: u32,

    /// Initial amount plus all contributions made so far
    pub invested_principal: f64,

    /// Balance compounded at the projection rate
    pub compounded_total: f64,

    /// Balance compounded at the benchmark (savings) rate
    pub benchmark_total: f64,
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSeries {
    /// Annual nominal rate used for the main series, percent
    pub annual_rate_percent: f64,

    /// Annual nominal rate used for the benchmark series, percent
    pub benchmark_rate_percent: f64,

    /// Whether figures are expressed in today's purchasing power
    pub inflation_adjusted: bool,

    /// One point per year, `years + 1` in total
    pub points: Vec<ProjectionPoint>,
}

impl ProjectionSeries {
    pub fn new(annual_rate_percent: f64, benchmark_rate_percent: f64, inflation_adjusted: bool) -> Self {
        Self {
            annual_rate_percent,
            benchmark_rate_percent,
            inflation_adjusted,
            points: Vec::new(),
        }
    }

    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Point for the final year of the horizon
    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last().copied().unwrap_or(ProjectionPoint {
            year_index: 0,
            invested_principal: 0.0,
            compounded_total: 0.0,
            benchmark_total: 0.0,
        });

        ProjectionSummary {
            years: last.year_index,
            final_invested: last.invested_principal,
            final_total: last.compounded_total,
            interest_earned: last.compounded_total - last.invested_principal,
            final_benchmark: last.benchmark_total,
            advantage_over_benchmark: last.compounded_total - last.benchmark_total,
        }
    }
}

/// Headline figures shown on the investment dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_invested: f64,
    pub final_total: f64,
    pub interest_earned: f64,
    pub final_benchmark: f64,
    pub advantage_over_benchmark: f64,
}

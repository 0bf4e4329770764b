//! Compound growth projection with a savings benchmark series

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_horizon, ensure_non_negative, FinanceError, Result};
use crate::rates::market::DEFAULT_SAVINGS_RATE;
use super::points::{ProjectionPoint, ProjectionSeries};
use super::state::{monthly_rate, ProjectionState};

/// Inputs to a projection run, as entered in the planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionParams {
    pub initial_amount: f64,
    pub monthly_contribution: f64,

    /// Annual nominal rate, percent
    pub annual_rate_percent: f64,

    /// Horizon; the series holds `years + 1` points
    pub years: u32,

    /// Express every figure in today's purchasing power
    pub apply_inflation_deflation: bool,

    /// Annual inflation, percent (only read when deflating)
    pub inflation_rate_percent: f64,
}

impl ProjectionParams {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("initial_amount", self.initial_amount)?;
        ensure_non_negative("monthly_contribution", self.monthly_contribution)?;
        ensure_non_negative("annual_rate_percent", self.annual_rate_percent)?;
        ensure_non_negative("inflation_rate_percent", self.inflation_rate_percent)?;
        ensure_horizon("years", self.years)?;
        Ok(())
    }

    pub fn invested_principal(&self, year_index: u32) -> f64 {
        self.initial_amount + self.monthly_contribution * 12.0 * year_index as f64
    }

    /// Divisor that converts a nominal value at `year_index` to today's money
    pub fn deflator(&self, year_index: u32) -> f64 {
        if !self.apply_inflation_deflation {
            return 1.0;
        }
        let months = i32::try_from(u64::from(year_index) * 12).unwrap_or(i32::MAX);
        (1.0 + monthly_rate(self.inflation_rate_percent)).powi(months)
    }
}

/// Configuration shared by every projection run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Annual rate of the comparison series, percent
    pub benchmark_rate_percent: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            benchmark_rate_percent: DEFAULT_SAVINGS_RATE,
        }
    }
}

/// Projects a contribution plan year by year alongside the benchmark series
#[derive(Debug, Clone, Default)]
pub struct CompoundProjector {
    config: ProjectionConfig,
}

impl CompoundProjector {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the projection
    ///
    /// Each point is emitted before that year's twelve compounding steps, so
    /// point `i` reflects `i` full years of growth. Rounding happens only here.
    pub fn project(&self, params: &ProjectionParams) -> Result<ProjectionSeries> {
        params.validate()?;
        ensure_non_negative("benchmark_rate_percent", self.config.benchmark_rate_percent)?;

        let mut series = ProjectionSeries::new(
            params.annual_rate_percent,
            self.config.benchmark_rate_percent,
            params.apply_inflation_deflation,
        );
        let mut state = ProjectionState::new(
            params.initial_amount,
            params.monthly_contribution,
            params.annual_rate_percent,
        );
        let mut benchmark = ProjectionState::new(
            params.initial_amount,
            params.monthly_contribution,
            self.config.benchmark_rate_percent,
        );

        for year_index in 0..=params.years {
            let deflator = params.deflator(year_index);
            let point = ProjectionPoint {
                year_index,
                invested_principal: (params.invested_principal(year_index) / deflator).round(),
                compounded_total: (state.balance / deflator).round(),
                benchmark_total: (benchmark.balance / deflator).round(),
            };

            if !(point.invested_principal.is_finite()
                && point.compounded_total.is_finite()
                && point.benchmark_total.is_finite())
            {
                return Err(FinanceError::invalid(
                    "years",
                    format!("balance overflows at year {} of {}", year_index, params.years),
                ));
            }

            series.add_point(point);

            state.advance_year();
            benchmark.advance_year();
        }

        debug!(
            "Projected {} years at {:.2}% (benchmark {:.2}%): final {:?}",
            params.years,
            params.annual_rate_percent,
            self.config.benchmark_rate_percent,
            series.last().map(|p| p.compounded_total)
        );

        Ok(series)
    }
}

/// Same recurrence as [`CompoundProjector`] pinned to a fixed low-yield rate
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkProjector {
    annual_rate_percent: f64,
}

impl BenchmarkProjector {
    pub fn new(annual_rate_percent: f64) -> Self {
        Self { annual_rate_percent }
    }

    /// Savings-account equivalent
    pub fn savings() -> Self {
        Self::new(DEFAULT_SAVINGS_RATE)
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    /// Project a plan at the benchmark rate; `compounded_total` and
    /// `benchmark_total` carry the same figure
    ///
    /// The plan's own `annual_rate_percent` is ignored.
    pub fn project(&self, params: &ProjectionParams) -> Result<Vec<ProjectionPoint>> {
        let params = ProjectionParams {
            annual_rate_percent: self.annual_rate_percent,
            ..*params
        };
        let projector = CompoundProjector::new(ProjectionConfig {
            benchmark_rate_percent: self.annual_rate_percent,
        });
        Ok(projector.project(&params)?.points)
    }
}

impl Default for BenchmarkProjector {
    fn default() -> Self {
        Self::savings()
    }
}

/// Year-by-year projection against the default savings benchmark
pub fn project(
    initial_amount: f64,
    monthly_contribution: f64,
    annual_rate_percent: f64,
    years: u32,
    apply_inflation_deflation: bool,
    inflation_rate_percent: f64,
) -> Result<Vec<ProjectionPoint>> {
    let params = ProjectionParams {
        initial_amount,
        monthly_contribution,
        annual_rate_percent,
        years,
        apply_inflation_deflation,
        inflation_rate_percent,
    };
    Ok(CompoundProjector::default().project(&params)?.points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MAX_HORIZON_YEARS;

    fn params(initial: f64, contribution: f64, rate: f64, years: u32) -> ProjectionParams {
        ProjectionParams {
            initial_amount: initial,
            monthly_contribution: contribution,
            annual_rate_percent: rate,
            years,
            apply_inflation_deflation: false,
            inflation_rate_percent: 0.0,
        }
    }

    #[test]
    fn test_zero_horizon_identity() {
        let points = project(2500.0, 300.0, 10.0, 0, false, 0.0).unwrap();

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].year_index, 0);
        assert_eq!(points[0].compounded_total, 2500.0);
        assert_eq!(points[0].invested_principal, 2500.0);
    }

    #[test]
    fn test_five_year_scenario() {
        let points = project(1000.0, 500.0, 12.5, 5, false, 0.0).unwrap();
        assert_eq!(points.len(), 6);

        let mut balance = 1000.0_f64;
        for _ in 0..60 {
            balance = (balance + 500.0) * (1.0 + 12.5 / 100.0 / 12.0);
        }

        let last = points[5];
        assert_eq!(last.year_index, 5);
        assert_eq!(last.invested_principal, 31000.0);
        assert_eq!(last.compounded_total, balance.round());
        assert_eq!(last.compounded_total, 43680.0);
    }

    #[test]
    fn test_monotone_and_above_principal() {
        for &(initial, contribution, rate) in &[
            (0.0, 0.0, 0.0),
            (1000.0, 0.0, 8.0),
            (0.0, 250.0, 3.5),
            (50_000.0, 1_200.0, 15.0),
        ] {
            let points = project(initial, contribution, rate, 30, false, 0.0).unwrap();
            for pair in points.windows(2) {
                assert!(pair[1].compounded_total >= pair[0].compounded_total);
            }
            for point in &points {
                assert!(point.compounded_total >= point.invested_principal);
            }
        }
    }

    #[test]
    fn test_deflated_series_stays_above_principal() {
        for &(rate, inflation) in &[(10.0, 4.5), (3.0, 9.0), (0.0, 6.0), (15.0, 0.0)] {
            let points = project(5000.0, 400.0, rate, 40, true, inflation).unwrap();
            assert_eq!(points.len(), 41);
            for point in &points {
                assert!(point.compounded_total >= point.invested_principal, "{:?}", point);
                assert!(point.benchmark_total >= 0.0);
            }
        }
    }

    #[test]
    fn test_overflowing_horizon_rejected() {
        // balance reaches infinity long before the deflator does
        let err = project(1000.0, 500.0, 12.5, 6000, true, 4.5).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { parameter: "years", .. }));

        assert!(project(1000.0, 500.0, 12.5, 6000, false, 0.0).is_err());
        assert!(project(0.0, 0.0, 0.0, MAX_HORIZON_YEARS + 1, false, 0.0).is_err());
    }

    #[test]
    fn test_deflator_saturates_instead_of_wrapping() {
        let mut p = params(0.0, 0.0, 0.0, 0);
        p.apply_inflation_deflation = true;
        p.inflation_rate_percent = 5.0;

        assert!(p.deflator(u32::MAX) >= p.deflator(1_000));
        assert!(p.deflator(u32::MAX) >= 1.0);
    }

    #[test]
    fn test_no_contribution_is_pure_compounding() {
        let points = project(1000.0, 0.0, 12.0, 2, false, 0.0).unwrap();
        let expected = 1000.0 * 1.01_f64.powi(24);

        assert_eq!(points[2].compounded_total, expected.round());
        assert_eq!(points[2].invested_principal, 1000.0);
    }

    #[test]
    fn test_inflation_deflates_every_figure() {
        let mut p = params(1000.0, 100.0, 10.0, 3);
        let nominal = CompoundProjector::default().project(&p).unwrap();
        p.apply_inflation_deflation = true;
        p.inflation_rate_percent = 6.0;
        let real = CompoundProjector::default().project(&p).unwrap();

        assert_eq!(real.points[0], nominal.points[0]);

        let deflator = (1.0 + 0.06 / 12.0_f64).powi(36);
        let mut balance = 1000.0_f64;
        for _ in 0..36 {
            balance = (balance + 100.0) * (1.0 + 0.10 / 12.0);
        }
        assert_eq!(real.points[3].compounded_total, (balance / deflator).round());
        assert_eq!(real.points[3].invested_principal, (4600.0 / deflator).round());
        assert!(real.points[3].benchmark_total < nominal.points[3].benchmark_total);
    }

    #[test]
    fn test_benchmark_series_uses_its_own_rate() {
        let projector = CompoundProjector::new(ProjectionConfig {
            benchmark_rate_percent: 6.0,
        });
        let series = projector.project(&params(1000.0, 0.0, 12.0, 1)).unwrap();

        assert_eq!(series.points[1].benchmark_total, (1000.0 * 1.005_f64.powi(12)).round());
        assert!(series.points[1].compounded_total > series.points[1].benchmark_total);
    }

    #[test]
    fn test_benchmark_projector_matches_compound_at_same_rate() {
        let plan = params(2000.0, 150.0, 99.0, 4);
        let bench = BenchmarkProjector::new(6.17).project(&plan).unwrap();
        let direct = project(2000.0, 150.0, 6.17, 4, false, 0.0).unwrap();

        for (b, d) in bench.iter().zip(direct.iter()) {
            assert_eq!(b.compounded_total, d.compounded_total);
            assert_eq!(b.benchmark_total, b.compounded_total);
        }
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let err = project(-1.0, 0.0, 5.0, 1, false, 0.0).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { parameter: "initial_amount", .. }));

        assert!(project(0.0, -10.0, 5.0, 1, false, 0.0).is_err());
        assert!(project(0.0, 10.0, -5.0, 1, false, 0.0).is_err());
        assert!(project(0.0, 10.0, 5.0, 1, true, -2.0).is_err());
        assert!(project(0.0, 10.0, f64::NAN, 1, false, 0.0).is_err());
    }
}

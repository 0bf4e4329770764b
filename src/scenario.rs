//! Planner runs against pre-loaded market rates and product catalog
//!
//! Loads the rate feed and catalog once, then evaluates any number of
//! plans without re-reading the CSV files.

use std::path::Path;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::products::{ProductCatalog, ProductEvaluator, RankedProduct};
use crate::projection::{
    required_monthly_contribution, CompoundProjector, ProjectionConfig, ProjectionParams, ProjectionSeries,
    ProjectionSummary,
};
use crate::rates::{resolve_annual_rate, MarketRates, RateProfile};

/// Parameters entered in the investment planner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    pub profile: RateProfile,
    pub initial_amount: f64,
    pub monthly_contribution: f64,
    pub years: u32,

    /// Target amount; when set the required contribution is solved
    pub goal_amount: Option<f64>,

    /// Show figures in today's purchasing power
    pub adjust_for_inflation: bool,
}

/// Goal section of a plan outcome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalOutcome {
    pub target_amount: f64,
    pub required_monthly_contribution: f64,
    /// Current contribution already covers the requirement
    pub on_track: bool,
}

/// Everything the planner panel displays for one plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub annual_rate_percent: f64,
    pub series: ProjectionSeries,
    pub summary: ProjectionSummary,
    pub goal: Option<GoalOutcome>,
}

/// Pre-loaded runner for planner and comparator calculations
///
/// # Example
/// ```ignore
/// let runner = SimulationRunner::from_csv()?;
/// let outcome = runner.run(&plan)?;
/// let ranking = runner.compare_products(1000.0, 5)?;
/// ```
#[derive(Debug, Clone)]
pub struct SimulationRunner {
    market: MarketRates,
    catalog: ProductCatalog,
    evaluator: ProductEvaluator,
}

impl SimulationRunner {
    /// Create runner with built-in rates and catalog
    pub fn new() -> Self {
        Self::with_inputs(MarketRates::default_reference(), ProductCatalog::default_catalog())
    }

    /// Create runner by loading rates and catalog from the default data directory
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_inputs(MarketRates::from_csv()?, ProductCatalog::from_csv()?))
    }

    /// Create runner from a specific data directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        Ok(Self::with_inputs(
            MarketRates::from_csv_path(path)?,
            ProductCatalog::from_csv_path(path)?,
        ))
    }

    pub fn with_inputs(market: MarketRates, catalog: ProductCatalog) -> Self {
        Self {
            market,
            catalog,
            evaluator: ProductEvaluator::default(),
        }
    }

    pub fn with_evaluator(mut self, evaluator: ProductEvaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Project a plan and, when it has a goal, solve the contribution for it
    pub fn run(&self, plan: &InvestmentPlan) -> Result<PlanOutcome> {
        let annual_rate_percent = resolve_annual_rate(plan.profile, self.market.reference_rate)?;

        let projector = CompoundProjector::new(ProjectionConfig {
            benchmark_rate_percent: self.market.savings_rate,
        });
        let series = projector.project(&ProjectionParams {
            initial_amount: plan.initial_amount,
            monthly_contribution: plan.monthly_contribution,
            annual_rate_percent,
            years: plan.years,
            apply_inflation_deflation: plan.adjust_for_inflation,
            inflation_rate_percent: self.market.inflation_rate,
        })?;

        let goal = match plan.goal_amount {
            Some(target_amount) => {
                let required = required_monthly_contribution(target_amount, plan.years, annual_rate_percent)?;
                Some(GoalOutcome {
                    target_amount,
                    required_monthly_contribution: required,
                    on_track: plan.monthly_contribution >= required,
                })
            }
            None => None,
        };

        Ok(PlanOutcome {
            annual_rate_percent,
            summary: series.summary(),
            series,
            goal,
        })
    }

    /// Run many plans in parallel
    pub fn run_batch(&self, plans: &[InvestmentPlan]) -> Vec<Result<PlanOutcome>> {
        plans.par_iter().map(|plan| self.run(plan)).collect()
    }

    /// Rank the whole catalog for a principal held `years` against the reference rate
    pub fn compare_products(&self, principal: f64, years: u32) -> Result<Vec<RankedProduct>> {
        self.evaluator
            .rank(self.catalog.products(), self.market.reference_rate, principal, years)
    }

    pub fn market(&self) -> &MarketRates {
        &self.market
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }
}

impl Default for SimulationRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plan(profile: RateProfile) -> InvestmentPlan {
        InvestmentPlan {
            profile,
            initial_amount: 1000.0,
            monthly_contribution: 500.0,
            years: 10,
            goal_amount: Some(100_000.0),
            adjust_for_inflation: false,
        }
    }

    #[test]
    fn test_bolder_profile_grows_more() {
        let runner = SimulationRunner::new();
        let plans: Vec<_> = RateProfile::ALL.iter().map(|&p| test_plan(p)).collect();

        let results: Vec<_> = runner
            .run_batch(&plans)
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[1].summary.final_total > results[0].summary.final_total);
        assert!(results[2].summary.final_total > results[1].summary.final_total);
        assert_eq!(results[0].annual_rate_percent, runner.market().reference_rate);
    }

    #[test]
    fn test_plan_beats_savings_benchmark() {
        let outcome = SimulationRunner::new().run(&test_plan(RateProfile::Moderate)).unwrap();

        assert_eq!(outcome.series.points.len(), 11);
        assert_eq!(outcome.summary.final_invested, 61_000.0);
        assert!(outcome.summary.advantage_over_benchmark > 0.0);
    }

    #[test]
    fn test_goal_outcome() {
        let outcome = SimulationRunner::new().run(&test_plan(RateProfile::Safe)).unwrap();
        let goal = outcome.goal.unwrap();

        let expected = required_monthly_contribution(100_000.0, 10, outcome.annual_rate_percent).unwrap();
        assert_eq!(goal.required_monthly_contribution, expected);
        assert!(goal.on_track);

        let mut plan = test_plan(RateProfile::Safe);
        plan.goal_amount = Some(1_000_000.0);
        assert!(!SimulationRunner::new().run(&plan).unwrap().goal.unwrap().on_track);
    }

    #[test]
    fn test_inflation_adjusted_plan_is_smaller() {
        let runner = SimulationRunner::new();
        let mut plan = test_plan(RateProfile::Bold);
        let nominal = runner.run(&plan).unwrap();
        plan.adjust_for_inflation = true;
        let real = runner.run(&plan).unwrap();

        assert!(real.series.inflation_adjusted);
        assert!(real.summary.final_total < nominal.summary.final_total);
    }

    #[test]
    fn test_compare_products_sorted() {
        let ranking = SimulationRunner::new().compare_products(10_000.0, 5).unwrap();

        assert_eq!(ranking.len(), ProductCatalog::default_catalog().len());
        for pair in ranking.windows(2) {
            assert!(
                pair[0].evaluation.equivalent_benchmark_percent >= pair[1].evaluation.equivalent_benchmark_percent
            );
        }
    }

    #[test]
    fn test_invalid_plan_propagates() {
        let mut plan = test_plan(RateProfile::Safe);
        plan.monthly_contribution = -1.0;
        assert!(SimulationRunner::new().run(&plan).is_err());
    }
}

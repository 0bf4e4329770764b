//! LifeOS Finance - projection engine behind the investment panels
//!
//! This library provides:
//! - Risk-profile rate resolution against a reference rate
//! - Year-by-year compound growth projections with a savings benchmark
//! - Inflation-adjusted (today's money) projections
//! - Goal-based required monthly contribution solving
//! - Tax-adjusted product comparison against the benchmark rate

pub mod error;
pub mod rates;
pub mod projection;
pub mod products;
pub mod scenario;

// Re-export commonly used types
pub use error::{FinanceError, Result, MAX_HORIZON_YEARS};
pub use rates::{MarketRates, RateProfile, resolve_annual_rate};
pub use projection::{
    BenchmarkProjector, CompoundProjector, ProjectionConfig, ProjectionParams, ProjectionPoint, ProjectionSeries,
    project, required_monthly_contribution,
};
pub use products::{InvestmentProduct, ProductCatalog, ProductEvaluation, ProductEvaluator, RateRule, evaluate};
pub use scenario::{InvestmentPlan, PlanOutcome, SimulationRunner};

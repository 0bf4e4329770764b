//! Investment product catalog and benchmark comparison

mod data;
mod evaluator;
pub mod catalog;

pub use data::{InvestmentProduct, RateRule, RiskLabel};
pub use evaluator::{
    ProductEvaluation, ProductEvaluator, RankedProduct, evaluate, DEFAULT_INCOME_TAX_RATE, TOP_TIER_THRESHOLD,
};
pub use catalog::ProductCatalog;

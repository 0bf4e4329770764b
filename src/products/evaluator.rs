//! Tax-adjusted product evaluation against the benchmark rate

use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_horizon, ensure_non_negative, ensure_positive, FinanceError, Result};
use super::data::InvestmentProduct;

/// Flat income tax on profit for taxable products held longer than two years
pub const DEFAULT_INCOME_TAX_RATE: f64 = 0.15;

/// Equivalence score above which a product is flagged as top tier
pub const TOP_TIER_THRESHOLD: f64 = 105.0;

/// Outcome of holding a product for the whole horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductEvaluation {
    pub gross_amount: f64,
    pub gross_profit: f64,
    pub tax: f64,
    pub net_amount: f64,
    pub net_profit: f64,

    /// Net return as a percentage of the benchmark's return (100 = matches it)
    pub equivalent_benchmark_percent: f64,
}

impl ProductEvaluation {
    pub fn is_top_tier(&self) -> bool {
        self.equivalent_benchmark_percent > TOP_TIER_THRESHOLD
    }
}

/// One row of a catalog comparison, best first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedProduct {
    pub product: InvestmentProduct,
    pub evaluation: ProductEvaluation,
    pub top_tier: bool,
}

/// Evaluates catalog products for a principal held over a horizon
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProductEvaluator {
    /// Tax rate applied to the gross profit of taxable products
    pub income_tax_rate: f64,
}

impl Default for ProductEvaluator {
    fn default() -> Self {
        Self {
            income_tax_rate: DEFAULT_INCOME_TAX_RATE,
        }
    }
}

impl ProductEvaluator {
    pub fn new(income_tax_rate: f64) -> Result<Self> {
        let evaluator = Self { income_tax_rate };
        evaluator.validate()?;
        Ok(evaluator)
    }

    /// Tax rate must be a fraction in `0.0..=1.0`
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.income_tax_rate) {
            return Err(FinanceError::invalid(
                "income_tax_rate",
                format!("must be within 0..=1, got {}", self.income_tax_rate),
            ));
        }
        Ok(())
    }

    pub fn evaluate(
        &self,
        product: &InvestmentProduct,
        benchmark_annual_rate_percent: f64,
        principal: f64,
        years: u32,
    ) -> Result<ProductEvaluation> {
        ensure_positive("principal", principal)?;
        if years == 0 {
            return Err(FinanceError::invalid("years", "must be > 0"));
        }
        ensure_horizon("years", years)?;
        ensure_non_negative("benchmark_annual_rate_percent", benchmark_annual_rate_percent)?;
        product.rate_rule.validate()?;
        self.validate()?;

        let rate = product.rate_rule.effective_annual_rate(benchmark_annual_rate_percent);
        let gross_amount = principal * (1.0 + rate).powi(years as i32);
        let gross_profit = gross_amount - principal;

        let tax_rate = if product.is_tax_exempt { 0.0 } else { self.income_tax_rate };
        let tax = gross_profit * tax_rate;
        let net_amount = gross_amount - tax;
        let net_profit = net_amount - principal;

        let benchmark_growth = (1.0 + benchmark_annual_rate_percent / 100.0).powi(years as i32) - 1.0;

        // inf - inf in the tax step would turn every figure into NaN
        if !gross_amount.is_finite() || !benchmark_growth.is_finite() {
            return Err(FinanceError::invalid(
                "years",
                format!("{} grows beyond f64 range over {} years", product.id, years),
            ));
        }
        let equivalent_benchmark_percent = if benchmark_growth == 0.0 {
            warn!("Benchmark growth is zero for {}, equivalence score set to 0", product.id);
            0.0
        } else {
            ((net_amount / principal - 1.0) / benchmark_growth) * 100.0
        };

        debug!(
            "{}: rate {:.4}, net {:.2}, {:.1}% of benchmark",
            product.id, rate, net_amount, equivalent_benchmark_percent
        );

        Ok(ProductEvaluation {
            gross_amount,
            gross_profit,
            tax,
            net_amount,
            net_profit,
            equivalent_benchmark_percent,
        })
    }

    /// Evaluate every product and sort by equivalence score, best first
    pub fn rank(
        &self,
        products: &[InvestmentProduct],
        benchmark_annual_rate_percent: f64,
        principal: f64,
        years: u32,
    ) -> Result<Vec<RankedProduct>> {
        let mut ranked = products
            .par_iter()
            .map(|product| -> Result<RankedProduct> {
                let evaluation = self.evaluate(product, benchmark_annual_rate_percent, principal, years)?;
                Ok(RankedProduct {
                    product: product.clone(),
                    top_tier: evaluation.is_top_tier(),
                    evaluation,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        ranked.sort_by(|a, b| {
            b.evaluation
                .equivalent_benchmark_percent
                .total_cmp(&a.evaluation.equivalent_benchmark_percent)
        });
        Ok(ranked)
    }
}

/// Evaluate with the default flat tax rate
pub fn evaluate(
    product: &InvestmentProduct,
    benchmark_annual_rate_percent: f64,
    principal: f64,
    years: u32,
) -> Result<ProductEvaluation> {
    ProductEvaluator::default().evaluate(product, benchmark_annual_rate_percent, principal, years)
}

//! Required monthly contribution to reach a savings goal

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_horizon, ensure_non_negative, ensure_positive, FinanceError, Result};
use super::state::monthly_rate;

/// A target future amount over a horizon at a given rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalRequest {
    pub target_amount: f64,
    pub horizon_years: u32,
    /// Annual nominal rate, percent
    pub annual_rate: f64,
}

impl GoalRequest {
    pub fn required_monthly_contribution(&self) -> Result<f64> {
        required_monthly_contribution(self.target_amount, self.horizon_years, self.annual_rate)
    }
}

/// Level monthly payment that accumulates `target_amount` in `years`
///
/// `payment = target * r / ((1 + r)^n - 1)` with the nominal monthly rate `r`
/// and `n = years * 12`. At a zero rate the payment is the straight-line
/// `target / n`. This is the end-of-month (ordinary annuity) inversion, taken
/// literally; it does not mirror the deposit-before-interest order of
/// [`CompoundProjector`](super::CompoundProjector). A non-finite or negative
/// result (overflowing or degenerate inputs) yields `0` instead of leaking NaN
/// or infinity to callers.
pub fn required_monthly_contribution(target_amount: f64, years: u32, annual_rate_percent: f64) -> Result<f64> {
    ensure_positive("target_amount", target_amount)?;
    if years == 0 {
        return Err(FinanceError::invalid("years", "must be > 0"));
    }
    ensure_horizon("years", years)?;
    ensure_non_negative("annual_rate_percent", annual_rate_percent)?;

    // fits i32 after the horizon check
    let months = u64::from(years) * 12;

    if annual_rate_percent == 0.0 {
        return Ok(target_amount / months as f64);
    }

    let rate = monthly_rate(annual_rate_percent);
    let payment = target_amount * rate / ((1.0 + rate).powi(months as i32) - 1.0);

    if !payment.is_finite() || payment < 0.0 {
        warn!(
            "Goal contribution degenerate for target {} over {} years at {}%, using 0",
            target_amount, years, annual_rate_percent
        );
        return Ok(0.0);
    }

    debug!("Goal {} over {} months at {}%: {:.2}/month", target_amount, months, annual_rate_percent, payment);
    Ok(payment)
}

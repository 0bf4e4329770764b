//! Error types for the finance engine

use thiserror::Error;

/// Errors raised by the calculation functions and configuration loaders
#[derive(Error, Debug)]
pub enum FinanceError {
    /// A precondition on the inputs was violated
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },

    /// Risk profile name not recognised
    #[error("unknown risk profile: {0}")]
    InvalidProfile(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

impl FinanceError {
    pub fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        FinanceError::InvalidArgument {
            parameter,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Reject negative or non-finite amounts
pub(crate) fn ensure_non_negative(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FinanceError::invalid(parameter, format!("must be finite, got {}", value)));
    }
    if value < 0.0 {
        return Err(FinanceError::invalid(parameter, format!("must be >= 0, got {}", value)));
    }
    Ok(())
}

/// Reject zero, negative or non-finite amounts
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FinanceError::invalid(parameter, format!("must be > 0, got {}", value)));
    }
    Ok(())
}

/// Longest horizon whose month count still fits an `i32` exponent
pub const MAX_HORIZON_YEARS: u32 = (i32::MAX / 12) as u32;

/// Reject horizons too long to express as a monthly exponent
pub(crate) fn ensure_horizon(parameter: &'static str, years: u32) -> Result<()> {
    if years > MAX_HORIZON_YEARS {
        return Err(FinanceError::invalid(
            parameter,
            format!("must be <= {}, got {}", MAX_HORIZON_YEARS, years),
        ));
    }
    Ok(())
}

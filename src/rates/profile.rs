//! Risk profiles and annual rate resolution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_non_negative, FinanceError, Result};

/// Investor risk appetite selected in the planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateProfile {
    /// Fixed income at the reference rate
    Safe,
    /// Mixed portfolio
    Moderate,
    /// Equity-heavy portfolio
    Bold,
}

impl RateProfile {
    pub const ALL: [RateProfile; 3] = [RateProfile::Safe, RateProfile::Moderate, RateProfile::Bold];

    /// Percentage points added on top of the reference rate
    pub fn offset(&self) -> f64 {
        match self {
            RateProfile::Safe => 0.0,
            RateProfile::Moderate => 2.0,
            RateProfile::Bold => 5.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RateProfile::Safe => "SAFE",
            RateProfile::Moderate => "MODERATE",
            RateProfile::Bold => "BOLD",
        }
    }
}

impl fmt::Display for RateProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateProfile {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SAFE" => Ok(RateProfile::Safe),
            "MODERATE" => Ok(RateProfile::Moderate),
            "BOLD" => Ok(RateProfile::Bold),
            _ => Err(FinanceError::InvalidProfile(s.to_string())),
        }
    }
}

/// Annual nominal rate (percent) for a profile given the reference rate (percent)
///
/// `resolve_annual_rate(RateProfile::Moderate, 10.5)` is `12.5`.
pub fn resolve_annual_rate(profile: RateProfile, reference_rate: f64) -> Result<f64> {
    ensure_non_negative("reference_rate", reference_rate)?;
    Ok(reference_rate + profile.offset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_offsets() {
        assert_eq!(resolve_annual_rate(RateProfile::Safe, 10.5).unwrap(), 10.5);
        assert_eq!(resolve_annual_rate(RateProfile::Moderate, 10.5).unwrap(), 12.5);
        assert_eq!(resolve_annual_rate(RateProfile::Bold, 10.5).unwrap(), 15.5);
    }

    #[test]
    fn test_offsets_are_ordered() {
        assert!(RateProfile::Safe.offset() >= 0.0);
        assert!(RateProfile::Moderate.offset() > RateProfile::Safe.offset());
        assert!(RateProfile::Bold.offset() > RateProfile::Moderate.offset());
    }

    #[test]
    fn test_parse_profile() {
        assert_eq!("bold".parse::<RateProfile>().unwrap(), RateProfile::Bold);
        assert_eq!(" SAFE ".parse::<RateProfile>().unwrap(), RateProfile::Safe);
        for profile in RateProfile::ALL {
            assert_eq!(profile.as_str().parse::<RateProfile>().unwrap(), profile);
        }
    }

    #[test]
    fn test_unknown_profile_fails_fast() {
        let err = "AGGRESSIVE".parse::<RateProfile>().unwrap_err();
        assert!(matches!(err, FinanceError::InvalidProfile(ref name) if name == "AGGRESSIVE"));
    }

    #[test]
    fn test_negative_reference_rate_rejected() {
        let err = resolve_annual_rate(RateProfile::Safe, -0.5).unwrap_err();
        assert!(matches!(err, FinanceError::InvalidArgument { parameter: "reference_rate", .. }));
    }
}

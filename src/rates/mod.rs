//! Risk profiles and reference market rates

mod profile;
pub mod market;

pub use profile::{RateProfile, resolve_annual_rate};
pub use market::MarketRates;

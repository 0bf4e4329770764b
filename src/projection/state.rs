//! Running balance tracked while compounding a projection

/// Unrounded balance of one compounding series
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Completed years of compounding
    pub year_index: u32,

    /// Running balance, never rounded internally
    pub balance: f64,

    /// Nominal monthly rate as a decimal (annual percent / 100 / 12)
    pub monthly_rate: f64,

    /// Deposit made at the start of every month
    pub monthly_contribution: f64,
}

impl ProjectionState {
    /// Initialise from the opening amount and an annual nominal rate in percent
    pub fn new(initial_amount: f64, monthly_contribution: f64, annual_rate_percent: f64) -> Self {
        Self {
            year_index: 0,
            balance: initial_amount,
            monthly_rate: monthly_rate(annual_rate_percent),
            monthly_contribution,
        }
    }

    /// One month: deposit first, then interest on the whole balance
    pub fn advance_month(&mut self) {
        self.balance = (self.balance + self.monthly_contribution) * (1.0 + self.monthly_rate);
    }

    /// Twelve monthly steps
    pub fn advance_year(&mut self) {
        for _ in 0..12 {
            self.advance_month();
        }
        self.year_index += 1;
    }
}

/// Nominal monthly rate from an annual percentage (simple division, not a geometric root)
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100.0 / 12.0
}

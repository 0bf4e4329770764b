//! Compound growth projections and goal solving

mod state;
mod engine;
mod points;
mod goal;

pub use state::{ProjectionState, monthly_rate};
pub use engine::{CompoundProjector, BenchmarkProjector, ProjectionConfig, ProjectionParams, project};
pub use points::{ProjectionPoint, ProjectionSeries, ProjectionSummary};
pub use goal::{GoalRequest, required_monthly_contribution};

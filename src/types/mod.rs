//! Core types for ncsmc-simplify

mod step;
mod bound_state;
mod summary;
mod report;
mod error;

pub use step::ExtractStep;
pub use bound_state::BoundState;
pub use summary::SimulationSummary;
pub use report::SimplifiedReport;
pub use error::SimplifyError;

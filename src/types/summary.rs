//! Summary of one simulation output log

use serde::{Deserialize, Serialize};
use crate::types::BoundState;

/// Everything the extractor keeps from an output log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    /// `None` if the log has no `Ground-state E=` line
    pub ground_state_energy: Option<f64>,
    /// `None` if the log has no `Threshold E=` line
    pub threshold_energy: Option<f64>,
    /// In the order they appear in the log
    pub bound_states: Vec<BoundState>,
}

impl SimulationSummary {
    /// Create an empty summary
    pub fn empty() -> Self {
        Self::default()
    }

    /// Did the log report any bound state?
    pub fn has_bound_states(&self) -> bool {
        !self.bound_states.is_empty()
    }

    /// Lowest bound-state energy, if any
    pub fn deepest_bound_state(&self) -> Option<&BoundState> {
        self.bound_states
            .iter()
            .min_by(|a, b| a.energy.total_cmp(&b.energy))
    }
}

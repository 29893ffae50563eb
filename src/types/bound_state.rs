//! Bound state record

use serde::{Deserialize, Serialize};

/// One bound state reported by the simulation
///
/// J, T and parity are `None` only when the log announced the state before
/// any `2*J=` / `2*T=` line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundState {
    /// Binding energy (MeV)
    pub energy: f64,
    /// Total angular momentum, half of the logged 2J
    pub j: Option<f64>,
    /// Isospin, half of the logged 2T
    pub t: Option<f64>,
    /// Parity token exactly as logged ("+1", "-1", ...)
    pub parity: Option<String>,
    /// Raw `i_p,p_chan,p_st` lines, each newline-terminated
    pub details: String,
}

impl BoundState {
    /// Number of detail lines in the block
    pub fn detail_line_count(&self) -> usize {
        self.details.lines().count()
    }
}

//! Report structures for JSON and HTTP output

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::types::SimulationSummary;

/// Summary of one log plus where it came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedReport {
    /// Input path, or a caller-supplied label
    pub source: String,
    /// Hex SHA-256 of the raw log text
    pub source_sha256: String,
    /// When the report was built
    pub generated_at: DateTime<Utc>,
    /// Number of bound states found
    pub bound_state_count: usize,
    /// The extracted data
    pub summary: SimulationSummary,
}

impl SimplifiedReport {
    /// Create new report
    pub fn new(source: impl Into<String>, source_sha256: String, summary: SimulationSummary) -> Self {
        Self {
            source: source.into(),
            source_sha256,
            generated_at: Utc::now(),
            bound_state_count: summary.bound_states.len(),
            summary,
        }
    }

    /// One-line status for terminal output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "source={} | bound_states={} | sha256={}",
            self.source,
            self.bound_state_count,
            &self.source_sha256[..self.source_sha256.len().min(12)],
        )
    }
}

//! Text rendering of a simulation summary (the `_simplified` artifact)

use std::fmt::Write;
use crate::types::{BoundState, SimulationSummary};
use crate::{NO_BOUND_STATES, SENTINEL};

const RULE: &str = "=========================================================================";

/// Render the full simplified view of one log
pub fn render_summary(source: &str, summary: &SimulationSummary) -> String {
    let states = if summary.has_bound_states() {
        summary.bound_states.iter().map(render_state).collect::<String>()
    } else {
        NO_BOUND_STATES.to_string()
    };

    format!(
        "Simplified View of {}:\n\
         \n\
         (only includes bound states)\n\
         \n\
         Threshold Energy = {} MeV\n\
         Ground State Energy = {} MeV\n\
         \n\
         {}\n\
         {}\n",
        source,
        format_value(summary.threshold_energy),
        format_value(summary.ground_state_energy),
        states,
        RULE,
    )
}

/// Render one bound-state block
pub fn render_state(state: &BoundState) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    // Writing into a String cannot fail
    let _ = writeln!(out, "State Energy = {} MeV", format_value(Some(state.energy)));
    let _ = writeln!(out, "J = {}", format_value(state.j));
    let _ = writeln!(out, "T = {}", format_value(state.t));
    let _ = writeln!(out, "Parity = {}", state.parity.as_deref().unwrap_or(SENTINEL));
    out.push_str("\nDetails:\n");
    out.push_str(&state.details);
    out
}

/// Number with at least one fractional digit, or the sentinel
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => SENTINEL.to_string(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

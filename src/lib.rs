//! ncsmc-simplify: bound-state summaries from NCSMC output logs
//!
//! Pipeline: output log → line classifier → BoundStateExtractor → summary
//! → `_simplified` text artifact / JSON report / HTTP response

pub mod core;
pub mod types;

// =============================================================================
// LINE MARKERS - as printed by the NCSMC executable
// =============================================================================

/// Ground-state energy line, e.g. `Ground-state E= -68.4838  T_rel=   9.3033`
pub const MARKER_GROUND_STATE: &str = "Ground-state E=";

/// Threshold energy line, e.g. ` Threshold E= -69.0645 MeV`
pub const MARKER_THRESHOLD: &str = "Threshold E=";

/// Bound state announcement, e.g. `Bound state found at E_b=-2.345 MeV`
pub const MARKER_BOUND_STATE: &str = "Bound state found at E_b=";

/// Every line of a bound state's detail block carries this header
pub const MARKER_DETAIL: &str = "i_p,p_chan,p_st";

// =============================================================================
// OUTPUT
// =============================================================================

/// Printed wherever a value was never found in the log
pub const SENTINEL: &str = "ERROR";

/// Appended to the input path to name the simplified artifact
pub const SIMPLIFIED_SUFFIX: &str = "_simplified";

/// Rendered in place of the state blocks when the log has none
pub const NO_BOUND_STATES: &str = "no bound states found";

/// Input used when no `--file` is given
pub const DEFAULT_INPUT: &str = "ncsmc_output/ncsm_rgm_Am2_1_1.out";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";

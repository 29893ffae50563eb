//! Line classifier: recognises the handful of NCSMC log lines we care about
//!
//! Every predicate looks at one line on its own. Priority is fixed:
//! ground-state, threshold, 2*J/parity, 2*T, bound-state marker, detail.

use lazy_static::lazy_static;
use regex::Regex;
use crate::{MARKER_BOUND_STATE, MARKER_DETAIL, MARKER_GROUND_STATE, MARKER_THRESHOLD};

lazy_static! {
    // =========================================================================
    // `   2*J=  6    parity=-1`
    // =========================================================================
    static ref RE_J_PARITY: Regex = Regex::new(
        r"^\s*2\*J=\s*([-+]?[0-9]*)\s*parity=\s*([-+]?[0-9]*)\s*$"
    ).unwrap();

    // =========================================================================
    // `   2*T= 0`
    // =========================================================================
    static ref RE_T: Regex = Regex::new(
        r"^\s*2\*T=\s*([-+]?[0-9]*)\s*$"
    ).unwrap();
}

/// What a single log line is, with the raw tokens it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `Ground-state E= <token> ...`
    GroundState(&'a str),
    /// `Threshold E= <token> ...`
    Threshold(&'a str),
    /// `2*J= <two_j> parity= <parity>`
    AngularMomentumParity { two_j: &'a str, parity: &'a str },
    /// `2*T= <two_t>`
    Isospin { two_t: &'a str },
    /// `Bound state found at E_b=<token> MeV`
    BoundStateMarker(&'a str),
    /// A line of a bound state's detail block
    Detail,
    /// Anything else
    Other,
}

impl LineKind<'_> {
    /// Does this line belong to a detail block?
    pub fn is_detail(&self) -> bool {
        matches!(self, LineKind::Detail)
    }
}

/// Classify one line
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(token) = token_after(line, MARKER_GROUND_STATE) {
        return LineKind::GroundState(token);
    }
    if let Some(token) = token_after(line, MARKER_THRESHOLD) {
        return LineKind::Threshold(token);
    }
    if let Some(caps) = RE_J_PARITY.captures(line) {
        let two_j = caps.get(1).map_or("", |m| m.as_str());
        let parity = caps.get(2).map_or("", |m| m.as_str());
        return LineKind::AngularMomentumParity { two_j, parity };
    }
    if let Some(caps) = RE_T.captures(line) {
        let two_t = caps.get(1).map_or("", |m| m.as_str());
        return LineKind::Isospin { two_t };
    }
    if let Some(token) = token_after(line, MARKER_BOUND_STATE) {
        return LineKind::BoundStateMarker(token);
    }
    if line.contains(MARKER_DETAIL) {
        return LineKind::Detail;
    }
    LineKind::Other
}

/// First whitespace-delimited word after `marker`, or "" if nothing follows
fn token_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    line.split_once(marker)
        .map(|(_, rest)| rest.split_whitespace().next().unwrap_or(""))
}

// =============================================================================
// TESTS
// =============================================================================

//! Bound-state extractor: single forward pass over an NCSMC output log
//!
//! Step transitions:
//! - AWAITING_BOUND_STATE → AWAITING_FIRST_DETAIL: bound-state marker
//! - AWAITING_FIRST_DETAIL → COLLECTING_DETAILS: first detail line
//! - COLLECTING_DETAILS → AWAITING_BOUND_STATE: first non-detail line (emits)
//!
//! J, T and parity carry over from one bound state to the next; energy and
//! details are cleared on every emission.

use crate::core::classify::{classify, LineKind};
use crate::types::{BoundState, ExtractStep, SimplifyError, SimulationSummary};

/// Energy and detail lines of the bound state currently being read
#[derive(Debug, Clone)]
struct PendingState {
    energy: f64,
    details: String,
}

/// Bound-state extraction state machine
#[derive(Debug, Default)]
pub struct BoundStateExtractor {
    /// Current step
    step: ExtractStep,
    /// Summary built so far
    summary: SimulationSummary,
    /// Set by a bound-state marker, cleared on emission
    pending: Option<PendingState>,
    /// Carried J
    j: Option<f64>,
    /// Carried T
    t: Option<f64>,
    /// Carried parity token
    parity: Option<String>,
    /// Lines consumed (1-based number of the last line)
    line_no: usize,
}

impl BoundStateExtractor {
    /// Create new extractor
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one line of the log
    pub fn feed(&mut self, line: &str) -> Result<(), SimplifyError> {
        self.line_no += 1;
        let line = line.trim_end_matches(['\n', '\r']);
        let kind = classify(line);

        // Energy references apply in every step and consume the line
        match kind {
            LineKind::GroundState(token) => {
                self.summary.ground_state_energy = Some(self.number(token)?);
                return Ok(());
            }
            LineKind::Threshold(token) => {
                self.summary.threshold_energy = Some(self.number(token)?);
                return Ok(());
            }
            _ => {}
        }

        self.step = self.compute_transition(kind, line)?;
        Ok(())
    }

    /// Apply one classified line to the current step, returning the next step
    fn compute_transition(&mut self, kind: LineKind<'_>, line: &str) -> Result<ExtractStep, SimplifyError> {
        match self.step {
            ExtractStep::AwaitingBoundState | ExtractStep::AwaitingFirstDetail => match kind {
                LineKind::AngularMomentumParity { two_j, parity } => {
                    self.j = Some(self.half(two_j)?);
                    self.parity = Some(parity.to_string());
                    Ok(self.step)
                }
                LineKind::Isospin { two_t } => {
                    self.t = Some(self.half(two_t)?);
                    Ok(self.step)
                }
                LineKind::BoundStateMarker(token) => {
                    // A second marker before any detail replaces the first
                    self.pending = Some(PendingState {
                        energy: self.number(token)?,
                        details: String::new(),
                    });
                    Ok(ExtractStep::AwaitingFirstDetail)
                }
                LineKind::Detail if self.step == ExtractStep::AwaitingFirstDetail => {
                    self.push_detail(line);
                    Ok(ExtractStep::CollectingDetails)
                }
                _ => Ok(self.step),
            },

            ExtractStep::CollectingDetails => {
                if kind.is_detail() {
                    self.push_detail(line);
                    Ok(ExtractStep::CollectingDetails)
                } else {
                    // The closing line is consumed by the emission
                    self.emit();
                    Ok(ExtractStep::AwaitingBoundState)
                }
            }
        }
    }

    fn push_detail(&mut self, line: &str) {
        if let Some(pending) = self.pending.as_mut() {
            pending.details.push_str(line);
            pending.details.push('\n');
        }
    }

    /// Turn the pending record into a BoundState and reset per-state values
    fn emit(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.summary.bound_states.push(BoundState {
                energy: pending.energy,
                j: self.j,
                t: self.t,
                parity: self.parity.clone(),
                details: pending.details,
            });
        }
    }

    fn number(&self, token: &str) -> Result<f64, SimplifyError> {
        token.parse::<f64>().map_err(|_| SimplifyError::InvalidNumber {
            line: self.line_no,
            token: token.to_string(),
        })
    }

    /// `2J` / `2T` token → J / T; odd values give half-integers
    fn half(&self, token: &str) -> Result<f64, SimplifyError> {
        token
            .parse::<i64>()
            .map(|doubled| doubled as f64 / 2.0)
            .map_err(|_| SimplifyError::InvalidNumber {
                line: self.line_no,
                token: token.to_string(),
            })
    }

    /// Get current step
    pub fn step(&self) -> ExtractStep {
        self.step
    }

    /// Get number of lines consumed
    pub fn lines_seen(&self) -> usize {
        self.line_no
    }

    /// Get number of bound states emitted so far
    pub fn bound_states_found(&self) -> usize {
        self.summary.bound_states.len()
    }

    /// End the pass; fails unless the extractor is back in AWAITING_BOUND_STATE
    pub fn finish(self) -> Result<SimulationSummary, SimplifyError> {
        if !self.step.is_terminal() {
            return Err(SimplifyError::UnterminatedState { step: self.step });
        }
        Ok(self.summary)
    }
}

/// Run a fresh extractor over a sequence of lines
pub fn extract<I, S>(lines: I) -> Result<SimulationSummary, SimplifyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut extractor = BoundStateExtractor::new();
    for line in lines {
        extractor.feed(line.as_ref())?;
    }
    extractor.finish()
}

/// Run a fresh extractor over a whole log held in memory
pub fn extract_text(text: &str) -> Result<SimulationSummary, SimplifyError> {
    extract(text.lines())
}

// =============================================================================
// TESTS
// =============================================================================

//! Extractor step definitions

use serde::{Deserialize, Serialize};

/// The three steps of a bound-state extraction pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtractStep {
    /// Initial step and the only valid place to end the pass
    #[default]
    AwaitingBoundState,
    /// Energy recorded, no detail line seen yet
    AwaitingFirstDetail,
    /// Inside a detail block; the next non-detail line closes it
    CollectingDetails,
}

impl ExtractStep {
    /// Can the pass end here?
    pub fn is_terminal(&self) -> bool {
        *self == ExtractStep::AwaitingBoundState
    }
}

impl std::fmt::Display for ExtractStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ExtractStep::AwaitingBoundState => "AWAITING_BOUND_STATE",
            ExtractStep::AwaitingFirstDetail => "AWAITING_FIRST_DETAIL",
            ExtractStep::CollectingDetails => "COLLECTING_DETAILS",
        };
        write!(f, "{}", name)
    }
}

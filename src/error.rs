use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ChoiceId;

pub const MIN_CHOICES: usize = 2;

/// Rejected poll configurations. A `PollDefinition` cannot be built while any of these hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Too few choices: {found} configured, at least {MIN_CHOICES} required")]
    TooFewChoices { found: usize },
    #[error("No poll mode configured")]
    NoModeConfigured,
    #[error("More than one poll mode configured: {}", .modes.join(", "))]
    MultipleModesConfigured { modes: Vec<&'static str> },
    #[error("Invalid selection range: minimum {min} exceeds maximum {max}")]
    InvalidSelectionRange { min: u32, max: u32 },
}

/// Data-quality anomalies the engine tolerates. They never abort a tally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "Kind", rename_all = "PascalCase", rename_all_fields = "PascalCase")]
pub enum TallyWarning {
    #[error("Ballot {ballot} selects unknown choice {choice}; selection dropped")]
    UnknownChoice { ballot: usize, choice: ChoiceId },
    #[error("Top rank is tied but {tiebreakers} tiebreaker ballots were cast; tie left unresolved")]
    AmbiguousTiebreak { tiebreakers: usize },
}

//! Tallying engine for meeting governance polls.
//!
//! Given a validated [`PollDefinition`] and the closed set of cast [`Vote`]s,
//! [`tally`] produces a ranked [`PollResult`]: per-choice scores, their total,
//! and the choice a designated tiebreaker ballot favours when the top rank is tied.

pub mod error;
pub mod models;
pub mod tally;
pub mod voting;

pub use error::{ConfigurationError, TallyWarning};
pub use models::{
    ChoiceId, ChoiceScore, MultipleChoiceConfig, PollDefinition, PollDefinitionRecord, PollMode,
    PollResult, Vote,
};
pub use tally::{tally, tally_with_warnings, TallyOutcome};

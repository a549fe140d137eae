pub mod multiple_choice;
pub mod ranked_weighted;
pub mod single_choice;

use crate::error::TallyWarning;
use crate::models::{ChoiceId, PollDefinition, PollMode};
use log::warn;
use std::collections::{BTreeMap, HashSet};

// Per-choice weight a single ballot adds to the tally
pub type Contributions = BTreeMap<ChoiceId, f64>;

/// Drops selections the poll does not know and repeated entries, keeping
/// the first occurrence of each choice in ballot order.
///
/// Runs before any mode looks at the ballot, so an unknown id is reported
/// even where the mode would ignore that entry anyway (a SingleChoice
/// extra selection, for instance).
pub fn sanitize_selections(
    definition: &PollDefinition,
    ballot: usize,
    selections: &[ChoiceId],
    warnings: &mut Vec<TallyWarning>,
) -> Vec<ChoiceId> {
    let mut seen = HashSet::new();
    let mut sanitized = Vec::with_capacity(selections.len());

    for &choice in selections {
        // Unknown choices are dropped, the rest of the ballot still counts
        if !definition.has_choice(choice) {
            warn!("Ballot {} selects unknown choice {}, dropping it", ballot, choice);
            warnings.push(TallyWarning::UnknownChoice { ballot, choice });
            continue;
        }
        // Keep only the first occurrence
        if seen.insert(choice) {
            sanitized.push(choice);
        }
    }

    sanitized
}

/// Converts one sanitized ballot into per-choice contributions for the given mode.
pub fn contributions(mode: PollMode, voting_power: f64, selections: &[ChoiceId]) -> Contributions {
    match mode {
        PollMode::RankedWeighted => ranked_weighted::contributions(voting_power, selections),
        PollMode::SingleChoice => single_choice::contributions(voting_power, selections),
        PollMode::MultipleChoice(_) => multiple_choice::contributions(voting_power, selections),
    }
}

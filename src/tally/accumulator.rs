use crate::error::TallyWarning;
use crate::models::{ChoiceId, PollDefinition, Vote};
use crate::voting::{self, sanitize_selections};
use log::debug;
use std::collections::BTreeMap;

/// Sums every ballot's contributions per choice. Every configured choice
/// starts at zero, ballots are added in input order and, within a ballot,
/// choices in ascending id order so the floating-point sums are reproducible.
pub fn accumulate(
    definition: &PollDefinition,
    votes: &[Vote],
    warnings: &mut Vec<TallyWarning>,
) -> BTreeMap<ChoiceId, f64> {
    // Initialize all choices with 0 so unchosen ones still show up
    let mut scores: BTreeMap<ChoiceId, f64> = definition
        .choices()
        .keys()
        .map(|choice| (*choice, 0.0))
        .collect();

    for (ballot, vote) in votes.iter().enumerate() {
        // Clean the ballot, then weigh it according to the poll mode
        let selections = sanitize_selections(definition, ballot, &vote.selected_options, warnings);
        let contributions = voting::contributions(definition.mode(), vote.voting_power, &selections);
        debug!("Ballot {} contributes {:?}", ballot, contributions);

        // Add in ascending choice order
        for (choice, weight) in contributions {
            if let Some(score) = scores.get_mut(&choice) {
                *score += weight;
            }
        }
    }

    scores
}

/// Sum of all final scores, taken in ascending choice order.
pub fn total(scores: &BTreeMap<ChoiceId, f64>) -> f64 {
    scores.values().sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PollMode;

    fn definition(mode: PollMode) -> PollDefinition {
        PollDefinition::new(
            [(ChoiceId(1), "A"), (ChoiceId(2), "B"), (ChoiceId(3), "C")],
            mode,
        )
        .unwrap()
    }

    #[test]
    fn unchosen_options_are_seeded_at_zero() {
        let mut warnings = Vec::new();
        let scores = accumulate(
            &definition(PollMode::SingleChoice),
            &[Vote::new([2])],
            &mut warnings,
        );
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[&ChoiceId(1)], 0.0);
        assert_eq!(scores[&ChoiceId(2)], 1.0);
        assert_eq!(scores[&ChoiceId(3)], 0.0);
    }

    #[test]
    fn voting_power_scales_contributions() {
        let mut warnings = Vec::new();
        let scores = accumulate(
            &definition(PollMode::RankedWeighted),
            &[Vote::new([1, 2, 3]).with_power(2.0)],
            &mut warnings,
        );
        assert_eq!(scores[&ChoiceId(1)], 2.0);
        assert_eq!(scores[&ChoiceId(2)], 1.0);
        assert_eq!(scores[&ChoiceId(3)], 2.0 / 3.0);
        assert!((total(&scores) - (2.0 + 1.0 + 2.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn unknown_selection_does_not_discard_the_ballot() {
        let mut warnings = Vec::new();
        let scores = accumulate(
            &definition(PollMode::MultipleChoice(crate::models::MultipleChoiceConfig {
                min_selections: 1,
                max_selections: 3,
            })),
            &[Vote::new([9, 3])],
            &mut warnings,
        );
        assert_eq!(scores[&ChoiceId(3)], 1.0);
        assert!(!scores.contains_key(&ChoiceId(9)));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn no_ballots_leaves_everything_at_zero() {
        let mut warnings = Vec::new();
        let scores = accumulate(&definition(PollMode::SingleChoice), &[], &mut warnings);
        assert!(scores.values().all(|score| *score == 0.0));
        assert_eq!(total(&scores), 0.0);
    }
}

pub mod accumulator;
pub mod ranker;
pub mod tiebreak;

use crate::error::TallyWarning;
use crate::models::{PollDefinition, PollResult, Vote};
use log::info;
use serde::{Deserialize, Serialize};

/// A tally result together with the anomalies tolerated while computing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TallyOutcome {
    pub result: PollResult,
    pub warnings: Vec<TallyWarning>,
}

/// Tallies a closed poll. Pure: identical inputs always give an identical result.
pub fn tally(definition: &PollDefinition, votes: &[Vote]) -> PollResult {
    tally_with_warnings(definition, votes).result
}

pub fn tally_with_warnings(definition: &PollDefinition, votes: &[Vote]) -> TallyOutcome {
    info!(
        "Tallying {} ballots over {} choices, mode: {}",
        votes.len(),
        definition.choices().len(),
        definition.mode().name()
    );

    let mut warnings = Vec::new();
    let scores = accumulator::accumulate(definition, votes, &mut warnings);
    let total_votes = accumulator::total(&scores);
    let results = ranker::rank(&scores);
    let tiebreak_in_favour_of = tiebreak::resolve(&results, votes, &mut warnings);

    info!(
        "Tally complete: {} total weighted votes, {} warnings",
        total_votes,
        warnings.len()
    );

    TallyOutcome {
        result: PollResult {
            results,
            total_votes,
            tiebreak_in_favour_of,
        },
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChoiceId, PollMode};

    fn definition(mode: PollMode) -> PollDefinition {
        PollDefinition::new(
            [(ChoiceId(1), "A"), (ChoiceId(2), "B"), (ChoiceId(3), "C")],
            mode,
        )
        .unwrap()
    }

    #[test]
    fn tie_resolved_by_tiebreaker_ballot() {
        let votes = [
            Vote::new([1]),
            Vote::new([2]).tiebreaker(),
            Vote::new([3]).with_power(0.5),
        ];
        let outcome = tally_with_warnings(&definition(PollMode::SingleChoice), &votes);
        assert_eq!(outcome.result.tiebreak_in_favour_of, Some(ChoiceId(2)));
        assert_eq!(outcome.result.winner(), Some(ChoiceId(2)));
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn warnings_are_collected_without_aborting() {
        let votes = [Vote::new([1, 8]), Vote::new([2])];
        let outcome = tally_with_warnings(&definition(PollMode::RankedWeighted), &votes);
        assert_eq!(
            outcome.warnings,
            vec![
                TallyWarning::UnknownChoice { ballot: 0, choice: ChoiceId(8) },
                TallyWarning::AmbiguousTiebreak { tiebreakers: 0 },
            ]
        );
        assert_eq!(outcome.result.tiebreak_in_favour_of, None);
        assert_eq!(outcome.result.total_votes, 2.0);
    }
}

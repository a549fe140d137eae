use crate::error::TallyWarning;
use crate::models::{ChoiceId, ChoiceScore, Vote};
use log::{info, warn};

/// Resolves a tie at the top of `ranked` using the single ballot flagged as
/// tiebreaker. The first of its selections that belongs to the tied group
/// wins. Returns `None` when there is no tie or it cannot be resolved.
pub fn resolve(
    ranked: &[ChoiceScore],
    votes: &[Vote],
    warnings: &mut Vec<TallyWarning>,
) -> Option<ChoiceId> {
    let top_score = ranked.first()?.score;
    let tied: Vec<ChoiceId> = ranked
        .iter()
        .take_while(|entry| entry.score == top_score)
        .map(|entry| entry.choice_id)
        .collect();

    if tied.len() < 2 {
        return None;
    }

    let tiebreakers: Vec<&Vote> = votes.iter().filter(|vote| vote.is_tiebreaker).collect();
    let [tiebreaker] = tiebreakers.as_slice() else {
        warn!(
            "Top rank tied between {:?} but {} tiebreaker ballots were cast",
            tied,
            tiebreakers.len()
        );
        warnings.push(TallyWarning::AmbiguousTiebreak {
            tiebreakers: tiebreakers.len(),
        });
        return None;
    };

    let winner = tiebreaker
        .selected_options
        .iter()
        .find(|choice| tied.contains(choice))
        .copied();

    match winner {
        Some(choice) => info!("Tie between {:?} broken in favour of {}", tied, choice),
        None => info!("Tiebreaker ballot selects none of the tied choices {:?}", tied),
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(u32, f64)]) -> Vec<ChoiceScore> {
        entries
            .iter()
            .map(|(id, score)| ChoiceScore {
                choice_id: ChoiceId(*id),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn no_tie_needs_no_resolution() {
        let mut warnings = Vec::new();
        let ranked = scores(&[(1, 3.0), (2, 2.0)]);
        let votes = [Vote::new([2]).tiebreaker()];
        assert_eq!(resolve(&ranked, &votes, &mut warnings), None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn first_tied_choice_on_tiebreaker_ballot_wins() {
        let mut warnings = Vec::new();
        let ranked = scores(&[(1, 2.0), (3, 2.0), (2, 1.0)]);
        let votes = [Vote::new([1]), Vote::new([2, 3, 1]).tiebreaker()];
        assert_eq!(resolve(&ranked, &votes, &mut warnings), Some(ChoiceId(3)));
        assert!(warnings.is_empty());
    }

    #[test]
    fn tiebreaker_without_tied_choices_leaves_tie() {
        let mut warnings = Vec::new();
        let ranked = scores(&[(1, 2.0), (3, 2.0), (2, 1.0)]);
        let votes = [Vote::new([2]).tiebreaker()];
        assert_eq!(resolve(&ranked, &votes, &mut warnings), None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_or_multiple_tiebreakers_are_reported() {
        let ranked = scores(&[(1, 1.0), (2, 1.0)]);

        let mut warnings = Vec::new();
        assert_eq!(resolve(&ranked, &[Vote::new([1]), Vote::new([2])], &mut warnings), None);
        assert_eq!(warnings, vec![TallyWarning::AmbiguousTiebreak { tiebreakers: 0 }]);

        let mut warnings = Vec::new();
        let votes = [Vote::new([1]).tiebreaker(), Vote::new([2]).tiebreaker()];
        assert_eq!(resolve(&ranked, &votes, &mut warnings), None);
        assert_eq!(warnings, vec![TallyWarning::AmbiguousTiebreak { tiebreakers: 2 }]);
    }
}

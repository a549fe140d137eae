use crate::models::ChoiceId;
use crate::voting::Contributions;

/// Every selected choice receives the full voting power. Selection-count
/// limits are checked when the ballot is accepted, not here.
pub fn contributions(voting_power: f64, selections: &[ChoiceId]) -> Contributions {
    // No decay, every approved choice gets the same weight
    selections
        .iter()
        .map(|choice| (*choice, voting_power))
        .collect()
}

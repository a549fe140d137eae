use crate::models::ChoiceId;
use crate::voting::Contributions;

/// Declining-weight ranked ballot: the choice at 1-based position `n`
/// receives `voting_power / n`.
pub fn contributions(voting_power: f64, selections: &[ChoiceId]) -> Contributions {
    // Position is 1-based: first choice gets full power, second half, and so on
    selections
        .iter()
        .enumerate()
        .map(|(index, choice)| (*choice, voting_power / (index + 1) as f64))
        .collect()
}

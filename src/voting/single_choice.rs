use crate::models::ChoiceId;
use crate::voting::Contributions;
use log::debug;

/// The first selection gets the full voting power. Extras are ignored here;
/// unknown ids among them were already reported by `sanitize_selections`.
pub fn contributions(voting_power: f64, selections: &[ChoiceId]) -> Contributions {
    let mut result = Contributions::new();

    let Some((first, extras)) = selections.split_first() else {
        return result;
    };

    // A ballot listing several options still counts, using its first one
    if !extras.is_empty() {
        debug!("Ignoring {} extra selections after choice {}", extras.len(), first);
    }

    // Only the first choice counts
    result.insert(*first, voting_power);
    result
}

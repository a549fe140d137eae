use crate::models::{ChoiceId, ChoiceScore};
use std::collections::BTreeMap;

/// Orders scores descending, equal scores by ascending choice id.
pub fn rank(scores: &BTreeMap<ChoiceId, f64>) -> Vec<ChoiceScore> {
    let mut ranked: Vec<ChoiceScore> = scores
        .iter()
        .map(|(choice_id, score)| ChoiceScore {
            choice_id: *choice_id,
            score: *score,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.choice_id.cmp(&b.choice_id))
    });
    ranked
}

use std::cmp::Ordering;

use crate::WrapAction;

/// Reorder `actions` so previously invoked actions surface first.
///
/// `history` is a most-recent-first snapshot of invoked ranking titles (see
/// [`crate::UsageHistory::snapshot`]). An action whose ranking title appears
/// in the history ranks ahead of one whose title does not; among remembered
/// actions the more recent one wins. Actions the user has never invoked keep
/// their input order.
///
/// The input is consumed and returned as a new ordering of exactly the same
/// actions; nothing is inserted, dropped, or mutated.
pub fn rank_actions(actions: Vec<WrapAction>, history: &[String]) -> Vec<WrapAction> {
    let mut decorated: Vec<(Option<usize>, usize, WrapAction)> = actions
        .into_iter()
        .enumerate()
        .map(|(input_index, action)| {
            let recency = history
                .iter()
                .position(|title| title == action.ranking_title());
            (recency, input_index, action)
        })
        .collect();

    // The sort is explicitly unstable, so every branch of the comparator must
    // bottom out in the input index; without that, the relative order of
    // never-invoked actions would vary across runs.
    decorated.sort_unstable_by(|(a_recency, a_index, _), (b_recency, b_index, _)| {
        match (a_recency, b_recency) {
            (Some(a), Some(b)) => a.cmp(b).then_with(|| a_index.cmp(b_index)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a_index.cmp(b_index),
        }
    });

    decorated
        .into_iter()
        .map(|(_, _, action)| action)
        .collect()
}

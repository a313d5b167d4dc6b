// Team score aggregation
//
// Reduces a per-player score vector to the single scalar the search
// maximizes: the searching player's own score plus every teammate's.

use crate::types::{GameState, PlayerId, ScoreVector};

/// Sums the point-of-view player's score with all of its teammates' scores.
///
/// Alignment is by explicit player-id lookup, never by index, so a score
/// vector that dropped a dead player cannot silently misattribute scores.
/// A lone player's team score is just its own entry; a player absent from
/// the vector contributes nothing.
pub fn team_score<P: GameState>(position: &P, pov: PlayerId, scores: &ScoreVector) -> f64 {
    scores
        .iter()
        .filter(|(player, _)| *player == pov || position.is_teammate(pov, *player))
        .map(|(_, score)| score)
        .sum()
}

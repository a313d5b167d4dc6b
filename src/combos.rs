// Joint-move combination generation
//
// The search iterates its own options as the outer (maximizing) loop, so
// combinations are grouped by the point-of-view player's move: one group per
// own move, each group holding every combination of the other players'
// feasible moves paired with that fixed own move.

use crate::types::{GameState, JointMove, PlayerId};

/// All joint assignments that share one fixed point-of-view move.
#[derive(Debug, Clone)]
pub struct MoveGroup<M> {
    /// The point-of-view player's move common to every assignment in the group.
    pub own_move: M,
    /// Every combination of the other players' feasible moves.
    pub assignments: Vec<JointMove<M>>,
}

/// Generates the combination groups for one round.
///
/// Feasibility filtering is delegated to the position. A player with zero
/// feasible moves is omitted from every assignment rather than aborting
/// generation; a point-of-view player with zero feasible moves yields an
/// empty group list (the caller falls back to direct evaluation).
///
/// Ordering of groups and of assignments within a group is unspecified.
pub fn joint_move_groups<P: GameState>(
    position: &P,
    pov: PlayerId,
    candidates: &[P::Move],
) -> Vec<MoveGroup<P::Move>> {
    let own_moves = position.feasible_moves(pov, candidates);
    if own_moves.is_empty() {
        return vec![];
    }

    // Other players' feasible move lists; move-less players are dropped.
    let mut others: Vec<(PlayerId, Vec<P::Move>)> = Vec::new();
    for player in position.live_players() {
        if player == pov {
            continue;
        }
        let feasible = position.feasible_moves(player, candidates);
        if !feasible.is_empty() {
            others.push((player, feasible));
        }
    }

    own_moves
        .into_iter()
        .map(|own_move| MoveGroup {
            assignments: cartesian(pov, &own_move, &others),
            own_move,
        })
        .collect()
}

/// Cartesian product of the other players' feasible moves, each combination
/// paired with the fixed point-of-view move.
fn cartesian<M: Clone>(
    pov: PlayerId,
    own_move: &M,
    others: &[(PlayerId, Vec<M>)],
) -> Vec<JointMove<M>> {
    let mut combos: Vec<JointMove<M>> = Vec::new();
    let mut seed = JointMove::new();
    seed.insert(pov, own_move.clone());
    combos.push(seed);

    for (player, moves) in others {
        let mut expanded = Vec::with_capacity(combos.len() * moves.len());
        for partial in &combos {
            for mv in moves {
                let mut assignment = partial.clone();
                assignment.insert(*player, mv.clone());
                expanded.push(assignment);
            }
        }
        combos = expanded;
    }

    combos
}

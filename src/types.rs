// Core types for the simultaneous-move search engine
//
// The engine is generic over the game: everything it needs from a position
// is expressed by the GameState trait below, and moves are opaque values.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Identifies one participant of a game. Stable for the game's lifetime.
pub type PlayerId = u8;

/// One move per acting player for one round.
///
/// Dead players and players with no feasible move this round are simply
/// absent from the map.
pub type JointMove<M> = BTreeMap<PlayerId, M>;

/// Per-player scores produced by the position evaluator.
///
/// Entries are keyed by player id rather than by position index, so that
/// aggregation stays correct when players die mid-game and drop out of the
/// live-player enumeration.
pub type ScoreVector = Vec<(PlayerId, f64)>;

/// Interface a game position must provide to the search engine.
///
/// Positions are immutable snapshots: `apply` produces a fresh state and
/// never mutates `self`. Structural equality and hashing over the observable
/// state make positions usable as decision-cache keys.
pub trait GameState: Clone + Eq + Hash {
    /// The type representing one action available to one player in one
    /// round. The engine treats it as opaque.
    type Move: Clone + Eq + Hash + Debug;

    /// Whether the game has ended in this position.
    fn is_finished(&self) -> bool;

    /// The players still participating, in a stable order.
    fn live_players(&self) -> Vec<PlayerId>;

    /// The subset of `candidates` the given player can actually play here.
    fn feasible_moves(&self, player: PlayerId, candidates: &[Self::Move]) -> Vec<Self::Move>;

    /// Simulates one round: applies a joint assignment and returns the
    /// resulting position, or `None` when the assignment is infeasible.
    fn apply(&self, assignment: &JointMove<Self::Move>) -> Option<Self>;

    /// Whether two players are on the same team.
    fn is_teammate(&self, a: PlayerId, b: PlayerId) -> bool;
}

/// Outcome of one search frame as surfaced to callers: the team score of the
/// best line, the joint assignment achieving it (absent when the position was
/// evaluated directly), and whether that line hit an actual end of the game
/// rather than the depth bound.
#[derive(Debug, Clone)]
pub struct Decision<M> {
    pub score: f64,
    pub assignment: Option<JointMove<M>>,
    pub reached_end: bool,
}

// Shared synthetic-game fixture for the engine integration tests.
//
// Games are declared as plain tables: per-node feasible moves, a transition
// table from (node, joint assignment) to successor node, a terminal-node
// set, and a per-node score table consulted by the evaluator. Positions are
// immutable snapshots sharing the table through an Arc; equality and
// hashing cover only the observable node, matching the engine's exact-match
// cache keying.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use arena_search::config::{Config, SearchConfig, TraceConfig};
use arena_search::search::Engine;
use arena_search::types::{GameState, JointMove, PlayerId, ScoreVector};

pub type Mv = char;

/// Declarative description of a small synthetic game.
#[derive(Default)]
pub struct GameSpec {
    pub players: Vec<PlayerId>,
    /// Symmetric teammate pairs.
    pub teams: Vec<(PlayerId, PlayerId)>,
    /// (node, player) -> feasible moves. Missing entry = no feasible moves.
    pub feasible: HashMap<(u32, PlayerId), Vec<Mv>>,
    /// (node, canonical assignment) -> successor node. Missing entry =
    /// infeasible simulation.
    pub transitions: HashMap<(u32, Vec<(PlayerId, Mv)>), u32>,
    /// Nodes where the game has ended.
    pub finished: HashSet<u32>,
    /// Per-node score vectors consulted by the evaluator.
    pub scores: HashMap<u32, ScoreVector>,
    /// Counts every simulation attempt, feasible or not.
    pub apply_calls: AtomicUsize,
}

impl GameSpec {
    pub fn transition(&mut self, node: u32, assignment: &[(PlayerId, Mv)], next: u32) {
        let mut key: Vec<(PlayerId, Mv)> = assignment.to_vec();
        key.sort();
        self.transitions.insert((node, key), next);
    }

    pub fn apply_count(&self) -> usize {
        self.apply_calls.load(Ordering::SeqCst)
    }
}

/// One position of a table game: a node id plus the shared game tables.
#[derive(Clone)]
pub struct TableState {
    pub node: u32,
    pub spec: Arc<GameSpec>,
}

impl TableState {
    pub fn new(node: u32, spec: Arc<GameSpec>) -> Self {
        TableState { node, spec }
    }
}

impl PartialEq for TableState {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl Eq for TableState {}

impl Hash for TableState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl GameState for TableState {
    type Move = Mv;

    fn is_finished(&self) -> bool {
        self.spec.finished.contains(&self.node)
    }

    fn live_players(&self) -> Vec<PlayerId> {
        self.spec.players.clone()
    }

    fn feasible_moves(&self, player: PlayerId, candidates: &[Mv]) -> Vec<Mv> {
        self.spec
            .feasible
            .get(&(self.node, player))
            .map(|moves| {
                moves
                    .iter()
                    .filter(|mv| candidates.contains(mv))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn apply(&self, assignment: &JointMove<Mv>) -> Option<Self> {
        self.spec.apply_calls.fetch_add(1, Ordering::SeqCst);
        let mut key: Vec<(PlayerId, Mv)> =
            assignment.iter().map(|(p, m)| (*p, *m)).collect();
        key.sort();
        self.spec
            .transitions
            .get(&(self.node, key))
            .map(|next| TableState::new(*next, self.spec.clone()))
    }

    fn is_teammate(&self, a: PlayerId, b: PlayerId) -> bool {
        self.spec
            .teams
            .iter()
            .any(|&(x, y)| (x, y) == (a, b) || (y, x) == (a, b))
    }
}

/// Evaluator reading the fixture's per-node score table.
pub fn table_evaluator() -> Box<dyn Fn(&TableState) -> Result<ScoreVector, String> + Send + Sync> {
    Box::new(|position: &TableState| {
        position
            .spec
            .scores
            .get(&position.node)
            .cloned()
            .ok_or_else(|| format!("no score vector for node {}", position.node))
    })
}

pub fn test_config(max_depth: u8) -> Config {
    Config {
        search: SearchConfig { max_depth },
        trace: TraceConfig {
            enabled: false,
            log_file_path: "unused.jsonl".to_string(),
        },
    }
}

pub fn engine(max_depth: u8, candidates: Vec<Mv>) -> Engine<TableState> {
    let _ = env_logger::builder().is_test(true).try_init();
    Engine::new(test_config(max_depth), table_evaluator(), candidates)
}

/// The two-player payoff-matrix scenario: player 0 picks from {A, B},
/// player 1 from {C, D}, every joint choice leads to a distinct terminal
/// node scored by `payoffs` in (A,C), (A,D), (B,C), (B,D) order.
pub fn matrix_game(payoffs: [(f64, f64); 4]) -> Arc<GameSpec> {
    let mut spec = GameSpec::default();
    spec.players = vec![0, 1];
    spec.feasible.insert((0, 0), vec!['A', 'B']);
    spec.feasible.insert((0, 1), vec!['C', 'D']);

    let combos = [('A', 'C'), ('A', 'D'), ('B', 'C'), ('B', 'D')];
    for (i, ((own, other), (s0, s1))) in combos.iter().zip(payoffs.iter()).enumerate() {
        let leaf = 10 + i as u32;
        spec.transition(0, &[(0, *own), (1, *other)], leaf);
        spec.finished.insert(leaf);
        spec.scores.insert(leaf, vec![(0, *s0), (1, *s1)]);
    }
    Arc::new(spec)
}

// Simultaneous-move alpha-beta search
//
// Unlike classical alternating-turn minimax, every live player commits a
// move each round. The engine alternates a team-maximizing ply (the acting
// player's own choice) with an opponent-minimizing ply (all joint
// assignments sharing that choice), pruning subtrees that cannot affect the
// final decision, down to the configured depth bound or an actual game end.

use log::{debug, info};
use rand::Rng;

use crate::cache::{CacheEntry, DecisionCache};
use crate::combos::{joint_move_groups, MoveGroup};
use crate::config::Config;
use crate::decision_log::DecisionLogger;
use crate::team::team_score;
use crate::types::{Decision, GameState, JointMove, PlayerId, ScoreVector};

/// Evaluation function supplied at engine construction.
///
/// Must be pure; it is consulted only at terminal and depth-cutoff frames.
/// An error aborts the in-progress search and surfaces unchanged to the
/// caller, with nothing cached for that position.
pub type EvalFn<P> = dyn Fn(&P) -> Result<ScoreVector, String> + Send + Sync;

/// Result of one recursive frame: the best achievable team score, every
/// joint assignment tied for it (empty when the frame was evaluated
/// directly), and whether the best line hit an actual end of the game.
struct SearchOutcome<M> {
    score: f64,
    candidates: Vec<JointMove<M>>,
    reached_end: bool,
}

/// Simultaneous alpha-beta decision engine for one game session.
///
/// Owns its decision cache, so independent games get independent engines
/// and never cross-contaminate cached results.
pub struct Engine<P: GameState> {
    config: Config,
    evaluate: Box<EvalFn<P>>,
    candidate_moves: Vec<P::Move>,
    cache: DecisionCache<P, P::Move>,
    logger: DecisionLogger,
}

impl<P: GameState> Engine<P> {
    /// Creates a new engine instance
    ///
    /// # Arguments
    /// * `config` - Static configuration (depth bound, trace settings)
    /// * `evaluate` - Position evaluator producing per-player scores
    /// * `candidate_moves` - The nominal action set every player picks from
    pub fn new(config: Config, evaluate: Box<EvalFn<P>>, candidate_moves: Vec<P::Move>) -> Self {
        let logger = DecisionLogger::new(config.trace.enabled, &config.trace.log_file_path);
        Engine {
            config,
            evaluate,
            candidate_moves,
            cache: DecisionCache::new(),
            logger,
        }
    }

    /// Chooses the next move for a player. Always yields a move for a
    /// well-formed evaluator: when no feasible action exists the pick falls
    /// back to a uniformly random nominal candidate.
    pub fn select_action(&self, for_player: PlayerId, position: &P) -> Result<P::Move, String> {
        if self.candidate_moves.is_empty() {
            return Err("engine configured with an empty candidate move set".to_string());
        }

        let (decision, cache_hit) = self.decide_internal(for_player, position)?;

        let chosen = decision
            .assignment
            .as_ref()
            .and_then(|assignment| assignment.get(&for_player))
            .cloned();

        let chosen = match chosen {
            Some(mv) => mv,
            None => {
                // No feasible line at all: last-resort uniform pick among
                // the nominal candidates, ignoring feasibility.
                let mv = pick_uniform(&self.candidate_moves).clone();
                info!(
                    "Player {}: no feasible action, falling back to random {:?}",
                    for_player, mv
                );
                mv
            }
        };

        info!(
            "Player {}: chose {:?} (score: {}, reached_end: {}, cache_hit: {})",
            for_player, chosen, decision.score, decision.reached_end, cache_hit
        );
        self.logger.log_decision(
            for_player,
            format!("{:?}", chosen),
            decision.score,
            self.config.search.max_depth,
            decision.reached_end,
            cache_hit,
        );

        Ok(chosen)
    }

    /// Runs the full search and exposes the scored outcome. Repeated calls
    /// from the same position report an identical score; the tie-broken
    /// assignment may legitimately differ when multiple optima exist.
    pub fn decide(&self, for_player: PlayerId, position: &P) -> Result<Decision<P::Move>, String> {
        self.decide_internal(for_player, position)
            .map(|(decision, _)| decision)
    }

    /// Drops all cached decisions. Call between independent games.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn decide_internal(
        &self,
        for_player: PlayerId,
        position: &P,
    ) -> Result<(Decision<P::Move>, bool), String> {
        if let Some(entry) = self.cache.lookup(position) {
            debug!("Player {}: decision cache hit", for_player);
            return Ok((Self::entry_to_decision(entry), true));
        }

        let outcome = self.team_maximize(
            position,
            for_player,
            f64::NEG_INFINITY,
            f64::INFINITY,
            0,
        )?;

        let entry = CacheEntry {
            score: outcome.score,
            candidates: outcome.candidates,
            reached_end: outcome.reached_end,
        };
        self.cache.store(position.clone(), entry.clone());

        Ok((Self::entry_to_decision(entry), false))
    }

    /// Re-runs the uniform tie-break over the stored tied-best set.
    fn entry_to_decision(entry: CacheEntry<P::Move>) -> Decision<P::Move> {
        let assignment = if entry.candidates.is_empty() {
            None
        } else {
            Some(pick_uniform(&entry.candidates).clone())
        };
        Decision {
            score: entry.score,
            assignment,
            reached_end: entry.reached_end,
        }
    }

    /// Maximizing ply: iterates the acting player's own move choices.
    fn team_maximize(
        &self,
        position: &P,
        pov: PlayerId,
        mut alpha: f64,
        beta: f64,
        depth: u8,
    ) -> Result<SearchOutcome<P::Move>, String> {
        if depth >= self.config.search.max_depth || position.is_finished() {
            let score = self.evaluate_direct(position, pov)?;
            return Ok(SearchOutcome {
                score,
                candidates: vec![],
                reached_end: position.is_finished(),
            });
        }

        let groups = joint_move_groups(position, pov, &self.candidate_moves);

        let mut best = f64::NEG_INFINITY;
        // Assignments tied for the best value, with each line's end flag.
        let mut tied: Vec<(JointMove<P::Move>, bool)> = Vec::new();

        for group in &groups {
            let minimized = match self.opponent_minimize(position, group, pov, alpha, beta, depth)? {
                Some(result) => result,
                // Every assignment in the group was infeasible.
                None => continue,
            };
            let (value, assignment, reached_end) = minimized;

            if value >= beta {
                // An ancestor minimizing frame already rejects this value;
                // the remaining groups cannot change the decision.
                debug!("Beta cutoff at depth {} ({} >= {})", depth, value, beta);
                return Ok(SearchOutcome {
                    score: value,
                    candidates: vec![assignment],
                    reached_end,
                });
            }

            if value > best {
                best = value;
                tied.clear();
                tied.push((assignment, reached_end));
            } else if value == best {
                tied.push((assignment, reached_end));
            }

            if best > alpha {
                alpha = best;
            }
        }

        if tied.is_empty() {
            // No feasible group at this frame: treat the position as a
            // forced terminal and score it directly.
            let score = self.evaluate_direct(position, pov)?;
            return Ok(SearchOutcome {
                score,
                candidates: vec![],
                reached_end: true,
            });
        }

        let reached_end = tied.iter().any(|(_, flag)| *flag);
        Ok(SearchOutcome {
            score: best,
            candidates: tied.into_iter().map(|(assignment, _)| assignment).collect(),
            reached_end,
        })
    }

    /// Minimizing ply over one group: the opponents jointly pick the
    /// combination worst for the acting player's team.
    ///
    /// Returns `None` when no assignment in the group could be simulated.
    /// On an alpha cutoff the pick is a uniform choice among the
    /// assignments tied at the cutoff value so far; trading that partial
    /// tie set for pruning is intentional.
    fn opponent_minimize(
        &self,
        position: &P,
        group: &MoveGroup<P::Move>,
        pov: PlayerId,
        alpha: f64,
        mut beta: f64,
        depth: u8,
    ) -> Result<Option<(f64, JointMove<P::Move>, bool)>, String> {
        let mut worst = f64::INFINITY;
        let mut tied: Vec<(JointMove<P::Move>, bool)> = Vec::new();

        for assignment in &group.assignments {
            let successor = match position.apply(assignment) {
                Some(next) => next,
                None => {
                    debug!("Skipping infeasible assignment {:?}", assignment);
                    continue;
                }
            };

            let child = self.team_maximize(&successor, pov, alpha, beta, depth + 1)?;

            if child.score < worst {
                worst = child.score;
                tied.clear();
                tied.push((assignment.clone(), child.reached_end));
            } else if child.score == worst {
                tied.push((assignment.clone(), child.reached_end));
            }

            if child.score <= alpha {
                // A maximizing ancestor already has a better alternative;
                // deeper exploration of this group is wasted.
                debug!(
                    "Alpha cutoff at depth {} ({} <= {})",
                    depth, child.score, alpha
                );
                let (assignment, reached_end) = pick_uniform(&tied).clone();
                return Ok(Some((worst, assignment, reached_end)));
            }

            if worst < beta {
                beta = worst;
            }
        }

        if tied.is_empty() {
            return Ok(None);
        }

        let (assignment, reached_end) = pick_uniform(&tied).clone();
        Ok(Some((worst, assignment, reached_end)))
    }

    fn evaluate_direct(&self, position: &P, pov: PlayerId) -> Result<f64, String> {
        let scores = (self.evaluate)(position)?;
        Ok(team_score(position, pov, &scores))
    }
}

/// Uniform choice over the full index range of a non-empty slice.
///
/// Sampling the index directly avoids the bias of narrow-range
/// multiply-then-divide schemes.
fn pick_uniform<T>(items: &[T]) -> &T {
    let idx = rand::rng().random_range(0..items.len());
    &items[idx]
}

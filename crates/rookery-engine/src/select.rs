//! Ranking legal moves and picking one at random from the best.

use rand::Rng;
use rand::seq::IndexedRandom;
use rookery_core::{legal_moves, GameState, Move, Side};
use tracing::debug;

use crate::config::{SelectionPolicy, SelectorConfig};
use crate::error::SelectError;
use crate::eval::score_move;

/// A legal move with its heuristic score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: i32,
}

/// Score every legal move of the side to move, best first.
///
/// The sort is stable, so equal scores keep generation order.
pub fn score_moves(state: &GameState, config: &SelectorConfig) -> Vec<ScoredMove> {
    let mut ranked: Vec<ScoredMove> = legal_moves(state)
        .as_slice()
        .iter()
        .map(|&mv| ScoredMove {
            mv,
            score: score_move(state, mv, config),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

impl SelectionPolicy {
    /// The prefix of `ranked` (best first) that the random pick draws from.
    pub fn candidates(self, ranked: &[ScoredMove]) -> &[ScoredMove] {
        let Some(best) = ranked.first() else {
            return ranked;
        };
        let len = match self {
            SelectionPolicy::TopK(k) => k.clamp(1, ranked.len()),
            // The best move always qualifies, even for a negative margin.
            SelectionPolicy::Margin(cp) => ranked
                .iter()
                .take_while(|m| m.score >= best.score.saturating_sub(cp))
                .count()
                .max(1),
        };
        &ranked[..len]
    }
}

/// Choose a move for `side`.
///
/// Moves are ranked with [`score_moves`], cut down by the configured
/// [`SelectionPolicy`], and one is drawn uniformly using `rng`. The same
/// state, config and RNG state always give the same move.
///
/// # Errors
///
/// [`SelectError::NotSideToMove`] if `side` is not on turn, and
/// [`SelectError::NoLegalMoves`] if the game is already over.
pub fn select_move<R: Rng + ?Sized>(
    state: &GameState,
    side: Side,
    config: &SelectorConfig,
    rng: &mut R,
) -> Result<Move, SelectError> {
    if state.side_to_move() != side {
        return Err(SelectError::not_side_to_move(side));
    }

    let ranked = score_moves(state, config);
    let candidates = config.policy.candidates(&ranked);
    let chosen = candidates.choose(rng).ok_or(SelectError::NoLegalMoves)?;

    debug!(
        side = ?side,
        legal = ranked.len(),
        candidates = candidates.len(),
        best = ranked[0].score,
        mv = %chosen.mv,
        score = chosen.score,
        "move selected"
    );
    Ok(chosen.mv)
}

#[cfg(test)]
mod tests {
    use rookery_core::{Move, Square};

    use super::{ScoredMove, SelectionPolicy};

    fn ranked(scores: &[i32]) -> Vec<ScoredMove> {
        scores
            .iter()
            .map(|&score| ScoredMove {
                mv: Move::new(Square::A1, Square::A2),
                score,
            })
            .collect()
    }

    #[test]
    fn top_k_is_capped_by_length() {
        let list = ranked(&[50, 40, 30, 20]);
        assert_eq!(SelectionPolicy::TopK(3).candidates(&list).len(), 3);
        assert_eq!(SelectionPolicy::TopK(10).candidates(&list).len(), 4);
        assert_eq!(SelectionPolicy::TopK(0).candidates(&list).len(), 1);
    }

    #[test]
    fn margin_keeps_near_ties() {
        let list = ranked(&[50, 45, 40, 10]);
        assert_eq!(SelectionPolicy::Margin(0).candidates(&list).len(), 1);
        assert_eq!(SelectionPolicy::Margin(10).candidates(&list).len(), 3);
        assert_eq!(SelectionPolicy::Margin(1000).candidates(&list).len(), 4);
    }

    #[test]
    fn negative_margin_keeps_the_best() {
        let list = ranked(&[50, 50, 40]);
        let candidates = SelectionPolicy::Margin(-1).candidates(&list);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].score, 50);
        assert_eq!(SelectionPolicy::Margin(i32::MIN).candidates(&list).len(), 1);
    }

    #[test]
    fn empty_list_has_no_candidates() {
        assert!(SelectionPolicy::TopK(3).candidates(&[]).is_empty());
        assert!(SelectionPolicy::Margin(5).candidates(&[]).is_empty());
    }
}

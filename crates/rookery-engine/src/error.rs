//! Move selector errors.

use rookery_core::Side;

/// Errors from [`select_move`](crate::select_move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// The side to move has no legal move; the game is already over.
    #[error("no legal moves available")]
    NoLegalMoves,
    /// The selector was asked to move for the side that is not on turn.
    #[error("{requested} is not to move")]
    NotSideToMove {
        /// The side the caller asked about.
        requested: &'static str,
    },
}

impl SelectError {
    pub(crate) fn not_side_to_move(side: Side) -> SelectError {
        SelectError::NotSideToMove {
            requested: side.name(),
        }
    }
}

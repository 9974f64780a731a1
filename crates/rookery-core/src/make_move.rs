//! Move execution via copy-make.

use tracing::trace;

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::error::MoveError;
use crate::game_state::GameState;
use crate::movegen::is_legal;
use crate::notation::log_entry;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::side::Side;
use crate::square::Square;

impl GameState {
    /// Classify `mv` in this position from the piece on its origin.
    pub fn move_kind(&self, mv: Move) -> MoveKind {
        let Some(piece) = self.board.piece_at(mv.from) else {
            return MoveKind::Normal;
        };
        let file_distance = mv.from.file().index().abs_diff(mv.to.file().index());

        match piece.kind() {
            PieceKind::Pawn if mv.to.rank() == piece.side().promotion_rank() => MoveKind::Promotion,
            PieceKind::Pawn if mv.from.rank().index().abs_diff(mv.to.rank().index()) == 2 => {
                MoveKind::DoublePush
            }
            PieceKind::Pawn
                if file_distance == 1
                    && self.en_passant == Some(mv.to)
                    && !self.board.is_occupied(mv.to) =>
            {
                MoveKind::EnPassant
            }
            PieceKind::King if file_distance == 2 && mv.from.rank() == mv.to.rank() => {
                match CastleSide::from_king_target(mv.to.file()) {
                    Some(wing) => MoveKind::Castle(wing),
                    None => MoveKind::Normal,
                }
            }
            _ => MoveKind::Normal,
        }
    }

    /// Move the pieces for `mv` on a copy of the board. Returns the new
    /// board, the captured piece and the move's kind. An empty origin leaves
    /// the board unchanged.
    fn relocate(&self, mv: Move) -> (Board, Option<Piece>, MoveKind) {
        let kind = self.move_kind(mv);
        let mut board = self.board;
        let Some(piece) = board.take(mv.from) else {
            return (board, None, kind);
        };

        let mut captured = board.take(mv.to);
        match kind {
            MoveKind::Castle(wing) => {
                let back = mv.from.rank();
                let rook = board.take(Square::new(back, wing.rook_from()));
                board.set(Square::new(back, wing.rook_to()), rook);
            }
            MoveKind::EnPassant => {
                // The victim stands beside the origin, on the destination's file.
                captured = board.take(Square::new(mv.from.rank(), mv.to.file()));
            }
            _ => {}
        }

        let placed = match kind {
            MoveKind::Promotion => piece.with_kind(PieceKind::Queen),
            _ => piece,
        };
        board.set(mv.to, Some(placed));
        (board, captured, kind)
    }

    /// Board after `mv` with nothing else updated, for legality probes.
    pub(crate) fn trial_move(&self, mv: Move) -> Board {
        self.relocate(mv).0
    }

    /// Apply a move and return the resulting state. Copy-make: `self` is not modified.
    ///
    /// The move is assumed legal; use [`play`](GameState::play) for
    /// unchecked input. If the origin square is empty the state is returned
    /// unchanged.
    pub fn make_move(&self, mv: Move) -> GameState {
        let Some(piece) = self.board.piece_at(mv.from) else {
            return self.clone();
        };
        let us = self.side_to_move;
        let (board, captured, kind) = self.relocate(mv);

        let mut next = self.clone();
        next.board = board;

        next.castling = self
            .castling
            .remove(CastleRights::revoked_by(mv.from))
            .remove(CastleRights::revoked_by(mv.to));

        next.en_passant = match kind {
            MoveKind::DoublePush => mv.from.offset(us.forward(), 0),
            _ => None,
        };

        if piece.kind() == PieceKind::Pawn || captured.is_some() {
            next.halfmove_clock = 0;
        } else {
            next.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        if us == Side::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        next.side_to_move = us.flip();

        if let Some(victim) = captured {
            next.captured[us.index()].push(victim);
        }
        let entry = log_entry(piece, mv, captured.is_some());
        trace!(mv = %mv, kind = ?kind, log = %entry, "move applied");
        next.history.push(entry);

        next
    }

    /// Apply `mv` if it is legal for the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Illegal`] if `mv` is not among the legal moves;
    /// `self` is unaffected either way.
    pub fn play(&self, mv: Move) -> Result<GameState, MoveError> {
        if !is_legal(self, mv) {
            return Err(MoveError::Illegal { mv });
        }
        Ok(self.make_move(mv))
    }
}

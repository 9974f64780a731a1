//! The short move-log text written to [`GameState::history`](crate::GameState::history).
//!
//! This is not SAN: there is no disambiguation, no check or mate suffix, no
//! promotion suffix, and castling is written as the king's step (`Kg1`).
//! Knights and kings share the letter `K`.

use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;

/// Log text for `piece` playing `mv`.
pub fn log_entry(piece: Piece, mv: Move, is_capture: bool) -> String {
    match (piece.kind(), is_capture) {
        (PieceKind::Pawn, true) => format!("{}x{}", mv.from.file(), mv.to),
        (kind, true) => format!("{}x{}", kind.log_letter(), mv.to),
        (kind, false) => format!("{}{}", kind.log_letter(), mv.to),
    }
}

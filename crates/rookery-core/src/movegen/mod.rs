//! Move generation in two tiers.
//!
//! The pseudo tier answers "where could this piece go if its own king's
//! safety did not matter": it follows movement rules and occupancy only,
//! never castling. The check detector is built on it.
//!
//! The legal tier adds castling for the side to move and drops every
//! destination that would leave the mover's king in check.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::check::is_in_check;
use crate::chess_move::Move;
use crate::game_state::GameState;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Stack-allocated buffer of destination squares. A queen in the middle of
/// an empty board reaches 27 squares, the most any single piece can.
#[derive(Clone)]
pub struct SquareList {
    squares: [Square; 32],
    len: u8,
}

impl SquareList {
    /// Create an empty list.
    pub fn new() -> SquareList {
        SquareList {
            squares: [Square::A1; 32],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < 32);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Stack-allocated buffer for generated moves. Capacity 256 covers the theoretical max of 218.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; 256],
    len: u16,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::new(Square::A1, Square::A1); 256],
            len: 0,
        }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        debug_assert!((self.len as usize) < 256);
        self.moves[self.len as usize] = mv;
        self.len += 1;
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Squares the piece on `from` could move to, ignoring its own king's safety.
///
/// The owner of the piece on `from` is the mover, whoever is to move in the
/// game. An empty `from` yields an empty list. `en_passant` is honored only
/// for a pawn standing on the rank from which that capture is possible.
pub fn pseudo_destinations(board: &Board, from: Square, en_passant: Option<Square>) -> SquareList {
    let mut out = SquareList::new();
    let Some(piece) = board.piece_at(from) else {
        return out;
    };
    let side = piece.side();

    match piece.kind() {
        PieceKind::Pawn => pawns::pawn_targets(board, from, side, en_passant, &mut out),
        PieceKind::Knight => knights::knight_targets(board, from, side, &mut out),
        PieceKind::Bishop => sliders::slider_targets(board, from, side, &sliders::DIAGONALS, &mut out),
        PieceKind::Rook => sliders::slider_targets(board, from, side, &sliders::ORTHOGONALS, &mut out),
        PieceKind::Queen => {
            sliders::slider_targets(board, from, side, &sliders::DIAGONALS, &mut out);
            sliders::slider_targets(board, from, side, &sliders::ORTHOGONALS, &mut out);
        }
        PieceKind::King => king::king_targets(board, from, side, &mut out),
    }

    out
}

/// Legal destinations of the piece on `from`.
///
/// Empty unless `from` holds a piece of the side to move. Includes castling
/// targets for the king.
pub fn legal_destinations(state: &GameState, from: Square) -> SquareList {
    let mut legal = SquareList::new();
    let Some(piece) = state.board.piece_at(from) else {
        return legal;
    };
    if piece.side() != state.side_to_move {
        return legal;
    }

    let mut candidates = pseudo_destinations(&state.board, from, state.en_passant);
    if piece.kind() == PieceKind::King {
        king::castling_targets(state, from, &mut candidates);
    }

    for &to in &candidates {
        let after = state.trial_move(Move::new(from, to));
        if !is_in_check(&after, piece.side()) {
            legal.push(to);
        }
    }
    legal
}

/// Every legal move for the side to move, grouped by origin square in
/// index order.
pub fn legal_moves(state: &GameState) -> MoveList {
    let mut list = MoveList::new();
    for (from, _) in state.board.pieces_of(state.side_to_move) {
        for &to in &legal_destinations(state, from) {
            list.push(Move::new(from, to));
        }
    }
    list
}

/// Return `true` if the side to move has at least one legal move.
pub fn has_legal_move(state: &GameState) -> bool {
    state
        .board
        .pieces_of(state.side_to_move)
        .any(|(from, _)| !legal_destinations(state, from).is_empty())
}

/// Return `true` if `mv` is legal for the side to move.
pub fn is_legal(state: &GameState, mv: Move) -> bool {
    legal_destinations(state, mv.from).contains(mv.to)
}

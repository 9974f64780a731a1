//! Core chess types: board representation, move generation, and game rules.

mod board;
mod castle_rights;
mod check;
mod chess_move;
mod error;
mod fen;
mod file;
mod game_state;
mod make_move;
pub mod movegen;
mod notation;
mod perft;
mod piece;
mod piece_kind;
mod rank;
mod side;
mod square;
mod status;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use check::{can_reach, is_in_check};
pub use chess_move::{Move, MoveKind};
pub use error::{BoardError, FenError, MoveError, ParseMoveError, ParseSquareError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use game_state::GameState;
pub use movegen::{
    has_legal_move, is_legal, legal_destinations, legal_moves, pseudo_destinations, MoveList,
    SquareList,
};
pub use notation::log_entry;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use rank::Rank;
pub use side::Side;
pub use square::Square;
pub use status::GameStatus;

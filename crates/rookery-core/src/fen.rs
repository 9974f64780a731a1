//! FEN string parsing and serialization for [`GameState`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::check::is_in_check;
use crate::error::FenError;
use crate::file::File;
use crate::game_state::GameState;
use crate::piece::Piece;
use crate::rank::Rank;
use crate::side::Side;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for GameState {
    type Err = FenError;

    /// Parse a six-field FEN record. The resulting state has an empty
    /// move log and capture ledger.
    fn from_str(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Side::White,
            "b" => Side::Black,
            other => {
                return Err(FenError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };

        let castling = CastleRights::from_fen(fields[2])?;

        // A target is only meaningful on the rank the side to move captures onto.
        let en_passant = match fields[3] {
            "-" => None,
            text => {
                let sq = Square::from_algebraic(text)
                    .filter(|sq| sq.rank() == side_to_move.en_passant_rank())
                    .ok_or_else(|| FenError::InvalidEnPassant {
                        found: text.to_string(),
                    })?;
                Some(sq)
            }
        };

        let halfmove_clock = fields[4].parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field: "halfmove clock",
            found: fields[4].to_string(),
        })?;

        let fullmove_number = fields[5]
            .parse::<u16>()
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| FenError::InvalidMoveCounter {
                field: "fullmove number",
                found: fields[5].to_string(),
            })?;

        board.validate()?;
        let waiting = side_to_move.flip();
        if is_in_check(&board, waiting) {
            return Err(FenError::OpponentInCheck {
                side: waiting.name(),
            });
        }
        Ok(GameState::from_parts(
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        ))
    }
}

fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::EMPTY;
    // FEN ranks go from 8 to 1 (top to bottom)
    for (rank_index, (rank_str, rank)) in ranks.iter().zip(Rank::ALL.into_iter().rev()).enumerate() {
        let mut file_index = 0usize;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file_index += digit as usize;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let Some(&file) = File::ALL.get(file_index) else {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file_index + 1,
                    });
                };
                board.set(Square::new(rank, file), Some(piece));
                file_index += 1;
            }
            if file_index > 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: file_index,
                });
            }
        }

        if file_index != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file_index,
            });
        }
    }

    Ok(board)
}

impl Board {
    /// The piece placement field of a FEN record.
    pub fn placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_count = 0u8;
            for file in File::ALL {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            out.push(char::from(b'0' + empty_count));
                            empty_count = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                out.push(char::from(b'0' + empty_count));
            }
            if rank != Rank::Rank1 {
                out.push('/');
            }
        }
        out
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.board.placement(), self.side_to_move, self.castling)?;
        match self.en_passant {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock, self.fullmove_number)
    }
}

#[cfg(test)]
mod tests {
    use super::STARTING_FEN;
    use crate::board::Board;
    use crate::error::{BoardError, FenError};
    use crate::game_state::GameState;
    use crate::square::Square;

    fn roundtrip(fen: &str) {
        let state: GameState = fen.parse().unwrap();
        let output = format!("{state}");
        assert_eq!(output, fen, "FEN roundtrip failed");
        let state2: GameState = output.parse().unwrap();
        assert_eq!(state, state2);
    }

    #[test]
    fn roundtrip_starting() {
        roundtrip(STARTING_FEN);
    }

    #[test]
    fn roundtrip_sicilian() {
        roundtrip("rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
    }

    #[test]
    fn roundtrip_kiwipete() {
        roundtrip("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    }

    #[test]
    fn roundtrip_endgame() {
        roundtrip("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1");
    }

    #[test]
    fn roundtrip_black_to_move() {
        roundtrip("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");
    }

    #[test]
    fn starting_position_matches_fen() {
        let from_fen: GameState = STARTING_FEN.parse().unwrap();
        assert_eq!(GameState::new(), from_fen);
        assert_eq!(Board::starting_position().placement(), STARTING_FEN.split(' ').next().unwrap());
    }

    #[test]
    fn debug_shows_fen() {
        let state = GameState::new();
        assert_eq!(format!("{state:?}"), format!("GameState(\"{STARTING_FEN}\")"));
    }

    #[test]
    fn error_wrong_field_count() {
        assert_eq!(
            "e4 e5".parse::<GameState>(),
            Err(FenError::WrongFieldCount { found: 2 })
        );
    }

    #[test]
    fn error_invalid_piece_char() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPXPPP/RNBQKBNR w KQkq - 0 1".parse::<GameState>();
        assert_eq!(result, Err(FenError::InvalidPieceChar { character: 'X' }));
    }

    #[test]
    fn error_bad_rank_length() {
        let result = "rnbqkbnr/ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<GameState>();
        assert_eq!(
            result,
            Err(FenError::BadRankLength {
                rank_index: 1,
                length: 7
            })
        );
        let result = "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1".parse::<GameState>();
        assert!(result.is_err());
    }

    #[test]
    fn error_invalid_side() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1".parse::<GameState>();
        assert!(matches!(result, Err(FenError::InvalidSide { .. })));
    }

    #[test]
    fn error_invalid_castling() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1".parse::<GameState>();
        assert_eq!(result, Err(FenError::InvalidCastlingChar { character: 'X' }));
    }

    #[test]
    fn error_invalid_en_passant() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1".parse::<GameState>();
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
        // e3 is a target for Black to use, not White.
        let result = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e3 0 1".parse::<GameState>();
        assert!(matches!(result, Err(FenError::InvalidEnPassant { .. })));
    }

    #[test]
    fn error_invalid_move_counter() {
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - abc 1".parse::<GameState>();
        assert!(matches!(result, Err(FenError::InvalidMoveCounter { .. })));
        let result = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0".parse::<GameState>();
        assert!(matches!(
            result,
            Err(FenError::InvalidMoveCounter {
                field: "fullmove number",
                ..
            })
        ));
    }

    #[test]
    fn error_missing_king() {
        let result = "8/8/8/8/8/8/8/4K3 w - - 0 1".parse::<GameState>();
        assert_eq!(
            result,
            Err(FenError::InvalidBoard {
                source: BoardError::InvalidKingCount {
                    side: "black",
                    count: 0
                }
            })
        );
    }

    #[test]
    fn en_passant_field_is_kept() {
        let state: GameState = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1".parse().unwrap();
        assert_eq!(state.en_passant(), Some(Square::D6));
    }

    #[test]
    fn error_side_not_on_turn_in_check() {
        // Black to move while the white king stands in the rook's line.
        let result = "4k3/8/8/8/8/8/8/4K2r b - - 0 1".parse::<GameState>();
        assert_eq!(result, Err(FenError::OpponentInCheck { side: "white" }));
        // The same placement is fine with White to move.
        assert!("4k3/8/8/8/8/8/8/4K2r w - - 0 1".parse::<GameState>().is_ok());
    }
}

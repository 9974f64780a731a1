//! Line-oriented command shell driving a [`Session`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{GameState, Move, Piece, Square};
use rookery_engine::{ledger_value, SelectionPolicy};

use crate::command::{parse_command, Command, Setting};
use crate::error::CliError;
use crate::session::{SelectOutcome, Session, SessionConfig};

const HELP: &str = "\
commands:
  new                     start a new game
  fen <fen>               start from a FEN position
  show                    print the board
  select <sq>             select a piece, or move the selected piece to <sq>
  moves <sq>              list legal destinations of the piece on <sq>
  move <from> <to>        play a move (also <from><to>, or just e2e4)
  bot                     let the opponent move for the side to move
  undo                    take back the last move
  history                 print the move log
  captured                print captured pieces
  status                  print the game status
  set mode bot|pvp
  set side white|black
  set seed <n>
  set topk <n>
  set margin <cp>
  quit";

/// Reads commands line by line and prints results.
pub struct Shell {
    session: Session,
}

impl Shell {
    pub fn new(config: SessionConfig) -> Shell {
        Shell {
            session: Session::new(config),
        }
    }

    /// The session being driven.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run on stdin/stdout until `quit` or end of input.
    pub fn run(self) -> Result<(), CliError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run over arbitrary input and output until `quit` or end of input.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), CliError> {
        writeln!(out, "{}", self.session.view())?;

        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let cmd = match parse_command(trimmed) {
                Ok(cmd) => cmd,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                    continue;
                }
            };

            match cmd {
                Command::New => {
                    self.session.reset();
                    writeln!(out, "{}", self.session.view())?;
                }
                Command::Fen(state) => self.handle_fen(*state, &mut out)?,
                Command::Show => writeln!(out, "{}", self.session.view())?,
                Command::Select(sq) => self.handle_select(sq, &mut out)?,
                Command::Moves(sq) => self.handle_moves(sq, &mut out)?,
                Command::Move(mv) => self.handle_move(mv, &mut out)?,
                Command::Bot => self.handle_bot(&mut out)?,
                Command::Undo => {
                    if self.session.undo() {
                        writeln!(out, "{}", self.session.view())?;
                    } else {
                        writeln!(out, "nothing to undo")?;
                    }
                }
                Command::History => self.handle_history(&mut out)?,
                Command::Captured => self.handle_captured(&mut out)?,
                Command::Status => writeln!(out, "{}", self.session.state().status())?,
                Command::Set(setting) => self.handle_set(setting, &mut out)?,
                Command::Help => writeln!(out, "{HELP}")?,
                Command::Quit => break,
                Command::Unknown(name) => {
                    warn!(cmd = %name, "unknown command");
                    writeln!(out, "unknown command: {name} (try help)")?;
                }
            }
            out.flush()?;
        }

        info!("rookery shutting down");
        Ok(())
    }

    fn handle_fen<W: Write>(&mut self, state: GameState, out: &mut W) -> Result<(), CliError> {
        self.session.load(state);
        writeln!(out, "{}", self.session.view())?;
        Ok(())
    }

    fn handle_select<W: Write>(&mut self, sq: Square, out: &mut W) -> Result<(), CliError> {
        match self.session.select(sq) {
            SelectOutcome::Selected(from) => {
                let targets = self.session.destinations();
                writeln!(out, "selected {from}: {}", join_squares(targets.as_slice()))?;
            }
            SelectOutcome::Moved(_) => writeln!(out, "{}", self.session.view())?,
            SelectOutcome::Cleared => writeln!(out, "selection cleared")?,
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, sq: Square, out: &mut W) -> Result<(), CliError> {
        let targets = self.session.destinations_of(sq);
        writeln!(out, "{sq}: {}", join_squares(targets.as_slice()))?;
        Ok(())
    }

    fn handle_move<W: Write>(&mut self, mv: Move, out: &mut W) -> Result<(), CliError> {
        if self.session.play(mv.from, mv.to) {
            writeln!(out, "{}", self.session.view())?;
        } else {
            writeln!(out, "illegal move: {mv}")?;
        }
        Ok(())
    }

    fn handle_bot<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        match self.session.opponent_move() {
            Ok(mv) => {
                writeln!(out, "bot plays {mv}")?;
                writeln!(out, "{}", self.session.view())?;
            }
            Err(e) => {
                warn!(error = %e, "opponent could not move");
                writeln!(out, "error: {e}")?;
            }
        }
        Ok(())
    }

    fn handle_history<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        for (ply, entry) in self.session.view().history.chunks(2).enumerate() {
            let white = entry.first().map_or("", String::as_str);
            let black = entry.get(1).map_or("", String::as_str);
            writeln!(out, "{}. {white} {black}", ply + 1)?;
        }
        Ok(())
    }

    fn handle_captured<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let view = self.session.view();
        for (side, ledger) in [("white", view.captured_by_white), ("black", view.captured_by_black)] {
            writeln!(
                out,
                "{side} captured: {} ({} cp)",
                join_pieces(ledger),
                ledger_value(ledger)
            )?;
        }
        Ok(())
    }

    fn handle_set<W: Write>(&mut self, setting: Setting, out: &mut W) -> Result<(), CliError> {
        match setting {
            Setting::Mode(mode) => self.session.set_mode(mode),
            Setting::Side(side) => self.session.set_human_side(side),
            Setting::Seed(seed) => self.session.set_seed(seed),
            Setting::TopK(k) => self.session.set_policy(SelectionPolicy::TopK(k)),
            Setting::Margin(cp) => self.session.set_policy(SelectionPolicy::Margin(cp)),
        }
        let config = self.session.config();
        info!(
            mode = %config.mode,
            human = config.human_side.name(),
            policy = %config.selector.policy,
            "settings changed"
        );
        writeln!(
            out,
            "mode {}, human plays {}, opponent picks {}",
            config.mode,
            config.human_side.name(),
            config.selector.policy
        )?;
        Ok(())
    }
}

fn join_squares(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "-".to_string();
    }
    squares.iter().map(Square::to_string).collect::<Vec<_>>().join(" ")
}

fn join_pieces(pieces: &[Piece]) -> String {
    if pieces.is_empty() {
        return "-".to_string();
    }
    pieces.iter().map(Piece::to_string).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::{join_pieces, join_squares};
    use rookery_core::{Piece, Square};

    #[test]
    fn join_empty_is_dash() {
        assert_eq!(join_squares(&[]), "-");
        assert_eq!(join_pieces(&[]), "-");
    }

    #[test]
    fn join_lists() {
        assert_eq!(join_squares(&[Square::E3, Square::E4]), "e3 e4");
        assert_eq!(join_pieces(&[Piece::WHITE_PAWN, Piece::BLACK_PAWN]), "P p");
    }
}

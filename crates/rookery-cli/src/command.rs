//! Shell command parsing.

use rookery_core::{GameState, Move, Side, Square};

use crate::error::CliError;
use crate::session::Mode;

/// A runtime setting changed with `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// `set mode bot|pvp`
    Mode(Mode),
    /// `set side white|black`: the side the human plays in bot mode.
    Side(Side),
    /// `set seed <n>`: reseed the opponent's random source.
    Seed(u64),
    /// `set topk <n>`
    TopK(usize),
    /// `set margin <cp>`
    Margin(i32),
}

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `new`: start over from the initial position.
    New,
    /// `fen <fen>`: start over from a given position.
    Fen(Box<GameState>),
    /// `show`: print the board and game status.
    Show,
    /// `select <sq>`: pick a piece, or move the picked piece to `<sq>`.
    Select(Square),
    /// `moves <sq>`: list legal destinations of the piece on `<sq>`.
    Moves(Square),
    /// `move <from> <to>`, `move <from><to>` or bare `<from><to>`.
    Move(Move),
    /// `bot`: let the opponent move for the side to move.
    Bot,
    /// `undo`: take back the last move (the last two against the bot).
    Undo,
    /// `history`: print the move log.
    History,
    /// `captured`: print each side's captured pieces.
    Captured,
    /// `status`: print normal/check/checkmate/stalemate.
    Status,
    /// `set <name> <value>`
    Set(Setting),
    /// `help`: list commands.
    Help,
    /// `quit`: exit the shell.
    Quit,
    /// Unrecognized command (logged and ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Ok(Command::Unknown(String::new()));
    };
    let args = &tokens[1..];

    match head {
        "new" | "reset" => Ok(Command::New),
        "fen" => parse_fen(args),
        "show" | "board" => Ok(Command::Show),
        "select" => Ok(Command::Select(square_arg("select", args)?)),
        "moves" => Ok(Command::Moves(square_arg("moves", args)?)),
        "move" => parse_move(args),
        "bot" | "go" => Ok(Command::Bot),
        "undo" => Ok(Command::Undo),
        "history" => Ok(Command::History),
        "captured" => Ok(Command::Captured),
        "status" => Ok(Command::Status),
        "set" => parse_set(args),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        // A bare coordinate move such as `e2e4`.
        other if tokens.len() == 1 && (4..=5).contains(&other.len()) => match other.parse::<Move>() {
            Ok(mv) => Ok(Command::Move(mv)),
            Err(_) => Ok(Command::Unknown(other.to_string())),
        },
        other => Ok(Command::Unknown(other.to_string())),
    }
}

fn square_arg(command: &'static str, args: &[&str]) -> Result<Square, CliError> {
    let text = args.first().ok_or(CliError::MissingArgument {
        command,
        what: "square",
    })?;
    Ok(text.parse()?)
}

/// FEN is 6 space-separated fields.
fn parse_fen(args: &[&str]) -> Result<Command, CliError> {
    if args.is_empty() {
        return Err(CliError::MissingArgument {
            command: "fen",
            what: "FEN string",
        });
    }
    let state: GameState = args.join(" ").parse()?;
    Ok(Command::Fen(Box::new(state)))
}

fn parse_move(args: &[&str]) -> Result<Command, CliError> {
    match args {
        [] => Err(CliError::MissingArgument {
            command: "move",
            what: "move",
        }),
        [coord] => Ok(Command::Move(coord.parse()?)),
        [from, to, ..] => {
            let from: Square = from.parse()?;
            let to: Square = to.parse()?;
            Ok(Command::Move(Move::new(from, to)))
        }
    }
}

fn parse_set(args: &[&str]) -> Result<Command, CliError> {
    let (Some(&name), Some(&value)) = (args.first(), args.get(1)) else {
        return Err(CliError::MissingArgument {
            command: "set",
            what: "name and value",
        });
    };

    let setting = match name {
        "mode" => match value {
            "bot" => Setting::Mode(Mode::Bot),
            "pvp" => Setting::Mode(Mode::PvP),
            _ => return Err(invalid("mode", value)),
        },
        "side" => match value {
            "white" | "w" => Setting::Side(Side::White),
            "black" | "b" => Setting::Side(Side::Black),
            _ => return Err(invalid("side", value)),
        },
        "seed" => Setting::Seed(value.parse().map_err(|_| invalid("seed", value))?),
        "topk" => Setting::TopK(value.parse().map_err(|_| invalid("topk", value))?),
        "margin" => Setting::Margin(value.parse().map_err(|_| invalid("margin", value))?),
        other => {
            return Err(CliError::UnknownSetting {
                name: other.to_string(),
            });
        }
    };
    Ok(Command::Set(setting))
}

fn invalid(name: &'static str, value: &str) -> CliError {
    CliError::InvalidSetting {
        name,
        value: value.to_string(),
    }
}

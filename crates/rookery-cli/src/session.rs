//! A game session: the position, the piece selection, undo, and the
//! automated opponent.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

use rookery_core::{
    legal_destinations, Board, GameState, GameStatus, Move, Piece, Side, Square, SquareList,
};
use rookery_engine::{select_move, SelectError, SelectionPolicy, SelectorConfig};

/// Who plays the side the human does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The move selector answers every human move.
    Bot,
    /// Both sides are entered by hand.
    PvP,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Bot => f.write_str("bot"),
            Mode::PvP => f.write_str("pvp"),
        }
    }
}

/// Session knobs adjustable via `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: Mode,
    /// The side entered by hand in [`Mode::Bot`].
    pub human_side: Side,
    /// Seed for the opponent's random source. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub selector: SelectorConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            mode: Mode::Bot,
            human_side: Side::White,
            seed: None,
            selector: SelectorConfig::default(),
        }
    }
}

/// What a [`Session::select`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A piece of the side to move is now selected.
    Selected(Square),
    /// The selected piece was moved to the square.
    Moved(Move),
    /// Nothing usable was clicked; the selection is now empty.
    Cleared,
}

/// One game in progress.
pub struct Session {
    state: GameState,
    /// Earlier positions with the last move that led to each.
    undo: Vec<(GameState, Option<Move>)>,
    selected: Option<Square>,
    last_move: Option<Move>,
    config: SessionConfig,
    rng: StdRng,
}

impl Session {
    /// Start a session from the initial position.
    pub fn new(config: SessionConfig) -> Session {
        let rng = seeded_rng(config.seed);
        info!(mode = %config.mode, human = config.human_side.name(), "session started");
        let mut session = Session {
            state: GameState::new(),
            undo: Vec::new(),
            selected: None,
            last_move: None,
            config,
            rng,
        };
        session.bot_reply();
        session
    }

    /// The current position.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The selected square, if any.
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Handle a click on `sq`.
    ///
    /// If `sq` is a legal destination of the selected piece, the move is
    /// played. Otherwise a piece of the side to move on `sq` becomes the
    /// selection. Anything else clears the selection.
    pub fn select(&mut self, sq: Square) -> SelectOutcome {
        if let Some(from) = self.selected {
            if self.destinations().contains(sq) {
                let mv = Move::new(from, sq);
                if self.play(from, sq) {
                    return SelectOutcome::Moved(mv);
                }
                return SelectOutcome::Cleared;
            }
        }

        if !self.is_human_turn() {
            warn!(square = %sq, "not your turn");
            self.selected = None;
            return SelectOutcome::Cleared;
        }

        if self.state.board().side_at(sq) == Some(self.state.side_to_move()) {
            self.selected = Some(sq);
            return SelectOutcome::Selected(sq);
        }

        warn!(square = %sq, "nothing to select");
        self.selected = None;
        SelectOutcome::Cleared
    }

    /// Legal destinations of the selected piece.
    pub fn destinations(&self) -> SquareList {
        match self.selected {
            Some(from) => self.destinations_of(from),
            None => SquareList::new(),
        }
    }

    /// Legal destinations of the piece on `sq`. Empty for an empty square or
    /// a piece of the side not to move.
    pub fn destinations_of(&self, sq: Square) -> SquareList {
        legal_destinations(&self.state, sq)
    }

    /// Play `from` -> `to` for the human.
    ///
    /// Returns `false` and leaves the position unchanged if the move is
    /// illegal or it is the opponent's turn in [`Mode::Bot`]. In bot mode a
    /// successful move is answered at once.
    pub fn play(&mut self, from: Square, to: Square) -> bool {
        let mv = Move::new(from, to);
        self.selected = None;

        if !self.is_human_turn() {
            warn!(mv = %mv, "not your turn");
            return false;
        }

        let next = match self.state.play(mv) {
            Ok(next) => next,
            Err(err) => {
                warn!(%err, "move rejected");
                return false;
            }
        };
        self.advance(next, mv);
        self.bot_reply();
        true
    }

    /// Let the selector move for the side to move.
    ///
    /// # Errors
    ///
    /// [`SelectError::NoLegalMoves`] if the game is over.
    pub fn opponent_move(&mut self) -> Result<Move, SelectError> {
        let side = self.state.side_to_move();
        let mv = select_move(&self.state, side, &self.config.selector, &mut self.rng)?;
        let next = self.state.make_move(mv);
        self.selected = None;
        self.advance(next, mv);
        Ok(mv)
    }

    /// Take back the last move. In bot mode, keep taking back until the
    /// human is on turn again.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.pop() {
            warn!("nothing to undo");
            return false;
        }
        if self.config.mode == Mode::Bot {
            while self.state.side_to_move() != self.config.human_side && self.pop() {}
        }
        self.selected = None;
        true
    }

    /// Start over from the initial position.
    pub fn reset(&mut self) {
        info!("new game");
        self.load(GameState::new());
    }

    /// Start over from `state`. The undo stack is emptied.
    pub fn load(&mut self, state: GameState) {
        self.state = state;
        self.undo.clear();
        self.selected = None;
        self.last_move = None;
        self.bot_reply();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.config.mode = mode;
        self.bot_reply();
    }

    pub fn set_human_side(&mut self, side: Side) {
        self.config.human_side = side;
        self.selected = None;
        self.bot_reply();
    }

    /// Reseed the opponent's random source.
    pub fn set_seed(&mut self, seed: u64) {
        self.config.seed = Some(seed);
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn set_policy(&mut self, policy: SelectionPolicy) {
        self.config.selector.policy = policy;
    }

    /// A read-only snapshot for display.
    pub fn view(&self) -> View<'_> {
        View {
            board: self.state.board(),
            side_to_move: self.state.side_to_move(),
            status: self.state.status(),
            winner: self.state.winner(),
            captured_by_white: self.state.captured_by(Side::White),
            captured_by_black: self.state.captured_by(Side::Black),
            history: self.state.history(),
            last_move: self.last_move,
            selected: self.selected,
        }
    }

    fn is_human_turn(&self) -> bool {
        self.config.mode == Mode::PvP || self.state.side_to_move() == self.config.human_side
    }

    fn advance(&mut self, next: GameState, mv: Move) {
        let prev = std::mem::replace(&mut self.state, next);
        self.undo.push((prev, self.last_move));
        self.last_move = Some(mv);

        let status = self.state.status();
        if status.is_terminal() {
            info!(%status, winner = ?self.state.winner(), "game over");
        }
    }

    fn pop(&mut self) -> bool {
        let Some((prev, last_move)) = self.undo.pop() else {
            return false;
        };
        self.state = prev;
        self.last_move = last_move;
        true
    }

    /// In bot mode, move for the opponent while it is on turn.
    fn bot_reply(&mut self) {
        if self.config.mode != Mode::Bot || self.is_human_turn() {
            return;
        }
        if self.state.status().is_terminal() {
            return;
        }
        if let Err(err) = self.opponent_move() {
            warn!(%err, "opponent could not move");
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, Copy)]
pub struct View<'a> {
    pub board: &'a Board,
    pub side_to_move: Side,
    pub status: GameStatus,
    pub winner: Option<Side>,
    pub captured_by_white: &'a [Piece],
    pub captured_by_black: &'a [Piece],
    pub history: &'a [String],
    pub last_move: Option<Move>,
    pub selected: Option<Square>,
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.pretty())?;
        write!(f, "{} to move, {}", self.side_to_move.name(), self.status)?;
        if let Some(winner) = self.winner {
            write!(f, ", {} wins", winner.name())?;
        }
        if let Some(mv) = self.last_move {
            write!(f, "\nlast move: {mv}")?;
        }
        if let Some(sq) = self.selected {
            write!(f, "\nselected: {sq}")?;
        }
        Ok(())
    }
}

//! Move selection for rookery's automated opponent.

pub mod config;
pub mod error;
pub mod eval;
pub mod select;

pub use config::{SelectionPolicy, SelectorConfig};
pub use error::SelectError;
pub use eval::material::ledger_value;
pub use eval::score_move;
pub use select::{score_moves, select_move, ScoredMove};

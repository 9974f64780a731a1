//! Shell and session errors.

use rookery_core::{FenError, ParseMoveError, ParseSquareError};

/// Errors that can occur while reading and parsing shell commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command was given without a required argument.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// What was expected.
        what: &'static str,
    },

    /// A square argument is not `a1`..`h8`.
    #[error(transparent)]
    InvalidSquare(#[from] ParseSquareError),

    /// A move argument is not coordinate text.
    #[error(transparent)]
    InvalidMove(#[from] ParseMoveError),

    /// Failed to parse a FEN string.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        /// The underlying parse error.
        #[from]
        source: FenError,
    },

    /// `set` named a setting that does not exist.
    #[error("unknown setting: {name}")]
    UnknownSetting {
        /// The setting name as typed.
        name: String,
    },

    /// `set` was given a value the setting cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidSetting {
        /// The setting name.
        name: &'static str,
        /// The value as typed.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

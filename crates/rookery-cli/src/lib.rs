//! Interactive session and command shell for rookery.

pub mod command;
pub mod error;
pub mod session;
pub mod shell;

pub use command::{parse_command, Command, Setting};
pub use error::CliError;
pub use session::{Mode, SelectOutcome, Session, SessionConfig, View};
pub use shell::Shell;

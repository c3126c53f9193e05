//! Query shell
//!
//! Line-oriented console exposing every provider operation over a byte stream.

pub mod handler;
pub mod parser;
pub mod session;

pub use handler::{CommandResult, CommandStatus, handle_command};
pub use parser::{Command, parse_command};
pub use session::run_session;

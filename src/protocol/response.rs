//! Response definitions
//!
//! Status answers to mutating commands.

use crate::error::{ConquestError, Result};

/// The success token sent by the server
pub const OK: &str = "OK";

/// Outcome of a mutating command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Ok,

    /// Any other answer; the server's text is kept verbatim
    Rejected(String),
}

impl Status {
    /// Interpret a response line
    pub fn parse(line: &str) -> Self {
        if line == OK {
            Status::Ok
        } else {
            Status::Rejected(line.to_string())
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    /// Turn a rejection into a `CommandRejected` error for `command`
    pub fn into_result(self, command: &str) -> Result<()> {
        match self {
            Status::Ok => Ok(()),
            Status::Rejected(reason) => Err(ConquestError::CommandRejected {
                command: command.to_string(),
                reason,
            }),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Ok => f.write_str(OK),
            Status::Rejected(reason) => f.write_str(reason),
        }
    }
}

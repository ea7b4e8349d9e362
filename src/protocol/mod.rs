//! Protocol Module
//!
//! Defines the newline-delimited text protocol spoken with the game server.
//!
//! ## Request Format
//! ```text
//! VERB|arg1|arg2|...\n
//! ```
//!
//! ### Commands
//! - `PLAYER|name|r|g|b`              register the controlled player
//! - `STATUS`                         request the JSON world document
//! - `MOVE|attacker|defender|strength` attack, move, or (same country) reinforce
//! - `END`                            end the current turn
//!
//! ## Response Format
//! Exactly one line per command. Mutating commands answer `OK` or an error
//! string; `STATUS` answers with the JSON world document on a single line.

mod command;
mod response;
mod codec;

pub use command::Command;
pub use response::Status;
pub use codec::{read_line, sanitize, write_line};

//! Command definitions
//!
//! Represents the requests a client may send.

use crate::config::Color;

/// Field separator on the wire
pub const SEPARATOR: char = '|';

/// An outgoing request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a player with a display colour
    Player { name: String, color: Color },

    /// Request the full world state
    Status,

    /// Attack or move troops; attacker == defender means reinforcement
    Move {
        attacker: String,
        defender: String,
        strength: u32,
    },

    /// End the current turn
    End,
}

impl Command {
    /// Same-country move, which the server treats as reinforcement
    pub fn reinforcement(country: impl Into<String>, strength: u32) -> Self {
        let country = country.into();
        Command::Move {
            attacker: country.clone(),
            defender: country,
            strength,
        }
    }

    /// The leading field of the encoded command
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Player { .. } => "PLAYER",
            Command::Status => "STATUS",
            Command::Move { .. } => "MOVE",
            Command::End => "END",
        }
    }

    /// Encode to the pipe-separated wire text (without the line terminator)
    pub fn encode(&self) -> String {
        match self {
            Command::Player { name, color } => format!(
                "{}{sep}{}{sep}{}{sep}{}{sep}{}",
                self.verb(),
                name,
                color.r,
                color.g,
                color.b,
                sep = SEPARATOR
            ),
            Command::Move {
                attacker,
                defender,
                strength,
            } => format!(
                "{}{sep}{}{sep}{}{sep}{}",
                self.verb(),
                attacker,
                defender,
                strength,
                sep = SEPARATOR
            ),
            Command::Status | Command::End => self.verb().to_string(),
        }
    }

    /// Whether this is a same-country move
    pub fn is_reinforcement(&self) -> bool {
        matches!(self, Command::Move { attacker, defender, .. } if attacker == defender)
    }
}

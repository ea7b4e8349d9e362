//! Command Driver
//!
//! Serializes every request/response round trip over the shared transport.

use parking_lot::Mutex;

use crate::config::{Color, Config};
use crate::error::Result;
use crate::network::transport::{TcpTransport, Transport};
use crate::protocol::{sanitize, Command, Status};
use crate::world::{self, WorldSnapshot};

/// Client for the game server
///
/// ## Concurrency Model: one round trip in flight
///
/// The server answers commands strictly in the order it receives them, so a
/// send and the read of its answer must happen without any other caller's
/// send in between. `transport` is locked for the whole send-then-read cycle
/// and released right after; the lock is never held across sleeps or across
/// several round trips. Waiting callers are served in lock order.
pub struct Client<T: Transport> {
    transport: Mutex<T>,
}

impl Client<TcpTransport> {
    /// Connect to the server named in `config`
    pub fn connect(config: &Config) -> Result<Self> {
        let transport = TcpTransport::connect(
            &config.server_addr,
            config.read_timeout_ms,
            config.write_timeout_ms,
        )?;
        Ok(Self::new(transport))
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
        }
    }

    /// Send one command line and return its response line
    ///
    /// Newlines and carriage returns are stripped from `command_text` rather
    /// than rejected.
    pub fn execute(&self, command_text: &str) -> Result<String> {
        let line = sanitize(command_text);

        let response = {
            let mut transport = self.transport.lock();
            transport.send_line(&line)?;
            transport.read_line()?
        };

        tracing::trace!(command = %line, response_len = response.len(), "round trip");
        Ok(response)
    }

    /// Encode and execute a typed command
    pub fn send(&self, command: &Command) -> Result<String> {
        self.execute(&command.encode())
    }

    fn send_for_status(&self, command: &Command) -> Result<Status> {
        self.send(command).map(|line| Status::parse(&line))
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// `PLAYER|name|r|g|b`
    pub fn add_player(&self, name: &str, color: Color) -> Result<Status> {
        self.send_for_status(&Command::Player {
            name: name.to_string(),
            color,
        })
    }

    /// `STATUS`, returning the raw JSON text
    pub fn world_status(&self) -> Result<String> {
        self.send(&Command::Status)
    }

    /// `STATUS`, decoded
    pub fn world(&self) -> Result<WorldSnapshot> {
        world::decode(&self.world_status()?)
    }

    /// `MOVE|attacker|defender|strength`
    ///
    /// The server decides between attack and move by who occupies `defender`.
    pub fn attack_or_move(&self, attacker: &str, defender: &str, strength: u32) -> Result<Status> {
        self.send_for_status(&Command::Move {
            attacker: attacker.to_string(),
            defender: defender.to_string(),
            strength,
        })
    }

    /// Same-country `MOVE`
    pub fn reinforcement(&self, country: &str, strength: u32) -> Result<Status> {
        self.attack_or_move(country, country, strength)
    }

    /// `END`
    pub fn end_turn(&self) -> Result<Status> {
        self.send_for_status(&Command::End)
    }
}

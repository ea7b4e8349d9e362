//! Configuration for the conquest client
//!
//! Centralized configuration with sensible defaults. Everything here is fixed
//! at startup; nothing is mutated once the control loop is running.

use std::time::Duration;

use crate::error::{ConquestError, Result};

/// Registration colour sent with the `PLAYER` command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(252, 3, 236)
    }
}

/// Main configuration for a client instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// Game server address (host:port)
    pub server_addr: String,

    /// Connection read timeout (milliseconds, 0 = block until the server answers)
    pub read_timeout_ms: u64,

    /// Connection write timeout (milliseconds, 0 = no timeout)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Player Configuration
    // -------------------------------------------------------------------------
    /// Name registered with the server; the turn predicate compares against it
    pub player_name: String,

    /// Colour registered with the server
    pub color: Color,

    // -------------------------------------------------------------------------
    // Pacing Configuration
    // -------------------------------------------------------------------------
    /// Delay before every STATUS poll (milliseconds)
    pub poll_interval_ms: u64,

    /// Delay between the last order of a turn and END (milliseconds)
    pub action_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:1234".to_string(),
            read_timeout_ms: 0,
            write_timeout_ms: 0,
            player_name: "Conquest Bot".to_string(),
            color: Color::default(),
            poll_interval_ms: 300,
            action_delay_ms: 400,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn action_delay(&self) -> Duration {
        Duration::from_millis(self.action_delay_ms)
    }

    /// Check the values that would otherwise break the wire framing
    pub fn validate(&self) -> Result<()> {
        if self.server_addr.trim().is_empty() {
            return Err(ConquestError::Config("server address is empty".to_string()));
        }

        let name = self.player_name.as_str();
        if name.trim().is_empty() {
            return Err(ConquestError::Config("player name is empty".to_string()));
        }
        // The server trims names on registration; an untrimmed name would
        // never match the head of the player queue
        if name.trim() != name {
            return Err(ConquestError::Config(format!(
                "player name {:?} has leading or trailing whitespace",
                self.player_name
            )));
        }
        if name.contains(['|', '\n', '\r']) {
            return Err(ConquestError::Config(format!(
                "player name {:?} contains a reserved character",
                self.player_name
            )));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the game server address (host:port)
    pub fn server_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.server_addr = addr.into();
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the controlled player's name, trimmed the way the server stores it
    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.config.player_name = name.into().trim().to_string();
        self
    }

    /// Set the registration colour
    pub fn color(mut self, color: Color) -> Self {
        self.config.color = color;
        self
    }

    /// Set the STATUS poll interval (in milliseconds)
    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms;
        self
    }

    /// Set the delay before END (in milliseconds)
    pub fn action_delay_ms(mut self, ms: u64) -> Self {
        self.config.action_delay_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

//! Error types for the conquest client
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using ConquestError
pub type Result<T> = std::result::Result<T, ConquestError>;

/// Unified error type for conquest client operations
#[derive(Debug, Error)]
pub enum ConquestError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    /// Connect failure, closed stream, or a failed read/write.
    #[error("Connection error: {0}")]
    Connection(#[from] std::io::Error),

    /// The stream ended before a complete response line arrived.
    #[error("Protocol error: {0}")]
    Protocol(String),

    // -------------------------------------------------------------------------
    // World State Errors
    // -------------------------------------------------------------------------
    #[error("Malformed world state: {0}")]
    MalformedState(String),

    // -------------------------------------------------------------------------
    // Server Rejections
    // -------------------------------------------------------------------------
    #[error("Command `{command}` rejected by server: {reason}")]
    CommandRejected { command: String, reason: String },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConquestError {
    /// Whether the error leaves the connection unusable
    ///
    /// Rejections are routine game-level answers; everything else means the
    /// control loop can no longer trust what it reads from the server.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, ConquestError::CommandRejected { .. })
    }
}

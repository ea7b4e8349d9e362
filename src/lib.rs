//! # Conquest Client
//!
//! Remote-control client for a turn-based territory-conquest game server:
//! - One persistent TCP connection, newline-delimited text commands
//! - Mutex-guarded round trips, safe to share between threads
//! - Typed decoding of the JSON world snapshot
//! - A polling turn loop driving a pluggable strategy
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Turn Control Loop                          │
//! │          (poll, detect turn, run strategy, END)              │
//! └──────────────┬───────────────────────────────┬──────────────┘
//!                │                               │
//!                ▼                               ▼
//!   ┌────────────────────────┐        ┌─────────────────────┐
//!   │     Command Driver     │───────▶│   World Decoder     │
//!   │ (one round trip held)  │ STATUS │  (serde snapshot)   │
//!   └───────────┬────────────┘        └─────────────────────┘
//!               │
//!               ▼
//!   ┌────────────────────────┐
//!   │       Transport        │
//!   │   (TCP, line codec)    │
//!   └───────────┬────────────┘
//!               ▼
//!          game server
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod world;
pub mod strategy;
pub mod controller;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ConquestError, Result};
pub use config::{Color, Config};
pub use network::{Client, TcpTransport, Transport};
pub use controller::{TurnController, TurnReport};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Network Module
//!
//! The single server connection and the command driver that guards it.
//!
//! ## Architecture
//! - One `Transport` per process, opened at startup
//! - `Client` owns it behind a mutex; every round trip holds the lock
//! - Any number of threads may share an `Arc<Client<_>>`

mod transport;
mod client;

pub use transport::{TcpTransport, Transport};
pub use client::Client;

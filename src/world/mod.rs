//! World Module
//!
//! Decoding of the `STATUS` JSON document into a typed snapshot, plus the
//! read-only views the control loop and strategies work from.
//!
//! A snapshot is rebuilt from scratch on every poll; nothing is carried over
//! between polls.

mod snapshot;
mod holdings;

pub use snapshot::{decode, Army, Continent, Country, Player, PlayerColor, WorldSnapshot};
pub use holdings::Holdings;

//! Strategy Module
//!
//! Decision logic is pluggable: the control loop hands a strategy the decoded
//! world and the controlled player's holdings, and dispatches whatever orders
//! come back, in order. Strategies never touch the connection themselves.

mod recruit;
mod frontline;

pub use recruit::RecruitAndAdvance;
pub use frontline::Frontline;

use crate::protocol::Command;
use crate::world::{Holdings, WorldSnapshot};

/// A single in-turn action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Order {
    /// Place `strength` new troops in `country`
    Reinforce { country: String, strength: u32 },

    /// Send `strength` troops from `from` to `to`; the server decides whether
    /// that is an attack or a transfer
    AttackOrMove { from: String, to: String, strength: u32 },
}

impl Order {
    pub fn to_command(&self) -> Command {
        match self {
            Order::Reinforce { country, strength } => {
                Command::reinforcement(country.as_str(), *strength)
            }
            Order::AttackOrMove { from, to, strength } => Command::Move {
                attacker: from.clone(),
                defender: to.clone(),
                strength: *strength,
            },
        }
    }
}

/// Decides what to do with one turn
pub trait Strategy: Send {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Orders for this turn, executed in the returned order
    fn decide(&mut self, world: &WorldSnapshot, holdings: &Holdings<'_>) -> Vec<Order>;
}

impl Strategy for Box<dyn Strategy> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn decide(&mut self, world: &WorldSnapshot, holdings: &Holdings<'_>) -> Vec<Order> {
        (**self).decide(world, holdings)
    }
}

/// Built-in strategies selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StrategyKind {
    #[default]
    RecruitAndAdvance,
    Frontline,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::RecruitAndAdvance => Box::new(RecruitAndAdvance),
            StrategyKind::Frontline => Box::new(Frontline),
        }
    }
}

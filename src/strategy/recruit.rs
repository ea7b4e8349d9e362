//! Reference strategy
//!
//! Reinforce every recruiting country by one, then push one troop from each of
//! them toward its first listed neighbour. A single pass; rejected orders are
//! not retried.

use super::{Order, Strategy};
use crate::world::{Holdings, WorldSnapshot};

#[derive(Debug, Clone, Copy, Default)]
pub struct RecruitAndAdvance;

impl Strategy for RecruitAndAdvance {
    fn name(&self) -> &str {
        "recruit-and-advance"
    }

    fn decide(&mut self, _world: &WorldSnapshot, holdings: &Holdings<'_>) -> Vec<Order> {
        let reinforcements = holdings.recruiting.iter().map(|c| Order::Reinforce {
            country: c.name.clone(),
            strength: 1,
        });

        let advances = holdings.recruiting.iter().filter_map(|c| {
            c.neighbors.first().map(|neighbor| Order::AttackOrMove {
                from: c.name.clone(),
                to: neighbor.clone(),
                strength: 1,
            })
        });

        reinforcements.chain(advances).collect()
    }
}

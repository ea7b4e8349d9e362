//! Holdings
//!
//! Partition of the map from one player's point of view.

use super::snapshot::{Country, WorldSnapshot};

/// The countries a player occupies, grouped by region flag
///
/// A country appears in `mine` and in every flag subset it qualifies for.
#[derive(Debug, Clone)]
pub struct Holdings<'a> {
    pub player: &'a str,

    /// Reinforcement budget of `player` (0 if not in the queue or negative)
    pub reinforcement: u32,

    pub mine: Vec<&'a Country>,
    pub recruiting: Vec<&'a Country>,
    pub fortress: Vec<&'a Country>,
    pub border: Vec<&'a Country>,
}

impl<'a> Holdings<'a> {
    pub fn of(world: &'a WorldSnapshot, player: &'a str) -> Self {
        let mut holdings = Holdings {
            player,
            reinforcement: world.player(player).map_or(0, |p| p.available_reinforcement()),
            mine: Vec::new(),
            recruiting: Vec::new(),
            fortress: Vec::new(),
            border: Vec::new(),
        };

        for country in world.countries.values().filter(|c| c.is_held_by(player)) {
            holdings.mine.push(country);
            if country.recruiting_region {
                holdings.recruiting.push(country);
            }
            if country.fortress_region {
                holdings.fortress.push(country);
            }
            if country.border_region {
                holdings.border.push(country);
            }
        }

        holdings
    }

    pub fn is_empty(&self) -> bool {
        self.mine.is_empty()
    }
}

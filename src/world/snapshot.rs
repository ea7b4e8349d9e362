//! World snapshot
//!
//! Typed mirror of the JSON world document. Field names follow the server's
//! PascalCase keys. `Freeze`, `PlayerQueue`, `Countries` and the country and
//! player fields the control loop reads are required; everything else is
//! optional and defaults when absent.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Deserializer};

use crate::error::{ConquestError, Result};

/// Prefix the server uses when it answers STATUS with an error string
const SERVER_ERROR_PREFIX: &str = "err";

/// Decoded STATUS payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorldSnapshot {
    /// True while the server is not accepting turn actions
    pub freeze: bool,

    /// Turn order; element 0 holds the turn
    #[serde(deserialize_with = "null_as_empty")]
    pub player_queue: Vec<Player>,

    /// Keyed by country name
    pub countries: BTreeMap<String, Country>,

    #[serde(default)]
    pub round: i64,

    #[serde(default)]
    pub sub_round: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub continents: BTreeMap<String, Continent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Player {
    pub name: String,

    /// Troops still to be placed this turn; the server can hand out a
    /// negative pool at setup when many players join
    pub reinforcement: i64,

    #[serde(default)]
    pub color: PlayerColor,

    #[serde(default)]
    pub last_battle_won_round: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerColor {
    #[serde(default)]
    pub r: u8,
    #[serde(default)]
    pub g: u8,
    #[serde(default)]
    pub b: u8,
    #[serde(default)]
    pub a: u8,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Country {
    /// Filled from the map key when the document omits it
    #[serde(default)]
    pub name: String,

    /// Must be present; `null` before the server has populated the map
    #[serde(deserialize_with = "Option::deserialize")]
    pub occupier: Option<Army>,

    pub recruiting_region: bool,

    pub fortress_region: bool,

    pub border_region: bool,

    /// Adjacent country names, in server order
    #[serde(deserialize_with = "null_as_empty")]
    pub neighbors: Vec<String>,

    #[serde(default)]
    pub continent: String,

    #[serde(default)]
    pub position: Option<[i64; 2]>,

    /// Army moving in during the current turn
    #[serde(default)]
    pub invader: Option<Army>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Army {
    pub player: String,

    #[serde(default)]
    pub strength: i64,

    #[serde(default)]
    pub home_base: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Continent {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub points: i64,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub countries: Vec<String>,
}

/// Decode a STATUS payload
///
/// Either the whole document decodes or the call fails; there is no partial
/// result to act on.
pub fn decode(json: &str) -> Result<WorldSnapshot> {
    let trimmed = json.trim_start();
    if trimmed.starts_with(SERVER_ERROR_PREFIX) {
        return Err(ConquestError::MalformedState(format!(
            "server answered STATUS with an error: {}",
            json
        )));
    }

    let mut snapshot: WorldSnapshot = serde_json::from_str(json)
        .map_err(|e| ConquestError::MalformedState(e.to_string()))?;

    for (key, country) in snapshot.countries.iter_mut() {
        if country.name.is_empty() {
            country.name = key.clone();
        }
    }

    Ok(snapshot)
}

impl WorldSnapshot {
    /// The player holding the turn
    pub fn active_player(&self) -> Option<&Player> {
        self.player_queue.first()
    }

    /// Turn predicate for `name`
    ///
    /// Active only when the world is not frozen, more than one player is left
    /// (a lone survivor means the game is over) and `name` leads the queue.
    pub fn is_turn_of(&self, name: &str) -> bool {
        !self.freeze
            && self.player_queue.len() > 1
            && self.player_queue[0].name == name
    }

    pub fn country(&self, name: &str) -> Option<&Country> {
        self.countries.get(name)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.player_queue.iter().find(|p| p.name == name)
    }

    /// Hops from each country to the nearest country not held by `player`
    ///
    /// Enemy and unoccupied countries are at distance 0. Countries with no path
    /// to one (or every country, when `player` holds the whole map) are absent.
    pub fn distances_from_enemy(&self, player: &str) -> BTreeMap<&str, usize> {
        let mut distances = BTreeMap::new();
        let mut queue = VecDeque::new();

        for (name, country) in &self.countries {
            if !country.is_held_by(player) {
                distances.insert(name.as_str(), 0);
                queue.push_back(name.as_str());
            }
        }

        while let Some(current) = queue.pop_front() {
            let distance = distances[current];
            let Some(country) = self.countries.get(current) else {
                continue;
            };

            for neighbor in &country.neighbors {
                let Some((key, _)) = self.countries.get_key_value(neighbor.as_str()) else {
                    continue;
                };
                if let Entry::Vacant(slot) = distances.entry(key.as_str()) {
                    slot.insert(distance + 1);
                    queue.push_back(key.as_str());
                }
            }
        }

        distances
    }
}

impl Country {
    /// Name of the occupying player, if any
    pub fn owner(&self) -> Option<&str> {
        self.occupier.as_ref().map(|army| army.player.as_str())
    }

    pub fn is_held_by(&self, player: &str) -> bool {
        self.owner() == Some(player)
    }

    /// Occupying army strength (0 when unoccupied or negative)
    pub fn strength(&self) -> u32 {
        self.occupier.as_ref().map_or(0, |army| clamp_count(army.strength))
    }
}

impl Player {
    /// Reinforcement pool usable for orders, never negative
    pub fn available_reinforcement(&self) -> u32 {
        clamp_count(self.reinforcement)
    }
}

/// Troop counts arrive as signed integers; orders only take non-negative ones
fn clamp_count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Required key whose `null` value means "empty"
fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

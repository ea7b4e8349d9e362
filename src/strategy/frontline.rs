//! Frontline strategy
//!
//! Layers the map by distance to the nearest foreign country and works from
//! the front backwards:
//! 1. spread the reinforcement budget over the recruiting countries closest
//!    to the front (the server only recruits there)
//! 2. every front country with more than one troop attacks its weakest
//!    foreign neighbour with all but one troop; troops placed this turn
//!    arrive as invaders and cannot leave yet
//! 3. every interior country with more than one troop moves all but one
//!    toward a neighbour one step closer to the front

use std::collections::BTreeMap;

use super::{Order, Strategy};
use crate::world::{Country, Holdings, WorldSnapshot};

#[derive(Debug, Clone, Copy, Default)]
pub struct Frontline;

impl Frontline {
    /// Split `budget` as evenly as possible, earlier countries take the remainder
    fn spread<'a>(countries: &[&'a Country], budget: u32) -> BTreeMap<&'a str, u32> {
        let mut shares = BTreeMap::new();
        if countries.is_empty() || budget == 0 {
            return shares;
        }

        let n = countries.len() as u32;
        let (base, remainder) = (budget / n, budget % n);
        for (i, country) in countries.iter().enumerate() {
            let share = base + u32::from((i as u32) < remainder);
            if share > 0 {
                shares.insert(country.name.as_str(), share);
            }
        }
        shares
    }
}

impl Strategy for Frontline {
    fn name(&self) -> &str {
        "frontline"
    }

    fn decide(&mut self, world: &WorldSnapshot, holdings: &Holdings<'_>) -> Vec<Order> {
        let distances = world.distances_from_enemy(holdings.player);
        let distance_of = |name: &str| distances.get(name).copied();

        let front: Vec<&Country> = holdings
            .mine
            .iter()
            .copied()
            .filter(|c| distance_of(c.name.as_str()) == Some(1))
            .collect();

        let recruit_distance = |c: &Country| distance_of(c.name.as_str()).unwrap_or(usize::MAX);
        let nearest = holdings
            .recruiting
            .iter()
            .map(|c| recruit_distance(*c))
            .min();
        let recruits: Vec<&Country> = holdings
            .recruiting
            .iter()
            .copied()
            .filter(|c| Some(recruit_distance(*c)) == nearest)
            .collect();

        let mut orders: Vec<Order> = Self::spread(&recruits, holdings.reinforcement)
            .into_iter()
            .map(|(country, strength)| Order::Reinforce {
                country: country.to_string(),
                strength,
            })
            .collect();

        for country in &front {
            let strength = country.strength();
            if strength <= 1 {
                continue;
            }

            let weakest = country
                .neighbors
                .iter()
                .filter_map(|n| world.country(n))
                .filter(|n| !n.is_held_by(holdings.player))
                .min_by_key(|n| n.strength());

            if let Some(target) = weakest {
                orders.push(Order::AttackOrMove {
                    from: country.name.clone(),
                    to: target.name.clone(),
                    strength: strength - 1,
                });
            }
        }

        for country in &holdings.mine {
            let Some(distance) = distance_of(country.name.as_str()) else {
                continue;
            };
            if distance < 2 || country.strength() <= 1 {
                continue;
            }

            let closer = country
                .neighbors
                .iter()
                .find(|n| distance_of(n.as_str()) == Some(distance - 1));

            if let Some(to) = closer {
                orders.push(Order::AttackOrMove {
                    from: country.name.clone(),
                    to: to.clone(),
                    strength: country.strength() - 1,
                });
            }
        }

        orders
    }
}

//! Tests for the world snapshot decoder
//!
//! These tests verify:
//! - Decoding of the server's JSON document
//! - Rejection of malformed or incomplete payloads
//! - The turn predicate
//! - Holdings partitioning and distance layering

use conquest::world::{decode, Country, Holdings};
use conquest::ConquestError;

// =============================================================================
// Helper Functions
// =============================================================================

/// A small document shaped like the server's output, extra keys included
fn sample_world() -> &'static str {
    r#"{
        "NoLog": false,
        "Freeze": false,
        "Round": 3,
        "SubRound": 1,
        "Continents": {
            "South America": {"Name": "South America", "Points": 2, "Countries": ["Argentina", "Peru", "Brazil"]}
        },
        "Countries": {
            "Argentina": {
                "Name": "Argentina",
                "Position": [10, 20],
                "Neighbors": ["Peru", "Brazil"],
                "Continent": "South America",
                "BorderRegion": true,
                "FortressRegion": false,
                "RecruitingRegion": true,
                "Occupier": {"Strength": 4, "Player": "P1", "HomeBase": "Argentina"},
                "Invader": null
            },
            "Peru": {
                "Name": "Peru",
                "Neighbors": ["Argentina", "Brazil"],
                "Continent": "South America",
                "BorderRegion": false,
                "FortressRegion": true,
                "RecruitingRegion": false,
                "Occupier": {"Strength": 2, "Player": "P2", "HomeBase": "Peru"},
                "Invader": null
            },
            "Brazil": {
                "Name": "Brazil",
                "Neighbors": ["Argentina", "Peru"],
                "Continent": "South America",
                "BorderRegion": true,
                "FortressRegion": true,
                "RecruitingRegion": false,
                "Occupier": {"Strength": 1, "Player": "P1", "HomeBase": "Brazil"},
                "Invader": null
            }
        },
        "PlayerQueue": [
            {"Name": "P1", "Color": {"R": 252, "G": 3, "B": 236, "A": 255}, "Reinforcement": 5, "LastBattleWonRound": 2},
            {"Name": "P2", "Color": {"R": 0, "G": 255, "B": 0, "A": 255}, "Reinforcement": 3, "LastBattleWonRound": 0}
        ]
    }"#
}

fn world_with(freeze: bool, queue: &[&str]) -> String {
    let players: Vec<String> = queue
        .iter()
        .map(|name| format!(r#"{{"Name":"{}","Reinforcement":1}}"#, name))
        .collect();
    format!(
        r#"{{"Freeze":{},"PlayerQueue":[{}],"Countries":{{}}}}"#,
        freeze,
        players.join(",")
    )
}

fn names(list: &[&Country]) -> Vec<String> {
    list.iter().map(|c| c.name.clone()).collect()
}

fn assert_malformed(json: &str) {
    match decode(json) {
        Err(ConquestError::MalformedState(_)) => {}
        other => panic!("Expected MalformedState for {:?}, got {:?}", json, other),
    }
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_full_document() {
    let world = decode(sample_world()).unwrap();

    assert!(!world.freeze);
    assert_eq!(world.round, 3);
    assert_eq!(world.sub_round, 1);
    assert_eq!(world.player_queue.len(), 2);
    assert_eq!(world.player_queue[0].name, "P1");
    assert_eq!(world.player_queue[0].reinforcement, 5);
    assert_eq!(world.player_queue[0].color.r, 252);
    assert_eq!(world.countries.len(), 3);
    assert_eq!(world.continents["South America"].points, 2);

    let argentina = world.country("Argentina").unwrap();
    assert_eq!(argentina.owner(), Some("P1"));
    assert_eq!(argentina.strength(), 4);
    assert_eq!(argentina.neighbors, vec!["Peru", "Brazil"]);
    assert!(argentina.recruiting_region);
    assert!(argentina.border_region);
    assert!(!argentina.fortress_region);
    assert_eq!(argentina.position, Some([10, 20]));
}

#[test]
fn test_decode_fills_country_name_from_key() {
    let json = r#"{"Freeze":false,"PlayerQueue":[],"Countries":{
        "A":{"Occupier":{"Player":"P1"},"RecruitingRegion":true,"FortressRegion":false,"BorderRegion":false,"Neighbors":["B"]}
    }}"#;
    let world = decode(json).unwrap();
    assert_eq!(world.country("A").unwrap().name, "A");
}

#[test]
fn test_decode_accepts_null_occupier_and_nulls_for_empty_lists() {
    let json = r#"{"Freeze":true,"PlayerQueue":null,"Continents":null,"Countries":{
        "A":{"Occupier":null,"RecruitingRegion":false,"FortressRegion":false,"BorderRegion":false,"Neighbors":null}
    }}"#;
    let world = decode(json).unwrap();

    let a = world.country("A").unwrap();
    assert_eq!(a.owner(), None);
    assert_eq!(a.strength(), 0);
    assert!(a.neighbors.is_empty());
    assert!(world.player_queue.is_empty());
    assert!(world.continents.is_empty());
}

// =============================================================================
// Malformed Payload Tests
// =============================================================================

#[test]
fn test_decode_rejects_invalid_json() {
    assert_malformed("{not json");
    assert_malformed("");
}

#[test]
fn test_decode_rejects_missing_top_level_fields() {
    assert_malformed(r#"{"Freeze":false,"Countries":{}}"#);
    assert_malformed(r#"{"PlayerQueue":[],"Countries":{}}"#);
    assert_malformed(r#"{"Freeze":false,"PlayerQueue":[]}"#);
}

#[test]
fn test_decode_rejects_missing_player_fields() {
    assert_malformed(r#"{"Freeze":false,"PlayerQueue":[{"Name":"P1"}],"Countries":{}}"#);
    assert_malformed(r#"{"Freeze":false,"PlayerQueue":[{"Reinforcement":1}],"Countries":{}}"#);
}

#[test]
fn test_decode_rejects_missing_country_fields() {
    // Occupier key absent entirely
    assert_malformed(
        r#"{"Freeze":false,"PlayerQueue":[],"Countries":{
            "A":{"RecruitingRegion":true,"FortressRegion":false,"BorderRegion":false,"Neighbors":[]}
        }}"#,
    );
    // Occupier without a player
    assert_malformed(
        r#"{"Freeze":false,"PlayerQueue":[],"Countries":{
            "A":{"Occupier":{"Strength":3},"RecruitingRegion":true,"FortressRegion":false,"BorderRegion":false,"Neighbors":[]}
        }}"#,
    );
    // Region flag missing
    assert_malformed(
        r#"{"Freeze":false,"PlayerQueue":[],"Countries":{
            "A":{"Occupier":{"Player":"P1"},"FortressRegion":false,"BorderRegion":false,"Neighbors":[]}
        }}"#,
    );
    // Neighbors missing
    assert_malformed(
        r#"{"Freeze":false,"PlayerQueue":[],"Countries":{
            "A":{"Occupier":{"Player":"P1"},"RecruitingRegion":true,"FortressRegion":false,"BorderRegion":false}
        }}"#,
    );
}

#[test]
fn test_decode_rejects_wrong_types() {
    assert_malformed(r#"{"Freeze":"no","PlayerQueue":[],"Countries":{}}"#);
    assert_malformed(r#"{"Freeze":false,"PlayerQueue":[{"Name":"P1","Reinforcement":"many"}],"Countries":{}}"#);
}

#[test]
fn test_decode_accepts_negative_counts() {
    // Setup with many players hands out a negative pool
    let json = r#"{"Freeze":true,"Round":-1,"PlayerQueue":[{"Name":"P1","Reinforcement":-5},{"Name":"P2","Reinforcement":-5}],"Countries":{
        "A":{"Occupier":{"Player":"P1","Strength":-2},"RecruitingRegion":true,"FortressRegion":false,"BorderRegion":false,"Neighbors":[]}
    }}"#;
    let world = decode(json).unwrap();

    assert_eq!(world.player_queue[0].reinforcement, -5);
    assert_eq!(world.player_queue[0].available_reinforcement(), 0);
    assert_eq!(world.round, -1);
    assert_eq!(world.country("A").unwrap().strength(), 0);
    assert_eq!(Holdings::of(&world, "P1").reinforcement, 0);
}

#[test]
fn test_decode_rejects_server_error_string() {
    assert_malformed("err: TcpClient read: EOF");
}

// =============================================================================
// Turn Predicate Tests
// =============================================================================

#[test]
fn test_turn_active_when_leading_unfrozen_queue() {
    let world = decode(&world_with(false, &["P1", "P2"])).unwrap();
    assert!(world.is_turn_of("P1"));
    assert!(!world.is_turn_of("P2"));
    assert_eq!(world.active_player().unwrap().name, "P1");
}

#[test]
fn test_turn_inactive_for_lone_survivor() {
    let world = decode(&world_with(false, &["P1"])).unwrap();
    assert!(!world.is_turn_of("P1"));
}

#[test]
fn test_turn_inactive_while_frozen() {
    let world = decode(&world_with(true, &["P1", "P2"])).unwrap();
    assert!(!world.is_turn_of("P1"));
}

#[test]
fn test_turn_inactive_for_empty_queue() {
    let world = decode(&world_with(false, &[])).unwrap();
    assert!(!world.is_turn_of("P1"));
    assert!(world.active_player().is_none());
}

// =============================================================================
// Holdings Tests
// =============================================================================

#[test]
fn test_holdings_partition() {
    let world = decode(sample_world()).unwrap();
    let holdings = Holdings::of(&world, "P1");

    assert_eq!(holdings.player, "P1");
    assert_eq!(holdings.reinforcement, 5);
    assert_eq!(names(&holdings.mine), vec!["Argentina", "Brazil"]);
    assert_eq!(names(&holdings.recruiting), vec!["Argentina"]);
    assert_eq!(names(&holdings.fortress), vec!["Brazil"]);
    assert_eq!(names(&holdings.border), vec!["Argentina", "Brazil"]);
}

#[test]
fn test_holdings_for_unknown_player_are_empty() {
    let world = decode(sample_world()).unwrap();
    let holdings = Holdings::of(&world, "Nobody");

    assert!(holdings.is_empty());
    assert_eq!(holdings.reinforcement, 0);
}

// =============================================================================
// Distance Tests
// =============================================================================

#[test]
fn test_distances_from_enemy() {
    // Chain: A(P1) - B(P1) - C(P1) - D(P2)
    let json = r#"{"Freeze":false,"PlayerQueue":[],"Countries":{
        "A":{"Occupier":{"Player":"P1"},"RecruitingRegion":false,"FortressRegion":false,"BorderRegion":false,"Neighbors":["B"]},
        "B":{"Occupier":{"Player":"P1"},"RecruitingRegion":false,"FortressRegion":false,"BorderRegion":false,"Neighbors":["A","C"]},
        "C":{"Occupier":{"Player":"P1"},"RecruitingRegion":false,"FortressRegion":false,"BorderRegion":false,"Neighbors":["B","D"]},
        "D":{"Occupier":{"Player":"P2"},"RecruitingRegion":false,"FortressRegion":false,"BorderRegion":false,"Neighbors":["C"]}
    }}"#;
    let world = decode(json).unwrap();
    let distances = world.distances_from_enemy("P1");

    assert_eq!(distances["D"], 0);
    assert_eq!(distances["C"], 1);
    assert_eq!(distances["B"], 2);
    assert_eq!(distances["A"], 3);
}

#[test]
fn test_distances_skip_unknown_neighbors_and_unreachable() {
    let json = r#"{"Freeze":false,"PlayerQueue":[],"Countries":{
        "A":{"Occupier":{"Player":"P1"},"RecruitingRegion":false,"FortressRegion":false,"BorderRegion":false,"Neighbors":["Atlantis"]},
        "B":{"Occupier":null,"RecruitingRegion":false,"FortressRegion":false,"BorderRegion":false,"Neighbors":[]}
    }}"#;
    let world = decode(json).unwrap();
    let distances = world.distances_from_enemy("P1");

    assert_eq!(distances.get("B"), Some(&0));
    assert_eq!(distances.get("A"), None);
    assert_eq!(distances.get("Atlantis"), None);
}

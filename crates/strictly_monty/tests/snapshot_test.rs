//! Tests for the snapshot surface: prize concealment and narration.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use strictly_monty::{Decision, Door, Game, GameConfig, Phase};

fn started(seed: u64) -> Game {
    let mut game = Game::new(GameConfig::host_auto());
    game.configure(5).expect("within bounds");
    game.start_round_with(&mut SmallRng::seed_from_u64(seed));
    game
}

#[test]
fn test_prize_is_concealed_until_result() {
    let mut game = started(41);
    assert_eq!(game.snapshot().prize_door, None);

    game.select_door(Door::new(0)).expect("legal selection");
    assert_eq!(game.snapshot().prize_door, None);

    game.reveal_all().expect("host drains its schedule");
    assert_eq!(game.snapshot().phase, Phase::Decision);
    assert_eq!(game.snapshot().prize_door, None);

    game.decide(Decision::Switch).expect("legal decision");
    let snapshot = game.snapshot();
    assert_eq!(snapshot.phase, Phase::Result);
    assert!(snapshot.prize_door.is_some());
}

#[test]
fn test_concealment_holds_through_serialization() {
    let mut game = started(43);
    game.select_door(Door::new(2)).expect("legal selection");

    let json = serde_json::to_value(game.snapshot()).expect("serializable");
    assert!(json["prize_door"].is_null());
    assert_eq!(json["phase"], "Revealing");
    assert_eq!(json["door_count"], 5);
    assert_eq!(json["selected_door"], 2);
}

#[test]
fn test_narration_tracks_transitions() {
    let mut game = Game::new(GameConfig::host_auto());
    assert_eq!(
        game.status_message(),
        "Welcome to the N-Door Monty Hall Challenge!"
    );

    game.configure(5).expect("within bounds");
    game.start_round_with(&mut SmallRng::seed_from_u64(47));
    assert_eq!(game.status_message(), "Choose one of the 5 doors!");

    game.select_door(Door::new(0)).expect("legal selection");
    assert_eq!(
        game.status_message(),
        "You chose Door 1. Now, let's see what Monty does..."
    );

    let opened = game.reveal_next().expect("one scheduled door");
    assert_eq!(
        game.status_message(),
        format!("Monty opened {} - it's a goat!", opened)
    );

    game.reveal_all().expect("rest of the schedule");
    let target = game.round().switch_target().expect("on offer");
    assert!(game.status_message().contains("STICK"));
    assert!(game.status_message().contains(&target.to_string()));

    // A rejected call leaves the narration alone.
    let before = game.status_message().to_string();
    game.select_door(Door::new(1)).expect_err("wrong phase");
    assert_eq!(game.status_message(), before);
}

//! Whole-session behavior against the default world.

use dunnet_engine::{Direction, ItemLocation, Session, TurnResult, ViewItem, load_world};

fn new_session() -> Session {
    Session::new(load_world().expect("default world should load"))
}

fn run(session: &mut Session, lines: &[&str]) -> TurnResult {
    let mut last = None;
    for line in lines {
        let result = session.process_command(line).unwrap();
        assert!(!result.game_over, "game ended early on '{line}'");
        last = Some(result);
    }
    last.expect("at least one command")
}

fn placed_item_count(session: &Session) -> usize {
    let world = &session.world;
    world.rooms.values().map(|room| room.contents.len()).sum::<usize>() + world.player.inventory.len()
}

#[test]
fn take_then_drop_restores_item_and_keeps_score() {
    let mut session = new_session();
    let taken = run(&mut session, &["take shovel"]);
    assert_eq!(taken.message, "You take the shovel.");
    assert_eq!(session.world.player.score, 5);

    let dropped = run(&mut session, &["drop spade"]);
    assert_eq!(dropped.message, "You drop the shovel.");
    assert_eq!(session.world.player.score, 5);
    assert_eq!(
        session.world.locate_item("shovel"),
        Some(ItemLocation::Room("driveway".into()))
    );
    assert_eq!(placed_item_count(&session), 7);
}

#[test]
fn items_stay_in_exactly_one_place() {
    let mut session = new_session();
    let lines = [
        "take shovel", "n", "u", "take lamp", "take lamp", "d", "drop shovel", "take shovel", "e", "take food", "d",
        "take cpu", "turn on lamp", "take cpu", "take disk", "u", "drop disk",
    ];
    for line in lines {
        session.process_command(line).unwrap();
        assert_eq!(placed_item_count(&session), 7, "after '{line}'");
        session.world.check_placement().unwrap();
    }
    assert_eq!(session.world.locate_item("disk"), Some(ItemLocation::Room("kitchen".into())));
    assert_eq!(session.world.player.inventory, vec!["lamp", "shovel", "food", "cpu"]);
}

#[test]
fn basement_is_dark_until_the_lamp_is_lit() {
    let mut session = new_session();
    let arrived = run(&mut session, &["north", "east", "down"]);
    assert_eq!(session.world.player.location, "basement");
    assert_eq!(arrived.items, vec![ViewItem::TooDark]);
    assert_eq!(arrived.message, "It is too dark to see anything.");
    assert_eq!(run(&mut session, &["look"]).items, vec![ViewItem::TooDark]);
    assert_eq!(run(&mut session, &["take cpu"]).items, vec![ViewItem::TooDark]);
    assert_eq!(run(&mut session, &["examine disk"]).items, vec![ViewItem::TooDark]);
    assert!(!session.world.rooms["basement"].visited);

    // fetch the lamp, come back with it switched off
    run(&mut session, &["up", "west", "up", "take lamp", "down", "east", "down"]);
    assert_eq!(run(&mut session, &["look"]).items, vec![ViewItem::TooDark]);

    let on = run(&mut session, &["turn on lamp"]);
    assert_eq!(on.message, "You turn on the lamp.");
    let lit = run(&mut session, &["look"]);
    assert!(lit.message.contains("A computer CPU chip."));
    assert!(lit.message.contains("A floppy disk labeled 'BACKUP'."));
    assert!(session.world.rooms["basement"].visited);

    // a lamp that's on but dropped doesn't help
    run(&mut session, &["drop lamp"]);
    assert_eq!(run(&mut session, &["look"]).items, vec![ViewItem::TooDark]);
}

#[test]
fn going_nowhere_changes_nothing() {
    let mut session = new_session();
    let result = run(&mut session, &["go up"]);
    assert_eq!(result.message, "You can't go that way.");
    assert_eq!(session.world.player.location, "driveway");
    assert_eq!(session.world.player.moves, 0);

    let result = run(&mut session, &["go sideways"]);
    assert_eq!(result.message, "You can't go 'sideways'.");
    assert_eq!(session.world.player.moves, 0);
}

#[test]
fn movement_describes_the_new_room() {
    let mut session = new_session();
    let result = run(&mut session, &["go north"]);
    assert!(result.message.starts_with("Living Room\n\n"));
    assert!(result.message.ends_with("Exits: ↓ south, → east, ⬆ up"));
    assert_eq!(session.world.player.moves, 1);
}

#[test]
fn digging_opens_the_secret_passage_once() {
    let mut session = new_session();
    let no_tool = run(&mut session, &["e", "dig"]);
    assert_eq!(no_tool.message, "You need something to dig with.");
    assert!(session.world.rooms["garden"].exit_to(Direction::Down).is_none());

    run(&mut session, &["w", "take shovel", "e"]);
    let dug = run(&mut session, &["dig"]);
    assert_eq!(
        dug.message,
        "You dig in the soft soil and discover a hidden passage leading down!"
    );
    assert_eq!(session.world.player.score, 30);
    assert_eq!(
        session.world.rooms["garden"].exit_to(Direction::Down),
        Some(&"secret".to_string())
    );

    let again = run(&mut session, &["dig"]);
    assert!(again.message.to_lowercase().contains("nothing interesting"));
    assert_eq!(session.world.player.score, 30);
    assert_eq!(session.world.rooms["garden"].exits.len(), 2);

    let elsewhere = run(&mut session, &["w", "dig"]);
    assert!(elsewhere.message.to_lowercase().contains("nothing interesting"));
    assert_eq!(session.world.player.score, 30);
}

#[test]
fn consuming_food_and_water_scores_once_each() {
    let mut session = new_session();
    run(&mut session, &["s", "take bottle", "use water"]);
    assert_eq!(session.world.player.score, 15);
    assert_eq!(session.world.locate_item("water"), Some(ItemLocation::Consumed));
    let again = run(&mut session, &["use water"]);
    assert_eq!(again.message, "You don't have any 'water'.");

    run(&mut session, &["n", "n", "e", "take snack"]);
    let eaten = run(&mut session, &["use trail mix"]);
    assert_eq!(eaten.message, "You eat the trail mix. You feel refreshed!");
    assert_eq!(session.world.player.score, 30);
    session.world.check_placement().unwrap();
}

#[test]
fn player_errors_never_end_the_game() {
    let mut session = new_session();
    for line in [
        "", "xyzzy", "take", "take unicorn", "drop lamp", "use", "use shovel", "turn", "turn on", "turn on shovel",
        "examine ghost", "go", "go nowhere", "w",
    ] {
        let result = session.process_command(line).unwrap();
        assert!(!result.game_over, "'{line}' ended the game");
        assert!(!result.message.is_empty(), "'{line}' produced no message");
    }
    assert_eq!(session.world.player.location, "driveway");
    assert_eq!(session.world.player.score, 0);
}

#[test]
fn score_and_inventory_report_progress() {
    let mut session = new_session();
    let empty = run(&mut session, &["i"]);
    assert_eq!(empty.message, "Your pockets are empty.");

    run(&mut session, &["take shovel", "n", "u", "take lamp"]);
    let inv = run(&mut session, &["inventory"]);
    assert!(inv.message.contains("1. shovel"));
    assert!(inv.message.contains("2. lamp"));
    assert!(inv.message.ends_with("Carrying 2 item(s)"));

    let score = run(&mut session, &["score"]);
    assert!(score.message.contains("Score: 10"));
    assert!(score.message.contains("Moves: 2"));
    assert!(score.message.contains("Progress: [▓░░░░░░░░░] 10%"));
    assert!(score.message.contains("Item Collector"));
}

#[test]
fn help_lists_commands() {
    let mut session = new_session();
    let help = run(&mut session, &["help"]);
    assert!(help.message.contains("Movement Commands:"));
    assert!(help.message.contains("dig"));
}

#[test]
fn quitting_ends_the_session() {
    let mut session = new_session();
    run(&mut session, &["take shovel", "n"]);
    let result = session.process_command("quit").unwrap();
    assert!(result.game_over);
    assert_eq!(result.message, "Thanks for playing! Final score: 5 points in 1 moves.");
}

#[test]
fn full_playthrough_wins() {
    let mut session = new_session();
    run(
        &mut session,
        &[
            "take shovel", // 5
            "n", "u", "take lamp", // 10
            "d", "e", "take food", // 15
            "use food",  // 25
            "w", "s", "e", "dig", // 50
            "d",
        ],
    );
    assert_eq!(session.world.player.location, "secret");
    assert_eq!(session.world.player.score, 50);
    assert!(!session.world.game_over);

    let result = session.process_command("take key").unwrap();
    assert!(result.game_over);
    assert!(result.message.starts_with("You take the key."));
    assert!(result.message.contains("FINAL SCORE: 55 points in 8 moves!"));
    assert!(result.message.ends_with("You have mastered the mysteries of Dunnet!"));
    assert!(result.items.last().is_some_and(ViewItem::is_victory));
}

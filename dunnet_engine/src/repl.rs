//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`DunnetWorld`], and the
//! terminal loop that feeds a [`Session`] and prints what comes back.

mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::art::ArtProvider;
use crate::style::{GameStyle, normal_block};
use crate::view::{DARK_MESSAGE, exit_label};
use crate::{Session, TurnResult, ViewItem};

use anyhow::Result;
use log::info;
use textwrap::fill;

use input::{InputEvent, InputManager};

/// Run the main read–eval–print loop until the game ends.
///
/// Ctrl-C cancels the current line; Ctrl-D quits.
///
/// # Errors
/// - Propagates world invariant failures from the session, such as a missing room for the player.
/// - if input can no longer be read from the terminal or stdin
pub fn run_repl(session: &mut Session) -> Result<()> {
    let mut input_manager = InputManager::new();

    let opening = session.opening()?;
    print_turn(&opening, session.art());

    while !session.world.game_over {
        let prompt = format!(
            "\n[Score: {}|Moves: {}]>> ",
            session.world.player.score, session.world.player.moves
        )
        .prompt_style()
        .to_string();

        let input = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                println!("{}", "Command canceled.".engine_style());
                continue;
            },
            Err(err) => {
                input_manager.save_history();
                return Err(err);
            },
        };

        let result = session.process_command(&input)?;
        print_turn(&result, session.art());
    }
    input_manager.save_history();
    info!("game over, leaving REPL");
    Ok(())
}

/// Print a turn's output with terminal styling.
fn print_turn(result: &TurnResult, art: &dyn ArtProvider) {
    println!();
    for item in &result.items {
        print_item(item, art);
        println!();
    }
}

fn print_art(art: &str) {
    if !art.is_empty() {
        println!("{}\n", art.art_style());
    }
}

fn print_item(item: &ViewItem, art: &dyn ArtProvider) {
    match item {
        ViewItem::RoomDescription {
            room_id,
            name,
            description,
        } => {
            print_art(&art.room_art(room_id));
            println!("{}\n", name.room_titlebar_style());
            println!("{}", fill(description, normal_block()).description_style());
        },
        ViewItem::RoomItems(descriptions) => {
            println!("{}", "You can see:".subheading_style());
            for desc in descriptions {
                println!("   • {}", desc.item_style());
            }
        },
        ViewItem::RoomExits(dirs) => {
            let exits: Vec<String> = dirs.iter().map(|dir| exit_label(*dir).exit_style().to_string()).collect();
            println!("{} {}", "Exits:".subheading_style(), exits.join(", "));
        },
        ViewItem::ItemDescription { item_id, .. } => {
            print_art(&art.item_art(item_id));
            let text = item.render(&crate::NoArt);
            let (heading, body) = text.split_once('\n').unwrap_or((text.as_str(), ""));
            println!("{}", heading.item_heading_style());
            println!("{}", fill(body, normal_block()).description_style());
        },
        ViewItem::ActionSuccess(msg) => println!("{}", fill(msg, normal_block()).success_style()),
        ViewItem::ActionFailure(msg) => println!("{}", fill(msg, normal_block()).denied_style()),
        ViewItem::Error(msg) => println!("{}", fill(msg, normal_block()).error_style()),
        ViewItem::EngineMessage(msg) => println!("{}", fill(msg, normal_block()).engine_style()),
        ViewItem::TooDark => println!("{}", DARK_MESSAGE.denied_style()),
        ViewItem::Victory { .. } => {
            print_art(&art.victory_art());
            let text = item.render(&crate::NoArt);
            println!("{}", text.victory_style());
        },
        ViewItem::Inventory(_) | ViewItem::Help(_) | ViewItem::Score { .. } | ViewItem::QuitSummary { .. } => {
            println!("{}", item.render(art).system_style());
        },
    }
}

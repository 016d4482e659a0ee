//! Session -- the single entry point for playing a turn.
//!
//! A [`Session`] owns the world and an art provider. Each input line is parsed,
//! dispatched to its handler, checked against the win condition, and rendered to
//! plain text for whatever front end is driving the game.

use crate::art::{ArtProvider, NoArt};
use crate::command::{Command, parse_command};
use crate::repl::{
    bad_direction_handler, dig_handler, drop_handler, examine_handler, help_handler, inv_handler, look_handler,
    move_to_handler, quit_handler, score_handler, take_handler, turn_handler, use_handler,
};
use crate::spinners::SpinnerType;
use crate::{DunnetWorld, View, ViewItem};

use anyhow::Result;
use log::info;

pub const EMPTY_INPUT_MESSAGE: &str = "Type 'help' for available commands.";

/// What one command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnResult {
    /// Plain-text rendering of `items`.
    pub message: String,
    pub game_over: bool,
    /// Structured output, for front ends that style their own text.
    pub items: Vec<ViewItem>,
}

/// One play-through, from world construction to `game_over`.
pub struct Session {
    pub world: DunnetWorld,
    art: Box<dyn ArtProvider>,
}

impl Session {
    /// Start a session without any art.
    pub fn new(world: DunnetWorld) -> Self {
        Self::with_art(world, Box::new(NoArt))
    }

    pub fn with_art(world: DunnetWorld, art: Box<dyn ArtProvider>) -> Self {
        Self { world, art }
    }

    pub fn art(&self) -> &dyn ArtProvider {
        self.art.as_ref()
    }

    /// Describe the starting room. Doesn't count as a command.
    ///
    /// # Errors
    /// - if the player's room is missing
    pub fn opening(&mut self) -> Result<TurnResult> {
        let mut view = View::new();
        look_handler(&mut self.world, &mut view)?;
        Ok(self.finish(view))
    }

    /// Parse and run one line of player input.
    ///
    /// Player mistakes come back as messages. `Err` means the world itself is
    /// broken and the session can't continue.
    ///
    /// # Errors
    /// - if a world invariant is violated (e.g. the player's room doesn't exist)
    pub fn process_command(&mut self, line: &str) -> Result<TurnResult> {
        let mut view = View::new();
        if line.trim().is_empty() {
            view.push(ViewItem::EngineMessage(EMPTY_INPUT_MESSAGE.to_string()));
            return Ok(self.finish(view));
        }

        let command = parse_command(line);
        info!("player command '{}' -> {command:?}", line.trim());
        self.dispatch(&command, &mut view)?;

        if self.victory_reached() {
            info!(
                "victory: {} points in {} moves",
                self.world.player.score, self.world.player.moves
            );
            view.push(ViewItem::Victory {
                score: self.world.player.score,
                moves: self.world.player.moves,
            });
            self.world.game_over = true;
        }
        Ok(self.finish(view))
    }

    fn dispatch(&mut self, command: &Command, view: &mut View) -> Result<()> {
        #[allow(clippy::enum_glob_use)]
        use Command::*;
        let world = &mut self.world;
        match command {
            Look => look_handler(world, view)?,
            Examine(thing) => examine_handler(world, view, thing)?,
            Take(thing) => take_handler(world, view, thing)?,
            Drop(thing) => drop_handler(world, view, thing)?,
            Inventory => inv_handler(world, view)?,
            Go(direction) => move_to_handler(world, view, *direction)?,
            BadDirection(text) => bad_direction_handler(view, text),
            UseItem(thing) => use_handler(world, view, thing)?,
            Turn { switch, target } => turn_handler(world, view, switch, target),
            Dig => dig_handler(world, view)?,
            Help => help_handler(world, view),
            Score => score_handler(world, view),
            Quit => quit_handler(world, view),
            Incomplete(prompt) => view.push(ViewItem::ActionFailure(prompt.clone())),
            Unknown => {
                let hint = world.spin_spinner(
                    SpinnerType::UnrecognizedCommand,
                    "Try 'help' to see available commands.",
                );
                view.push(ViewItem::Error(format!("I don't understand that command. {hint}")));
            },
        }
        Ok(())
    }

    /// True when the player stands in the secret room holding the key with enough points.
    pub fn victory_reached(&self) -> bool {
        let world = &self.world;
        world.player.location == world.config.secret_room
            && world.carrying(&world.config.key_item)
            && world.player.score >= world.config.win_score
    }

    fn finish(&self, view: View) -> TurnResult {
        TurnResult {
            message: view.render(self.art.as_ref()),
            game_over: self.world.game_over,
            items: view.items,
        }
    }
}

//! System-level command handlers: help, score, and quit.

use crate::{DunnetWorld, View, ViewItem};

use log::info;

/// Milestones shown by the `score` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Achievement {
    ItemCollector,
    Explorer,
    Detective,
    PackRat,
    SecretFinder,
}

impl Achievement {
    pub fn label(self) -> &'static str {
        match self {
            Achievement::ItemCollector => "Item Collector",
            Achievement::Explorer => "Explorer",
            Achievement::Detective => "Detective",
            Achievement::PackRat => "Pack Rat",
            Achievement::SecretFinder => "Secret Finder",
        }
    }

    /// Every achievement the player has earned so far, in display order.
    pub fn earned(world: &DunnetWorld) -> Vec<Achievement> {
        let score = world.player.score;
        let secret_visited = world
            .rooms
            .get(&world.config.secret_room)
            .is_some_and(|room| room.visited);
        [
            (Achievement::ItemCollector, score >= 10),
            (Achievement::Explorer, score >= 25),
            (Achievement::Detective, score >= 50),
            (Achievement::PackRat, world.player.inventory.len() >= 3),
            (Achievement::SecretFinder, secret_visited),
        ]
        .into_iter()
        .filter_map(|(achievement, earned)| earned.then_some(achievement))
        .collect()
    }
}

/// Show the command list.
pub fn help_handler(world: &DunnetWorld, view: &mut View) {
    view.push(ViewItem::Help(world.help.clone()));
}

/// Show score, moves, progress, and achievements.
pub fn score_handler(world: &DunnetWorld, view: &mut View) {
    view.push(ViewItem::Score {
        score: world.player.score,
        moves: world.player.moves,
        max_score: world.config.max_score,
        achievements: Achievement::earned(world)
            .into_iter()
            .map(|a| a.label().to_string())
            .collect(),
    });
}

/// End the session with a farewell.
pub fn quit_handler(world: &mut DunnetWorld, view: &mut View) {
    world.game_over = true;
    info!(
        "player quit with {} points in {} moves",
        world.player.score, world.player.moves
    );
    view.push(ViewItem::QuitSummary {
        score: world.player.score,
        moves: world.player.moves,
    });
}

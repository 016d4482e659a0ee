//! View module.
//! This contains the view to the game world / messages.
//! Rather than formatting output inside each handler, handlers push `ViewItem`s describing
//! what happened, and the whole turn is rendered at once when the command completes.
use std::fmt::Write;

use variantly::Variantly;

use crate::Direction;
use crate::art::ArtProvider;
use crate::loader::help::HelpCommand;

pub const DARK_MESSAGE: &str = "It is too dark to see anything.";
const PROGRESS_SLOTS: usize = 10;

/// View aggregates the output of one turn so it can be rendered as a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub items: Vec<ViewItem>,
}

impl View {
    /// Create a new empty view.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render every item as plain text, one block per item, separated by blank lines.
    pub fn render(&self, art: &dyn ArtProvider) -> String {
        self.items
            .iter()
            .map(|item| item.render(art))
            .filter(|block| !block.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Everything a command can report back to the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    EngineMessage(String),
    Error(String),
    Help(Vec<HelpCommand>),
    /// Names of carried items, in pickup order.
    Inventory(Vec<String>),
    ItemDescription {
        item_id: String,
        name: String,
        description: String,
        portable: bool,
        usable: bool,
    },
    QuitSummary {
        score: usize,
        moves: usize,
    },
    RoomDescription {
        room_id: String,
        name: String,
        description: String,
    },
    RoomExits(Vec<Direction>),
    /// Descriptions of the items lying in the room.
    RoomItems(Vec<String>),
    Score {
        score: usize,
        moves: usize,
        max_score: usize,
        achievements: Vec<String>,
    },
    TooDark,
    Victory {
        score: usize,
        moves: usize,
    },
}

impl ViewItem {
    /// Plain-text rendering of this item, pulling any art it needs from `art`.
    pub fn render(&self, art: &dyn ArtProvider) -> String {
        match self {
            ViewItem::ActionFailure(msg)
            | ViewItem::ActionSuccess(msg)
            | ViewItem::EngineMessage(msg)
            | ViewItem::Error(msg) => msg.clone(),
            ViewItem::TooDark => DARK_MESSAGE.to_string(),
            ViewItem::RoomDescription {
                room_id,
                name,
                description,
            } => with_art(&art.room_art(room_id), &format!("{name}\n\n{description}")),
            ViewItem::RoomItems(descriptions) => {
                let mut out = String::from("You can see:");
                for desc in descriptions {
                    let _ = write!(out, "\n   • {desc}");
                }
                out
            },
            ViewItem::RoomExits(dirs) => {
                let exits: Vec<String> = dirs.iter().map(|dir| exit_label(*dir)).collect();
                format!("Exits: {}", exits.join(", "))
            },
            ViewItem::ItemDescription {
                item_id,
                name,
                description,
                portable,
                usable,
            } => {
                let mut properties = vec![if *portable { "Portable" } else { "Fixed in place" }];
                if *usable {
                    properties.push("Usable");
                }
                let body = format!("{name}\n{description}\n\nProperties: {}", properties.join(", "));
                with_art(&art.item_art(item_id), &body)
            },
            ViewItem::Inventory(names) => render_inventory(names),
            ViewItem::Help(commands) => render_help(commands),
            ViewItem::Score {
                score,
                moves,
                max_score,
                achievements,
            } => render_score(*score, *moves, *max_score, achievements),
            ViewItem::QuitSummary { score, moves } => {
                format!("Thanks for playing! Final score: {score} points in {moves} moves.")
            },
            ViewItem::Victory { score, moves } => with_art(
                &art.victory_art(),
                &format!("FINAL SCORE: {score} points in {moves} moves!\n\nYou have mastered the mysteries of Dunnet!"),
            ),
        }
    }
}

/// Arrow-prefixed direction name used in exit listings.
pub fn exit_label(dir: Direction) -> String {
    let arrow = match dir {
        Direction::North => "↑",
        Direction::South => "↓",
        Direction::East => "→",
        Direction::West => "←",
        Direction::Up => "⬆",
        Direction::Down => "⬇",
        Direction::Northeast => "↗",
        Direction::Northwest => "↖",
        Direction::Southeast => "↘",
        Direction::Southwest => "↙",
    };
    format!("{arrow} {dir}")
}

/// Progress toward `max_score` as a whole percentage, capped at 100.
pub fn progress_percent(score: usize, max_score: usize) -> usize {
    if max_score == 0 {
        return 100;
    }
    (score.saturating_mul(100) / max_score).min(100)
}

/// Ten-slot text progress bar, e.g. `[▓▓▓░░░░░░░] 30%`.
pub fn progress_bar(score: usize, max_score: usize) -> String {
    let percent = progress_percent(score, max_score);
    let filled = percent / PROGRESS_SLOTS;
    format!(
        "[{}{}] {percent}%",
        "▓".repeat(filled),
        "░".repeat(PROGRESS_SLOTS - filled)
    )
}

fn with_art(art: &str, body: &str) -> String {
    if art.is_empty() {
        body.to_string()
    } else {
        format!("{art}\n\n{body}")
    }
}

fn render_inventory(names: &[String]) -> String {
    if names.is_empty() {
        return "Your pockets are empty.".to_string();
    }
    let mut out = String::from("Inventory:");
    for (i, name) in names.iter().enumerate() {
        let _ = write!(out, "\n   {}. {name}", i + 1);
    }
    let _ = write!(out, "\n\nCarrying {} item(s)", names.len());
    out
}

fn render_help(commands: &[HelpCommand]) -> String {
    // sections in order of first appearance
    let mut sections: Vec<&str> = Vec::new();
    for cmd in commands {
        if !sections.contains(&cmd.section.as_str()) {
            sections.push(&cmd.section);
        }
    }
    let mut blocks = Vec::new();
    for section in sections {
        let mut block = format!("{section} Commands:");
        for cmd in commands.iter().filter(|cmd| cmd.section == section) {
            let _ = write!(block, "\n   {} - {}", cmd.command, cmd.description);
        }
        blocks.push(block);
    }
    blocks.join("\n\n")
}

fn render_score(score: usize, moves: usize, max_score: usize, achievements: &[String]) -> String {
    let mut out = format!(
        "Score: {score}\nMoves: {moves}\nProgress: {}",
        progress_bar(score, max_score)
    );
    if !achievements.is_empty() {
        out.push_str("\n\nAchievements Unlocked:");
        for name in achievements {
            let _ = write!(out, "\n   {name}");
        }
    }
    out
}

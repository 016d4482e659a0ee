//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly;

use crate::Direction;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    /// `go` followed by something that isn't a direction.
    BadDirection(String),
    Dig,
    Drop(String),
    Examine(String),
    Go(Direction),
    Help,
    /// A verb given without the argument it needs; holds the prompt to show.
    Incomplete(String),
    Inventory,
    Look,
    Quit,
    Score,
    Take(String),
    Turn {
        switch: String,
        target: String,
    },
    Unknown,
    UseItem(String),
}

/// Parses an input string and returns a corresponding `Command` if recognized.
///
/// Only the first word selects the command and matching ignores case. Any words after an
/// item-taking verb are joined into a single target ("trail mix", "brass key").
pub fn parse_command(input: &str) -> Command {
    let input = input.to_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.as_slice() {
        ["look" | "l", ..] | ["examine" | "ex" | "x"] => Command::Look,
        ["examine" | "ex" | "x", target @ ..] => Command::Examine(target.join(" ")),
        ["take" | "get"] => Command::Incomplete("Take what?".into()),
        ["take" | "get", target @ ..] => Command::Take(target.join(" ")),
        ["drop"] => Command::Incomplete("Drop what?".into()),
        ["drop", target @ ..] => Command::Drop(target.join(" ")),
        ["inventory" | "i", ..] => Command::Inventory,
        ["go"] => Command::Incomplete("Go where?".into()),
        ["go", dir, ..] => dir
            .parse::<Direction>()
            .map_or_else(|_| Command::BadDirection((*dir).to_string()), Command::Go),
        ["north" | "n", ..] => Command::Go(Direction::North),
        ["south" | "s", ..] => Command::Go(Direction::South),
        ["east" | "e", ..] => Command::Go(Direction::East),
        ["west" | "w", ..] => Command::Go(Direction::West),
        ["up" | "u", ..] => Command::Go(Direction::Up),
        ["down" | "d", ..] => Command::Go(Direction::Down),
        ["use"] => Command::Incomplete("Use what?".into()),
        ["use", target @ ..] => Command::UseItem(target.join(" ")),
        ["turn"] | ["turn", _] => Command::Incomplete("Turn what on or off?".into()),
        ["turn", switch, target @ ..] => Command::Turn {
            switch: (*switch).to_string(),
            target: target.join(" "),
        },
        ["dig", ..] => Command::Dig,
        ["help", ..] => Command::Help,
        ["score", ..] => Command::Score,
        ["quit" | "q", ..] => Command::Quit,
        _ => Command::Unknown,
    }
}

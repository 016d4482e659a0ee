use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world data loaded by the engine at session start.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub spinners: Vec<SpinnerDef>,
}

/// Game-level metadata and the handful of rooms / items the rules single out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub intro: String,
    pub start_room: Id,
    /// Room the player must stand in to win.
    pub secret_room: Id,
    /// Item the player must carry to win.
    pub key_item: Id,
    /// Item whose switch state feeds the visibility rule.
    pub lamp_item: Id,
    /// Item required by `dig`.
    pub digging_tool: Id,
    pub dig_site: DigSiteDef,
    #[serde(default = "default_take_points")]
    pub take_points: usize,
    #[serde(default = "default_win_score")]
    pub win_score: usize,
    #[serde(default = "default_max_score")]
    pub max_score: usize,
}

impl Default for GameDef {
    fn default() -> Self {
        Self {
            title: String::new(),
            intro: String::new(),
            start_room: String::new(),
            secret_room: String::new(),
            key_item: String::new(),
            lamp_item: String::new(),
            digging_tool: String::new(),
            dig_site: DigSiteDef::default(),
            take_points: default_take_points(),
            win_score: default_win_score(),
            max_score: default_max_score(),
        }
    }
}

fn default_take_points() -> usize {
    5
}

fn default_win_score() -> usize {
    50
}

fn default_max_score() -> usize {
    100
}

/// The one place where digging opens a new passage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigSiteDef {
    pub room: Id,
    pub direction: Direction,
    pub to: Id,
    pub points: usize,
}

impl Default for DigSiteDef {
    fn default() -> Self {
        Self {
            room: String::new(),
            direction: Direction::Down,
            to: String::new(),
            points: 25,
        }
    }
}

/// Room definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub dark: bool,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    /// Items present in the room at the start of a session, in display order.
    #[serde(default)]
    pub items: Vec<Id>,
}

/// A directed edge to another room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: Direction,
    pub to: Id,
}

/// Item definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default = "default_portable")]
    pub portable: bool,
    #[serde(default)]
    pub usable: bool,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub effect: Option<UseEffectDef>,
}

fn default_portable() -> bool {
    true
}

/// What happens when a usable item is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UseEffectDef {
    /// Flip the lamp switch.
    ToggleLamp,
    /// Remove the item from inventory and award points.
    Consume { points: usize, message: String },
}

/// Spinner definition: a named set of weighted text values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinnerDef {
    pub id: Id,
    #[serde(default)]
    pub wedges: Vec<SpinnerWedgeDef>,
}

/// Weighted spinner entry text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinnerWedgeDef {
    pub text: String,
    #[serde(default = "default_wedge_width")]
    pub width: usize,
}

fn default_wedge_width() -> usize {
    1
}

/// Compass (and vertical) directions an exit may be labeled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
    Up,
    Down,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Direction {
    pub const ALL: [Direction; 10] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::Northeast,
        Direction::Northwest,
        Direction::Southeast,
        Direction::Southwest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Northeast => "northeast",
            Direction::Northwest => "northwest",
            Direction::Southeast => "southeast",
            Direction::Southwest => "southwest",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that doesn't name a direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError(pub String);

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a direction", self.0)
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lc = s.trim().to_lowercase();
        Direction::ALL
            .into_iter()
            .find(|dir| dir.as_str() == lc)
            .ok_or(ParseDirectionError(s.to_string()))
    }
}

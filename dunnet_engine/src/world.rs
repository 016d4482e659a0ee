//! Data structures representing the game world.
//!
//! This module defines [`DunnetWorld`] and related types used at runtime to
//! track the current state of the adventure, along with the lookup and
//! mutation primitives the command handlers are built from.

use crate::loader::help::HelpCommand;
use crate::spinners::SpinnerType;
use crate::{Direction, Id, Item, Player, Room};

use anyhow::Result;
use gametools::Spinner;
use log::info;
use thiserror::Error;
use variantly::Variantly;

use std::collections::HashMap;

/// Where an item currently is.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ItemLocation {
    Room(Id),
    Inventory,
    /// Used up (eaten, drunk) and out of play for the rest of the session.
    Consumed,
}

/// Methods common to any object in the world.
pub trait WorldObject {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// Anything that holds items by id.
pub trait ItemHolder {
    fn add_item(&mut self, item_id: Id);
    /// Returns false (and changes nothing) if the item wasn't held.
    fn remove_item(&mut self, item_id: &str) -> bool;
    fn contains_item(&self, item_id: &str) -> bool;
}

/// Broken world invariants. These indicate a bug in world data or engine
/// logic, never a player mistake.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("room '{0}' not found in world")]
    MissingRoom(Id),
    #[error("item '{0}' not found in world")]
    MissingItem(Id),
    #[error("item '{item_id}' is not in room '{room_id}'")]
    NotInRoom { item_id: Id, room_id: Id },
    #[error("item '{0}' is not in inventory")]
    NotCarried(Id),
    #[error("item placement broken: {0}")]
    Placement(String),
}

/// The digging spot: where it is, and the passage it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigSite {
    pub room: Id,
    pub direction: Direction,
    pub to: Id,
    pub points: usize,
}

/// Fixed rules of a particular world: which rooms and items matter and how
/// many points things are worth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub title: String,
    pub intro: String,
    pub secret_room: Id,
    pub key_item: Id,
    pub lamp_item: Id,
    pub digging_tool: Id,
    pub dig_site: DigSite,
    pub take_points: usize,
    pub win_score: usize,
    pub max_score: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            intro: String::new(),
            secret_room: "secret".into(),
            key_item: "key".into(),
            lamp_item: "lamp".into(),
            digging_tool: "shovel".into(),
            dig_site: DigSite {
                room: "garden".into(),
                direction: Direction::Down,
                to: "secret".into(),
                points: 25,
            },
            take_points: 5,
            win_score: 50,
            max_score: 100,
        }
    }
}

/// Complete state of the running game.
///
/// `DunnetWorld` owns every room and item along with the player. It is built
/// once by the loader and then mutated in place for the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct DunnetWorld {
    pub rooms: HashMap<Id, Room>,
    pub items: HashMap<Id, Item>,
    pub player: Player,
    pub config: GameConfig,
    pub spinners: HashMap<SpinnerType, Spinner<String>>,
    pub help: Vec<HelpCommand>,
    /// Items taken out of play by `use`.
    pub consumed: Vec<Id>,
    pub game_over: bool,
}

impl DunnetWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> DunnetWorld {
        let world = Self::default();
        info!("new, empty 'DunnetWorld' created");
        world
    }

    /// Returns a random string from the selected spinner type, or a supplied default.
    pub fn spin_spinner(&self, spin_type: SpinnerType, default: &'static str) -> String {
        self.spinners
            .get(&spin_type)
            .and_then(Spinner::spin)
            .unwrap_or_else(|| default.to_string())
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_ref(&self) -> Result<&Room> {
        let room_id = &self.player.location;
        Ok(self
            .rooms
            .get(room_id)
            .ok_or_else(|| WorldError::MissingRoom(room_id.clone()))?)
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_mut(&mut self) -> Result<&mut Room> {
        let room_id = &self.player.location;
        Ok(self
            .rooms
            .get_mut(room_id)
            .ok_or_else(|| WorldError::MissingRoom(room_id.clone()))?)
    }

    /// Find the item whose name or alias matches `text`, ignoring case.
    ///
    /// Loaded worlds never share an alias between items, so at most one item matches.
    pub fn find_item(&self, text: &str) -> Option<&Item> {
        self.items.values().find(|item| item.answers_to(text))
    }

    /// Returns true if the item is in the player's inventory.
    pub fn carrying(&self, item_id: &str) -> bool {
        self.player.inventory.iter().any(|id| id == item_id)
    }

    /// Returns true if the lamp is switched on *and* in hand.
    pub fn lamp_is_lit(&self) -> bool {
        self.player.lamp_on && self.carrying(&self.config.lamp_item)
    }

    /// Returns true if the player can perceive the contents of the current room.
    ///
    /// # Errors
    /// - if the player's room id is not found
    pub fn can_see(&self) -> Result<bool> {
        Ok(!self.player_room_ref()?.dark || self.lamp_is_lit())
    }

    /// Move the player through the exit leading `direction`.
    ///
    /// Returns false, changing nothing, if there is no such exit.
    ///
    /// # Errors
    /// - if the current room or the exit's destination is missing
    pub fn move_player(&mut self, direction: Direction) -> Result<bool> {
        let Some(destination) = self.player_room_ref()?.exit_to(direction).cloned() else {
            return Ok(false);
        };
        if !self.rooms.contains_key(&destination) {
            return Err(WorldError::MissingRoom(destination).into());
        }
        info!("player moved {direction} from {} to {destination}", self.player.location);
        self.player.location = destination;
        self.player.moves += 1;
        Ok(true)
    }

    /// Move an item from the current room into the inventory.
    ///
    /// # Errors
    /// - if the item isn't lying in the current room (caller should have checked)
    pub fn take_item(&mut self, item_id: &str) -> Result<()> {
        if !self.items.contains_key(item_id) {
            return Err(WorldError::MissingItem(item_id.to_string()).into());
        }
        let room = self.player_room_mut()?;
        if !room.remove_item(item_id) {
            return Err(WorldError::NotInRoom {
                item_id: item_id.to_string(),
                room_id: room.id.clone(),
            }
            .into());
        }
        self.player.add_item(item_id.to_string());
        Ok(())
    }

    /// Move an item from the inventory into the current room.
    ///
    /// # Errors
    /// - if the item isn't carried (caller should have checked) or the room is missing
    pub fn drop_item(&mut self, item_id: &str) -> Result<()> {
        // resolve the room first so a failure leaves the inventory untouched
        self.player_room_ref()?;
        if !self.player.remove_item(item_id) {
            return Err(WorldError::NotCarried(item_id.to_string()).into());
        }
        self.player_room_mut()?.add_item(item_id.to_string());
        Ok(())
    }

    /// Take a carried item out of play for good.
    ///
    /// # Errors
    /// - if the item isn't carried
    pub fn consume_item(&mut self, item_id: &str) -> Result<()> {
        if !self.player.remove_item(item_id) {
            return Err(WorldError::NotCarried(item_id.to_string()).into());
        }
        self.consumed.push(item_id.to_string());
        Ok(())
    }

    /// Report where an item is, or None if it isn't anywhere.
    pub fn locate_item(&self, item_id: &str) -> Option<ItemLocation> {
        if self.carrying(item_id) {
            return Some(ItemLocation::Inventory);
        }
        if self.consumed.iter().any(|id| id == item_id) {
            return Some(ItemLocation::Consumed);
        }
        self.rooms
            .values()
            .find(|room| room.contents.iter().any(|id| id == item_id))
            .map(|room| ItemLocation::Room(room.id.clone()))
    }

    /// Verify every item is in exactly one place (a room, the inventory, or consumed),
    /// and nothing unknown is being held anywhere.
    ///
    /// # Errors
    /// - describing each item found zero times, more than once, or not known to the world
    pub fn check_placement(&self) -> Result<()> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let held = self
            .rooms
            .values()
            .flat_map(|room| room.contents.iter())
            .chain(self.player.inventory.iter())
            .chain(self.consumed.iter());
        for id in held {
            *counts.entry(id.as_str()).or_default() += 1;
        }

        let mut problems: Vec<String> = Vec::new();
        for id in self.items.keys() {
            match counts.remove(id.as_str()).unwrap_or(0) {
                1 => {},
                0 => problems.push(format!("'{id}' is nowhere")),
                n => problems.push(format!("'{id}' is in {n} places")),
            }
        }
        problems.extend(counts.keys().map(|id| format!("'{id}' is held but unknown")));

        if problems.is_empty() {
            Ok(())
        } else {
            problems.sort();
            Err(WorldError::Placement(problems.join(", ")).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemHolder;
    use gametools::Wedge;

    fn create_test_world() -> DunnetWorld {
        let mut world = DunnetWorld::new_empty();

        let mut hall = Room::new("hall", "Hall", "A long hall.");
        hall.exits.insert(Direction::Down, "cellar".into());
        hall.add_item("lamp".into());
        hall.add_item("rock".into());
        let mut cellar = Room::new("cellar", "Cellar", "Damp.");
        cellar.dark = true;
        cellar.exits.insert(Direction::Up, "hall".into());

        world.rooms.insert("hall".into(), hall);
        world.rooms.insert("cellar".into(), cellar);

        let mut lamp = Item::new("lamp", "lamp", "A bright electric lamp.");
        lamp.add_alias("lantern");
        world.items.insert("lamp".into(), lamp);
        world.items.insert("rock".into(), Item::new("rock", "Rock", "A rock."));

        world.player = Player::new("hall");
        world
    }

    #[test]
    fn item_location_variants_work() {
        assert!(ItemLocation::Inventory.is_inventory());
        assert!(ItemLocation::Room("hall".into()).is_room());
        assert!(ItemLocation::Consumed.is_not_room());
        assert_eq!(ItemLocation::Room("hall".into()).room(), Some("hall".to_string()));
    }

    #[test]
    fn spin_spinner_returns_result_or_default() {
        let mut world = DunnetWorld::new_empty();
        assert_eq!(world.spin_spinner(SpinnerType::UnrecognizedCommand, "default"), "default");

        let spinner = Spinner::new(vec![Wedge::new("custom result".to_string())]);
        world.spinners.insert(SpinnerType::UnrecognizedCommand, spinner);
        assert_eq!(
            world.spin_spinner(SpinnerType::UnrecognizedCommand, "default"),
            "custom result"
        );
    }

    #[test]
    fn player_room_ref_works() {
        let world = create_test_world();
        assert_eq!(world.player_room_ref().unwrap().id, "hall");
    }

    #[test]
    fn player_room_ref_errors_when_room_missing() {
        let world = DunnetWorld::new_empty();
        let err = world.player_room_ref().unwrap_err();
        assert_eq!(err.downcast_ref::<WorldError>(), Some(&WorldError::MissingRoom(String::new())));
    }

    #[test]
    fn player_room_mut_works() {
        let mut world = create_test_world();
        world.player_room_mut().unwrap().visited = true;
        assert!(world.rooms["hall"].visited);
    }

    #[test]
    fn find_item_matches_name_and_alias_case_insensitively() {
        let world = create_test_world();
        assert_eq!(world.find_item("LANTERN").map(|i| i.id.as_str()), Some("lamp"));
        assert_eq!(world.find_item("rock").map(|i| i.id.as_str()), Some("rock"));
        assert!(world.find_item("pebble").is_none());
    }

    #[test]
    fn darkness_needs_a_lit_lamp_in_hand() {
        let mut world = create_test_world();
        assert!(world.can_see().unwrap());

        world.player.location = "cellar".into();
        assert!(!world.can_see().unwrap());

        // switched on but left lying in the hall
        world.player.lamp_on = true;
        assert!(!world.can_see().unwrap());

        world.player.add_item("lamp".into());
        assert!(world.can_see().unwrap());

        world.player.lamp_on = false;
        assert!(!world.can_see().unwrap());
    }

    #[test]
    fn move_player_follows_exits_and_counts_moves() {
        let mut world = create_test_world();
        assert!(world.move_player(Direction::Down).unwrap());
        assert_eq!(world.player.location, "cellar");
        assert_eq!(world.player.moves, 1);
    }

    #[test]
    fn move_player_without_exit_changes_nothing() {
        let mut world = create_test_world();
        assert!(!world.move_player(Direction::North).unwrap());
        assert_eq!(world.player.location, "hall");
        assert_eq!(world.player.moves, 0);
    }

    #[test]
    fn move_player_errors_on_dangling_exit() {
        let mut world = create_test_world();
        world
            .player_room_mut()
            .unwrap()
            .exits
            .insert(Direction::East, "void".into());
        assert!(world.move_player(Direction::East).is_err());
        assert_eq!(world.player.location, "hall");
        assert_eq!(world.player.moves, 0);
    }

    #[test]
    fn take_and_drop_transfer_items() {
        let mut world = create_test_world();
        world.take_item("rock").unwrap();
        assert_eq!(world.locate_item("rock"), Some(ItemLocation::Inventory));
        assert!(!world.rooms["hall"].contains_item("rock"));

        world.move_player(Direction::Down).unwrap();
        world.drop_item("rock").unwrap();
        assert_eq!(world.locate_item("rock"), Some(ItemLocation::Room("cellar".into())));
        world.check_placement().unwrap();
    }

    #[test]
    fn rejected_transfers_leave_state_untouched() {
        let mut world = create_test_world();
        let before = world.clone();

        assert!(world.drop_item("rock").is_err());
        world.player.location = "cellar".into();
        assert!(world.take_item("rock").is_err());
        world.player.location = "hall".into();
        assert!(world.take_item("ghost").is_err());

        assert_eq!(world.rooms, before.rooms);
        assert_eq!(world.player, before.player);
    }

    #[test]
    fn consume_item_takes_it_out_of_play() {
        let mut world = create_test_world();
        world.take_item("rock").unwrap();
        world.consume_item("rock").unwrap();
        assert_eq!(world.locate_item("rock"), Some(ItemLocation::Consumed));
        assert!(world.consume_item("rock").is_err());
        world.check_placement().unwrap();
    }

    #[test]
    fn check_placement_reports_duplicates_and_strays() {
        let mut world = create_test_world();
        world.player.inventory.push("rock".into());
        world.rooms.get_mut("cellar").unwrap().contents.push("ghost".into());
        world.rooms.get_mut("hall").unwrap().contents.retain(|id| id != "lamp");

        let err = world.check_placement().unwrap_err().to_string();
        assert!(err.contains("'rock' is in 2 places"));
        assert!(err.contains("'ghost' is held but unknown"));
        assert!(err.contains("'lamp' is nowhere"));
    }
}

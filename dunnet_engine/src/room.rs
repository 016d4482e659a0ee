//! Room definitions and spatial utilities.
//!
//! Any location the player can stand in is a `Room`. Exits are keyed by
//! [`Direction`] so a room has at most one exit each way, and they iterate in
//! compass order when listed.

use crate::{Direction, Id, ItemHolder, View, ViewItem, WorldObject, world::DunnetWorld};

use anyhow::{Result, anyhow};
use std::collections::BTreeMap;

/// Any visitable location in the game world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub exits: BTreeMap<Direction, Id>,
    /// Ids of items lying here, in the order they arrived.
    pub contents: Vec<Id>,
    pub visited: bool,
    pub dark: bool,
}

impl WorldObject for Room {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}

impl ItemHolder for Room {
    fn add_item(&mut self, item_id: Id) {
        if !self.contents.contains(&item_id) {
            self.contents.push(item_id);
        }
    }

    fn remove_item(&mut self, item_id: &str) -> bool {
        if let Some(pos) = self.contents.iter().position(|id| id == item_id) {
            self.contents.remove(pos);
            true
        } else {
            false
        }
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.contents.iter().any(|id| id == item_id)
    }
}

impl Room {
    /// Create a lit, unvisited room with no exits or contents.
    pub fn new(id: impl Into<Id>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            contents: Vec::new(),
            visited: false,
            dark: false,
        }
    }

    /// Destination of the exit leading `direction`, if there is one.
    pub fn exit_to(&self, direction: Direction) -> Option<&Id> {
        self.exits.get(&direction)
    }

    /// Displays full description, visible items, and exits for the `Room`.
    ///
    /// # Errors
    /// Returns an error if an exit or listed item refers to something not in the world.
    pub fn show(&self, world: &DunnetWorld, view: &mut View) -> Result<()> {
        view.push(ViewItem::RoomDescription {
            room_id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        });

        let item_descriptions = self
            .contents
            .iter()
            .map(|id| {
                world
                    .items
                    .get(id)
                    .map(|item| item.description().to_string())
                    .ok_or_else(|| anyhow!("Item({id}) listed in Room({}) not found", self.id))
            })
            .collect::<Result<Vec<_>>>()?;
        if !item_descriptions.is_empty() {
            view.push(ViewItem::RoomItems(item_descriptions));
        }

        self.show_exits(world, view)
    }

    /// Displays list of available exits from the Room.
    ///
    /// # Errors
    /// Returns an error if a referenced destination room cannot be found.
    pub fn show_exits(&self, world: &DunnetWorld, view: &mut View) -> Result<()> {
        let mut exit_dirs = Vec::new();
        for (direction, to) in &self.exits {
            if !world.rooms.contains_key(to) {
                return Err(anyhow!(
                    "Room({to}) not found ({direction} exit from Room({}))",
                    self.id
                ));
            }
            exit_dirs.push(*direction);
        }
        if !exit_dirs.is_empty() {
            view.push(ViewItem::RoomExits(exit_dirs));
        }
        Ok(())
    }
}

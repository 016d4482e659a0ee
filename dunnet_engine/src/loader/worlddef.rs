//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gametools::{Spinner, Wedge};
use log::warn;

use dunnet_data::{GameDef, ItemDef, RoomDef, SpinnerDef, UseEffectDef, WorldDef};

use crate::item::{Item, UseEffect};
use crate::player::Player;
use crate::room::Room;
use crate::spinners::{SpinnerType, create_default_spinners};
use crate::world::{DigSite, DunnetWorld, GameConfig};

/// Parse a `WorldDef` from RON text.
///
/// # Errors
/// - on RON syntax errors or fields of the wrong type
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(ron::from_str(text)?)
}

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - on file IO error or RON parsing error
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef RON from '{}'", path.display()))
}

/// Convert a validated `WorldDef` into a populated `DunnetWorld`.
///
/// Help entries are attached separately by the caller.
pub fn build_world_from_def(def: &WorldDef) -> DunnetWorld {
    let mut world = DunnetWorld::new_empty();

    world.spinners = build_spinners(&def.spinners);
    world.config = config_from_def(&def.game);
    world.player = Player::new(def.game.start_room.clone());

    for room_def in &def.rooms {
        let room = room_from_def(room_def);
        world.rooms.insert(room.id.clone(), room);
    }

    for item_def in &def.items {
        let item = item_from_def(item_def);
        world.items.insert(item.id.clone(), item);
    }

    world
}

fn config_from_def(def: &GameDef) -> GameConfig {
    GameConfig {
        title: def.title.clone(),
        intro: def.intro.clone(),
        secret_room: def.secret_room.clone(),
        key_item: def.key_item.clone(),
        lamp_item: def.lamp_item.clone(),
        digging_tool: def.digging_tool.clone(),
        dig_site: DigSite {
            room: def.dig_site.room.clone(),
            direction: def.dig_site.direction,
            to: def.dig_site.to.clone(),
            points: def.dig_site.points,
        },
        take_points: def.take_points,
        win_score: def.win_score,
        max_score: def.max_score,
    }
}

fn build_spinners(defs: &[SpinnerDef]) -> HashMap<SpinnerType, Spinner<String>> {
    let mut spinners = create_default_spinners();
    for def in defs {
        let Some(spinner_type) = SpinnerType::from_key(&def.id) else {
            warn!("ignoring unknown spinner '{}' in world data", def.id);
            continue;
        };
        if def.wedges.is_empty() {
            warn!("spinner '{}' has no wedges; keeping built-in values", def.id);
            continue;
        }
        let wedges: Vec<Wedge<String>> = def
            .wedges
            .iter()
            .map(|w| Wedge::new_weighted(w.text.clone(), w.width))
            .collect();
        spinners.insert(spinner_type, Spinner::new(wedges));
    }
    spinners
}

fn room_from_def(def: &RoomDef) -> Room {
    let mut room = Room::new(def.id.clone(), def.name.clone(), def.desc.clone());
    room.dark = def.dark;
    room.exits = def.exits.iter().map(|exit| (exit.direction, exit.to.clone())).collect();
    room.contents.clone_from(&def.items);
    room
}

fn item_from_def(def: &ItemDef) -> Item {
    let mut item = Item::new(def.id.clone(), def.name.clone(), def.desc.clone());
    item.portable = def.portable;
    item.usable = def.usable;
    for alias in &def.aliases {
        item.add_alias(alias);
    }
    item.effect = def.effect.as_ref().map(|effect| match effect {
        UseEffectDef::ToggleLamp => UseEffect::ToggleLamp,
        UseEffectDef::Consume { points, message } => UseEffect::Consume {
            points: *points,
            message: message.clone(),
        },
    });
    item
}

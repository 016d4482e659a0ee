//! Observation command handlers.
//!
//! - [`look_handler`] - describe the current room
//! - [`examine_handler`] - close-up of an item that is here or carried
//!
//! Both are gated by the lighting rule: in a dark room without a lit lamp in
//! hand nothing in the room is inspected.

use crate::{DunnetWorld, ItemHolder, View, ViewItem};

use anyhow::Result;
use log::info;

/// Shows description of surroundings, and marks the room visited.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &mut DunnetWorld, view: &mut View) -> Result<()> {
    if !world.can_see()? {
        view.push(ViewItem::TooDark);
        info!("player tried to look around {} in the dark", world.player.location);
        return Ok(());
    }
    world.player_room_mut()?.visited = true;
    let room = world.player_room_ref()?;
    room.show(world, view)?;
    info!("player looked around {}", room.id);
    Ok(())
}

/// Shows a close-up of an item in the room or inventory.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn examine_handler(world: &DunnetWorld, view: &mut View, target: &str) -> Result<()> {
    if !world.can_see()? {
        view.push(ViewItem::TooDark);
        return Ok(());
    }
    let room = world.player_room_ref()?;
    match world.find_item(target) {
        Some(item) if room.contains_item(&item.id) || world.carrying(&item.id) => {
            item.show(view);
            info!("player examined {}", item.id);
        },
        _ => view.push(ViewItem::ActionFailure(format!("You don't see any '{target}' here."))),
    }
    Ok(())
}

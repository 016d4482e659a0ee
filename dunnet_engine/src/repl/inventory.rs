//! Inventory handlers: take, drop, and listing what the player carries.

use crate::{DunnetWorld, ItemHolder, View, ViewItem};

use anyhow::{Context, Result};
use log::info;

/// Pick up a portable item lying in the current room.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn take_handler(world: &mut DunnetWorld, view: &mut View, target: &str) -> Result<()> {
    if !world.can_see()? {
        view.push(ViewItem::TooDark);
        return Ok(());
    }
    let room = world.player_room_ref()?;
    let Some(item) = world.find_item(target).filter(|item| room.contains_item(&item.id)) else {
        view.push(ViewItem::ActionFailure(format!("You don't see any '{target}' here.")));
        return Ok(());
    };
    if !item.portable {
        view.push(ViewItem::ActionFailure(format!("You can't take the {}.", item.name)));
        return Ok(());
    }
    let (item_id, item_name) = (item.id.clone(), item.name.clone());

    world
        .take_item(&item_id)
        .with_context(|| format!("taking '{item_id}'"))?;
    world.player.award_points(world.config.take_points);
    view.push(ViewItem::ActionSuccess(format!("You take the {item_name}.")));
    info!("player took the {item_id}");
    Ok(())
}

/// Put down a carried item in the current room. Works in the dark.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn drop_handler(world: &mut DunnetWorld, view: &mut View, target: &str) -> Result<()> {
    let Some(item) = world.find_item(target).filter(|item| world.carrying(&item.id)) else {
        view.push(ViewItem::ActionFailure(format!("You don't have any '{target}'.")));
        return Ok(());
    };
    let (item_id, item_name) = (item.id.clone(), item.name.clone());

    world
        .drop_item(&item_id)
        .with_context(|| format!("dropping '{item_id}'"))?;
    view.push(ViewItem::ActionSuccess(format!("You drop the {item_name}.")));
    info!("player dropped the {item_id} in {}", world.player.location);
    Ok(())
}

/// Show the player's inventory.
///
/// # Errors
/// Returns an error if a carried item id is unknown to the world.
pub fn inv_handler(world: &DunnetWorld, view: &mut View) -> Result<()> {
    let names = world
        .player
        .inventory
        .iter()
        .map(|id| {
            world
                .items
                .get(id)
                .map(|item| item.name.clone())
                .with_context(|| format!("inventory holds unknown item '{id}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    view.push(ViewItem::Inventory(names));
    Ok(())
}

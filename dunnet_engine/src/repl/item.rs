//! Item interaction handlers: use, turn, and dig.

use crate::spinners::SpinnerType;
use crate::{DunnetWorld, UseEffect, View, ViewItem};

use anyhow::{Context, Result};
use log::info;

/// Use a carried item, applying whatever effect it has.
///
/// # Errors
/// Returns an error if a consumed item vanishes from the inventory mid-turn.
pub fn use_handler(world: &mut DunnetWorld, view: &mut View, target: &str) -> Result<()> {
    let Some(item) = world.find_item(target).filter(|item| world.carrying(&item.id)) else {
        view.push(ViewItem::ActionFailure(format!("You don't have any '{target}'.")));
        return Ok(());
    };
    if !item.usable {
        view.push(ViewItem::ActionFailure(format!("You can't use the {}.", item.name)));
        return Ok(());
    }
    let (item_id, item_name, effect) = (item.id.clone(), item.name.clone(), item.effect.clone());

    match effect {
        Some(UseEffect::ToggleLamp) => {
            world.player.lamp_on = !world.player.lamp_on;
            let state = if world.player.lamp_on { "on" } else { "off" };
            view.push(ViewItem::ActionSuccess(format!("You turn {state} the {item_name}.")));
            info!("player switched the {item_id} {state}");
        },
        Some(UseEffect::Consume { points, message }) => {
            world
                .consume_item(&item_id)
                .with_context(|| format!("consuming '{item_id}'"))?;
            world.player.award_points(points);
            view.push(ViewItem::ActionSuccess(message));
            info!("player used up the {item_id} (+{points})");
        },
        None => view.push(ViewItem::ActionFailure(format!(
            "You can't figure out how to use the {item_name}."
        ))),
    }
    Ok(())
}

/// `turn on|off <target>`. Only the lamp has a switch, and only while carried.
pub fn turn_handler(world: &mut DunnetWorld, view: &mut View, switch: &str, target: &str) {
    let lamp = world
        .find_item(target)
        .filter(|item| matches!(item.effect, Some(UseEffect::ToggleLamp)) && world.carrying(&item.id))
        .map(|item| item.name.clone());
    let Some(lamp_name) = lamp else {
        view.push(ViewItem::ActionFailure(format!("You can't turn {switch} the {target}.")));
        return;
    };
    match switch {
        "on" | "off" => {
            world.player.lamp_on = switch == "on";
            view.push(ViewItem::ActionSuccess(format!("You turn {switch} the {lamp_name}.")));
            info!("player turned the {lamp_name} {switch}");
        },
        _ => view.push(ViewItem::ActionFailure(format!(
            "You can 'turn on' or 'turn off' the {lamp_name}."
        ))),
    }
}

/// Dig with the digging tool. At the dig site this opens the hidden passage, once.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn dig_handler(world: &mut DunnetWorld, view: &mut View) -> Result<()> {
    if !world.carrying(&world.config.digging_tool) {
        view.push(ViewItem::ActionFailure("You need something to dig with.".into()));
        return Ok(());
    }
    let site = world.config.dig_site.clone();
    let room = world.player_room_mut()?;
    if room.id == site.room && room.exit_to(site.direction).is_none() {
        room.exits.insert(site.direction, site.to.clone());
        world.player.award_points(site.points);
        view.push(ViewItem::ActionSuccess(format!(
            "You dig in the soft soil and discover a hidden passage leading {}!",
            site.direction
        )));
        info!("player dug a passage {} from {} to {}", site.direction, site.room, site.to);
    } else {
        let msg = world.spin_spinner(SpinnerType::DigNothing, "You dig around but find nothing interesting.");
        view.push(ViewItem::ActionFailure(msg));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Item, ItemHolder, Player, Room};

    fn create_test_world() -> DunnetWorld {
        let mut world = DunnetWorld::new_empty();
        world.rooms.insert("garden".into(), Room::new("garden", "Garden", "Soft soil."));
        world.rooms.insert("secret".into(), Room::new("secret", "Secret", "Hidden."));
        world.rooms.insert("road".into(), Room::new("road", "Road", "A road."));

        let mut lamp = Item::new("lamp", "lamp", "A lamp.");
        lamp.usable = true;
        lamp.effect = Some(UseEffect::ToggleLamp);
        lamp.add_alias("lantern");
        let mut food = Item::new("food", "food", "Trail mix.");
        food.usable = true;
        food.effect = Some(UseEffect::Consume {
            points: 10,
            message: "You eat the trail mix. You feel refreshed!".into(),
        });
        let mut disk = Item::new("disk", "disk", "A disk.");
        disk.usable = true;
        for item in [lamp, food, disk, Item::new("shovel", "shovel", "A shovel."), Item::new("cpu", "cpu", "A chip.")] {
            world.items.insert(item.id.clone(), item);
        }

        world.player = Player::new("garden");
        for id in ["lamp", "food", "disk", "shovel", "cpu"] {
            world.player.add_item(id.into());
        }
        world
    }

    #[test]
    fn using_lamp_toggles_it() {
        let mut world = create_test_world();
        let mut view = View::new();
        use_handler(&mut world, &mut view, "lantern").unwrap();
        assert!(world.player.lamp_on);
        use_handler(&mut world, &mut view, "lamp").unwrap();
        assert!(!world.player.lamp_on);
        assert!(world.carrying("lamp"));
        assert_eq!(
            view.items,
            vec![
                ViewItem::ActionSuccess("You turn on the lamp.".into()),
                ViewItem::ActionSuccess("You turn off the lamp.".into()),
            ]
        );
    }

    #[test]
    fn consuming_removes_item_and_scores() {
        let mut world = create_test_world();
        let mut view = View::new();
        use_handler(&mut world, &mut view, "food").unwrap();
        assert!(!world.carrying("food"));
        assert_eq!(world.player.score, 10);
        world.check_placement().unwrap();

        use_handler(&mut world, &mut view, "food").unwrap();
        assert_eq!(view.items[1], ViewItem::ActionFailure("You don't have any 'food'.".into()));
        assert_eq!(world.player.score, 10);
    }

    #[test]
    fn use_failures_are_distinct() {
        let mut world = create_test_world();
        let mut view = View::new();
        use_handler(&mut world, &mut view, "cpu").unwrap();
        use_handler(&mut world, &mut view, "disk").unwrap();
        assert_eq!(
            view.items,
            vec![
                ViewItem::ActionFailure("You can't use the cpu.".into()),
                ViewItem::ActionFailure("You can't figure out how to use the disk.".into()),
            ]
        );
    }

    #[test]
    fn turn_works_only_on_carried_lamp() {
        let mut world = create_test_world();
        let mut view = View::new();
        turn_handler(&mut world, &mut view, "on", "lantern");
        assert!(world.player.lamp_on);
        turn_handler(&mut world, &mut view, "on", "lamp");
        assert!(world.player.lamp_on);
        turn_handler(&mut world, &mut view, "sideways", "lamp");
        turn_handler(&mut world, &mut view, "on", "disk");
        turn_handler(&mut world, &mut view, "off", "lamp");
        assert!(!world.player.lamp_on);
        assert_eq!(view.items[2], ViewItem::ActionFailure("You can 'turn on' or 'turn off' the lamp.".into()));
        assert_eq!(view.items[3], ViewItem::ActionFailure("You can't turn on the disk.".into()));

        world.player.remove_item("lamp");
        let mut view = View::new();
        turn_handler(&mut world, &mut view, "on", "lamp");
        assert!(!world.player.lamp_on);
        assert_eq!(view.items, vec![ViewItem::ActionFailure("You can't turn on the lamp.".into())]);
    }

    #[test]
    fn dig_opens_passage_once() {
        let mut world = create_test_world();
        let mut view = View::new();
        dig_handler(&mut world, &mut view).unwrap();
        assert_eq!(world.rooms["garden"].exit_to(Direction::Down), Some(&"secret".to_string()));
        assert_eq!(world.player.score, 25);
        assert_eq!(
            view.items[0],
            ViewItem::ActionSuccess("You dig in the soft soil and discover a hidden passage leading down!".into())
        );

        dig_handler(&mut world, &mut view).unwrap();
        assert_eq!(world.player.score, 25);
        assert_eq!(world.rooms["garden"].exits.len(), 1);
        assert_eq!(
            view.items[1],
            ViewItem::ActionFailure("You dig around but find nothing interesting.".into())
        );
    }

    #[test]
    fn dig_elsewhere_or_without_tool_does_nothing() {
        let mut world = create_test_world();
        world.player.location = "road".into();
        let mut view = View::new();
        dig_handler(&mut world, &mut view).unwrap();
        assert!(world.rooms["road"].exits.is_empty());

        world.player.location = "garden".into();
        world.player.remove_item("shovel");
        dig_handler(&mut world, &mut view).unwrap();
        assert!(world.rooms["garden"].exits.is_empty());
        assert_eq!(view.items[1], ViewItem::ActionFailure("You need something to dig with.".into()));
        assert_eq!(world.player.score, 0);
    }
}

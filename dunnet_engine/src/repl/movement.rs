//! Movement handlers.

use crate::{Direction, DunnetWorld, View, ViewItem, repl::look_handler};

use anyhow::Result;
use log::info;

/// Move the player in `direction` and describe where they end up.
///
/// # Errors
/// Returns an error if the current room or the exit's destination is missing.
pub fn move_to_handler(world: &mut DunnetWorld, view: &mut View, direction: Direction) -> Result<()> {
    if world.move_player(direction)? {
        look_handler(world, view)
    } else {
        info!("player tried to go {direction} from {} (no exit)", world.player.location);
        view.push(ViewItem::ActionFailure("You can't go that way.".into()));
        Ok(())
    }
}

/// Report a `go` target that isn't a direction.
pub fn bad_direction_handler(view: &mut View, text: &str) {
    view.push(ViewItem::ActionFailure(format!("You can't go '{text}'.")));
}

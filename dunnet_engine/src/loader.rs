//! Loader utilities for building a `DunnetWorld` from serialized data.
//!
//! World content comes from a `WorldDef` (RON); help entries are TOML-backed.
//! Both have copies bundled into the binary so the game runs with no data
//! directory at all.

pub mod help;
pub mod worlddef;

use crate::DunnetWorld;
use crate::loader::help::{HelpCommand, builtin_help};
use crate::loader::worlddef::{build_world_from_def, load_worlddef, parse_worlddef};

use dunnet_data::WorldDef;

use anyhow::{Context, Result, bail};
use log::info;
use std::path::Path;

const BUILTIN_WORLD: &str = include_str!("../data/world.ron");

/// Load the bundled default world.
///
/// # Errors
/// Errors bubble up from deserialization or validation of the bundled data.
pub fn load_world() -> Result<DunnetWorld> {
    let worlddef = parse_worlddef(BUILTIN_WORLD).context("while parsing built-in worlddef")?;
    let help = builtin_help()?;
    build_world(&worlddef, help)
}

/// Load a world from a RON file on disk, with the bundled help entries.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or validation.
pub fn load_world_from(path: &Path) -> Result<DunnetWorld> {
    let worlddef = load_worlddef(path).context("while loading worlddef from file")?;
    let help = builtin_help()?;
    build_world(&worlddef, help)
}

/// Validate a `WorldDef` and build the runtime world from it.
///
/// # Errors
/// - if the definition fails validation (all problems are listed in one error)
/// - if the built world doesn't hold every item exactly once
pub fn build_world(def: &WorldDef, help: Vec<HelpCommand>) -> Result<DunnetWorld> {
    validate_worlddef(def)?;
    let mut world = build_world_from_def(def);
    world.help = help;
    info!("{} spinners added to DunnetWorld", world.spinners.len());
    info!("{} rooms added to DunnetWorld", world.rooms.len());
    info!("{} items added to DunnetWorld", world.items.len());
    info!("{} help commands added to DunnetWorld", world.help.len());
    info!("player starts in '{}'", world.player.location);

    world.check_placement().context("while checking item placement")?;
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = dunnet_data::validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

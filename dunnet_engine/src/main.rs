#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Dunnet **
//! A small suburban text adventure.

use dunnet_engine::data_paths::data_path;
use dunnet_engine::loader::help::load_help_commands;
use dunnet_engine::style::GameStyle;
use dunnet_engine::{ArtProvider, AsciiArt, DunnetWorld, Session, load_world, load_world_from, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;

use log::{info, warn};

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Dunnet world...");
    let world = load_game_world().context("while loading DunnetWorld")?;
    info!("DunnetWorld loaded successfully.");

    let art = load_art();

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    let banner = art.banner();
    if !banner.is_empty() {
        println!("{}", banner.art_style());
    }
    println!("\n{:^60}\n", world.config.title.bright_yellow().underline());
    if !world.config.intro.is_empty() {
        println!("{}", world.config.intro.description_style());
    }

    let mut session = Session::with_art(world, Box::new(art));
    run_repl(&mut session)
}

/// Prefer an editable world file on disk; otherwise use the bundled one.
fn load_game_world() -> Result<DunnetWorld> {
    let mut world = match data_path("world.ron") {
        Some(path) => {
            info!("loading world from '{}'", path.display());
            load_world_from(&path)?
        },
        None => {
            info!("no world file on disk, using the built-in world");
            load_world()?
        },
    };
    if let Some(path) = data_path("help.toml") {
        world.help = load_help_commands(&path)?;
    }
    Ok(world)
}

/// Art is decoration, so a broken art file only costs the art.
fn load_art() -> AsciiArt {
    let loaded = match data_path("art.toml") {
        Some(path) => AsciiArt::load(&path),
        None => AsciiArt::builtin(),
    };
    loaded.unwrap_or_else(|err| {
        warn!("art unavailable, continuing without it: {err:#}");
        AsciiArt::default()
    })
}

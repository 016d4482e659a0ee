#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const DUNNET_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod art;
pub mod command;
pub mod data_paths;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod session;
pub mod spinners;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use art::{ArtProvider, AsciiArt, NoArt};
pub use dunnet_data::{Direction, Id};
pub use item::{Item, UseEffect};
pub use loader::{load_world, load_world_from};
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use session::{Session, TurnResult};
pub use view::{View, ViewItem};
pub use world::{DunnetWorld, ItemHolder, ItemLocation, WorldObject};

//! Decorative art lookup.
//!
//! The engine asks for art by room or item id while rendering. A provider
//! with nothing for a key returns an empty string and the output simply has
//! no art in that spot.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

const BUILTIN_ART: &str = include_str!("../data/art.toml");

/// Source of decorative art keyed by room id or item id.
pub trait ArtProvider {
    fn room_art(&self, room_id: &str) -> String;
    fn item_art(&self, item_id: &str) -> String;
    fn victory_art(&self) -> String {
        String::new()
    }
    fn banner(&self) -> String {
        String::new()
    }
}

/// Provider with no art at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArt;

impl ArtProvider for NoArt {
    fn room_art(&self, _room_id: &str) -> String {
        String::new()
    }
    fn item_art(&self, _item_id: &str) -> String {
        String::new()
    }
}

/// Plain-text art loaded from a TOML table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AsciiArt {
    #[serde(default)]
    pub banner: String,
    #[serde(default)]
    pub victory: String,
    #[serde(default)]
    pub rooms: HashMap<String, String>,
    #[serde(default)]
    pub items: HashMap<String, String>,
}

impl AsciiArt {
    /// Art shipped with the engine.
    ///
    /// # Errors
    /// - if the bundled art file doesn't parse
    pub fn builtin() -> Result<AsciiArt> {
        Self::from_toml_str(BUILTIN_ART).context("while parsing built-in art")
    }

    /// Parse art from TOML text.
    ///
    /// # Errors
    /// - on TOML syntax errors or wrongly typed entries
    pub fn from_toml_str(text: &str) -> Result<AsciiArt> {
        let art: AsciiArt = toml::from_str(text)?;
        info!(
            "art loaded for {} rooms and {} items",
            art.rooms.len(),
            art.items.len()
        );
        Ok(art)
    }

    /// Load art from a TOML file.
    ///
    /// # Errors
    /// - on file IO error or TOML parsing error
    pub fn load(path: &Path) -> Result<AsciiArt> {
        let text = fs::read_to_string(path).with_context(|| format!("reading art from '{}'", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing art from '{}'", path.display()))
    }
}

impl ArtProvider for AsciiArt {
    fn room_art(&self, room_id: &str) -> String {
        self.rooms.get(room_id).cloned().unwrap_or_default()
    }
    fn item_art(&self, item_id: &str) -> String {
        self.items.get(item_id).cloned().unwrap_or_default()
    }
    fn victory_art(&self) -> String {
        self.victory.clone()
    }
    fn banner(&self) -> String {
        self.banner.clone()
    }
}

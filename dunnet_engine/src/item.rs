//! Item types and related helpers.
//!
//! Items are never duplicated: rooms and the player refer to them by id, and
//! the item itself only carries what never changes during a session.

use crate::{Id, View, ViewItem, WorldObject};

/// What `use` does with an item. Usable items without an effect exist but
/// there is nothing the player can figure out to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseEffect {
    /// Flip the lamp switch. The item is kept.
    ToggleLamp,
    /// Remove the item from play and award points.
    Consume { points: usize, message: String },
}

/// Anything in the world the player can look at, pick up, or use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// The stable id of this item.
    pub id: Id,
    /// The display name of the item.
    pub name: String,
    pub description: String,
    pub portable: bool,
    pub usable: bool,
    /// Lowercased names the player may use for this item. Always includes `name`.
    pub aliases: Vec<String>,
    pub effect: Option<UseEffect>,
}

impl WorldObject for Item {
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

impl Item {
    /// Create a portable, unusable item known only by its own name.
    pub fn new(id: impl Into<Id>, name: impl Into<String>, description: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            aliases: vec![name.trim().to_lowercase()],
            name,
            description: description.into(),
            portable: true,
            usable: false,
            effect: None,
        }
    }

    /// Add an alternate name the player can use. Duplicates are ignored.
    pub fn add_alias(&mut self, alias: &str) {
        let lc = alias.trim().to_lowercase();
        if !lc.is_empty() && !self.aliases.contains(&lc) {
            self.aliases.push(lc);
        }
    }

    /// Returns true if `text` names this item (case-insensitive, whole alias).
    pub fn answers_to(&self, text: &str) -> bool {
        let lc = text.trim().to_lowercase();
        self.aliases.iter().any(|alias| *alias == lc)
    }

    /// Item name with its first letter capitalized, for headings.
    pub fn title_name(&self) -> String {
        let mut chars = self.name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Push a close-up description of the item.
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::ItemDescription {
            item_id: self.id.clone(),
            name: self.title_name(),
            description: self.description.clone(),
            portable: self.portable,
            usable: self.usable,
        });
    }
}

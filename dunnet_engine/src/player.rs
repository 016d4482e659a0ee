//! Player -- where the player stands, what they carry, and their tallies.
use crate::{Id, ItemHolder};

/// State that follows the player through a session.
///
/// `inventory` keeps pickup order for display. `lamp_on` is the lamp's switch,
/// which only matters while the lamp item is carried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    pub location: Id,
    pub inventory: Vec<Id>,
    pub score: usize,
    pub moves: usize,
    pub lamp_on: bool,
}

impl Player {
    /// Create a player standing in `location` with empty pockets.
    pub fn new(location: impl Into<Id>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    /// Add points to the score. Scores never go down.
    pub fn award_points(&mut self, points: usize) {
        self.score = self.score.saturating_add(points);
    }
}

impl ItemHolder for Player {
    fn add_item(&mut self, item_id: Id) {
        if !self.inventory.contains(&item_id) {
            self.inventory.push(item_id);
        }
    }

    fn remove_item(&mut self, item_id: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|id| id == item_id) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }
}

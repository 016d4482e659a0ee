//! Spinners: weighted pools of interchangeable messages.
//!
//! Each engine spinner has built-in defaults; the world file may replace them.

use gametools::spinners::{Spinner, Wedge};
use serde::{Deserialize, Serialize};

use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpinnerType {
    DigNothing,
    UnrecognizedCommand,
}

impl SpinnerType {
    pub const ALL: [SpinnerType; 2] = [SpinnerType::DigNothing, SpinnerType::UnrecognizedCommand];

    /// Key used for this spinner in world data.
    pub fn as_key(self) -> &'static str {
        match self {
            SpinnerType::DigNothing => "digNothing",
            SpinnerType::UnrecognizedCommand => "unrecognizedCommand",
        }
    }

    /// Look up a spinner type by its world data key.
    pub fn from_key(key: &str) -> Option<SpinnerType> {
        SpinnerType::ALL.into_iter().find(|ty| ty.as_key() == key)
    }

    /// Built-in values used when the world file doesn't supply any.
    pub fn default_values(self) -> &'static [&'static str] {
        match self {
            SpinnerType::DigNothing => &["You dig around but find nothing interesting."],
            SpinnerType::UnrecognizedCommand => &[
                "Try 'help' to see available commands.",
                "Use 'look' to examine your surroundings.",
                "Type 'inventory' to see what you're carrying.",
            ],
        }
    }
}

pub trait SpinnerExt {
    fn from_strs(words: &[&'static str]) -> Self;
}
impl SpinnerExt for Spinner<String> {
    fn from_strs(words: &[&'static str]) -> Self {
        let wedges = words.iter().map(|w| Wedge::new((*w).to_string())).collect::<Vec<_>>();
        Spinner::new(wedges)
    }
}

/// Build the spinner map with every engine spinner at its default values.
pub fn create_default_spinners() -> HashMap<SpinnerType, Spinner<String>> {
    SpinnerType::ALL
        .into_iter()
        .map(|ty| (ty, Spinner::from_strs(ty.default_values())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for ty in SpinnerType::ALL {
            assert_eq!(SpinnerType::from_key(ty.as_key()), Some(ty));
        }
        assert_eq!(SpinnerType::from_key("nope"), None);
    }

    #[test]
    fn serde_name_matches_key() {
        for ty in SpinnerType::ALL {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_key()));
        }
    }

    #[test]
    fn defaults_cover_every_spinner() {
        let spinners = create_default_spinners();
        for ty in SpinnerType::ALL {
            let value = spinners[&ty].spin().unwrap();
            assert!(ty.default_values().contains(&value.as_str()));
        }
    }
}

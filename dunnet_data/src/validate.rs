use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    AliasCollision { alias: String, first: Id, second: Id },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::AliasCollision { alias, first, second } => {
                write!(f, "alias '{alias}' is shared by items '{first}' and '{second}'")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use dunnet_data::{DigSiteDef, Direction, GameDef, ItemDef, RoomDef, WorldDef, validate_world};
///
/// let item = |id: &str| ItemDef {
///     id: id.into(),
///     name: id.into(),
///     desc: "A thing.".into(),
///     portable: true,
///     usable: false,
///     aliases: Vec::new(),
///     effect: None,
/// };
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         start_room: "start".into(),
///         secret_room: "start".into(),
///         key_item: "key".into(),
///         lamp_item: "lamp".into(),
///         digging_tool: "shovel".into(),
///         dig_site: DigSiteDef {
///             room: "start".into(),
///             direction: Direction::Down,
///             to: "start".into(),
///             points: 25,
///         },
///         ..GameDef::default()
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         dark: false,
///         exits: Vec::new(),
///         items: vec!["key".into(), "lamp".into(), "shovel".into()],
///     }],
///     items: vec![item("key"), item("lamp"), item("shovel")],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();
    let mut spinners = HashSet::new();

    track_ids(
        "room",
        world.rooms.iter().map(|r| r.id.as_str()),
        &mut rooms,
        &mut errors,
    );
    track_ids(
        "item",
        world.items.iter().map(|i| i.id.as_str()),
        &mut items,
        &mut errors,
    );
    track_ids(
        "spinner",
        world.spinners.iter().map(|s| s.id.as_str()),
        &mut spinners,
        &mut errors,
    );

    let game = &world.game;
    for (room_ref, context) in [
        (&game.start_room, "game start room"),
        (&game.secret_room, "game secret room"),
        (&game.dig_site.room, "dig site room"),
        (&game.dig_site.to, "dig site destination"),
    ] {
        check_ref("room", room_ref, &rooms, context.to_string(), &mut errors);
    }
    for (item_ref, context) in [
        (&game.key_item, "game key item"),
        (&game.lamp_item, "game lamp item"),
        (&game.digging_tool, "game digging tool"),
    ] {
        check_ref("item", item_ref, &items, context.to_string(), &mut errors);
    }

    if let Some(site) = world.rooms.iter().find(|r| r.id == game.dig_site.room)
        && site.exits.iter().any(|exit| exit.direction == game.dig_site.direction)
    {
        errors.push(ValidationError::InvalidValue {
            context: format!(
                "dig site room '{}' already has a '{}' exit",
                site.id, game.dig_site.direction
            ),
        });
    }

    // each item must start in exactly one room
    let mut placements: HashMap<&str, &str> = HashMap::new();
    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            check_ref(
                "room",
                &exit.to,
                &rooms,
                format!("room '{}' exit '{}'", room.id, exit.direction),
                &mut errors,
            );
            if !directions.insert(exit.direction) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has more than one '{}' exit", room.id, exit.direction),
                });
            }
        }
        for item_id in &room.items {
            check_ref(
                "item",
                item_id,
                &items,
                format!("room '{}' contents", room.id),
                &mut errors,
            );
            if let Some(first_room) = placements.insert(item_id.as_str(), room.id.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!(
                        "item '{item_id}' placed more than once (rooms '{first_room}' and '{}')",
                        room.id
                    ),
                });
            }
        }
    }

    for item in &world.items {
        if !placements.contains_key(item.id.as_str()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' is not placed in any room", item.id),
            });
        }
        if item.effect.is_some() && !item.usable {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' has a use effect but is not usable", item.id),
            });
        }
        if matches!(item.effect, Some(UseEffectDef::ToggleLamp)) && item.id != world.game.lamp_item {
            errors.push(ValidationError::InvalidValue {
                context: format!(
                    "item '{}' toggles the lamp but the game lamp is '{}'",
                    item.id, world.game.lamp_item
                ),
            });
        }
    }

    check_aliases(&world.items, &mut errors);

    errors
}

/// Every name and alias (lowercased) must resolve to a single item.
fn check_aliases(items: &[ItemDef], errors: &mut Vec<ValidationError>) {
    let mut owners: HashMap<String, &str> = HashMap::new();
    for item in items {
        let mut own_terms: HashSet<String> = HashSet::new();
        for term in std::iter::once(&item.name).chain(item.aliases.iter()) {
            let lc = term.trim().to_lowercase();
            if lc.is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("item '{}' has a blank name or alias", item.id),
                });
                continue;
            }
            if !own_terms.insert(lc.clone()) {
                continue;
            }
            if let Some(first) = owners.insert(lc.clone(), item.id.as_str()) {
                errors.push(ValidationError::AliasCollision {
                    alias: lc,
                    first: first.to_string(),
                    second: item.id.clone(),
                });
            }
        }
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    seen: &mut HashSet<&'a str>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(
    kind: &'static str,
    id: &str,
    known: &HashSet<&str>,
    context: String,
    errors: &mut Vec<ValidationError>,
) {
    if !known.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

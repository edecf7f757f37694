use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{StaError, StaResult};
use crate::id::{ItemId, MonsterId, RoomId};

/// Health assigned to a monster when none is given.
pub const DEFAULT_MONSTER_HEALTH: i64 = 100;
/// Attack power assigned to a monster when none is given.
pub const DEFAULT_MONSTER_ATTACK: i64 = 10;

/// A cardinal direction a door can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
}

impl Direction {
    /// All directions in menu order.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parse a direction from its name or single-letter abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// Get the display name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An object lying in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item.
    pub id: ItemId,
    /// Display name of the item.
    pub name: String,
    /// Free-text description of the item.
    pub description: String,
    /// The room this item was placed in.
    pub room_id: RoomId,
    /// Whether the item can be carried in a player's inventory.
    pub inventory: bool,
}

/// A creature placed in a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monster {
    /// Unique identifier for this monster.
    pub id: MonsterId,
    /// Display name of the monster.
    pub name: String,
    /// Free-text description of the monster.
    pub description: String,
    /// Hit points.
    pub health: i64,
    /// Damage dealt per attack.
    pub attack_power: i64,
    /// The room this monster was placed in.
    pub room_id: RoomId,
}

/// A passage out of a room, optionally leading to another room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// The wall of the room this door sits in.
    pub direction: Direction,
    /// Optional flavor text.
    pub description: Option<String>,
    /// The room on the other side. `None` for a dead end.
    pub destination: Option<RoomId>,
}

impl Door {
    /// Create a dead-end door facing `direction`.
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            description: None,
            destination: None,
        }
    }

    /// Attach flavor text. Blank text is treated as no description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = if description.trim().is_empty() {
            None
        } else {
            Some(description)
        };
        self
    }

    /// Point the door at another room.
    pub fn leading_to(mut self, destination: RoomId) -> Self {
        self.destination = Some(destination);
        self
    }
}

/// A node in the world graph. Owns its items, monsters, and doors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier for this room.
    pub id: RoomId,
    /// Display name, unique across the registry ignoring case.
    pub name: String,
    /// Free-text description. May be empty.
    pub description: String,
    /// Items in placement order.
    pub items: Vec<Item>,
    /// Monsters in placement order.
    pub monsters: Vec<Monster>,
    doors: BTreeMap<Direction, Door>,
}

impl Room {
    /// Create an empty room with a fresh ID.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(RoomId::new(), name)
    }

    /// Create an empty room with a pre-assigned ID.
    pub fn with_id(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            items: Vec::new(),
            monsters: Vec::new(),
            doors: BTreeMap::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Place a new item in this room and return it.
    pub fn add_item(&mut self, name: impl Into<String>, description: impl Into<String>) -> &Item {
        let index = self.items.len();
        self.items.push(Item {
            id: ItemId::new(),
            name: name.into(),
            description: description.into(),
            room_id: self.id,
            inventory: false,
        });
        &self.items[index]
    }

    /// Place a new monster in this room and return it.
    pub fn add_monster(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        health: i64,
        attack_power: i64,
    ) -> &Monster {
        let index = self.monsters.len();
        self.monsters.push(Monster {
            id: MonsterId::new(),
            name: name.into(),
            description: description.into(),
            health,
            attack_power,
            room_id: self.id,
        });
        &self.monsters[index]
    }

    /// Add a door. Each direction holds at most one door.
    pub fn add_door(&mut self, door: Door) -> StaResult<()> {
        if self.doors.contains_key(&door.direction) {
            return Err(StaError::DuplicateDoor {
                room: self.name.clone(),
                direction: door.direction,
            });
        }
        self.doors.insert(door.direction, door);
        Ok(())
    }

    /// The door facing `direction`, if any.
    pub fn door(&self, direction: Direction) -> Option<&Door> {
        self.doors.get(&direction)
    }

    /// All doors, ordered north, south, east, west.
    pub fn doors(&self) -> impl Iterator<Item = &Door> {
        self.doors.values()
    }

    /// Number of doors in this room.
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Directions that have no door yet.
    pub fn free_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|d| !self.doors.contains_key(d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_parse_accepts_names_and_letters() {
        assert_eq!(Direction::parse("North"), Some(Direction::North));
        assert_eq!(Direction::parse(" w "), Some(Direction::West));
        assert_eq!(Direction::parse("up"), None);
    }

    #[test]
    fn items_and_monsters_point_back_to_room() {
        let mut room = Room::new("Armory");
        let room_id = room.id;
        let item_id = room.add_item("Sword", "Rusty").id;
        room.add_monster("Goblin", "Small and angry", 30, 4);

        assert_eq!(room.items[0].id, item_id);
        assert_eq!(room.items[0].room_id, room_id);
        assert!(!room.items[0].inventory);
        assert_eq!(room.monsters[0].room_id, room_id);
        assert_eq!(room.monsters[0].health, 30);
    }

    #[test]
    fn second_door_in_same_direction_rejected() {
        let mut room = Room::new("Hall");
        room.add_door(Door::new(Direction::North)).unwrap();
        let err = room.add_door(Door::new(Direction::North)).unwrap_err();
        assert_eq!(
            err,
            StaError::DuplicateDoor {
                room: "Hall".to_string(),
                direction: Direction::North,
            }
        );
        assert_eq!(room.door_count(), 1);
    }

    #[test]
    fn free_directions_shrink_as_doors_are_added() {
        let mut room = Room::new("Hall");
        assert_eq!(room.free_directions().len(), 4);
        room.add_door(Door::new(Direction::East)).unwrap();
        assert_eq!(
            room.free_directions(),
            vec![Direction::North, Direction::South, Direction::West]
        );
    }

    #[test]
    fn blank_door_description_is_none() {
        let door = Door::new(Direction::South).with_description("   ");
        assert!(door.description.is_none());
        let door = Door::new(Direction::South).with_description("Oak");
        assert_eq!(door.description.as_deref(), Some("Oak"));
    }
}

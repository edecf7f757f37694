use std::collections::HashMap;
use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::entity::{Door, Room};
use crate::error::{StaError, StaResult};
use crate::id::RoomId;

/// What the player chose to do with this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Author a world with the builder.
    Build,
    /// Play a world.
    Play,
}

impl SessionMode {
    /// Get the display name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Play => "play",
        }
    }
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A room as presented in a pick list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomChoice {
    /// Human-readable label, e.g. `Hall (a3f2b1c8)`.
    pub label: String,
    /// The room this entry selects.
    pub id: RoomId,
}

/// A borrowed, serializable view of the whole session.
#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    /// Player name, if collected.
    pub player_name: Option<&'a str>,
    /// Selected mode, if any.
    pub mode: Option<SessionMode>,
    /// World name, if set by the builder.
    pub world_name: Option<&'a str>,
    /// All rooms in insertion order.
    pub rooms: &'a [Room],
}

/// The in-memory store of all rooms plus the session fields.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    player_name: Option<String>,
    mode: Option<SessionMode>,
    world_name: Option<String>,
    rooms: Vec<Room>,

    // Indexes
    by_id: HashMap<RoomId, usize>,
    by_name_lower: HashMap<String, RoomId>,
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Session fields
    // -----------------------------------------------------------------------

    /// Record the player's name.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = Some(name.into());
    }

    /// The player's name, if collected.
    pub fn player_name(&self) -> Option<&str> {
        self.player_name.as_deref()
    }

    /// Record the mode the player selected.
    pub fn set_session_mode(&mut self, mode: SessionMode) {
        self.mode = Some(mode);
    }

    /// The most recently selected mode.
    pub fn session_mode(&self) -> Option<SessionMode> {
        self.mode
    }

    /// Name the world. Surrounding whitespace is dropped.
    pub fn set_world_name(&mut self, name: &str) {
        self.world_name = Some(name.trim().to_string());
    }

    /// The world's name, if it has been named.
    pub fn world_name(&self) -> Option<&str> {
        self.world_name.as_deref()
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Commit a fully assembled room. Returns its ID.
    ///
    /// The room is validated again here: its ID must not be registered yet,
    /// the name must be non-empty and unused (ignoring case), and every door
    /// destination must name a room already in the registry. On error nothing
    /// is changed.
    pub fn add_room(&mut self, room: Room) -> StaResult<RoomId> {
        if self.by_id.contains_key(&room.id) {
            return Err(StaError::DuplicateId(room.id));
        }
        let key = name_key(&room.name);
        if key.is_empty() {
            return Err(StaError::EmptyName);
        }
        if self.by_name_lower.contains_key(&key) {
            return Err(StaError::DuplicateName(room.name.clone()));
        }
        if let Some(missing) = room
            .doors()
            .filter_map(|d| d.destination)
            .find(|dest| !self.by_id.contains_key(dest))
        {
            return Err(StaError::RoomNotFound(missing));
        }

        let id = room.id;
        debug!(
            "committing room {id} \"{}\" ({} items, {} monsters, {} doors)",
            room.name,
            room.items.len(),
            room.monsters.len(),
            room.door_count()
        );
        self.by_id.insert(id, self.rooms.len());
        self.by_name_lower.insert(key, id);
        self.rooms.push(room);
        Ok(id)
    }

    /// Whether a room with this name exists, ignoring case.
    pub fn room_name_exists(&self, name: &str) -> bool {
        self.by_name_lower.contains_key(&name_key(name))
    }

    /// Get a room by ID.
    pub fn get_room(&self, id: RoomId) -> Option<&Room> {
        self.by_id.get(&id).map(|&index| &self.rooms[index])
    }

    /// Find a room by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Room> {
        self.by_name_lower
            .get(&name_key(name))
            .and_then(|id| self.get_room(*id))
    }

    /// All rooms in the order they were added.
    pub fn all_rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Rooms projected into a pick list, in the same order as [`Self::all_rooms`].
    pub fn room_selection_list(&self) -> Vec<RoomChoice> {
        self.rooms
            .iter()
            .map(|room| RoomChoice {
                label: format!("{} ({})", room.name, room.id),
                id: room.id,
            })
            .collect()
    }

    /// Replace a room's name and description in place.
    ///
    /// The new name must be non-empty and must not clash with any other
    /// room. Keeping the current name (in any case) is allowed.
    pub fn update_room(&mut self, id: RoomId, name: &str, description: &str) -> StaResult<()> {
        let index = *self.by_id.get(&id).ok_or(StaError::RoomNotFound(id))?;
        let key = name_key(name);
        if key.is_empty() {
            return Err(StaError::EmptyName);
        }
        if self.by_name_lower.get(&key).is_some_and(|owner| *owner != id) {
            return Err(StaError::DuplicateName(name.trim().to_string()));
        }

        let room = &mut self.rooms[index];
        self.by_name_lower.remove(&name_key(&room.name));
        room.name = name.trim().to_string();
        room.description = description.to_string();
        self.by_name_lower.insert(key, id);
        debug!("updated room {id} to \"{}\"", room.name);
        Ok(())
    }

    /// Add a door to a room that is already in the registry.
    ///
    /// The destination, if any, must exist. The direction must be free.
    pub fn add_door(&mut self, room: RoomId, door: Door) -> StaResult<()> {
        let index = *self.by_id.get(&room).ok_or(StaError::RoomNotFound(room))?;
        if let Some(dest) = door.destination.filter(|dest| !self.by_id.contains_key(dest)) {
            return Err(StaError::RoomNotFound(dest));
        }
        debug!("adding {} door to room {room}", door.direction);
        self.rooms[index].add_door(door)
    }

    /// Resolve where a door leads. `None` for dead ends and dangling IDs.
    pub fn destination_of(&self, door: &Door) -> Option<&Room> {
        door.destination.and_then(|id| self.get_room(id))
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Whether no rooms exist yet.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// A serializable view of the whole session.
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            player_name: self.player_name(),
            mode: self.mode,
            world_name: self.world_name(),
            rooms: &self.rooms,
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::entity::Direction;

    fn room(name: &str) -> Room {
        Room::new(name)
    }

    #[test]
    fn add_and_get_room() {
        let mut registry = Registry::new();
        let mut entrance = room("Entrance").with_description("A dark cave mouth");
        entrance.add_item("Torch", "Still warm");
        let expected = entrance.clone();

        let id = registry.add_room(entrance).unwrap();
        assert_eq!(registry.get_room(id), Some(&expected));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut registry = Registry::new();
        registry.add_room(room("Hall")).unwrap();
        assert!(registry.get_room(RoomId::new()).is_none());
    }

    #[test]
    fn duplicate_name_rejected_without_mutation() {
        let mut registry = Registry::new();
        registry.add_room(room("Hall")).unwrap();

        let err = registry.add_room(room("hALL")).unwrap_err();
        assert_eq!(err, StaError::DuplicateName("hALL".to_string()));
        assert_eq!(registry.room_count(), 1);
        assert_eq!(registry.room_selection_list().len(), 1);
    }

    #[test]
    fn reused_id_rejected_without_mutation() {
        let mut registry = Registry::new();
        let hall = room("Hall");
        let id = registry.add_room(hall.clone()).unwrap();

        let mut copy = hall;
        copy.name = "Vault".to_string();
        assert_eq!(registry.add_room(copy), Err(StaError::DuplicateId(id)));
        assert_eq!(registry.room_count(), 1);
        assert!(!registry.room_name_exists("Vault"));
        assert_eq!(registry.get_room(id).unwrap().name, "Hall");

        registry.update_room(id, "Hall", "x").unwrap();
        let names: Vec<_> = registry.all_rooms().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Hall"]);
    }

    #[test]
    fn blank_name_rejected() {
        let mut registry = Registry::new();
        assert_eq!(registry.add_room(room("   ")), Err(StaError::EmptyName));
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_room_is_committable() {
        let mut registry = Registry::new();
        let id = registry.add_room(room("Closet")).unwrap();
        let stored = registry.get_room(id).unwrap();
        assert!(stored.items.is_empty());
        assert!(stored.monsters.is_empty());
        assert_eq!(stored.door_count(), 0);
    }

    #[test]
    fn door_to_unknown_room_rejected() {
        let mut registry = Registry::new();
        let ghost = RoomId::new();
        let mut hall = room("Hall");
        hall.add_door(Door::new(Direction::East).leading_to(ghost)).unwrap();

        assert_eq!(registry.add_room(hall), Err(StaError::RoomNotFound(ghost)));
        assert!(registry.is_empty());
    }

    #[test]
    fn door_destination_resolves_by_id() {
        let mut registry = Registry::new();
        let library = registry.add_room(room("Library")).unwrap();
        let mut hall = room("Hall");
        hall.add_door(Door::new(Direction::East).leading_to(library)).unwrap();
        let hall = registry.add_room(hall).unwrap();

        let door = registry
            .get_room(hall)
            .and_then(|r| r.door(Direction::East))
            .unwrap();
        assert_eq!(registry.destination_of(door).unwrap().name, "Library");
    }

    #[test]
    fn add_door_to_existing_room() {
        let mut registry = Registry::new();
        let hall = registry.add_room(room("Hall")).unwrap();
        let library = registry.add_room(room("Library")).unwrap();

        registry
            .add_door(hall, Door::new(Direction::East).leading_to(library))
            .unwrap();
        let err = registry
            .add_door(hall, Door::new(Direction::East))
            .unwrap_err();
        assert!(matches!(err, StaError::DuplicateDoor { .. }));

        let door = registry.get_room(hall).unwrap().door(Direction::East).unwrap();
        assert_eq!(registry.destination_of(door).unwrap().id, library);
    }

    #[test]
    fn add_door_checks_both_ends_exist() {
        let mut registry = Registry::new();
        let hall = registry.add_room(room("Hall")).unwrap();
        let ghost = RoomId::new();

        assert_eq!(
            registry.add_door(ghost, Door::new(Direction::North)),
            Err(StaError::RoomNotFound(ghost))
        );
        assert_eq!(
            registry.add_door(hall, Door::new(Direction::North).leading_to(ghost)),
            Err(StaError::RoomNotFound(ghost))
        );
        assert_eq!(registry.get_room(hall).unwrap().door_count(), 0);
    }

    #[test]
    fn selection_list_follows_insertion_order() {
        let mut registry = Registry::new();
        let a = registry.add_room(room("Attic")).unwrap();
        let c = registry.add_room(room("Cellar")).unwrap();
        let b = registry.add_room(room("Bedroom")).unwrap();

        let ids: Vec<RoomId> = registry.room_selection_list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, c, b]);
        assert_eq!(registry.room_selection_list()[0].label, format!("Attic ({a})"));
    }

    #[test]
    fn update_room_renames_and_reindexes() {
        let mut registry = Registry::new();
        let id = registry.add_room(room("Hall")).unwrap();
        registry.update_room(id, " Great Hall ", "Banners everywhere").unwrap();

        let stored = registry.get_room(id).unwrap();
        assert_eq!(stored.name, "Great Hall");
        assert_eq!(stored.description, "Banners everywhere");
        assert!(registry.room_name_exists("great hall"));
        assert!(!registry.room_name_exists("hall"));
    }

    #[test]
    fn update_room_keeping_own_name_is_allowed() {
        let mut registry = Registry::new();
        let id = registry.add_room(room("Hall")).unwrap();
        registry.update_room(id, "HALL", "").unwrap();
        assert_eq!(registry.get_room(id).unwrap().name, "HALL");
    }

    #[test]
    fn update_room_to_other_rooms_name_rejected() {
        let mut registry = Registry::new();
        registry.add_room(room("Hall")).unwrap();
        let library = registry.add_room(room("Library")).unwrap();

        let err = registry.update_room(library, "hall", "").unwrap_err();
        assert_eq!(err, StaError::DuplicateName("hall".to_string()));
        assert_eq!(registry.get_room(library).unwrap().name, "Library");
    }

    #[test]
    fn update_unknown_room_is_not_found() {
        let mut registry = Registry::new();
        let ghost = RoomId::new();
        assert_eq!(
            registry.update_room(ghost, "Hall", ""),
            Err(StaError::RoomNotFound(ghost))
        );
    }

    #[test]
    fn session_fields_round_trip() {
        let mut registry = Registry::new();
        assert!(registry.world_name().is_none());
        registry.set_player_name("Ada");
        registry.set_session_mode(SessionMode::Build);
        registry.set_world_name("  Cave ");

        assert_eq!(registry.player_name(), Some("Ada"));
        assert_eq!(registry.session_mode(), Some(SessionMode::Build));
        assert_eq!(registry.world_name(), Some("Cave"));
    }

    proptest! {
        #[test]
        fn added_names_exist_in_every_case(
            names in prop::collection::hash_set("[a-z][a-z ]{0,10}[a-z]", 1..12)
        ) {
            let mut registry = Registry::new();
            for name in &names {
                registry.add_room(Room::new(name.clone())).unwrap();
                prop_assert_eq!(
                    registry.room_selection_list().len(),
                    registry.all_rooms().len()
                );
            }
            prop_assert_eq!(registry.room_count(), names.len());
            for name in &names {
                prop_assert!(registry.room_name_exists(name));
                prop_assert!(registry.room_name_exists(&name.to_uppercase()));
            }
        }

        #[test]
        fn case_variant_duplicates_never_mutate(name in "[a-zA-Z]{1,12}") {
            let mut registry = Registry::new();
            registry.add_room(Room::new(name.clone())).unwrap();
            let before = registry.room_count();

            let result = registry.add_room(Room::new(name.to_uppercase()));
            prop_assert!(matches!(result, Err(StaError::DuplicateName(_))));
            let result = registry.add_room(Room::new(name.to_lowercase()));
            prop_assert!(matches!(result, Err(StaError::DuplicateName(_))));
            prop_assert_eq!(registry.room_count(), before);
        }
    }
}

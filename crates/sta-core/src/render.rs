//! Human-readable and JSON renderings of a whole session, for the
//! end-of-session dump. Neither format is meant to be read back.

use std::fmt;

use crate::entity::Room;
use crate::registry::Registry;

const NONE: &str = "(none)";

/// Render every session field and every room with its contents as text.
pub fn render_session(registry: &Registry) -> String {
    SessionText { registry }.to_string()
}

/// Render one room with its items, monsters, and doors.
///
/// Door destinations are resolved through the registry; an identifier that
/// no longer resolves is shown as a missing room rather than dropped.
pub fn render_room(registry: &Registry, room: &Room) -> String {
    RoomText { registry, room }.to_string()
}

struct SessionText<'a> {
    registry: &'a Registry,
}

impl fmt::Display for SessionText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry;
        let mode = registry.session_mode().map(|m| m.to_string());

        writeln!(f, "Player: {}", registry.player_name().unwrap_or(NONE))?;
        writeln!(f, "Mode:   {}", mode.as_deref().unwrap_or(NONE))?;
        writeln!(f, "World:  {}", registry.world_name().unwrap_or(NONE))?;
        writeln!(f, "Rooms:  {}", registry.room_count())?;

        for room in registry.all_rooms() {
            writeln!(f)?;
            write!(f, "{}", RoomText { registry, room })?;
        }
        Ok(())
    }
}

struct RoomText<'a> {
    registry: &'a Registry,
    room: &'a Room,
}

impl fmt::Display for RoomText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let room = self.room;
        writeln!(f, "[{}] {}", room.id, room.name)?;
        if !room.description.is_empty() {
            writeln!(f, "  {}", room.description)?;
        }

        if room.items.is_empty() {
            writeln!(f, "  items:    {NONE}")?;
        } else {
            writeln!(f, "  items:")?;
            for item in &room.items {
                let portable = if item.inventory { ", portable" } else { "" };
                writeln!(
                    f,
                    "    - [{}] {}{portable}: {}",
                    item.id, item.name, item.description
                )?;
            }
        }

        if room.monsters.is_empty() {
            writeln!(f, "  monsters: {NONE}")?;
        } else {
            writeln!(f, "  monsters:")?;
            for monster in &room.monsters {
                writeln!(
                    f,
                    "    - [{}] {} (health {}, attack {}): {}",
                    monster.id,
                    monster.name,
                    monster.health,
                    monster.attack_power,
                    monster.description
                )?;
            }
        }

        if room.door_count() == 0 {
            return writeln!(f, "  doors:    {NONE}");
        }
        writeln!(f, "  doors:")?;
        for door in room.doors() {
            write!(f, "    - {} -> ", door.direction)?;
            match door.destination {
                None => write!(f, "nowhere")?,
                Some(id) => match self.registry.get_room(id) {
                    Some(dest) => write!(f, "{} [{}]", dest.name, dest.id)?,
                    None => write!(f, "missing room [{id}]")?,
                },
            }
            if let Some(ref description) = door.description {
                write!(f, ": {description}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the session as pretty-printed JSON.
pub fn render_session_json(registry: &Registry) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&registry.snapshot())
}

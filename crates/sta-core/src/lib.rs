//! Core types for SuperText Adventure: rooms, items, monsters, doors, and the
//! world registry.
//!
//! This crate knows nothing about terminals or prompts. The builder crate
//! drives it; you can also assemble a [`Registry`] programmatically.

/// Rooms and the items, monsters, and doors they own.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Generated identifiers for rooms, items, and monsters.
pub mod id;
/// The session registry that owns every room.
pub mod registry;
pub mod render;

/// Re-export entity types.
pub use entity::{Direction, Door, Item, Monster, Room};
/// Re-export error types.
pub use error::{StaError, StaResult};
/// Re-export identifier types.
pub use id::{ItemId, MonsterId, RoomId};
/// Re-export registry types.
pub use registry::{Registry, RoomChoice, SessionMode, SessionSnapshot};

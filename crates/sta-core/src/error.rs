use crate::entity::Direction;
use crate::id::RoomId;

/// Alias for `Result<T, StaError>`.
pub type StaResult<T> = Result<T, StaError>;

/// Errors that can occur when manipulating the world registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StaError {
    /// The requested room ID does not exist in the registry.
    #[error("room not found: {0}")]
    RoomNotFound(RoomId),

    /// A room with this ID is already in the registry.
    #[error("room {0} is already registered")]
    DuplicateId(RoomId),

    /// A room with the same name (ignoring case) already exists.
    #[error("a room named \"{0}\" already exists")]
    DuplicateName(String),

    /// Room names must contain at least one non-whitespace character.
    #[error("room name must not be empty")]
    EmptyName,

    /// The room already has a door leading in this direction.
    #[error("room \"{room}\" already has a door to the {direction}")]
    DuplicateDoor {
        /// Name of the room the door was added to.
        room: String,
        /// The direction that is already taken.
        direction: Direction,
    },
}

use std::fmt;

/// Where the builder is in its workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    /// The world has no name yet.
    Naming,
    /// Waiting for the next menu action.
    MainMenu,
    /// Assembling a new room.
    CreatingRoom,
    /// Changing an existing room's name and description.
    EditingRoom,
    /// Showing one room in full.
    InspectingRoom,
    /// Showing every room.
    ListingRooms,
    /// Leaving the builder.
    Exiting,
    /// Terminal state.
    Exited,
}

impl fmt::Display for BuilderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Naming => "naming",
            Self::MainMenu => "main menu",
            Self::CreatingRoom => "creating room",
            Self::EditingRoom => "editing room",
            Self::InspectingRoom => "inspecting room",
            Self::ListingRooms => "listing rooms",
            Self::Exiting => "exiting",
            Self::Exited => "exited",
        };
        f.write_str(name)
    }
}

/// An entry in the builder's main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Start the room creation sequence.
    CreateRoom,
    /// Edit a room's name and description.
    EditRoom,
    /// Show one room with everything in it.
    InspectRoom,
    /// List all rooms.
    ListRooms,
    /// Leave the builder.
    Exit,
}

impl MenuAction {
    /// All actions in menu order.
    pub const ALL: [MenuAction; 5] = [
        Self::CreateRoom,
        Self::EditRoom,
        Self::InspectRoom,
        Self::ListRooms,
        Self::Exit,
    ];

    /// The menu label for this action.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateRoom => "Create a room",
            Self::EditRoom => "Edit a room",
            Self::InspectRoom => "View a room",
            Self::ListRooms => "List rooms",
            Self::Exit => "Exit builder",
        }
    }

    /// The state this action leads to.
    pub fn target(&self) -> BuilderState {
        match self {
            Self::CreateRoom => BuilderState::CreatingRoom,
            Self::EditRoom => BuilderState::EditingRoom,
            Self::InspectRoom => BuilderState::InspectingRoom,
            Self::ListRooms => BuilderState::ListingRooms,
            Self::Exit => BuilderState::Exiting,
        }
    }
}

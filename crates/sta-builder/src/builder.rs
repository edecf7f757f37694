//! The interactive world builder.
//!
//! `Builder` walks the [`BuilderState`] machine against a [`Registry`],
//! asking questions through a [`Prompter`]. Rooms are assembled entirely in
//! memory and committed with a single [`Registry::add_room`] call, so an
//! aborted prompt never leaves a half-built room behind.

use comfy_table::{ContentArrangement, Table};
use log::{debug, info};

use sta_core::entity::{DEFAULT_MONSTER_ATTACK, DEFAULT_MONSTER_HEALTH};
use sta_core::render::render_room;
use sta_core::{Door, Registry, Room, RoomId, StaError};

use crate::error::BuildResult;
use crate::prompt::{Prompter, Tone};
use crate::state::{BuilderState, MenuAction};

const NO_DESTINATION: &str = "Nowhere (dead end)";

/// Drives world authoring for one session.
pub struct Builder<'p, P: Prompter> {
    prompter: &'p mut P,
}

impl<'p, P: Prompter> Builder<'p, P> {
    /// Create a builder that talks through `prompter`.
    pub fn new(prompter: &'p mut P) -> Self {
        Self { prompter }
    }

    /// Run the builder until the user exits.
    ///
    /// Naming is skipped when the world already has a name, so calling this
    /// again for the same registry drops straight into the main menu.
    pub fn run(&mut self, registry: &mut Registry) -> BuildResult<()> {
        let mut state = Self::initial_state(registry);
        info!("builder started in state {state}");
        while state != BuilderState::Exited {
            let next = self.step(state, registry)?;
            debug!("builder: {state} -> {next}");
            state = next;
        }
        info!("builder exited with {} rooms", registry.room_count());
        Ok(())
    }

    /// The state a run begins in.
    pub fn initial_state(registry: &Registry) -> BuilderState {
        if registry.world_name().is_some() {
            BuilderState::MainMenu
        } else {
            BuilderState::Naming
        }
    }

    /// Perform the work of `state` and return the state to move to.
    pub fn step(
        &mut self,
        state: BuilderState,
        registry: &mut Registry,
    ) -> BuildResult<BuilderState> {
        match state {
            BuilderState::Naming => {
                self.name_world(registry)?;
                Ok(BuilderState::MainMenu)
            }
            BuilderState::MainMenu => self.main_menu(registry),
            BuilderState::CreatingRoom => {
                self.create_room(registry)?;
                Ok(BuilderState::MainMenu)
            }
            BuilderState::EditingRoom => {
                self.edit_room(registry)?;
                Ok(BuilderState::MainMenu)
            }
            BuilderState::InspectingRoom => {
                self.inspect_room(registry)?;
                Ok(BuilderState::MainMenu)
            }
            BuilderState::ListingRooms => {
                self.list_rooms(registry);
                Ok(BuilderState::MainMenu)
            }
            BuilderState::Exiting => {
                self.prompter.tell("Leaving the builder.", Tone::Info);
                Ok(BuilderState::Exited)
            }
            BuilderState::Exited => Ok(BuilderState::Exited),
        }
    }

    // -----------------------------------------------------------------------
    // Naming and menu
    // -----------------------------------------------------------------------

    fn name_world(&mut self, registry: &mut Registry) -> BuildResult<()> {
        loop {
            let answer = self
                .prompter
                .ask_text("What is the name of your world?", None)?;
            let name = answer.trim();
            if name.is_empty() {
                self.prompter.tell("Your world needs a name.", Tone::Warning);
                continue;
            }
            registry.set_world_name(name);
            self.prompter.tell(&format!("Welcome to {name}!"), Tone::Success);
            return Ok(());
        }
    }

    fn main_menu(&mut self, registry: &Registry) -> BuildResult<BuilderState> {
        let heading = format!(
            "{} ({} room{})",
            registry.world_name().unwrap_or("Untitled world"),
            registry.room_count(),
            if registry.room_count() == 1 { "" } else { "s" },
        );
        self.prompter.tell(&heading, Tone::Heading);

        let labels: Vec<String> = MenuAction::ALL
            .iter()
            .map(|a| a.label().to_string())
            .collect();
        let index = self
            .prompter
            .ask_choice("What would you like to do?", &labels)?;
        Ok(MenuAction::ALL[index].target())
    }

    // -----------------------------------------------------------------------
    // Creating rooms
    // -----------------------------------------------------------------------

    /// Assemble and commit one room. A rejected name starts the whole
    /// sequence over from the name prompt.
    fn create_room(&mut self, registry: &mut Registry) -> BuildResult<RoomId> {
        loop {
            let Some(room) = self.assemble_room(registry)? else {
                continue;
            };
            let name = room.name.clone();
            match registry.add_room(room) {
                Ok(id) => {
                    info!("created room {id} \"{name}\"");
                    self.prompter.tell(&format!("Created room \"{name}\"."), Tone::Success);
                    return Ok(id);
                }
                Err(StaError::DuplicateName(_)) => {
                    self.reject_duplicate(&name);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn reject_duplicate(&mut self, name: &str) {
        self.prompter.tell(
            &format!("A room named \"{name}\" already exists. Let's start over."),
            Tone::Warning,
        );
    }

    /// Collect everything for a new room. `None` means the name was rejected.
    fn assemble_room(&mut self, registry: &Registry) -> BuildResult<Option<Room>> {
        self.prompter.tell("New room", Tone::Heading);

        let name = self.prompter.ask_text("Room name:", None)?.trim().to_string();
        if name.is_empty() {
            self.prompter.tell("A room needs a name. Let's start over.", Tone::Warning);
            return Ok(None);
        }
        if registry.room_name_exists(&name) {
            self.reject_duplicate(&name);
            return Ok(None);
        }

        let description = self.prompter.ask_text("Description:", None)?;
        let mut room = Room::new(name).with_description(description.trim());

        self.add_items(&mut room)?;
        self.add_monsters(&mut room)?;
        self.add_doors(&mut room, registry)?;
        Ok(Some(room))
    }

    fn add_items(&mut self, room: &mut Room) -> BuildResult<()> {
        let question = format!("Add an item to {}?", room.name);
        while self.prompter.ask_yes_no(&question)? {
            let name = self.prompter.ask_text("Item name:", None)?;
            let description = self.prompter.ask_text("Item description:", None)?;
            let item = room.add_item(name.trim(), description.trim());
            debug!("added item {} \"{}\"", item.id, item.name);
        }
        Ok(())
    }

    fn add_monsters(&mut self, room: &mut Room) -> BuildResult<()> {
        let question = format!("Add a monster to {}?", room.name);
        while self.prompter.ask_yes_no(&question)? {
            let name = self.prompter.ask_text("Monster name:", None)?;
            let description = self.prompter.ask_text("Monster description:", None)?;
            let health = self
                .prompter
                .ask_int("Health:", DEFAULT_MONSTER_HEALTH)?;
            let attack = self
                .prompter
                .ask_int("Attack power:", DEFAULT_MONSTER_ATTACK)?;
            let monster = room.add_monster(name.trim(), description.trim(), health, attack);
            debug!("added monster {} \"{}\"", monster.id, monster.name);
        }
        Ok(())
    }

    /// Doors for a room still being assembled. Destinations come from the
    /// rooms already committed.
    fn add_doors(&mut self, room: &mut Room, registry: &Registry) -> BuildResult<()> {
        while let Some(door) = self.ask_door(room, registry, None)? {
            room.add_door(door)?;
        }
        Ok(())
    }

    /// Ask for one more door on `room`. `None` when the user is done or
    /// every direction is taken.
    fn ask_door(
        &mut self,
        room: &Room,
        registry: &Registry,
        exclude: Option<RoomId>,
    ) -> BuildResult<Option<Door>> {
        let free = room.free_directions();
        if free.is_empty() {
            self.prompter.tell(
                &format!("Every wall of {} already has a door.", room.name),
                Tone::Info,
            );
            return Ok(None);
        }
        if !self
            .prompter
            .ask_yes_no(&format!("Add a door to {}?", room.name))?
        {
            return Ok(None);
        }

        let labels: Vec<String> = free.iter().map(|d| d.name().to_string()).collect();
        let direction = free[self
            .prompter
            .ask_choice("Which way does the door face?", &labels)?];
        let description = self
            .prompter
            .ask_text("Door description (optional):", None)?;

        let mut door = Door::new(direction).with_description(description.trim());
        if let Some(dest) = self.pick_destination(registry, exclude)? {
            door = door.leading_to(dest);
        }
        Ok(Some(door))
    }

    /// Offer the committed rooms (minus `exclude`) as a destination.
    /// Asks nothing when there is no candidate.
    fn pick_destination(
        &mut self,
        registry: &Registry,
        exclude: Option<RoomId>,
    ) -> BuildResult<Option<RoomId>> {
        let candidates: Vec<_> = registry
            .room_selection_list()
            .into_iter()
            .filter(|c| Some(c.id) != exclude)
            .collect();
        if candidates.is_empty() {
            return Ok(None);
        }

        let mut labels = vec![NO_DESTINATION.to_string()];
        labels.extend(candidates.iter().map(|c| c.label.clone()));
        let index = self
            .prompter
            .ask_choice("Where does the door lead?", &labels)?;
        Ok(index.checked_sub(1).map(|i| candidates[i].id))
    }

    // -----------------------------------------------------------------------
    // Editing, inspecting, listing
    // -----------------------------------------------------------------------

    /// Let the user pick a committed room. `None` when there are none.
    fn pick_room(&mut self, registry: &Registry, prompt: &str) -> BuildResult<Option<RoomId>> {
        if registry.is_empty() {
            self.prompter.tell("There are no rooms yet.", Tone::Info);
            return Ok(None);
        }
        let choices = registry.room_selection_list();
        let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
        let index = self.prompter.ask_choice(prompt, &labels)?;
        Ok(Some(choices[index].id))
    }

    fn edit_room(&mut self, registry: &mut Registry) -> BuildResult<()> {
        let Some(id) = self.pick_room(registry, "Which room do you want to edit?")? else {
            return Ok(());
        };
        let Some(room) = registry.get_room(id) else {
            self.prompter.tell(&format!("Room {id} was not found."), Tone::Warning);
            return Ok(());
        };
        let current_name = room.name.clone();
        let current_description = room.description.clone();

        let name = loop {
            let answer = self.prompter.ask_text("Room name:", Some(&current_name))?;
            let name = answer.trim().to_string();
            if name.is_empty() {
                self.prompter.tell("A room needs a name.", Tone::Warning);
                continue;
            }
            match registry.find_by_name(&name) {
                Some(other) if other.id != id => {
                    self.prompter.tell(
                        &format!("Another room is already named \"{}\".", other.name),
                        Tone::Warning,
                    );
                }
                _ => break name,
            }
        };
        let description = self
            .prompter
            .ask_text("Description:", Some(&current_description))?;

        registry.update_room(id, &name, description.trim())?;
        if name != current_name || description.trim() != current_description {
            self.prompter.tell(&format!("Updated room \"{name}\"."), Tone::Success);
        }

        self.extend_doors(registry, id)
    }

    /// Doors for a committed room. The room itself is not offered as a
    /// destination.
    fn extend_doors(&mut self, registry: &mut Registry, id: RoomId) -> BuildResult<()> {
        loop {
            let Some(room) = registry.get_room(id) else {
                return Ok(());
            };
            let room = room.clone();
            let Some(door) = self.ask_door(&room, registry, Some(id))? else {
                return Ok(());
            };
            let direction = door.direction;
            registry.add_door(id, door)?;
            self.prompter.tell(
                &format!("Added a {direction} door to {}.", room.name),
                Tone::Success,
            );
        }
    }

    fn inspect_room(&mut self, registry: &Registry) -> BuildResult<()> {
        let Some(id) = self.pick_room(registry, "Which room do you want to view?")? else {
            return Ok(());
        };
        match registry.get_room(id) {
            Some(room) => self.prompter.tell(&render_room(registry, room), Tone::Plain),
            None => self
                .prompter
                .tell(&format!("Room {id} was not found."), Tone::Warning),
        }
        Ok(())
    }

    fn list_rooms(&mut self, registry: &Registry) {
        if registry.is_empty() {
            self.prompter.tell("There are no rooms yet.", Tone::Info);
            return;
        }

        self.prompter.tell(&room_table(registry).to_string(), Tone::Plain);
        let count = registry.room_count();
        self.prompter.tell(
            &format!("{count} room{}", if count == 1 { "" } else { "s" }),
            Tone::Info,
        );
    }
}

fn room_table(registry: &Registry) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Name", "Description"]);
    for room in registry.all_rooms() {
        table.add_row(vec![
            room.id.to_string(),
            room.name.clone(),
            summarize(&room.description).to_string(),
        ]);
    }
    table
}

fn summarize(description: &str) -> &str {
    if description.is_empty() { "—" } else { description }
}

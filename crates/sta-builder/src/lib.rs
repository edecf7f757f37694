//! Interactive world builder for SuperText Adventure.
//!
//! The [`Builder`] state machine authors rooms, items, monsters, and doors
//! into a [`sta_core::Registry`]. All questions go through the [`Prompter`]
//! trait, so the builder runs the same against a terminal or a script.

pub mod builder;
pub mod error;
pub mod prompt;
pub mod script;
/// Builder states and main menu actions.
pub mod state;

pub use builder::Builder;
pub use error::{BuildError, BuildResult, PromptError, PromptResult};
pub use prompt::{Prompter, Tone};
pub use script::ScriptedPrompter;
pub use state::{BuilderState, MenuAction};

//! Error types for the builder.

use thiserror::Error;

/// Result type for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Result type for builder operations.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors raised by a [`Prompter`](crate::prompt::Prompter) implementation.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user closed the input stream or interrupted the prompt.
    #[error("input aborted")]
    Aborted,

    /// Reading from or writing to the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end a builder run.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Prompting failed or was aborted.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The registry rejected a change the builder had already validated.
    #[error("world error: {0}")]
    World(#[from] sta_core::StaError),
}

impl BuildError {
    /// Whether the run ended because the user aborted input.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Prompt(PromptError::Aborted))
    }
}

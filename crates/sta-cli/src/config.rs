//! Configuration for an interactive session.

use std::time::Duration;

/// How the end-of-session dump is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DumpFormat {
    /// Indented plain text.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Pause between scripted greeting messages.
    pub pace: Duration,
    /// Whether output is colored.
    pub color: bool,
    /// Format of the end-of-session dump.
    pub dump: DumpFormat,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            pace: Duration::from_secs(2),
            color: true,
            dump: DumpFormat::Text,
        }
    }
}

impl ShellConfig {
    /// Set the pause between greeting messages, in milliseconds.
    pub fn with_pace_ms(mut self, ms: u64) -> Self {
        self.pace = Duration::from_millis(ms);
        self
    }

    /// Enable or disable colored output.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Set the end-of-session dump format.
    pub fn with_dump(mut self, dump: DumpFormat) -> Self {
        self.dump = dump;
        self
    }
}

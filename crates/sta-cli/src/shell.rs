//! The outer session: greeting, player name, and the mode loop.

use std::thread;

use log::info;

use sta_builder::{BuildResult, Builder, Prompter, Tone};
use sta_core::{Registry, SessionMode};

use crate::config::ShellConfig;
use crate::intro::BANNER;

/// Name used when the player leaves the name prompt blank.
pub const DEFAULT_PLAYER_NAME: &str = "Adventurer";

/// An entry in the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShellChoice {
    Build,
    Play,
    Quit,
}

impl ShellChoice {
    const ALL: [ShellChoice; 3] = [Self::Build, Self::Play, Self::Quit];

    fn label(&self) -> &'static str {
        match self {
            Self::Build => "Build an Adventure",
            Self::Play => "Play a Game",
            Self::Quit => "Quit",
        }
    }

    fn mode(&self) -> Option<SessionMode> {
        match self {
            Self::Build => Some(SessionMode::Build),
            Self::Play => Some(SessionMode::Play),
            Self::Quit => None,
        }
    }
}

/// Greets the player and dispatches into the builder or the play stub.
pub struct Shell<'a, P: Prompter> {
    prompter: &'a mut P,
    config: &'a ShellConfig,
}

impl<'a, P: Prompter> Shell<'a, P> {
    pub fn new(prompter: &'a mut P, config: &'a ShellConfig) -> Self {
        Self { prompter, config }
    }

    /// Run the session until the player quits.
    pub fn run(&mut self, registry: &mut Registry) -> BuildResult<()> {
        self.prompter.tell(BANNER, Tone::Success);

        let answer = self
            .prompter
            .ask_text("What is your name, adventurer?", Some(DEFAULT_PLAYER_NAME))?;
        let name = match answer.trim() {
            "" => DEFAULT_PLAYER_NAME.to_string(),
            trimmed => trimmed.to_string(),
        };
        registry.set_player_name(name.as_str());
        info!("session started for {name}");

        self.prompter.tell("", Tone::Plain);
        self.prompter
            .tell(&format!("Welcome, {name}!"), Tone::Success);
        self.prompter.tell("", Tone::Plain);
        self.pause();

        let labels: Vec<String> = ShellChoice::ALL
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        loop {
            let index = self
                .prompter
                .ask_choice("What would you like to do?", &labels)?;
            let Some(mode) = ShellChoice::ALL[index].mode() else {
                self.prompter
                    .tell(&format!("Farewell, {name}!"), Tone::Success);
                return Ok(());
            };

            registry.set_session_mode(mode);
            self.prompter
                .tell(&format!("You chose to {mode}."), Tone::Info);
            info!("mode selected: {mode}");

            match mode {
                SessionMode::Build => Builder::new(&mut *self.prompter).run(registry)?,
                SessionMode::Play => self.prompter.tell(
                    "Playing a game is not available yet. Build an adventure first!",
                    Tone::Warning,
                ),
            }
        }
    }

    fn pause(&self) {
        if !self.config.pace.is_zero() {
            thread::sleep(self.config.pace);
        }
    }
}

#[cfg(test)]
mod tests {
    use sta_builder::ScriptedPrompter;

    use super::*;

    fn run_script(answers: &[&str]) -> (BuildResult<()>, Registry, ScriptedPrompter) {
        let config = ShellConfig::default().with_pace_ms(0);
        let mut prompter = ScriptedPrompter::new(answers.iter().copied());
        let mut registry = Registry::new();
        let result = Shell::new(&mut prompter, &config).run(&mut registry);
        (result, registry, prompter)
    }

    #[test]
    fn records_player_and_mode() {
        let (result, registry, prompter) = run_script(&["Ada", "play a game", "quit"]);
        result.unwrap();
        assert_eq!(registry.player_name(), Some("Ada"));
        assert_eq!(registry.session_mode(), Some(SessionMode::Play));
        assert!(prompter.was_told("Welcome, Ada!"));
        assert!(prompter.was_told("You chose to play."));
        assert!(prompter.was_told("not available yet"));
    }

    #[test]
    fn blank_player_name_uses_default() {
        let (result, registry, _) = run_script(&["  ", "3"]);
        result.unwrap();
        assert_eq!(registry.player_name(), Some(DEFAULT_PLAYER_NAME));
        assert!(registry.session_mode().is_none());
    }

    #[test]
    fn build_mode_runs_the_builder() {
        let (result, registry, _) = run_script(&[
            "Ada",
            "1",
            "Cave",
            "create a room",
            "Entrance",
            "A dark cave mouth",
            "n",
            "n",
            "n",
            "exit builder",
            "quit",
        ]);
        result.unwrap();
        assert_eq!(registry.session_mode(), Some(SessionMode::Build));
        assert_eq!(registry.world_name(), Some("Cave"));
        assert_eq!(registry.room_count(), 1);
    }

    #[test]
    fn reentering_the_builder_skips_naming() {
        let (result, registry, prompter) = run_script(&[
            "Ada",
            "1",
            "Cave",
            "exit builder",
            "1",
            "exit builder",
            "quit",
        ]);
        result.unwrap();
        assert_eq!(registry.world_name(), Some("Cave"));
        let naming = prompter
            .prompts()
            .iter()
            .filter(|p| p.contains("name of your world"))
            .count();
        assert_eq!(naming, 1);
    }

    #[test]
    fn abort_propagates() {
        let (result, registry, _) = run_script(&["Ada", "1"]);
        assert!(result.unwrap_err().is_aborted());
        assert!(registry.is_empty());
    }
}

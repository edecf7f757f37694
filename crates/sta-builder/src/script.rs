//! A [`Prompter`] that replays canned answers, for tests and demos.

use std::collections::VecDeque;

use crate::error::{PromptError, PromptResult};
use crate::prompt::{Prompter, Tone, match_choice, parse_yes_no};

/// Replays a fixed list of answers and records everything it was told.
///
/// Answers are interpreted exactly like terminal input: yes/no accepts
/// `y`/`yes`/`n`/`no`, choices accept a 1-based number or a label, and an
/// unrecognised answer is skipped as if the user had been asked again.
/// Running out of answers behaves like closing stdin.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<(Tone, String)>,
}

impl ScriptedPrompter {
    /// Create a prompter that will give `answers` in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Every prompt asked so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every message told so far, with its tone.
    pub fn messages(&self) -> &[(Tone, String)] {
        &self.messages
    }

    /// Whether any told message contains `needle`.
    pub fn was_told(&self, needle: &str) -> bool {
        self.messages.iter().any(|(_, m)| m.contains(needle))
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self, prompt: &str) -> PromptResult<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or(PromptError::Aborted)
    }
}

impl Prompter for ScriptedPrompter {
    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> PromptResult<String> {
        let answer = self.next_answer(prompt)?;
        if answer.trim().is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer)
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> PromptResult<bool> {
        loop {
            let answer = self.next_answer(prompt)?;
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => self.tell("Please answer yes or no.", Tone::Warning),
            }
        }
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> PromptResult<usize> {
        loop {
            let answer = self.next_answer(prompt)?;
            match match_choice(&answer, options) {
                Some(index) => return Ok(index),
                None => self.tell("Please pick one of the listed options.", Tone::Warning),
            }
        }
    }

    fn tell(&mut self, message: &str, tone: Tone) {
        self.messages.push((tone, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_takes_default() {
        let mut p = ScriptedPrompter::new(["", "Hall"]);
        assert_eq!(p.ask_text("Name", Some("Cellar")).unwrap(), "Cellar");
        assert_eq!(p.ask_text("Name", Some("Cellar")).unwrap(), "Hall");
        assert_eq!(p.prompts().len(), 2);
    }

    #[test]
    fn invalid_yes_no_is_asked_again() {
        let mut p = ScriptedPrompter::new(["perhaps", "yes"]);
        assert!(p.ask_yes_no("Continue?").unwrap());
        assert!(p.was_told("yes or no"));
    }

    #[test]
    fn ask_int_uses_default_for_garbage() {
        let mut p = ScriptedPrompter::new(["many", "", "7"]);
        assert_eq!(p.ask_int("Health", 100).unwrap(), 100);
        assert_eq!(p.ask_int("Health", 100).unwrap(), 100);
        assert_eq!(p.ask_int("Health", 100).unwrap(), 7);
    }

    #[test]
    fn exhausted_script_aborts() {
        let mut p = ScriptedPrompter::new(Vec::<String>::new());
        assert!(matches!(p.ask_text("Name", None), Err(PromptError::Aborted)));
    }
}

//! The prompt capability the builder asks questions through.
//!
//! The builder never touches stdin or stdout. A front end supplies a
//! [`Prompter`] and decides how questions look and how answers are read.
//! The answer-parsing helpers here are shared by every implementation so a
//! scripted session and a terminal session interpret input identically.

use crate::error::PromptResult;

/// How a message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Ordinary text.
    Plain,
    /// A section heading.
    Heading,
    /// Neutral status information, including empty-state notices.
    Info,
    /// Something was created or changed.
    Success,
    /// A rejected answer or a request that could not be carried out.
    Warning,
}

/// Questions and messages exchanged with the person building the world.
pub trait Prompter {
    /// Ask for free text. A blank answer yields `default` when one is given,
    /// otherwise the empty string.
    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> PromptResult<String>;

    /// Ask a yes/no question.
    fn ask_yes_no(&mut self, prompt: &str) -> PromptResult<bool>;

    /// Ask the user to pick one of `options`. Returns the chosen index.
    ///
    /// `options` must not be empty.
    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> PromptResult<usize>;

    /// Ask for an integer. Blank or non-numeric answers resolve to `default`.
    fn ask_int(&mut self, prompt: &str, default: i64) -> PromptResult<i64> {
        let answer = self.ask_text(prompt, Some(&default.to_string()))?;
        Ok(parse_int_or(&answer, default))
    }

    /// Show a message.
    fn tell(&mut self, message: &str, tone: Tone);
}

/// Parse an integer, falling back to `default` for blank or invalid input.
pub fn parse_int_or(input: &str, default: i64) -> i64 {
    input.trim().parse().unwrap_or(default)
}

/// Interpret a yes/no answer. `None` if it is neither.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Match an answer against a list of options.
///
/// Accepts a 1-based number or an option label (case-insensitive).
pub fn match_choice(input: &str, options: &[String]) -> Option<usize> {
    let input = input.trim();
    if let Ok(n) = input.parse::<usize>() {
        return n.checked_sub(1).filter(|&i| i < options.len());
    }
    let lower = input.to_lowercase();
    options.iter().position(|o| o.to_lowercase() == lower)
}

//! A [`Prompter`] that reads answers line by line and writes styled text.

use std::io::{BufRead, Write};

use colored::Colorize;
use log::warn;

use sta_builder::prompt::{match_choice, parse_yes_no};
use sta_builder::{PromptError, PromptResult, Prompter, Tone};

/// Line-oriented prompter over any reader/writer pair (normally stdin and
/// stdout). End of input is reported as [`PromptError::Aborted`].
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> PromptResult<String> {
        write!(self.output, "{} ", question.bold())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Aborted);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn ask_text(&mut self, prompt: &str, default: Option<&str>) -> PromptResult<String> {
        let question = match default {
            Some(d) if !d.is_empty() => format!("{prompt} [{d}]"),
            _ => prompt.to_string(),
        };
        let answer = self.ask(&question)?;
        if answer.trim().is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer)
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> PromptResult<bool> {
        let question = format!("{prompt} (y/n)");
        loop {
            let answer = self.ask(&question)?;
            match parse_yes_no(&answer) {
                Some(yes) => return Ok(yes),
                None => self.tell("Please answer yes or no.", Tone::Warning),
            }
        }
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> PromptResult<usize> {
        writeln!(self.output, "{}", prompt.bold())?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {option}", (i + 1).to_string().cyan())?;
        }
        loop {
            let answer = self.ask(">")?;
            match match_choice(&answer, options) {
                Some(index) => return Ok(index),
                None => self.tell("Please pick one of the listed options.", Tone::Warning),
            }
        }
    }

    fn tell(&mut self, message: &str, tone: Tone) {
        let styled = match tone {
            Tone::Plain => message.normal(),
            Tone::Heading => message.bold().underline(),
            Tone::Info => message.cyan(),
            Tone::Success => message.green(),
            Tone::Warning => message.yellow(),
        };
        if let Err(e) = writeln!(self.output, "{styled}") {
            warn!("failed to write to terminal: {e}");
        }
    }
}

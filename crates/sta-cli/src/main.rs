//! Command-line front end for the SuperText Adventure world builder.

mod config;
mod intro;
mod shell;
mod terminal;

use std::io;
use std::process;

use clap::Parser;
use log::{LevelFilter, info};

use sta_core::Registry;
use sta_core::render::{render_session, render_session_json};

use crate::config::{DumpFormat, ShellConfig};
use crate::shell::Shell;
use crate::terminal::TerminalPrompter;

/// Exit status used when the player closes input mid-session.
const ABORT_EXIT_CODE: i32 = 130;

#[derive(Parser)]
#[command(
    name = "sta",
    about = "SuperText Adventure: build a text-adventure world room by room",
    version
)]
struct Cli {
    /// Milliseconds to pause after the greeting
    #[arg(long, default_value = "2000")]
    pace_ms: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Format of the session summary printed on exit
    #[arg(long, value_enum, default_value = "text")]
    dump: DumpFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// How a session ended without error.
enum Outcome {
    Completed,
    Aborted,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ShellConfig::default()
        .with_pace_ms(cli.pace_ms)
        .with_color(!cli.no_color)
        .with_dump(cli.dump);
    if !config.color {
        colored::control::set_override(false);
    }

    match run(&config) {
        Ok(Outcome::Completed) => {}
        Ok(Outcome::Aborted) => {
            eprintln!();
            eprintln!("session aborted; nothing was saved");
            process::exit(ABORT_EXIT_CODE);
        }
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn run(config: &ShellConfig) -> Result<Outcome, String> {
    let mut registry = Registry::new();
    let mut prompter = TerminalPrompter::new(io::stdin().lock(), io::stdout());

    match Shell::new(&mut prompter, config).run(&mut registry) {
        Ok(()) => {}
        Err(e) if e.is_aborted() => {
            info!("input closed with {} rooms built", registry.room_count());
            return Ok(Outcome::Aborted);
        }
        Err(e) => return Err(e.to_string()),
    }

    println!();
    match config.dump {
        DumpFormat::Text => print!("{}", render_session(&registry)),
        DumpFormat::Json => {
            let json = render_session_json(&registry)
                .map_err(|e| format!("cannot render session: {e}"))?;
            println!("{json}");
        }
    }
    Ok(Outcome::Completed)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

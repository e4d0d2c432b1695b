//! `:` command parsing
//!
//! Turns the command line into a [`TuiCommand`]. Arguments are the rest of
//! the line, so names with spaces work without quoting.

use std::path::PathBuf;
use std::str::FromStr;

/// A parsed `:` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    // Roster
    Pick,
    Reset,
    Add(String),
    Remove(String),
    Clear,
    Open(PathBuf),
    Import(PathBuf),

    // Saved lists
    Save(String),
    Load(String),
    Delete,
    Lists,

    // Timer
    Preset(u32),
    Start,
    Pause,
    Toggle,
    TimerReset,

    // Groups
    Suggest,
    Groups { size: usize, count: usize },

    // Presentation types
    Type(String),
    AddType {
        name: String,
        seconds: u32,
        description: String,
    },
    DeleteType(String),
    Types,

    Help,
    Quit,
}

impl FromStr for TuiCommand {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let normalized = trimmed.strip_prefix(':').unwrap_or(trimmed);
        let (name, rest) = normalized
            .split_once(char::is_whitespace)
            .map(|(name, rest)| (name, rest.trim()))
            .unwrap_or((normalized, ""));

        let command = match name {
            "pick" | "p" => TuiCommand::Pick,
            "reset" => TuiCommand::Reset,
            "add" => TuiCommand::Add(required(rest, "add <name>")?),
            "remove" | "rm" => TuiCommand::Remove(required(rest, "remove <name>")?),
            "clear" => TuiCommand::Clear,
            "open" => TuiCommand::Open(required(rest, "open <file>")?.into()),
            "import" => TuiCommand::Import(required(rest, "import <file.csv>")?.into()),

            "save" | "w" => TuiCommand::Save(required(rest, "save <name>")?),
            "load" | "e" => TuiCommand::Load(required(rest, "load <name>")?),
            "delete" => TuiCommand::Delete,
            "lists" | "ls" => TuiCommand::Lists,

            "preset" => TuiCommand::Preset(seconds(rest, "preset <seconds>")?),
            "start" => TuiCommand::Start,
            "pause" => TuiCommand::Pause,
            "toggle" => TuiCommand::Toggle,
            "timer-reset" => TuiCommand::TimerReset,

            "suggest" => TuiCommand::Suggest,
            "groups" => {
                const USAGE: &str = "groups <size> <count>";
                let mut args = rest.split_whitespace();
                let size = number(args.next(), USAGE)?;
                let count = number(args.next(), USAGE)?;
                if args.next().is_some() {
                    return Err(format!("Usage: {}", USAGE));
                }
                TuiCommand::Groups { size, count }
            }

            "type" => TuiCommand::Type(required(rest, "type <name>")?),
            "add-type" => {
                const USAGE: &str = "add-type <name> <seconds> <description>";
                let mut parts = rest.splitn(3, char::is_whitespace);
                let name = required(parts.next().unwrap_or(""), USAGE)?;
                let seconds = seconds(parts.next().unwrap_or(""), USAGE)?;
                // `\n` in the description starts a new line
                let description = parts.next().unwrap_or("").trim().replace("\\n", "\n");
                TuiCommand::AddType {
                    name,
                    seconds,
                    description,
                }
            }
            "delete-type" => TuiCommand::DeleteType(required(rest, "delete-type <name>")?),
            "types" => TuiCommand::Types,

            "help" | "h" => TuiCommand::Help,
            "quit" | "q" | "exit" => TuiCommand::Quit,

            "" => return Err("Empty command".to_string()),
            other => return Err(format!("Unknown command: {} (try :help)", other)),
        };
        Ok(command)
    }
}

fn required(arg: &str, usage: &str) -> Result<String, String> {
    let arg = arg.trim();
    if arg.is_empty() {
        Err(format!("Usage: {}", usage))
    } else {
        Ok(arg.to_string())
    }
}

fn seconds(arg: &str, usage: &str) -> Result<u32, String> {
    arg.trim()
        .parse()
        .map_err(|_| format!("Usage: {} (whole seconds)", usage))
}

fn number(arg: Option<&str>, usage: &str) -> Result<usize, String> {
    arg.and_then(|a| a.parse().ok())
        .ok_or_else(|| format!("Usage: {}", usage))
}

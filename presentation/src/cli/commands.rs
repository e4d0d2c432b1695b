//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use podium_domain::OutputFormat as DomainOutputFormat;
use std::path::PathBuf;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, colored text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => DomainOutputFormat::Text,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for podium
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(author, version, about = "Classroom presenter picker with a presentation timer")]
#[command(long_about = r#"
Podium picks who presents next, without repeats, and times each presentation.

Run without a subcommand to open the terminal UI. Type names (Insert mode),
open a roster file or import a CSV export, then press `p` to pick.

Configuration files are loaded from (in priority order):
1. PODIUM_* environment variables (e.g. PODIUM_TIMER__DEFAULT_SECONDS=240)
2. --config <path>     Explicit config file
3. ./podium.toml       Project-level config
4. ~/.config/podium/config.toml   Global config

Example:
  podium
  podium suggest 23
  podium groups --size 4 --count 5 --roster period1.txt
  podium -o json lists
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format for one-shot commands
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Storage file for saved lists and presentation types
    #[arg(long, value_name = "PATH", global = true)]
    pub storage: Option<PathBuf>,

    /// Append a JSONL record of draws and timer expiries to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub session_log: Option<PathBuf>,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive terminal UI (default)
    Tui,

    /// Suggest group sizes for a class
    Suggest {
        /// Number of students
        total: usize,
    },

    /// Split a roster into random groups
    Groups {
        /// Students per group
        #[arg(short, long)]
        size: usize,

        /// Number of groups
        #[arg(short, long)]
        count: usize,

        /// Roster file, one name per line (defaults to the current roster)
        #[arg(short, long, value_name = "FILE")]
        roster: Option<PathBuf>,
    },

    /// List saved rosters
    Lists,

    /// List presentation types
    Types,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["podium"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_groups_arguments() {
        let cli = Cli::try_parse_from([
            "podium", "groups", "--size", "4", "--count", "3", "--roster", "p1.txt",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Groups {
                size: 4,
                count: 3,
                roster: Some(PathBuf::from("p1.txt")),
            })
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["podium", "suggest", "12", "-o", "json", "-vv"]).unwrap();
        assert_eq!(cli.command, Some(Command::Suggest { total: 12 }));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Json),
            DomainOutputFormat::Json
        );
    }
}

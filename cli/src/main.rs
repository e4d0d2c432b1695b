//! CLI entrypoint for podium
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use podium_application::{
    NoSessionLogger, PickerController, RosterSourcePort, RosterStore, SessionLogger, StoragePort,
    TypeCatalogStore,
};
use podium_domain::{Roster, is_csv_path, parse_csv_names, partition, suggest};
use podium_infrastructure::{
    ConfigLoader, FileConfig, JsonFileStorage, JsonlSessionLogger, LocalRosterSource,
    default_storage_path,
};
use podium_presentation::{
    Cli, Command, ConsoleFormatter, OutputConfig, OutputFormatter, TuiApp,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let command = cli.command.clone().unwrap_or(Command::Tui);

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, &command)?;

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(config) => config,
            Err(e) => bail!("Invalid configuration: {}", e),
        }
    };
    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    // === Dependency Injection ===
    let storage_path = cli
        .storage
        .clone()
        .or_else(|| config.storage.resolve_path())
        .or_else(default_storage_path)
        .context("Could not determine a storage location; pass --storage <PATH>")?;
    info!("Using storage file {}", storage_path.display());
    let storage: Arc<dyn StoragePort> = Arc::new(JsonFileStorage::new(storage_path));

    let (configured_format, _) = config.output.parse_format();
    let output = OutputConfig::resolve(
        cli.output.map(Into::into),
        configured_format,
        config.output.color,
    );
    output.apply_color();
    let formatter = ConsoleFormatter::new(output.format);

    match command {
        Command::Tui => run_tui(&cli, &config, storage).await,
        Command::Suggest { total } => {
            println!("{}", formatter.suggestions(total, &suggest(total)));
            Ok(())
        }
        Command::Groups {
            size,
            count,
            roster,
        } => {
            let roster = match roster {
                Some(path) => read_roster_file(&path).await?,
                None => Roster::parse(&RosterStore::load(storage).restore_current()),
            };
            let groups = partition(roster.names(), size, count, &mut rand::rng())?;
            let excluded = roster.len() - size * count;
            println!("{}", formatter.groups(&groups, excluded));
            Ok(())
        }
        Command::Lists => {
            println!("{}", formatter.lists(&RosterStore::load(storage).names()));
            Ok(())
        }
        Command::Types => {
            println!("{}", formatter.types(&TypeCatalogStore::load(storage).types()));
            Ok(())
        }
    }
}

/// Initialize tracing.
///
/// The TUI owns the terminal, so it logs to a file under the data
/// directory. One-shot commands log to stderr.
fn init_logging(verbose: u8, command: &Command) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if *command == Command::Tui
        && let Some(log_dir) = dirs::data_dir().map(|d| d.join("podium").join("logs"))
    {
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
        let appender = tracing_appender::rolling::never(&log_dir, "podium.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(writer)
            .init();
        return Ok(Some(guard));
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(None)
}

async fn run_tui(cli: &Cli, config: &FileConfig, storage: Arc<dyn StoragePort>) -> Result<()> {
    let settings = config.timer.to_settings();
    let (tx, rx) = mpsc::unbounded_channel();

    let mut controller =
        PickerController::new(storage, Arc::new(LocalRosterSource::new()), settings, tx);

    let session_log: Option<PathBuf> = cli
        .session_log
        .clone()
        .or_else(|| config.log.session_log_path());
    if let Some(path) = session_log {
        controller = controller.with_session_logger(session_logger(&path));
    }

    info!("Starting podium");
    let mut app = TuiApp::new(controller, rx);
    app.run().await?;
    Ok(())
}

/// JSONL session logger, or a no-op when the file cannot be opened.
fn session_logger(path: &Path) -> Arc<dyn SessionLogger> {
    match JsonlSessionLogger::new(path) {
        Some(logger) => Arc::new(logger),
        None => {
            warn!("Session log {} disabled", path.display());
            Arc::new(NoSessionLogger)
        }
    }
}

/// Read a roster for `podium groups --roster`; `.csv` files go through the
/// CSV name import.
async fn read_roster_file(path: &Path) -> Result<Roster> {
    let text = LocalRosterSource::new().read_text(path).await?;
    if is_csv_path(path) {
        Ok(Roster::from_names(parse_csv_names(&text)?))
    } else {
        Ok(Roster::parse(&text))
    }
}

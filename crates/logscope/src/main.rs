//! Logscope host CLI.
//!
//! A small harness around the explore panel core: inspect how a captured
//! query response renders, and manage the shared settings namespace that the
//! panels read on every render.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use logscope_panel::{LogsSamplePanel, NdjsonTelemetry, PanelInput, ToggleDirection};
use logscope_protocol::QueryResponse;
use logscope_store::{
    default_telemetry_path, ensure_logscope_home, FileSettingsStore, SettingsStore,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "logscope", about = "Logscope explore-panel host")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read or write panel settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
    /// Resolve a captured query response into a panel description
    Panel(PanelArgs),
}

#[derive(Debug, Subcommand)]
enum SettingsCommand {
    /// Print one boolean setting
    Get {
        key: String,
        /// Fall back to true when the key is absent or corrupted
        #[arg(long)]
        default: bool,
    },
    /// Persist one boolean setting
    Set {
        key: String,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
}

#[derive(Debug, clap::Args)]
struct PanelArgs {
    /// Path to a QueryResponse JSON file; omit for "query not issued"
    #[arg(long)]
    response: Option<PathBuf>,
    /// Render the section as open
    #[arg(long)]
    open: bool,
    /// Time zone label forwarded to the row renderer
    #[arg(long, default_value = "browser")]
    time_zone: String,
    /// Also simulate a toggle to this state and record the interaction
    #[arg(long, value_parser = ["open", "close"])]
    toggle: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("logscope=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Settings { command } => run_settings(command),
        Command::Panel(args) => run_panel(args),
    }
}

fn run_settings(command: SettingsCommand) -> Result<()> {
    ensure_logscope_home().context("Failed to create logscope home")?;
    let store = FileSettingsStore::open_default();
    match command {
        SettingsCommand::Get { key, default } => {
            println!("{}", store.get_bool(&key, default));
        }
        SettingsCommand::Set { key, value } => {
            store
                .set_bool(&key, value)
                .with_context(|| format!("Failed to persist setting '{}'", key))?;
        }
    }
    Ok(())
}

fn run_panel(args: PanelArgs) -> Result<()> {
    ensure_logscope_home().context("Failed to create logscope home")?;
    let store = FileSettingsStore::open_default();
    let telemetry = NdjsonTelemetry::open(&default_telemetry_path())
        .context("Failed to open telemetry tape")?;
    let panel = LogsSamplePanel::new(Arc::new(telemetry));

    let response = match args.response {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read response file: {}", path.display()))?;
            let response: QueryResponse = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid query response JSON: {}", path.display()))?;
            Some(response)
        }
        None => None,
    };

    // No live data source in the harness: the split-view action stays
    // gated off, exactly as with a source lacking the capability.
    let description = panel.render(
        &PanelInput {
            response: response.as_ref(),
            enabled: args.open,
            time_zone: &args.time_zone,
            queries: &[],
            datasource: None,
        },
        &store,
    );
    println!("{}", serde_json::to_string_pretty(&description)?);

    if let Some(direction) = args.toggle {
        let next_open = direction == ToggleDirection::Open.as_str();
        panel.toggle(next_open, None, &mut |open| {
            tracing::info!(open, "panel visibility change requested");
        });
    }

    Ok(())
}

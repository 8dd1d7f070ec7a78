//! progbridge - convert robot and PLC programs between vendor dialects.

mod commands;
mod config;

use clap::{ArgAction, Parser, Subcommand};
use commands::list::ListArgs;
use commands::translate::TranslateArgs;
use config::ProgbridgeConfig;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "progbridge", version, about = "Convert robot and PLC programs between vendor dialects")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Translate a program file
    Translate(TranslateArgs),
    /// List registered dialect pairs
    List(ListArgs),
}

/// Print the config file schema for `--schema` (before clap parsing).
fn handle_schema_flag() -> anyhow::Result<bool> {
    if std::env::args().nth(1).as_deref() != Some("--schema") {
        return Ok(false);
    }
    let response = serde_json::json!({
        "config_path": ".progbridge/config.toml",
        "format": "toml",
        "schema": schemars::schema_for!(ProgbridgeConfig),
    });
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(true)
}

/// Log to stderr. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Translate(args) => {
            let cwd = std::env::current_dir()?;
            let config = ProgbridgeConfig::load(&cwd)?;
            commands::translate::run(&args, &config)
        }
        Command::List(args) => commands::list::run(&args),
    }
}

fn main() -> ExitCode {
    match handle_schema_flag() {
        Ok(true) => return ExitCode::SUCCESS,
        Ok(false) => {}
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    }

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};
use dua::commands::{config_cmd::ConfigOptions, scan::ScanRequest};
use dua::commands::{execute_config, execute_scan};
use dua::config::Overrides;
use dua::error::AppError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DUA_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan(args) => {
            let request = ScanRequest {
                root: args.path,
                overrides: Overrides {
                    files: args.files.then_some(true),
                    top: args.top,
                    strict: args.strict.then_some(true),
                },
                json: args.json,
                timeout: args.timeout.map(Duration::from_secs),
            };
            execute_scan(request)?;
        }
        Commands::Config(args) => {
            let options = ConfigOptions { show_path: args.path, init: args.init };
            execute_config(options)?;
        }
    }

    Ok(())
}

#[derive(Parser)]
#[command(name = "dua", version, about = "Fast, friendly disk-usage CLI tool.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a path and report disk usage.
    #[command(visible_alias = "sc")]
    Scan(ScanArgs),
    /// Show or create the dua configuration file.
    #[command(visible_alias = "cfg")]
    Config(ConfigArgs),
}

#[derive(Args)]
struct ScanArgs {
    /// Directory (or file) to scan.
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Include per-file entries.
    #[arg(short = 'f', long = "files", action = ArgAction::SetTrue)]
    files: bool,

    /// Show only the top N largest entries (0 or less shows all).
    #[arg(short = 'n', long = "top", value_name = "N", allow_negative_numbers = true)]
    top: Option<i64>,

    /// Abort on the first unreadable entry instead of warning.
    #[arg(long = "strict", action = ArgAction::SetTrue)]
    strict: bool,

    /// Print the report as JSON.
    #[arg(long = "json", action = ArgAction::SetTrue)]
    json: bool,

    /// Cancel the scan after this many seconds.
    #[arg(long = "timeout", value_name = "SECONDS")]
    timeout: Option<u64>,
}

#[derive(Args)]
struct ConfigArgs {
    /// Show the configuration file path.
    #[arg(long = "path", action = ArgAction::SetTrue)]
    path: bool,

    /// Write a default configuration file if none exists.
    #[arg(long = "init", action = ArgAction::SetTrue)]
    init: bool,
}

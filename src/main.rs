mod cli;

use anchnet::config::Settings;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cli::Commands;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command line interface for anchnet
#[derive(Parser, Debug)]
#[command(name = "anchnet", version, about, long_about = None)]
struct Cli {
    /// Credentials file, default ~/.anchnet/config
    #[arg(long, global = true, env = "ANCHNET_CONFIG")]
    config_path: Option<PathBuf>,

    /// anchnet sub-account (project) id
    #[arg(long, global = true, env = "ANCHNET_PROJECT")]
    project: Option<String>,

    /// anchnet zone. ac1 for mainland China, ac2 for Asia-Pacific. Default to ac1.
    #[arg(long, global = true, env = "ANCHNET_ZONE")]
    zone: Option<String>,

    /// API endpoint
    #[arg(long, global = true, env = "ANCHNET_ENDPOINT")]
    endpoint: Option<String>,

    /// Log level for debugging
    #[arg(long, global = true, value_enum, default_value = "off")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            config_path: self.config_path.clone(),
            endpoint: self.endpoint.clone(),
            zone: self.zone.clone(),
            project: self.project.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("anchnet started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("anchnet").join("anchnet.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".anchnet").join("anchnet.log");
    }
    PathBuf::from("anchnet.log")
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Cli::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let client = match args.settings().client() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("error creating client: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    Ok(args.command.execute(&client).await)
}

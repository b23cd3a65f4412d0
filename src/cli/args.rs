use clap::{Parser, ValueEnum};
use std::env;

use crate::cli::command::Command;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    /// Single SQLite database file in the data dir
    Sqlite,
    /// One JSON file per key in the data dir
    File,
    /// Nothing survives the process
    Memory,
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Keep a local quote collection and reconcile it with a remote source",
    long_about = "Stores quotes on the local device, serves them over a small REST API and periodically merges them with a remote authoritative collection.",
    subcommand_required = false,
    arg_required_else_help = false
)]
pub struct Cli {
    #[arg(
        long,
        env = "QUOTESYNC_DATA_DIR",
        default_value = ".quotesync/",
        value_name = "DIR",
        help = "Directory to store persistent data"
    )]
    pub data_dir: String,

    #[arg(
        long,
        value_enum,
        env = "QUOTESYNC_STORAGE",
        default_value_t = StorageKind::Sqlite,
        help = "Storage backend for quotes and preferences"
    )]
    pub storage: StorageKind,

    #[arg(
        long,
        default_value_t = false,
        help = "Reset all persisted state before starting"
    )]
    pub reset: bool,

    #[arg(
        long,
        env = "QUOTESYNC_REMOTE_URL",
        default_value = "https://jsonplaceholder.typicode.com/posts",
        value_name = "URL",
        help = "Remote collection endpoint (GET lists records, POST creates one)"
    )]
    pub remote_url: url::Url,

    #[arg(
        long,
        env = "QUOTESYNC_SYNC_INTERVAL_SECS",
        default_value_t = 30u64,
        value_name = "SECS",
        help = "Seconds between periodic sync passes"
    )]
    pub sync_interval_secs: u64,

    #[arg(
        long,
        env = "QUOTESYNC_REMOTE_TIMEOUT_SECS",
        value_name = "SECS",
        help = "Abort remote calls after SECS (no timeout when unset)"
    )]
    pub remote_timeout_secs: Option<u64>,

    #[arg(
        long,
        default_value_t = 3u64,
        value_name = "SECS",
        help = "How long a notification stays visible"
    )]
    pub notification_ttl_secs: u64,

    #[arg(
        long = "log-file",
        env = "QUOTESYNC_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long = "api-listen",
        env = "QUOTESYNC_API_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:8084",
        help = "REST API listen address (host:port)"
    )]
    pub api_listen: std::net::SocketAddr,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}

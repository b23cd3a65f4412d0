use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::cli::{Cli, StorageKind};

#[derive(Clone, Debug)]
pub struct Context {
    pub data_dir: PathBuf,
    pub storage: StorageKind,
    pub reset: bool,
    pub remote_url: Url,
    pub sync_interval: Duration,
    pub remote_timeout: Option<Duration>,
    pub notification_ttl: Duration,
    pub log_file: Option<PathBuf>,
    pub api_listen: SocketAddr,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            data_dir: PathBuf::from(&cli.data_dir),
            storage: cli.storage,
            reset: cli.reset,
            remote_url: cli.remote_url.clone(),
            // A zero interval would make tokio's interval panic.
            sync_interval: Duration::from_secs(cli.sync_interval_secs.max(1)),
            remote_timeout: cli.remote_timeout_secs.map(Duration::from_secs),
            notification_ttl: Duration::from_secs(cli.notification_ttl_secs),
            log_file: cli.log_file.as_ref().map(PathBuf::from),
            api_listen: cli.api_listen,
        }
    }
}

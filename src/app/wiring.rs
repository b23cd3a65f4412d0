use std::sync::Arc;

use anyhow::{Context, Result};

use crate::cli::StorageKind;
use crate::notify::Notifier;
use crate::remote::HttpGateway;
use crate::scheduler::SyncScheduler;
use crate::storage::{FileStorage, MemoryStorage, SqliteStorage};
use crate::store::{QuoteStore, SharedStorage, SharedStore};
use crate::context;

pub fn init_data_dir(ctx: &context::Context) -> Result<()> {
    if ctx.storage != StorageKind::Memory {
        std::fs::create_dir_all(&ctx.data_dir)?;
    }
    Ok(())
}

pub fn init_storage(ctx: &context::Context) -> Result<SharedStorage> {
    match ctx.storage {
        StorageKind::Sqlite => {
            let db_path = ctx.data_dir.join("quotesync.sqlite");
            let sqlite = SqliteStorage::new(&db_path);
            if ctx.reset {
                sqlite.reset_all().context("resetting storage")?;
            }
            sqlite.init().context("initializing storage")?;
            Ok(Arc::new(sqlite))
        }
        StorageKind::File => {
            let files = FileStorage::new(&ctx.data_dir);
            if ctx.reset {
                files.reset_all().context("resetting storage")?;
            }
            Ok(Arc::new(files))
        }
        StorageKind::Memory => Ok(Arc::new(MemoryStorage::new())),
    }
}

pub fn open_store(storage: SharedStorage) -> Result<SharedStore> {
    let store = QuoteStore::open(storage).context("loading quotes")?;
    Ok(store.into_shared())
}

pub fn build_scheduler(
    ctx: &context::Context,
    store: SharedStore,
    notifier: Arc<dyn Notifier>,
) -> Result<SyncScheduler> {
    let gateway = HttpGateway::new(ctx.remote_url.clone(), ctx.remote_timeout)
        .context("failed to create remote gateway")?;
    log::debug!("remote gateway endpoint {}", gateway.endpoint());
    Ok(SyncScheduler::new(store, Arc::new(gateway), notifier))
}

use anyhow::Result;

use crate::app::App;
use crate::scheduler::SyncOutcome;

pub async fn run(app: &App) -> Result<()> {
    let scheduler = app.scheduler()?;
    match scheduler.sync_now().await? {
        SyncOutcome::Completed { added, updated } => {
            log::info!("✅ Sync complete: {} added, {} updated", added, updated);
        }
        SyncOutcome::Skipped => log::info!("sync already in progress"),
    }
    Ok(())
}

mod wiring;

use crate::{cli, context, notify::NotificationBoard, rest, scheduler::SyncScheduler, store};
use anyhow::{Context as AnyhowContext, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

pub struct App {
    pub ctx: context::Context,
    pub store: store::SharedStore,
    pub notifications: Arc<NotificationBoard>,
}

impl App {
    pub fn from_cli() -> Result<(Self, cli::Cli)> {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::set_log_file(ctx.log_file.as_deref()).context("configuring log file")?;
        log::info!("🚀 Starting quotesync");
        log::info!("🔗 Remote URL: {}", ctx.remote_url);
        log::info!("💾 Storage: {:?}", ctx.storage);
        log::info!("📂 Data dir: {}", ctx.data_dir.to_string_lossy());

        Ok((Self::from_context(ctx)?, cli))
    }

    /// Build the app from an already resolved configuration.
    pub fn from_context(ctx: context::Context) -> Result<Self> {
        wiring::init_data_dir(&ctx).context("initializing data dir")?;
        let storage = wiring::init_storage(&ctx)?;
        let store = wiring::open_store(storage)?;
        let notifications = Arc::new(NotificationBoard::new(ctx.notification_ttl));
        Ok(Self {
            ctx,
            store,
            notifications,
        })
    }

    pub fn scheduler(&self) -> Result<SyncScheduler> {
        wiring::build_scheduler(&self.ctx, self.store.clone(), self.notifications.clone())
    }
}

pub async fn run_daemon(app: App) -> Result<()> {
    log::info!("🌐 REST API: http://{}", app.ctx.api_listen);
    log::info!("⏱️ Sync interval: {}s", app.ctx.sync_interval.as_secs());
    if let Some(path) = app.ctx.log_file.as_deref() {
        log::info!("📝 Log file: {}", path.to_string_lossy());
    }

    let shutdown = CancellationToken::new();

    // Sync
    let scheduler = app.scheduler()?;
    let (sync_handle, mut sync_task) = scheduler
        .clone()
        .spawn(app.ctx.sync_interval, shutdown.clone());

    // REST
    let api_addr = app.ctx.api_listen;
    let state = rest::AppState::new(
        app.store.clone(),
        scheduler,
        sync_handle,
        app.notifications.clone(),
    );
    let rest_shutdown = shutdown.clone();
    let mut rest_handle = tokio::spawn(async move {
        if let Err(e) = rest::serve(api_addr, state, rest_shutdown).await {
            log::error!("REST server error: {:#}", e);
        }
    });

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            log::info!("🧨 Ctrl-C received, shutting down");
        }
        _ = &mut rest_handle => log::error!("REST task exited unexpectedly"),
        _ = &mut sync_task => log::error!("Sync task exited unexpectedly"),
    }

    shutdown.cancel();

    // A JoinHandle that already completed must not be polled again.
    let mut fatal_error: Option<anyhow::Error> = None;
    if !rest_handle.is_finished() {
        if let Err(e) = rest_handle.await {
            log::error!("REST server error: {}", e);
            fatal_error = Some(e.into());
        }
    }
    if !sync_task.is_finished() {
        if let Err(e) = sync_task.await {
            log::error!("Sync error: {}", e);
            fatal_error.get_or_insert(e.into());
        }
    }

    if let Some(e) = fatal_error {
        return Err(e);
    }

    log::info!("✅ Shutdown complete");
    Ok(())
}

pub async fn run() -> Result<()> {
    let (app, cli) = App::from_cli()?;

    if let Some(cmd) = &cli.cmd {
        // one-shot command mode
        return cmd.run(&app).await;
    }

    run_daemon(app).await
}

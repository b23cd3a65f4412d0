use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::notify::NotificationBoard;
use crate::scheduler::{SyncHandle, SyncScheduler};
use crate::store::SharedStore;

mod handlers;
mod models;

use handlers::{
    add_quote, current_notification, export_quotes, get_selected_category, health,
    import_quotes, list_categories, list_quotes, not_found, put_selected_category, random_quote,
    sync_now,
};

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub scheduler: SyncScheduler,
    pub sync: SyncHandle,
    pub notifications: Arc<NotificationBoard>,
    pub started_at: std::time::SystemTime,
}

impl AppState {
    pub fn new(
        store: SharedStore,
        scheduler: SyncScheduler,
        sync: SyncHandle,
        notifications: Arc<NotificationBoard>,
    ) -> Self {
        Self {
            store,
            scheduler,
            sync,
            notifications,
            started_at: std::time::SystemTime::now(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/quotes", get(list_quotes).post(add_quote))
        .route("/quotes/random", get(random_quote))
        .route("/categories", get(list_categories))
        .route(
            "/preferences/category",
            get(get_selected_category).put(put_selected_category),
        )
        .route("/export", get(export_quotes))
        .route("/import", post(import_quotes))
        .route("/sync", post(sync_now))
        .route("/notification", get(current_notification))
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve(
    addr: SocketAddr,
    state: AppState,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 REST service on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}

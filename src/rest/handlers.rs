use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    scheduler::SyncOutcome,
    types::{CategoryFilter, QuoteError},
};

use super::{
    models::{
        AddQuoteRequest, CategoriesResponse, CategoryQuery, ErrorResponse, HealthResponse,
        ImportResponse, NotificationResponse, QuotesResponse, SelectedCategory, SyncResponse,
        SyncStatus,
    },
    AppState,
};

fn error_response(err: QuoteError) -> Response {
    let status = match &err {
        QuoteError::Validation(_) | QuoteError::ImportFormat(_) => StatusCode::BAD_REQUEST,
        QuoteError::Network(_) => StatusCode::BAD_GATEWAY,
        QuoteError::Storage(_) => {
            log::error!("storage failure: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            message: err.to_string(),
        }),
    )
        .into_response()
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime_secs = state.started_at.elapsed().map(|d| d.as_secs()).unwrap_or(0);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            uptime_secs,
            syncing: state.scheduler.is_syncing(),
        }),
    )
}

pub async fn list_quotes(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> impl IntoResponse {
    let filter = CategoryFilter::from_optional(query.category.as_deref());
    let quotes = state.store.lock().await.filtered_view(&filter);
    Json(QuotesResponse { quotes })
}

pub async fn add_quote(
    State(state): State<AppState>,
    Json(req): Json<AddQuoteRequest>,
) -> Response {
    let added = state.store.lock().await.add_quote(&req.text, &req.category);
    match added {
        Ok(quote) => {
            if !state.sync.push(quote.clone()) {
                log::warn!("sync scheduler stopped, quote {} not pushed", quote.id);
            }
            (StatusCode::CREATED, Json(quote)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn random_quote(
    State(state): State<AppState>,
    Query(query): Query<CategoryQuery>,
) -> Response {
    let filter = CategoryFilter::from_optional(query.category.as_deref());
    match state.store.lock().await.random_quote(&filter) {
        Some(quote) => Json(quote).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                message: "No quotes available.".to_string(),
            }),
        )
            .into_response(),
    }
}

pub async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let categories = state.store.lock().await.categories();
    Json(CategoriesResponse { categories })
}

pub async fn get_selected_category(State(state): State<AppState>) -> Response {
    match state.store.lock().await.last_selected_category() {
        Ok(category) => Json(SelectedCategory { category }).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn put_selected_category(
    State(state): State<AppState>,
    Json(req): Json<SelectedCategory>,
) -> Response {
    let value = req.category.unwrap_or_else(|| "all".to_string());
    match state.store.lock().await.set_last_selected_category(&value) {
        Ok(()) => Json(SelectedCategory {
            category: Some(value),
        })
        .into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn export_quotes(State(state): State<AppState>) -> Response {
    match state.store.lock().await.export_quotes() {
        Ok(payload) => (
            [
                (header::CONTENT_TYPE, "application/json"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"quotes.json\"",
                ),
            ],
            payload,
        )
            .into_response(),
        Err(err) => {
            log::error!("Failed to serialize quotes: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn import_quotes(State(state): State<AppState>, body: String) -> Response {
    match state.store.lock().await.import_json(&body) {
        Ok(imported) => Json(ImportResponse { imported }).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn sync_now(State(state): State<AppState>) -> Response {
    match state.scheduler.sync_now().await {
        Ok(SyncOutcome::Completed { added, updated }) => Json(SyncResponse {
            status: SyncStatus::Completed,
            added,
            updated,
            message: None,
        })
        .into_response(),
        Ok(SyncOutcome::Skipped) => Json(SyncResponse {
            status: SyncStatus::Skipped,
            added: 0,
            updated: 0,
            message: Some("sync already in progress".to_string()),
        })
        .into_response(),
        Err(err) => {
            let status = match err {
                QuoteError::Network(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(SyncResponse {
                    status: SyncStatus::Failed,
                    added: 0,
                    updated: 0,
                    message: Some(err.to_string()),
                }),
            )
                .into_response()
        }
    }
}

pub async fn current_notification(State(state): State<AppState>) -> impl IntoResponse {
    Json(NotificationResponse {
        message: state.notifications.current(),
    })
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: "not found".to_string(),
        }),
    )
}

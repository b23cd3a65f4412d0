use serde::{Deserialize, Serialize};

use crate::types::Quote;

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
    pub syncing: bool,
}

#[derive(Serialize, Deserialize, Default)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct QuotesResponse {
    pub quotes: Vec<Quote>,
}

#[derive(Serialize, Deserialize)]
pub struct AddQuoteRequest {
    pub text: String,
    pub category: String,
}

#[derive(Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SelectedCategory {
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    Completed,
    Skipped,
    Failed,
}

#[derive(Serialize, Deserialize)]
pub struct SyncResponse {
    pub status: SyncStatus,
    pub added: usize,
    pub updated: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct NotificationResponse {
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

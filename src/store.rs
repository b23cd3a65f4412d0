use std::collections::HashSet;
use std::sync::Arc;

use rand::seq::SliceRandom;

use crate::merge::{self, MergeOutcome};
use crate::storage::{complete_records, Storage};
use crate::types::{
    decode_quotes, default_quotes, fresh_quote_id, CategoryFilter, Quote, QuoteError, QuoteId,
    RemoteRecord,
};

pub type SharedStorage = Arc<dyn Storage + Send + Sync>;

/// The store is the single writer of the collection; everyone else goes through this lock.
pub type SharedStore = Arc<tokio::sync::Mutex<QuoteStore>>;

/// In-memory collection mirrored to [`Storage`] after every mutation.
///
/// Mutations persist the candidate collection first and only then swap it in,
/// so a storage failure leaves both memory and disk at the previous state.
pub struct QuoteStore {
    storage: SharedStorage,
    quotes: Vec<Quote>,
}

impl QuoteStore {
    /// Hydrate from storage, seeding the default quotes when nothing was saved.
    pub fn open(storage: SharedStorage) -> Result<Self, QuoteError> {
        let loaded = storage.load_quote_records().map_err(QuoteError::storage)?;
        let mut store = Self {
            storage,
            quotes: Vec::new(),
        };
        match loaded {
            Some(records) => {
                let missing_ids = records.iter().filter(|r| r.id.is_none()).count();
                let quotes = complete_records(records);
                log::debug!("loaded {} quotes from storage", quotes.len());
                if missing_ids > 0 {
                    // Pin generated ids so they survive the next start.
                    log::info!("🆔 Assigned ids to {} stored quotes", missing_ids);
                    store.commit(quotes)?;
                } else {
                    store.quotes = quotes;
                }
            }
            None => {
                log::info!("🌱 Storage empty, seeding default quotes");
                store.commit(default_quotes())?;
            }
        }
        Ok(store)
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(tokio::sync::Mutex::new(self))
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn add_quote(&mut self, text: &str, category: &str) -> Result<Quote, QuoteError> {
        let text = text.trim();
        let category = category.trim();
        if text.is_empty() {
            return Err(QuoteError::Validation("quote text is required".to_string()));
        }
        if category.is_empty() {
            return Err(QuoteError::Validation(
                "quote category is required".to_string(),
            ));
        }

        let quote = Quote {
            id: fresh_quote_id(&self.ids()),
            text: text.to_string(),
            category: category.to_string(),
        };
        let mut next = self.quotes.clone();
        next.push(quote.clone());
        self.commit(next)?;
        log::info!("➕ Added quote {} ({})", quote.id, quote.category);
        Ok(quote)
    }

    /// Append `imported` verbatim. Ids already present locally are not deduplicated.
    pub fn import_quotes(&mut self, imported: Vec<Quote>) -> Result<usize, QuoteError> {
        let count = imported.len();
        let mut next = self.quotes.clone();
        next.extend(imported);
        self.commit(next)?;
        log::info!("📥 Imported {} quotes", count);
        Ok(count)
    }

    /// Parse an exported payload and import it. A malformed payload imports nothing.
    pub fn import_json(&mut self, payload: &str) -> Result<usize, QuoteError> {
        let records =
            decode_quotes(payload).map_err(|e| QuoteError::ImportFormat(e.to_string()))?;
        let mut taken = self.ids();
        taken.extend(records.iter().filter_map(|r| r.id.clone()));
        let quotes = records
            .into_iter()
            .map(|r| r.into_quote(&mut taken))
            .collect();
        self.import_quotes(quotes)
    }

    /// Pretty-printed JSON snapshot of the whole collection.
    pub fn export_quotes(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.quotes)
    }

    pub fn filtered_view(&self, filter: &CategoryFilter) -> Vec<Quote> {
        self.quotes
            .iter()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect()
    }

    /// Distinct non-empty categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.quotes
            .iter()
            .filter(|q| !q.category.is_empty())
            .filter(|q| seen.insert(q.category.as_str()))
            .map(|q| q.category.clone())
            .collect()
    }

    pub fn random_quote(&self, filter: &CategoryFilter) -> Option<Quote> {
        let view = self.filtered_view(filter);
        view.choose(&mut rand::thread_rng()).cloned()
    }

    pub fn last_selected_category(&self) -> Result<Option<String>, QuoteError> {
        self.storage
            .load_selected_category()
            .map_err(QuoteError::storage)
    }

    pub fn set_last_selected_category(&self, value: &str) -> Result<(), QuoteError> {
        self.storage
            .save_selected_category(value)
            .map_err(QuoteError::storage)
    }

    /// Run a merge pass against `remote` and persist the result when anything changed.
    pub fn apply_remote(&mut self, remote: &[RemoteRecord]) -> Result<MergeOutcome, QuoteError> {
        let outcome = merge::merge(&self.quotes, remote);
        if outcome.changed() {
            self.commit(outcome.quotes.clone())?;
            log::info!(
                "🔄 Merged remote snapshot: {} added, {} updated",
                outcome.added,
                outcome.updated
            );
        } else {
            log::debug!("remote snapshot already in sync");
        }
        Ok(outcome)
    }

    fn ids(&self) -> HashSet<QuoteId> {
        self.quotes.iter().map(|q| q.id.clone()).collect()
    }

    fn commit(&mut self, next: Vec<Quote>) -> Result<(), QuoteError> {
        self.storage
            .save_quotes(&next)
            .map_err(QuoteError::storage)?;
        self.quotes = next;
        Ok(())
    }
}

use anyhow::{Context, Result};
use std::collections::HashSet;

use crate::types::{decode_quotes, Quote, QuoteRecord};

/// Key holding the serialized collection.
pub const QUOTES_KEY: &str = "quotes";
/// Key holding the last selected category filter.
pub const SELECTED_CATEGORY_KEY: &str = "selectedCategory";

/// Durable key-value persistence. Backends only move opaque strings;
/// the collection and preference accessors are layered on top.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Raw persisted records, `None` when nothing has been saved yet.
    fn load_quote_records(&self) -> Result<Option<Vec<QuoteRecord>>> {
        let Some(raw) = self.get(QUOTES_KEY)? else {
            return Ok(None);
        };
        let records = decode_quotes(&raw).context("decoding persisted quotes")?;
        Ok(Some(records))
    }

    /// Returns `None` when nothing has been saved yet so the caller can seed.
    /// Records saved without an id get one here; it is not written back.
    fn load_quotes(&self) -> Result<Option<Vec<Quote>>> {
        Ok(self.load_quote_records()?.map(complete_records))
    }

    fn save_quotes(&self, quotes: &[Quote]) -> Result<()> {
        let raw = serde_json::to_string(quotes).context("encoding quotes")?;
        self.put(QUOTES_KEY, &raw)
    }

    fn load_selected_category(&self) -> Result<Option<String>> {
        self.get(SELECTED_CATEGORY_KEY)
    }

    fn save_selected_category(&self, category: &str) -> Result<()> {
        self.put(SELECTED_CATEGORY_KEY, category)
    }
}

/// Fill in missing ids and categories. Generated ids avoid every stored id.
pub fn complete_records(records: Vec<QuoteRecord>) -> Vec<Quote> {
    let mut taken: HashSet<_> = records.iter().filter_map(|r| r.id.clone()).collect();
    records
        .into_iter()
        .map(|r| r.into_quote(&mut taken))
        .collect()
}

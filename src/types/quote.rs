use std::{collections::HashSet, fmt};

use serde::{Deserialize, Serialize};

/// Category assigned to remote-origin quotes and to records stored without one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Identifier shared by the local collection and the remote source.
///
/// Remote ids arrive as JSON integers while local ids are generated strings,
/// so both forms decode into the same string-backed key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawQuoteId", into = "String")]
pub struct QuoteId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuoteId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawQuoteId> for QuoteId {
    fn from(raw: RawQuoteId) -> Self {
        match raw {
            RawQuoteId::Text(s) => QuoteId(s),
            RawQuoteId::Number(n) => QuoteId(n.to_string()),
        }
    }
}

impl From<QuoteId> for String {
    fn from(id: QuoteId) -> Self {
        id.0
    }
}

impl From<&str> for QuoteId {
    fn from(s: &str) -> Self {
        QuoteId(s.to_string())
    }
}

impl From<u64> for QuoteId {
    fn from(n: u64) -> Self {
        QuoteId(n.to_string())
    }
}

impl QuoteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generate a local identifier that collides with none of `taken`.
pub fn fresh_quote_id(taken: &HashSet<QuoteId>) -> QuoteId {
    loop {
        let id = QuoteId(uuid::Uuid::new_v4().to_string());
        if !taken.contains(&id) {
            return id;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub id: QuoteId,
    pub text: String,
    pub category: String,
}

/// Lenient shape used when reading persisted or imported quotes.
#[derive(Clone, Debug, Deserialize)]
pub struct QuoteRecord {
    #[serde(default)]
    pub id: Option<QuoteId>,
    pub text: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl QuoteRecord {
    /// Fill in whatever the record lacks. A generated id is added to `taken`.
    pub fn into_quote(self, taken: &mut HashSet<QuoteId>) -> Quote {
        let id = match self.id {
            Some(id) => id,
            None => {
                let id = fresh_quote_id(taken);
                taken.insert(id.clone());
                id
            }
        };
        Quote {
            id,
            text: self.text,
            category: self
                .category
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }
}

pub fn decode_quotes(json: &str) -> Result<Vec<QuoteRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

/// A record as served by the remote source. Fields other than `id` and
/// `title` are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteRecord {
    pub id: QuoteId,
    pub title: String,
}

/// Acknowledgement payload returned by the remote source on push.
pub type RemoteAck = serde_json::Value;

pub fn default_quotes() -> Vec<Quote> {
    let seeds = [
        ("Be the change you wish to see in the world.", "Inspiration"),
        ("The only way to do great work is to love what you do.", "Work"),
        ("Life is what happens when you're busy making other plans.", "Life"),
    ];
    let mut taken = HashSet::new();
    seeds
        .into_iter()
        .map(|(text, category)| {
            let id = fresh_quote_id(&taken);
            taken.insert(id.clone());
            Quote {
                id,
                text: text.to_string(),
                category: category.to_string(),
            }
        })
        .collect()
}

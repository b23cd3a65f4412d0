mod filter;
mod quote;
mod quote_error;

pub use filter::CategoryFilter;
pub use quote::{
    decode_quotes, default_quotes, fresh_quote_id, Quote, QuoteId, QuoteRecord, RemoteAck,
    RemoteRecord, DEFAULT_CATEGORY,
};
pub use quote_error::QuoteError;

mod file;
mod memory;
pub mod sqlite;
pub mod traits;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use traits::{complete_records, Storage, QUOTES_KEY, SELECTED_CATEGORY_KEY};

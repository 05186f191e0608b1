mod in_memory_cache;
mod json_file_cache;

pub use in_memory_cache::InMemoryAnswerCache;
pub use json_file_cache::{CachePersistenceError, DEFAULT_CACHE_FILE, JsonFileCache};

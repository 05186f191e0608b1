mod cache_key;
mod document;
mod entities;
mod extracted_text;

pub use cache_key::{CacheKeyStrategy, fingerprint};
pub use document::{Document, DocumentFormat};
pub use entities::ExtractedEntities;
pub use extracted_text::{ExtractedText, Table};

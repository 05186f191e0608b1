mod blocking;
mod composite_file_loader;
mod csv_adapter;
mod extractor_factory;
mod html_adapter;
mod json_adapter;
mod memoized_file_loader;
mod pdf_adapter;
mod plain_text_adapter;
mod spreadsheet_adapter;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use csv_adapter::CsvAdapter;
pub use extractor_factory::ExtractorFactory;
pub use html_adapter::HtmlAdapter;
pub use json_adapter::JsonAdapter;
pub use memoized_file_loader::MemoizedFileLoader;
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use spreadsheet_adapter::SpreadsheetAdapter;
pub use text_sanitizer::normalize_extracted_text;

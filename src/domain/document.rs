use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    pub path: PathBuf,
    pub format: DocumentFormat,
}

/// Closed set of formats the extractor knows how to read.
///
/// Anything that is not recognized falls back to [`DocumentFormat::PlainText`],
/// which reads the file verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Csv,
    Spreadsheet,
    Json,
    Html,
    Pdf,
    PlainText,
}

impl DocumentFormat {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().trim_start_matches('.').to_lowercase().as_str() {
            "csv" | "tsv" => Self::Csv,
            "excel" | "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Self::Spreadsheet,
            "json" => Self::Json,
            "html" | "htm" => Self::Html,
            "pdf" => Self::Pdf,
            _ => Self::PlainText,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_tag)
            .unwrap_or(Self::PlainText)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Spreadsheet => "spreadsheet",
            Self::Json => "json",
            Self::Html => "html",
            Self::Pdf => "pdf",
            Self::PlainText => "text",
        }
    }

    pub fn all() -> [Self; 6] {
        [
            Self::Csv,
            Self::Spreadsheet,
            Self::Json,
            Self::Html,
            Self::Pdf,
            Self::PlainText,
        ]
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, format: DocumentFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// Builds a document whose format is taken from the hint when one is given,
    /// otherwise from the file extension.
    pub fn with_hint(path: impl Into<PathBuf>, format_hint: Option<&str>) -> Self {
        let path = path.into();
        let format = match format_hint {
            Some(tag) if !tag.trim().is_empty() => DocumentFormat::from_tag(tag),
            _ => DocumentFormat::from_path(&path),
        };
        Self { path, format }
    }

    pub fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

use serde_json::Value;

/// Output of a format extractor.
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractedText {
    Text(String),
    Table(Table),
    Record(Value),
}

/// Rows of cells under named columns, as read from delimited text or a worksheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }

    /// Header line followed by one line per row, cells separated by `", "`.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.headers.join(", "));
        lines.extend(self.rows.iter().map(|row| row.join(", ")));
        lines.join("\n")
    }
}

impl ExtractedText {
    /// Text form embedded into prompts.
    pub fn to_prompt_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Table(table) => table.render(),
            Self::Record(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Value> {
        match self {
            Self::Record(value) => Some(value),
            _ => None,
        }
    }
}

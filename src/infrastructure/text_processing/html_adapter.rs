use std::path::Path;

use async_trait::async_trait;
use scraper::{ElementRef, Html, Node};

use crate::application::ports::{ExtractionCause, ExtractionError, FileLoader};
use crate::domain::{Document, DocumentFormat, ExtractedText};

use super::blocking::{ensure_format, run_blocking};
use super::text_sanitizer::normalize_extracted_text;

const HIDDEN_ELEMENTS: [&str; 5] = ["script", "style", "noscript", "template", "head"];

const BLOCK_ELEMENTS: [&str; 21] = [
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt", "footer", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "li", "p", "pre", "section", "tr",
];

/// Visible text of an HTML document, in document order. Block elements end
/// their own line.
pub struct HtmlAdapter;

impl HtmlAdapter {
    pub fn visible_text(html: &str) -> String {
        let document = Html::parse_document(html);
        let mut text = String::with_capacity(html.len() / 2);

        collect_text(document.root_element(), &mut text);

        normalize_extracted_text(&text)
    }

    fn read_visible_text(path: &Path) -> Result<String, ExtractionCause> {
        let data = std::fs::read(path)?;
        let html = String::from_utf8(data).map_err(|_| ExtractionCause::InvalidUtf8)?;
        Ok(Self::visible_text(&html))
    }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(fragment) => {
                // Whitespace between blocks would otherwise open an empty line.
                if fragment.trim().is_empty() && (out.is_empty() || out.ends_with('\n')) {
                    continue;
                }
                out.push_str(fragment);
            }
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            Node::Element(el) if HIDDEN_ELEMENTS.contains(&el.name()) => {}
            Node::Element(el) => {
                let Some(child_element) = ElementRef::wrap(child) else {
                    continue;
                };
                collect_text(child_element, out);

                if BLOCK_ELEMENTS.contains(&el.name()) && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

#[async_trait]
impl FileLoader for HtmlAdapter {
    #[tracing::instrument(skip(self), fields(filename = %document.filename()))]
    async fn extract(&self, document: &Document) -> Result<ExtractedText, ExtractionError> {
        ensure_format(document, DocumentFormat::Html)?;

        let text = run_blocking(document, Self::read_visible_text).await?;
        tracing::debug!(chars = text.chars().count(), "visible text extracted");

        Ok(ExtractedText::Text(text))
    }
}

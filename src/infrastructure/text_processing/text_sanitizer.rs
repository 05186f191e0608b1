use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static BROKEN_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<head>\w)-[ \t]*\r?\n[ \t]*(?P<tail>\w)").unwrap());

/// Cleans text pulled out of rendered documents (PDF pages, HTML bodies).
///
/// Applies NFKC normalization, drops control characters and byte order marks,
/// re-joins words hyphenated across a line break, trims every line, collapses
/// runs of inner whitespace to one space and runs of blank lines to one.
pub fn normalize_extracted_text(raw: &str) -> String {
    let normalized: String = raw
        .nfkc()
        .filter(|c| *c == '\n' || *c == '\t' || !(c.is_control() || *c == '\u{feff}'))
        .collect();
    let joined = BROKEN_WORD.replace_all(&normalized, "$head$tail");

    let mut out = String::with_capacity(joined.len());
    let mut pending_blank = false;

    for line in joined.lines().map(str::trim) {
        if line.is_empty() {
            pending_blank = !out.is_empty();
            continue;
        }

        if !out.is_empty() {
            out.push_str(if pending_blank { "\n\n" } else { "\n" });
        }
        push_collapsed(line, &mut out);
        pending_blank = false;
    }

    out
}

fn push_collapsed(line: &str, out: &mut String) {
    let mut words = line.split_whitespace();
    if let Some(first) = words.next() {
        out.push_str(first);
        for word in words {
            out.push(' ');
            out.push_str(word);
        }
    }
}

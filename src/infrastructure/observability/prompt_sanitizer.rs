const MAX_VISIBLE_CHARS: usize = 100;

const SECRET_MARKERS: [&str; 6] = [
    "Bearer ",
    "api_key=",
    "key=",
    "password=",
    "secret=",
    "token=",
];

/// Shortens prompt text for logging and masks anything that looks like a
/// credential.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let visible = match trimmed.char_indices().nth(MAX_VISIBLE_CHARS) {
        Some((cut, _)) => format!("{}... ({} chars total)", &trimmed[..cut], total_chars),
        None => trimmed.to_string(),
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();

    for marker in SECRET_MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let value_start = search_from + found + marker.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            result.replace_range(value_start..value_end, "[REDACTED]");
            search_from = value_start + "[REDACTED]".len();
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_is_marked() {
        assert_eq!(sanitize_prompt("   "), "[EMPTY]");
    }

    #[test]
    fn long_prompt_is_cut_on_char_boundary() {
        let prompt = "é".repeat(150);
        let sanitized = sanitize_prompt(&prompt);

        assert!(sanitized.starts_with(&"é".repeat(100)));
        assert!(sanitized.ends_with("(150 chars total)"));
    }

    #[test]
    fn every_credential_occurrence_is_redacted() {
        let sanitized = sanitize_prompt("use key=abc and later key=def please");
        assert_eq!(sanitized, "use key=[REDACTED] and later key=[REDACTED] please");
    }

    #[test]
    fn bearer_tokens_are_redacted() {
        assert_eq!(
            sanitize_prompt("Authorization: Bearer sk-123"),
            "Authorization: Bearer [REDACTED]"
        );
    }
}

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ExtractedEntities;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("valid regex"));

/// Parses the model's reply to an entity-extraction prompt.
///
/// Accepts a bare JSON object, one wrapped in a fenced code block, or one
/// embedded in surrounding prose. Returns `None` when no JSON object with the
/// expected shape can be found.
pub fn parse_entities(reply: &str) -> Option<ExtractedEntities> {
    let candidates = FENCED_BLOCK
        .captures_iter(reply)
        .filter_map(|cap| cap.get(1).map(|m| m.as_str()))
        .chain(std::iter::once(reply.trim()))
        .chain(outermost_object(reply));

    for candidate in candidates {
        if let Ok(mut entities) = serde_json::from_str::<ExtractedEntities>(candidate) {
            entities.raw = reply.to_string();
            return Some(entities);
        }
    }

    None
}

fn outermost_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_object() {
        let reply = r#"{"people": ["Barack Obama"], "locations": ["United States"]}"#;
        let entities = parse_entities(reply).unwrap();

        assert_eq!(entities.people, vec!["Barack Obama"]);
        assert_eq!(entities.locations, vec!["United States"]);
        assert!(entities.dates.is_empty());
        assert_eq!(entities.raw, reply);
    }

    #[test]
    fn parses_fenced_block() {
        let reply = "Here you go:\n```json\n{\"dates\": [\"2026\"], \"figures\": [\"44th\"]}\n```";
        let entities = parse_entities(reply).unwrap();

        assert_eq!(entities.dates, vec!["2026"]);
        assert_eq!(entities.figures, vec!["44th"]);
    }

    #[test]
    fn parses_object_inside_prose() {
        let reply = "Entities found {\"organizations\": [\"ARIN\"]} hope that helps";
        let entities = parse_entities(reply).unwrap();

        assert_eq!(entities.organizations, vec!["ARIN"]);
    }

    #[test]
    fn rejects_plain_text() {
        assert!(parse_entities("Entities: Barack Obama, United States").is_none());
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(parse_entities(r#"{"people": "Barack Obama"}"#).is_none());
    }
}

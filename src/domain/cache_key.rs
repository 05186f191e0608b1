use serde::Deserialize;
use sha2::{Digest, Sha256};

const FINGERPRINT_PREFIX: &str = "sha256:";

/// How a question answered against some context is keyed in the answer cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheKeyStrategy {
    /// The literal question text. Compatible with cache files written by
    /// earlier versions, but two contexts asking the same question share an entry.
    #[default]
    Question,
    /// A fingerprint over both context and question.
    ContextAndQuestion,
}

impl CacheKeyStrategy {
    pub fn key(&self, context: &str, question: &str) -> String {
        match self {
            Self::Question => question.to_string(),
            Self::ContextAndQuestion => fingerprint(&[context, question]),
        }
    }
}

/// Hex SHA-256 over the parts, each length-prefixed so that part boundaries
/// cannot collide.
pub fn fingerprint(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update((part.len() as u64).to_le_bytes());
        hasher.update(part.as_bytes());
    }
    format!("{FINGERPRINT_PREFIX}{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_strategy_ignores_context() {
        let strategy = CacheKeyStrategy::Question;
        assert_eq!(strategy.key("math", "What is 2+2?"), "What is 2+2?");
        assert_eq!(
            strategy.key("history", "What is 2+2?"),
            strategy.key("math", "What is 2+2?")
        );
    }

    #[test]
    fn combined_strategy_separates_contexts() {
        let strategy = CacheKeyStrategy::ContextAndQuestion;
        let math = strategy.key("math", "What is 2+2?");

        assert!(math.starts_with(FINGERPRINT_PREFIX));
        assert_ne!(math, strategy.key("history", "What is 2+2?"));
        assert_eq!(math, strategy.key("math", "What is 2+2?"));
    }

    #[test]
    fn fingerprint_respects_part_boundaries() {
        assert_ne!(fingerprint(&["ab", "c"]), fingerprint(&["a", "bc"]));
    }
}

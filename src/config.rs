//! Engine tunables.
//!
//! Kept deliberately flat: hosts pass these once at engine construction,
//! usually deserialized straight from an app settings blob, and every field
//! has a default that matches the shipped reading experience.

use serde::{Deserialize, Serialize};

/// Default tweet budget, in display columns.
pub const DEFAULT_TWEET_CHARS: usize = 280;

/// Tunables for an [`Engine`](crate::Engine).
///
/// Unknown fields in a settings blob are ignored and missing fields take
/// their defaults, so hosts can ship partial configs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Display-column budget for tweet-granularity segments.
    pub tweet_max_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tweet_max_chars: DEFAULT_TWEET_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget() {
        assert_eq!(EngineConfig::default().tweet_max_chars, 280);
    }

    #[test]
    fn test_partial_settings_blob() {
        let empty: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, EngineConfig::default());

        let narrow: EngineConfig = serde_json::from_str(r#"{"tweetMaxChars": 120}"#).unwrap();
        assert_eq!(narrow.tweet_max_chars, 120);
    }
}

//! Mock translation gateway for tests
//!
//! Deterministic, network-free stand-in for the real provider. Every engine
//! test drives the state machine through this gateway.

use crate::error::{GatewayError, GatewayResult};
use crate::gateway::TranslationGateway;
use crate::language::Language;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

/// Behaviors the mock can simulate.
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Append the target language code: "hello" -> "hello-hi"
    Suffix,
    /// Predefined (text, target code) -> translation mappings,
    /// falling back to suffix behavior for unknown inputs
    Mappings(HashMap<(String, String), String>),
    /// Reverse word order, simulating a word-order-changing language
    Reverse,
    /// Return the input unchanged
    Echo,
    /// Fail with the given error
    Fail(GatewayError),
}

/// Deterministic mock gateway with optional simulated latency.
#[derive(Debug, Clone)]
pub struct MockGateway {
    mode: MockMode,
    delay: Duration,
}

impl MockGateway {
    pub fn new(mode: MockMode) -> Self {
        MockGateway {
            mode,
            delay: Duration::ZERO,
        }
    }

    /// Add a simulated network delay before each completion.
    pub fn with_delay(mode: MockMode, delay: Duration) -> Self {
        MockGateway { mode, delay }
    }

    fn apply(&self, text: &str, to: Language) -> GatewayResult<String> {
        match &self.mode {
            MockMode::Suffix => Ok(format!("{}-{}", text, to.code())),
            MockMode::Mappings(map) => {
                let key = (text.to_string(), to.code().to_string());
                Ok(map
                    .get(&key)
                    .cloned()
                    .unwrap_or_else(|| format!("{}-{}", text, to.code())))
            }
            MockMode::Reverse => {
                let words: Vec<&str> = text.split_whitespace().collect();
                Ok(words.into_iter().rev().collect::<Vec<_>>().join(" "))
            }
            MockMode::Echo => Ok(text.to_string()),
            MockMode::Fail(err) => Err(err.clone()),
        }
    }
}

#[async_trait]
impl TranslationGateway for MockGateway {
    async fn translate(
        &self,
        text: &str,
        _from: Language,
        to: Language,
        _credential: &str,
    ) -> GatewayResult<String> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.apply(text, to)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_suffix_mode() {
        let mock = MockGateway::new(MockMode::Suffix);
        let result = mock
            .translate("hello", Language::English, Language::Hindi, "key")
            .await
            .unwrap();
        assert_eq!(result, "hello-hi");
    }

    #[tokio::test]
    async fn test_mappings_mode() {
        let mut map = HashMap::new();
        map.insert(
            ("how are you".to_string(), "hi".to_string()),
            "आप कैसे हैं".to_string(),
        );
        let mock = MockGateway::new(MockMode::Mappings(map));
        let result = mock
            .translate("how are you", Language::English, Language::Hindi, "key")
            .await
            .unwrap();
        assert_eq!(result, "आप कैसे हैं");
    }

    #[tokio::test]
    async fn test_mappings_fall_back_to_suffix() {
        let mock = MockGateway::new(MockMode::Mappings(HashMap::new()));
        let result = mock
            .translate("unknown", Language::English, Language::Marathi, "key")
            .await
            .unwrap();
        assert_eq!(result, "unknown-mr");
    }

    #[tokio::test]
    async fn test_reverse_mode() {
        let mock = MockGateway::new(MockMode::Reverse);
        let result = mock
            .translate("one two three", Language::English, Language::Hindi, "key")
            .await
            .unwrap();
        assert_eq!(result, "three two one");
    }

    #[tokio::test]
    async fn test_echo_mode() {
        let mock = MockGateway::new(MockMode::Echo);
        let result = mock
            .translate("same text", Language::English, Language::Hindi, "key")
            .await
            .unwrap();
        assert_eq!(result, "same text");
    }

    #[tokio::test]
    async fn test_fail_mode() {
        let mock = MockGateway::new(MockMode::Fail(GatewayError::Service(
            "quota exceeded".to_string(),
        )));
        let result = mock
            .translate("hello", Language::English, Language::Hindi, "key")
            .await;
        assert_eq!(
            result,
            Err(GatewayError::Service("quota exceeded".to_string()))
        );
    }

    #[tokio::test]
    async fn test_delay_adds_latency() {
        let mock = MockGateway::with_delay(MockMode::Echo, Duration::from_millis(50));
        let start = std::time::Instant::now();
        mock.translate("hello", Language::English, Language::Hindi, "key")
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}

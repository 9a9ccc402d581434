//! Translation gateway boundary
//!
//! The engine delegates the actual translation to an external service. This
//! module defines the narrow async trait the engine depends on, so the real
//! provider can be swapped for a deterministic mock in tests: the engine's
//! correctness never depends on real network behavior.
//!
//! A gateway call completes exactly once: with the translated text, or with
//! one classified [`GatewayError`](crate::error::GatewayError). The engine
//! never retries a failed call.

pub mod gemini;
pub mod mock;

use crate::error::GatewayResult;
use crate::language::Language;
use async_trait::async_trait;

pub use gemini::GeminiProvider;
pub use mock::{MockGateway, MockMode};

/// Async boundary to an external text-translation service.
///
/// The credential travels with each call rather than living in the provider:
/// the engine validates its presence before the `Idle -> Translating`
/// transition, so a missing key is reported to the user without ever
/// attempting the network.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    /// Translate `text` from `from` to `to`, authenticating with `credential`.
    async fn translate(
        &self,
        text: &str,
        from: Language,
        to: Language,
        credential: &str,
    ) -> GatewayResult<String>;

    /// Provider name for logging and diagnostics.
    fn provider_name(&self) -> &str;
}

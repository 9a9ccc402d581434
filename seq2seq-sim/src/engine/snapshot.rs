//! Simulation snapshot and configuration types

use crate::language::LanguagePair;
use crate::vector::{DEFAULT_VECTOR_LEN, generate_vector};
use serde::Serialize;
use std::time::Duration;

/// Stage of the simulated encode/decode pipeline.
///
/// Transitions are monotonic within one run
/// (`Idle -> Translating -> Encoding -> Context -> Decoding -> Done`),
/// except for the explicit reset back to `Idle` from any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Translating,
    Encoding,
    Context,
    Decoding,
    Done,
}

impl Phase {
    /// Phases in which the playback timer may drive advances.
    pub fn is_animating(&self) -> bool {
        matches!(self, Phase::Encoding | Phase::Context | Phase::Decoding)
    }

    /// Phases in which no run holds live token data the user could lose.
    pub fn is_settled(&self) -> bool {
        matches!(self, Phase::Idle | Phase::Done)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Idle => "Idle",
            Phase::Translating => "Translating",
            Phase::Encoding => "Encoding",
            Phase::Context => "Context",
            Phase::Decoding => "Decoding",
            Phase::Done => "Done",
        };
        write!(f, "{}", name)
    }
}

/// Complete simulation state at one point in time.
///
/// Replaced wholesale on every transition; the rendering layer only ever
/// observes a fully consistent value, never a partial update.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub phase: Phase,
    /// Index into the active token sequence during `Encoding`/`Decoding`;
    /// meaningless in the other phases.
    pub step: usize,
    pub input_tokens: Vec<String>,
    pub output_tokens: Vec<String>,
    pub input_vectors: Vec<Vec<f64>>,
    pub output_vectors: Vec<Vec<f64>>,
    pub context_vector: Vec<f64>,
    pub is_paused: bool,
    pub animation_speed_ms: u64,
    pub languages: LanguagePair,
    pub source_text: String,
    pub translated_text: String,
    pub last_error: Option<String>,
}

impl Snapshot {
    /// A fresh idle snapshot with no run data and a placeholder context
    /// vector, preserving the current language pair and speed setting.
    pub fn idle(languages: LanguagePair, animation_speed_ms: u64, vector_len: usize) -> Self {
        Snapshot {
            phase: Phase::Idle,
            step: 0,
            input_tokens: Vec::new(),
            output_tokens: Vec::new(),
            input_vectors: Vec::new(),
            output_vectors: Vec::new(),
            context_vector: generate_vector(vector_len),
            is_paused: true,
            animation_speed_ms,
            languages,
            source_text: String::new(),
            translated_text: String::new(),
            last_error: None,
        }
    }
}

/// Tunable constants of the playback engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Length of the illustrative token/context vectors.
    pub vector_len: usize,
    /// Initial delay between automatic advances.
    pub default_speed_ms: u64,
    /// Lower clamp bound for `set_speed`.
    pub min_speed_ms: u64,
    /// Upper clamp bound for `set_speed`.
    pub max_speed_ms: u64,
    /// Settle delay for the `Context -> Decoding` transition, independent
    /// of the animation speed.
    pub settle_delay_ms: u64,
    /// Timeout for the outbound translation request.
    pub request_timeout: Duration,
}

impl SimConfig {
    pub fn clamp_speed(&self, ms: u64) -> u64 {
        ms.clamp(self.min_speed_ms, self.max_speed_ms)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            vector_len: DEFAULT_VECTOR_LEN,
            default_speed_ms: 1200,
            min_speed_ms: 200,
            max_speed_ms: 2000,
            settle_delay_ms: 500,
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_snapshot_is_empty_and_paused() {
        let snap = Snapshot::idle(LanguagePair::default(), 1200, 25);
        assert_eq!(snap.phase, Phase::Idle);
        assert!(snap.input_tokens.is_empty());
        assert!(snap.output_tokens.is_empty());
        assert!(snap.input_vectors.is_empty());
        assert!(snap.output_vectors.is_empty());
        assert_eq!(snap.context_vector.len(), 25);
        assert!(snap.is_paused);
        assert!(snap.last_error.is_none());
    }

    #[test]
    fn test_speed_clamping() {
        let config = SimConfig::default();
        assert_eq!(config.clamp_speed(5000), 2000);
        assert_eq!(config.clamp_speed(10), 200);
        assert_eq!(config.clamp_speed(1200), 1200);
        assert_eq!(config.clamp_speed(200), 200);
        assert_eq!(config.clamp_speed(2000), 2000);
    }

    #[test]
    fn test_animating_phases() {
        assert!(Phase::Encoding.is_animating());
        assert!(Phase::Context.is_animating());
        assert!(Phase::Decoding.is_animating());
        assert!(!Phase::Idle.is_animating());
        assert!(!Phase::Translating.is_animating());
        assert!(!Phase::Done.is_animating());
    }

    #[test]
    fn test_settled_phases() {
        assert!(Phase::Idle.is_settled());
        assert!(Phase::Done.is_settled());
        assert!(!Phase::Translating.is_settled());
        assert!(!Phase::Encoding.is_settled());
    }

    #[test]
    fn test_phase_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Phase::Encoding).unwrap(), "\"encoding\"");
        assert_eq!(serde_json::to_string(&Phase::Idle).unwrap(), "\"idle\"");
    }
}

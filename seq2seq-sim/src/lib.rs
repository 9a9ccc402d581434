//! Simulation playback engine for an encoder-decoder translation visualizer
//!
//! This crate animates the internal data flow of an encoder-decoder
//! (RNN/LSTM) sequence-to-sequence model: the input sentence is tokenized,
//! each token "encoded" step by step, a context vector bridges to the
//! decoder, and the translated tokens are revealed one by one. No network is
//! trained or executed: the vectors are random illustrative placeholders,
//! and the actual translation comes from an external service behind the
//! [`TranslationGateway`](gateway::TranslationGateway) boundary.
//!
//! The heart of the crate is [`engine::Simulation`]: a timer-driven finite
//! state machine (`Idle -> Translating -> Encoding -> Context -> Decoding ->
//! Done`) exposing an immutable [`engine::Snapshot`] after every transition
//! plus a small set of control entry points (start, reset, play/pause,
//! manual step, speed). A rendering layer consumes snapshots and draws; it
//! holds no logic of its own.
//!
//! # Example
//!
//! ```ignore
//! use seq2seq_sim::engine::{SimConfig, Simulation};
//! use seq2seq_sim::gateway::GeminiProvider;
//! use seq2seq_sim::language::Language;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = SimConfig::default();
//!     let gateway = Arc::new(GeminiProvider::new(config.request_timeout)?);
//!     let sim = Simulation::new(gateway, std::env::var("GEMINI_API_KEY").ok(), config);
//!
//!     sim.start_translation("how are you", Language::English, Language::Hindi)
//!         .await?;
//!     sim.toggle_pause(); // begin automatic playback
//!     println!("{}", sim.snapshot().phase);
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod gateway;
pub mod language;
pub mod tokenizer;
pub mod vector;

pub use engine::{Phase, SimConfig, Simulation, Snapshot};
pub use error::{GatewayError, GatewayResult, SimError, SimResult};
pub use gateway::{GeminiProvider, MockGateway, MockMode, TranslationGateway};
pub use language::{Language, LanguagePair};
pub use tokenizer::tokenize;
pub use vector::{DEFAULT_VECTOR_LEN, generate_vector, generate_vector_with};

//! Display tokenizer for the simulation
//!
//! Splits text into the lowercase tokens the playback animates, one encoder
//! or decoder step per token. This is a display segmentation, not a model
//! vocabulary: runs of whitespace, commas, and periods separate tokens and
//! are discarded.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,.]+").expect("separator pattern is valid"));

/// Split `text` into non-empty lowercase display tokens.
///
/// Deterministic and total. Empty or whitespace-only input yields an empty
/// vector; callers must treat that as a validation error before requesting
/// a translation.
pub fn tokenize(text: &str) -> Vec<String> {
    SEPARATORS
        .split(&text.to_lowercase())
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

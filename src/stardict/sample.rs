//! Placeholder/sample dictionary detection.
//!
//! Dictionary bundles frequently ship tiny demo payloads next to the real
//! ones; importing them pollutes the store with a handful of toy entries
//! under a plausible-looking source name. This gate runs before any decoding.

use log::info;

use super::models::DictionarySource;

/// Name fragments that mark demo dictionaries (case-insensitive).
const SAMPLE_NAME_PATTERNS: &[&str] = &["sample", "mẫu", "test", "simple", "basic", "local"];

/// Smallest payload believed to be a full dictionary.
const MIN_DICT_SIZE_BYTES: u64 = 50_000;

/// Smallest declared word count believed to be a full dictionary.
const MIN_DICT_WORD_COUNT: u64 = 100;

/// Decide whether a source looks like a placeholder/sample dictionary.
/// Any single rule firing is enough.
pub fn is_sample(source: &DictionarySource) -> bool {
    let lowered = source.name.to_lowercase();
    if SAMPLE_NAME_PATTERNS.iter().any(|p| lowered.contains(p)) {
        info!("Dictionary {} matches a sample name pattern", source.name);
        return true;
    }

    if source.file_size_bytes < MIN_DICT_SIZE_BYTES {
        info!(
            "Dictionary {} is only {} bytes, likely a sample",
            source.name, source.file_size_bytes
        );
        return true;
    }

    if let Some(count) = source.declared_word_count {
        if count < MIN_DICT_WORD_COUNT {
            info!(
                "Dictionary {} declares only {} words, likely a sample",
                source.name, count
            );
            return true;
        }
    }

    false
}

//! Companion `.ifo` metadata parsing.

use std::fs;
use std::path::Path;

use log::debug;

use super::error::Result;

/// Fields recovered from a StarDict `.ifo` file.
///
/// The word count is a hint only: it sizes progress reporting and feeds the
/// sample heuristic, but the decoder never trusts it for loop bounds.
#[derive(Debug, Clone, Default)]
pub struct IfoInfo {
    pub book_name: Option<String>,
    pub word_count: Option<u64>,
}

/// Parse the `key=value` lines of an `.ifo` file.
///
/// Reads tolerantly (lossy UTF-8); lines without `=` and unparseable
/// `wordcount` values are ignored rather than treated as errors.
pub fn parse(path: &Path) -> Result<IfoInfo> {
    let raw = fs::read(path)?;
    let text = String::from_utf8_lossy(&raw);

    let mut info = IfoInfo::default();
    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        match key.trim() {
            "wordcount" => info.word_count = value.trim().parse().ok(),
            "bookname" => info.book_name = Some(value.trim().to_string()),
            _ => {}
        }
    }

    debug!(
        "Parsed {}: bookname={:?}, wordcount={:?}",
        path.display(),
        info.book_name,
        info.word_count
    );
    Ok(info)
}

//! Data structures shared across the decode and query pipelines.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Grammatical category attached to a segmented definition or example.
///
/// `Unknown` is not an error marker: definitions whose text carries no
/// recognizable part-of-speech name are kept under it rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pos {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Pronoun,
    Interjection,
    Determiner,
    Article,
    Unknown,
}

impl Pos {
    /// Map a Vietnamese part-of-speech name to its English category.
    ///
    /// Anything outside the ten names used by Anh-Việt dictionaries maps to
    /// `Unknown`.
    pub fn from_vietnamese(name: &str) -> Self {
        match name.trim() {
            "danh từ" => Pos::Noun,
            "động từ" => Pos::Verb,
            "tính từ" => Pos::Adjective,
            "trạng từ" => Pos::Adverb,
            "giới từ" => Pos::Preposition,
            "liên từ" => Pos::Conjunction,
            "đại từ" => Pos::Pronoun,
            "thán từ" => Pos::Interjection,
            "từ hạn định" => Pos::Determiner,
            "mạo từ" => Pos::Article,
            _ => Pos::Unknown,
        }
    }

    /// English name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Pos::Noun => "noun",
            Pos::Verb => "verb",
            Pos::Adjective => "adjective",
            Pos::Adverb => "adverb",
            Pos::Preposition => "preposition",
            Pos::Conjunction => "conjunction",
            Pos::Pronoun => "pronoun",
            Pos::Interjection => "interjection",
            Pos::Determiner => "determiner",
            Pos::Article => "article",
            Pos::Unknown => "unknown",
        }
    }
}

/// One dictionary file offered for import, with its companion metadata.
///
/// Built once per import attempt and never mutated; used to decide import
/// eligibility (sample gate) and for provenance tagging of stored rows.
#[derive(Debug, Clone)]
pub struct DictionarySource {
    /// Source tag written into every stored row.
    pub name: String,
    pub dict_path: PathBuf,
    /// Companion `.ifo` file, if one sits next to the payload.
    pub ifo_path: Option<PathBuf>,
    /// `wordcount=` hint from the `.ifo`. Sizes progress reporting only,
    /// never loop bounds.
    pub declared_word_count: Option<u64>,
    pub file_size_bytes: u64,
}

/// One segmented sense of a word, derived from a stored row at query time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// The looked-up English word.
    pub word: String,
    /// Vietnamese meaning text, with example phrases already stripped off.
    pub meaning: String,
    pub pos: Pos,
    /// Name of the dictionary source the row came from.
    pub source: String,
}

/// One bilingual example phrase belonging to a sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    /// Source-language half of the phrase.
    pub text: String,
    /// Vietnamese half; empty when no separator could be located.
    pub text_vi: String,
    pub pos: Pos,
    pub source: String,
}

/// Aggregate returned by a word lookup.
///
/// Recomputed per query from the stored rows; owned by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordData {
    pub word: String,
    pub pronunciations: Vec<String>,
    pub definitions: Vec<Definition>,
    pub examples: Vec<Example>,
    /// Names of the sources that contributed rows, in first-seen order.
    pub sources: Vec<String>,
}

impl WordData {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            ..Self::default()
        }
    }

    /// Collapse duplicate definitions and examples, preserving first-seen
    /// order. Definitions are keyed by `(pos, meaning)`, examples by
    /// `(text, text_vi)`, so the same sense reported by several sources
    /// survives only once.
    pub fn dedup(&mut self) {
        let mut seen = HashSet::new();
        self.definitions
            .retain(|d| seen.insert((d.pos, d.meaning.clone())));

        let mut seen = HashSet::new();
        self.examples
            .retain(|e| seen.insert((e.text.clone(), e.text_vi.clone())));
    }
}

//! Core StarDict Anh-Việt import and query pipeline.

pub mod decoder;
pub mod discover;
pub mod error;
pub mod ifo;
pub mod markup;
pub mod models;
pub mod sample;
pub mod segment;
pub mod store;

mod compression;

use std::path::{Path, PathBuf};

use log::{debug, error, info};

pub use error::{Result, StarDictError};
use models::{Definition, DictionarySource, Example, WordData};
use store::DictStore;

/// Bound on rows fetched per lookup, capping multi-source fan-out.
const LOOKUP_LIMIT: u32 = 10;

/// How often the importer reports decode progress when the companion `.ifo`
/// declared a word count.
const PROGRESS_LOG_INTERVAL: u64 = 10_000;

/// Importer configuration, passed explicitly at construction.
#[derive(Debug, Clone, Copy)]
pub struct ImportOptions {
    /// Reject dictionaries the sample heuristic flags as placeholders.
    pub skip_sample: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { skip_sample: true }
    }
}

enum ImportOutcome {
    Imported(u64),
    AlreadyImported(u64),
    SkippedSample,
}

/// Importer and query engine over a store of decoded dictionary rows.
///
/// One `StarDict` imports sources sequentially; the query path is read-only.
pub struct StarDict {
    store: DictStore,
    options: ImportOptions,
}

impl StarDict {
    /// Open (creating if needed) the dictionary database at `db_path` with
    /// default options.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_options(db_path, ImportOptions::default())
    }

    /// Open with explicit importer options.
    pub fn open_with_options(db_path: impl AsRef<Path>, options: ImportOptions) -> Result<Self> {
        Ok(Self {
            store: DictStore::open(db_path.as_ref())?,
            options,
        })
    }

    /// Throwaway in-memory instance (tests, one-shot imports).
    pub fn in_memory(options: ImportOptions) -> Result<Self> {
        Ok(Self {
            store: DictStore::open_in_memory()?,
            options,
        })
    }

    /// Import one `.dict` / `.dict.dz` payload under the given source name.
    ///
    /// Returns `false` when the source was skipped as a sample or failed to
    /// read, `true` on success - including the no-op case where the source
    /// was already imported. No error escapes this call; failures are logged
    /// so a caller importing many sources can simply continue.
    pub fn import_dict_file(
        &mut self,
        dict_path: &Path,
        ifo_path: Option<&Path>,
        source_name: &str,
    ) -> bool {
        match self.try_import(dict_path, ifo_path, source_name) {
            Ok(ImportOutcome::Imported(count)) => {
                info!("Imported {} words from dictionary {}", count, source_name);
                true
            }
            Ok(ImportOutcome::AlreadyImported(count)) => {
                info!(
                    "Dictionary {} already imported ({} words), skipping",
                    source_name, count
                );
                true
            }
            Ok(ImportOutcome::SkippedSample) => {
                info!("Skipping sample dictionary: {}", source_name);
                false
            }
            Err(e) => {
                error!("Failed to import dictionary {}: {}", source_name, e);
                false
            }
        }
    }

    fn try_import(
        &mut self,
        dict_path: &Path,
        ifo_path: Option<&Path>,
        source_name: &str,
    ) -> Result<ImportOutcome> {
        if !dict_path.exists() {
            return Err(StarDictError::MissingFile(dict_path.display().to_string()));
        }

        let source = describe_source(dict_path, ifo_path, source_name)?;
        if self.options.skip_sample && sample::is_sample(&source) {
            return Ok(ImportOutcome::SkippedSample);
        }

        let existing = self.store.count_for_source(source_name)?;
        if existing > 0 {
            return Ok(ImportOutcome::AlreadyImported(existing));
        }

        let bytes = compression::read_dict_bytes(dict_path)?;
        info!(
            "Decoding {} ({} bytes decompressed)",
            source_name,
            bytes.len()
        );

        // The declared count sizes progress reporting only; the decode loop
        // is bounded by the buffer, never by the hint.
        let declared = source.declared_word_count.unwrap_or(0);
        let mut decoded = 0u64;
        let records = decoder::RecordIter::new(&bytes).filter_map(|(word, definition)| {
            decoded += 1;
            if declared > 0 && decoded % PROGRESS_LOG_INTERVAL == 0 {
                debug!("{}: decoded {}/{} records", source_name, decoded, declared);
            }
            let definition = markup::clean(&definition);
            (!word.is_empty() && !definition.is_empty()).then_some((word, definition))
        });

        let inserted = self.store.insert_records(source_name, records)?;
        Ok(ImportOutcome::Imported(inserted))
    }

    /// Rows currently stored for a source name.
    pub fn source_word_count(&self, source_name: &str) -> Result<u64> {
        self.store.count_for_source(source_name)
    }

    /// Look up a word and run the full segmentation pipeline over every
    /// stored definition for it.
    ///
    /// The exact match is tried first, then a case-insensitive retry; both
    /// are capped at [`LOOKUP_LIMIT`] rows. Returns `Ok(None)` when the word
    /// is unknown to every imported source - absence is not an error.
    pub fn get_word_data(&self, word: &str) -> Result<Option<WordData>> {
        let mut rows = self.store.lookup(word, LOOKUP_LIMIT)?;
        if rows.is_empty() {
            rows = self.store.lookup_nocase(word, LOOKUP_LIMIT)?;
        }
        if rows.is_empty() {
            return Ok(None);
        }

        let mut data = WordData::new(word);
        for (definition_text, source) in &rows {
            if !data.sources.contains(source) {
                data.sources.push(source.clone());
            }

            let cleaned = markup::clean(definition_text);
            if let Some(pron) = segment::extract_pronunciation(&cleaned) {
                if !data.pronunciations.contains(&pron) {
                    data.pronunciations.push(pron);
                }
            }

            for (pos, span) in segment::split_pos_sections(&cleaned) {
                for sense in segment::split_meanings(&span) {
                    let (meaning, examples) = segment::split_meaning_examples(&sense);
                    if !meaning.is_empty() {
                        data.definitions.push(Definition {
                            word: word.to_string(),
                            meaning,
                            pos,
                            source: source.clone(),
                        });
                    }
                    for phrase in examples {
                        let (text, text_vi) = segment::split_example_pair(&phrase);
                        if !text.is_empty() {
                            data.examples.push(Example {
                                text,
                                text_vi,
                                pos,
                                source: source.clone(),
                            });
                        }
                    }
                }
            }
        }

        data.dedup();
        Ok(Some(data))
    }
}

/// Stat the payload and read its companion metadata into a
/// [`DictionarySource`] description.
fn describe_source(
    dict_path: &Path,
    ifo_path: Option<&Path>,
    source_name: &str,
) -> Result<DictionarySource> {
    let metadata = std::fs::metadata(dict_path)?;
    let ifo_path: Option<PathBuf> = ifo_path
        .map(Path::to_path_buf)
        .or_else(|| discover::ifo_companion(dict_path));

    let declared_word_count = match &ifo_path {
        // A broken .ifo degrades the import to "no hint", it never fails it.
        Some(p) if p.exists() => ifo::parse(p).ok().and_then(|i| i.word_count),
        _ => None,
    };

    Ok(DictionarySource {
        name: source_name.to_string(),
        dict_path: dict_path.to_path_buf(),
        ifo_path,
        declared_word_count,
        file_size_bytes: metadata.len(),
    })
}

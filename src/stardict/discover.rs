//! Discovery of StarDict payloads on disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::error::Result;

/// One dictionary payload found by [`scan_dir`].
#[derive(Debug, Clone)]
pub struct DiscoveredDict {
    /// Source name: the file name up to its first `.`.
    pub name: String,
    pub dict_path: PathBuf,
    /// Companion `.ifo`, included only when it exists next to the payload.
    pub ifo_path: Option<PathBuf>,
}

/// Find every `*.dict` / `*.dict.dz` file directly under `dir`, paired with
/// its companion `.ifo`. Results are sorted by name so repeated scans import
/// in a deterministic order.
pub fn scan_dir(dir: &Path) -> Result<Vec<DiscoveredDict>> {
    let mut found = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !file_name.ends_with(".dict") && !file_name.ends_with(".dict.dz") {
            continue;
        }

        let name = file_name
            .split('.')
            .next()
            .unwrap_or(file_name)
            .to_string();
        let ifo_path = ifo_companion(&path);
        found.push(DiscoveredDict {
            name,
            dict_path: path,
            ifo_path,
        });
    }

    found.sort_by(|a, b| a.name.cmp(&b.name));
    info!(
        "Found {} dictionary payload(s) in {}",
        found.len(),
        dir.display()
    );
    Ok(found)
}

/// Derive the `.ifo` path sitting next to a `.dict`/`.dict.dz` payload.
/// Returns `None` when the file does not exist.
pub fn ifo_companion(dict_path: &Path) -> Option<PathBuf> {
    let text = dict_path.to_string_lossy();
    let base = text
        .strip_suffix(".dict.dz")
        .or_else(|| text.strip_suffix(".dict"))?;
    let candidate = PathBuf::from(format!("{base}.ifo"));
    candidate.exists().then_some(candidate)
}

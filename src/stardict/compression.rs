//! Payload loading for plain and gzip-compressed dictionary files.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use flate2::read::GzDecoder;
use log::debug;

use super::error::Result;

/// Read a `.dict` / `.dict.dz` file fully into memory.
///
/// Files with a `.dz` or `.gz` extension are inflated; anything else is
/// returned as-is. A corrupt gzip stream surfaces as an I/O error.
pub fn read_dict_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut raw = Vec::new();
    File::open(path)?.read_to_end(&mut raw)?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if matches!(ext, "dz" | "gz") {
        debug!("Inflating gzip payload: {}", path.display());
        let mut inflated = Vec::new();
        GzDecoder::new(raw.as_slice()).read_to_end(&mut inflated)?;
        return Ok(inflated);
    }

    Ok(raw)
}

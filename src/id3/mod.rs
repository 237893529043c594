//! Core ID3v2 tag decoding module

pub mod error;
pub mod models;
pub mod syncsafe;
mod frames;
mod header;
mod info;

use std::fs;
use std::path::Path;

pub use error::{Id3Error, Result};
pub use models::{Frame, HeaderFlags, Tag, TagHeader, TagInfo};

/// Scan a byte buffer for an ID3v2 tag.
///
/// Searches the buffer for the 3-byte tag marker, parses the header (and any
/// extended header) at the first match, then decodes every frame record up to
/// the declared tag boundary. `Ok(None)` means no marker was found; an
/// absent tag is not an error.
///
/// Each call is a pure function of its input buffer; there is no shared state
/// between scans.
///
/// # Errors
/// Returns an error if:
/// - The extended header runs past the end of the buffer
/// - A frame header or a frame's declared body runs past the end of the buffer
pub fn scan(data: &[u8]) -> Result<Option<Tag>> {
    let header = match header::locate(data)? {
        Some(header) => header,
        None => {
            log::info!("No ID3 marker in {} byte buffer", data.len());
            return Ok(None);
        }
    };

    let frames = frames::walk(data, &header)?;

    log::info!(
        "Decoded ID3v2.{}.{} tag at offset {}: {} frames, {} body bytes",
        header.major_version,
        header.minor_version,
        header.start,
        frames.len(),
        header.size
    );

    Ok(Some(Tag { header, frames }))
}

/// Read an audio file and scan its contents for an ID3v2 tag.
///
/// Convenience wrapper around [`scan`]: loads the whole file into memory
/// first, since tag decoding is a single pass over an in-memory buffer.
///
/// # Errors
/// Returns an error if the file cannot be read, plus everything [`scan`]
/// can return.
pub fn scan_path(path: impl AsRef<Path>) -> Result<Option<Tag>> {
    let path = path.as_ref();
    log::info!("Reading audio file: {}", path.display());
    let data = fs::read(path)?;
    scan(&data)
}

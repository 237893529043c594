//! Tag header location and parsing
//!
//! Header structure:
//! - 3 bytes: tag marker `"ID3"` (0x49 0x44 0x33)
//! - 1 byte:  major version
//! - 1 byte:  minor version
//! - 1 byte:  flags
//! - 4 bytes: tag body size (syncsafe)
//!
//! If the extended-header flag is set, 4 more syncsafe bytes follow giving
//! the extended header's own size; its remaining fields are not parsed.

use log::{debug, trace};

use super::error::{Id3Error, Result};
use super::models::{HeaderFlags, TagHeader};
use super::syncsafe;

/// The 3-byte tag marker, ASCII `"ID3"`.
const TAG_MARKER: [u8; 3] = [0x49, 0x44, 0x33];

/// Fixed length of the tag header: marker(3) + version(2) + flags(1) + size(4).
pub(super) const HEADER_LEN: usize = 10;

/// Scan the buffer for the tag marker and parse the header at the first match.
///
/// Every starting offset from 0 through `len - 10` inclusive is examined; a
/// buffer too short to hold a full header, or one with no marker, yields
/// `None`. The first match wins; later marker bytes are audio data, not a
/// second tag.
///
/// Version and flag bytes are not range-checked. Tags in the wild carry all
/// sorts of values there, and scanning stays permissive about them.
///
/// # Errors
/// Returns [`Id3Error::TruncatedBuffer`] if the extended-header flag is set
/// but the buffer ends before the extended header's size field.
pub(super) fn locate(data: &[u8]) -> Result<Option<TagHeader>> {
    if data.len() < HEADER_LEN {
        return Ok(None);
    }

    for start in 0..=data.len() - HEADER_LEN {
        if data[start..start + 3] == TAG_MARKER {
            return parse_at(data, start).map(Some);
        }
    }

    Ok(None)
}

/// Parse the header fields at a confirmed marker offset.
fn parse_at(data: &[u8], start: usize) -> Result<TagHeader> {
    let mut marker = [0u8; 3];
    marker.copy_from_slice(&data[start..start + 3]);

    let flags = HeaderFlags::from(data[start + 5]);
    let size = syncsafe::decode_u28(&data[start + 6..start + HEADER_LEN])?;
    let mut frames_start = start + HEADER_LEN;

    if flags.extended_header {
        let ext_end = frames_start + syncsafe::SYNCSAFE_LEN;
        if ext_end > data.len() {
            return Err(Id3Error::TruncatedBuffer {
                context: "extended header",
                offset: frames_start,
                needed: syncsafe::SYNCSAFE_LEN,
                available: data.len() - frames_start,
            });
        }
        // The declared size covers the whole extended header, so skipping
        // that many bytes lands on the first frame.
        let ext_size = syncsafe::decode_u28(&data[frames_start..ext_end])? as usize;
        trace!("Extended header of {} bytes at offset {}", ext_size, frames_start);
        frames_start += ext_size;
    }

    let header = TagHeader {
        start,
        marker,
        major_version: data[start + 3],
        minor_version: data[start + 4],
        flags,
        size,
        frames_start,
    };

    debug!(
        "ID3v2.{}.{} header at offset {}: {} body bytes, frames start at {}",
        header.major_version, header.minor_version, start, size, frames_start
    );

    Ok(header)
}

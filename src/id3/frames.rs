//! Frame-region walking and per-frame decoding
//!
//! Frame record structure:
//! - 4 bytes: identifier (ASCII, e.g. `"TIT2"`)
//! - 4 bytes: body size (plain big-endian, never syncsafe)
//! - 2 bytes: flags
//! - N bytes: body, decoded with the default text encoding

use byteorder::{BigEndian, ByteOrder};
use encoding_rs::WINDOWS_1252;
use log::trace;

use super::error::{Id3Error, Result};
use super::header::HEADER_LEN;
use super::models::{Frame, TagHeader};

/// Fixed length of a frame header: identifier(4) + size(4) + flags(2).
const FRAME_HEADER_LEN: usize = 10;

/// Walk the frame region and decode every frame record in file order.
///
/// The cursor and the stop bound are both offsets within the tag body: the
/// cursor counts bytes from `frames_start`, and the bound is the declared
/// tag size less the extended-header bytes ahead of the frame region. An
/// empty region yields an empty sequence, not an error. Subtractions
/// saturate, so a degenerate extended-header size walks nothing.
///
/// # Errors
/// Returns [`Id3Error::TruncatedBuffer`] if a frame header or a frame's
/// declared body would read past the end of the buffer.
pub(super) fn walk(data: &[u8], header: &TagHeader) -> Result<Vec<Frame>> {
    let lead = header.frames_start.saturating_sub(header.start + HEADER_LEN);
    let stop = (header.size as usize).saturating_sub(lead);

    let mut frames = Vec::new();
    let mut cursor = 0usize;
    while cursor < stop {
        let frame = parse_frame(data, header.frames_start + cursor)?;
        // The declared size counts only the body; the 10-byte frame header
        // rides on top.
        cursor += FRAME_HEADER_LEN + frame.size as usize;
        frames.push(frame);
    }

    Ok(frames)
}

/// Decode a single frame record at the given absolute offset.
fn parse_frame(data: &[u8], offset: usize) -> Result<Frame> {
    let body_start = offset + FRAME_HEADER_LEN;
    if body_start > data.len() {
        return Err(Id3Error::TruncatedBuffer {
            context: "frame header",
            offset,
            needed: FRAME_HEADER_LEN,
            available: data.len().saturating_sub(offset),
        });
    }

    let mut id = [0u8; 4];
    id.copy_from_slice(&data[offset..offset + 4]);
    // Frame sizes are plain big-endian, unlike the syncsafe header size.
    let size = BigEndian::read_u32(&data[offset + 4..offset + 8]);
    let flags = [data[offset + 8], data[offset + 9]];

    let body_end = body_start + size as usize;
    if body_end > data.len() {
        return Err(Id3Error::TruncatedBuffer {
            context: "frame body",
            offset,
            needed: size as usize,
            available: data.len() - body_start,
        });
    }

    let (body, _, _) = WINDOWS_1252.decode(&data[body_start..body_end]);
    trace!(
        "Frame {} at offset {}: {} body bytes, flags {:02x}{:02x}",
        String::from_utf8_lossy(&id),
        offset,
        size,
        flags[0],
        flags[1]
    );

    Ok(Frame {
        id,
        size,
        flags,
        body: body.into_owned(),
    })
}

//! Data structures representing ID3v2 tag components

/// Decoded view of the header flags byte.
///
/// Bit 0x80: unsynchronization was applied to the tag
/// Bit 0x40: an extended header follows the base header
/// Bit 0x10: a footer is present at the end of the tag
///
/// All three are recorded so callers can detect the condition; none of them
/// triggers additional processing here.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFlags {
    pub unsynchronization: bool,
    pub extended_header: bool,
    pub footer: bool,
}

impl From<u8> for HeaderFlags {
    fn from(byte: u8) -> Self {
        Self {
            unsynchronization: (byte & 0x80) != 0,
            extended_header: (byte & 0x40) != 0,
            footer: (byte & 0x10) != 0,
        }
    }
}

/// Parsed ID3v2 tag header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHeader {
    /// Byte offset where the 3-byte marker begins.
    pub start: usize,
    /// The tag marker, always `b"ID3"` for a located header.
    pub marker: [u8; 3],
    pub major_version: u8,
    pub minor_version: u8,
    pub flags: HeaderFlags,
    /// Size of the tag body in bytes, decoded from the 4 syncsafe size bytes.
    /// Excludes the 10-byte header itself.
    pub size: u32,
    /// Byte offset of the first frame, past the header and any extended
    /// header. Always `>= start + 10`.
    pub frames_start: usize,
}

/// A single frame record from the tag body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// 4-byte frame identifier, e.g. `b"TIT2"`. Not validated for
    /// printability.
    pub id: [u8; 4],
    /// Declared size of the frame body. Plain big-endian, never syncsafe,
    /// and excludes the 10-byte frame header.
    pub size: u32,
    pub flags: [u8; 2],
    /// The frame body decoded with the default text encoding. Embedded NUL
    /// terminators from the source bytes are preserved.
    pub body: String,
}

/// A complete decoded tag: header plus frames in file order.
///
/// Duplicate identifiers are preserved, not merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub header: TagHeader,
    pub frames: Vec<Frame>,
}

/// Flat track-information record projected from a [`Tag`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub length: Option<String>,
    pub year: Option<String>,
}

//! # id3-reader
//!
//! A reader for ID3v2 metadata tags embedded in audio files.
//!
//! Locates the tag header inside a raw byte buffer, walks the frame sequence,
//! and projects the known text frames (title, artist, album, length, year)
//! into a flat [`TagInfo`] record.
pub mod id3;

// Re-export the main types for convenience
pub use id3::{
    error::{Id3Error, Result},
    models::{Frame, HeaderFlags, Tag, TagHeader, TagInfo},
    scan, scan_path,
};

//! Projection of the decoded frame sequence into a flat info record

use super::models::{Tag, TagInfo};

impl Tag {
    /// Project the frame sequence into a flat [`TagInfo`].
    ///
    /// A single forward scan assigns each recognized identifier's body,
    /// stripped of embedded NUL terminators, to its field. When an
    /// identifier repeats, the last frame in file order wins. Unrecognized
    /// identifiers are skipped without error.
    pub fn info(&self) -> TagInfo {
        let mut info = TagInfo::default();

        for frame in &self.frames {
            let field = match &frame.id {
                b"TIT2" => &mut info.title,
                // TIT1, not TPE1, feeds the artist field.
                b"TIT1" => &mut info.artist,
                b"TALB" => &mut info.album,
                b"TLEN" => &mut info.length,
                b"TYER" => &mut info.year,
                _ => continue,
            };
            *field = Some(strip_nuls(&frame.body));
        }

        info
    }
}

/// Remove the NUL terminators the source encoding carries inside frame
/// bodies.
fn strip_nuls(body: &str) -> String {
    body.replace('\0', "")
}

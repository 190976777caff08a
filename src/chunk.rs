use crate::ChunkTag;

/// The number of bytes in a chunk header: 4 tag bytes plus a 32-bit size.
pub const HEADER_LEN: usize = 8;

#[doc = r#"
One catalogue entry: a tagged, length-prefixed segment of a container.

A chunk records where its payload lives, never the payload bytes
themselves. Every chunk produced by a successful scan satisfies
`payload_offset + size <= buffer.len()`.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    tag: ChunkTag,
    size: u32,
    payload_offset: usize,
}

impl Chunk {
    pub(crate) const fn new(tag: ChunkTag, size: u32, payload_offset: usize) -> Self {
        Self {
            tag,
            size,
            payload_offset,
        }
    }

    /// The 4-byte identifier naming this chunk's type.
    pub const fn tag(&self) -> ChunkTag {
        self.tag
    }

    /// The declared payload length in bytes.
    ///
    /// Excludes the 8-byte header and any trailing alignment byte.
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Absolute offset of the first payload byte within the scanned buffer.
    pub const fn payload_offset(&self) -> usize {
        self.payload_offset
    }

    /// Absolute offset one past the last payload byte.
    pub const fn payload_end(&self) -> usize {
        self.payload_offset + self.size as usize
    }

    /// Absolute offset of this chunk's header.
    pub const fn header_offset(&self) -> usize {
        self.payload_offset - HEADER_LEN
    }
}

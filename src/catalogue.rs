use crate::{Chunk, ChunkTag, ParseConfig, scanner};
use alloc::vec::Vec;
use thiserror::Error;

/// An error produced by catalogue lookups, distinct from scan failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// The requested index is past the end of the catalogue.
    ///
    /// Out-of-range access never yields a placeholder chunk; consumers
    /// that assume a minimum chunk count should see their bug, not a
    /// default value.
    #[error("no chunk at index {index}, catalogue holds {len}")]
    NotFound {
        /// The requested zero-based index.
        index: usize,
        /// The number of chunks in the catalogue.
        len: usize,
    },
}

#[doc = r#"
The ordered catalogue of chunks found in one scan of a buffer.

Built in a single pass by [`ChunkCatalogue::parse`] and immutable
afterwards. The catalogue borrows the scanned buffer and records payload
offsets into it; payload bytes are never copied. Once produced it is safe
to read from any number of threads.

# Example

```rust
# use riffix::prelude::*;
let mut bytes = Vec::new();
bytes.extend_from_slice(b"fmt ");
bytes.extend_from_slice(&2u32.to_le_bytes());
bytes.extend_from_slice(&[0xAB, 0xCD]);

let catalogue = ChunkCatalogue::parse(&bytes, ParseConfig::default())?;

assert_eq!(catalogue.chunk_count(), 1);
let fmt = catalogue.chunk_at(0)?;
assert_eq!(fmt.tag(), b"fmt ");
assert_eq!(catalogue.payload(&fmt), &[0xAB, 0xCD]);
# Ok::<(), Box<dyn std::error::Error>>(())
```
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkCatalogue<'a> {
    bytes: &'a [u8],
    chunks: Vec<Chunk>,
}

impl<'a> ChunkCatalogue<'a> {
    /// Scan `bytes` into a catalogue.
    ///
    /// A pure function of the buffer and config; either the whole scan
    /// window tiles into well-formed chunks, or this fails and no
    /// catalogue exists. See [`ScanErrorKind`](crate::scanner::ScanErrorKind)
    /// for the ways a scan can fail.
    pub fn parse(bytes: &'a [u8], config: ParseConfig) -> scanner::ScanResult<Self> {
        let chunks = scanner::scan(bytes, config)?;
        Ok(Self { bytes, chunks })
    }

    /// The number of chunks found by the scan.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// True if the scan window held no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// The chunk at a zero-based catalogue index.
    pub fn chunk_at(&self, index: usize) -> Result<Chunk, CatalogueError> {
        self.chunks
            .get(index)
            .copied()
            .ok_or(CatalogueError::NotFound {
                index,
                len: self.chunks.len(),
            })
    }

    /// All chunks in scan order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Iterate over the chunks in scan order.
    pub fn iter(&self) -> core::slice::Iter<'_, Chunk> {
        self.chunks.iter()
    }

    /// Iterate over the chunks carrying `tag`, in scan order.
    pub fn with_tag(&self, tag: impl Into<ChunkTag>) -> impl Iterator<Item = &Chunk> {
        let tag = tag.into();
        self.chunks.iter().filter(move |chunk| chunk.tag() == tag)
    }

    /// The first chunk carrying `tag`, if any.
    pub fn first(&self, tag: impl Into<ChunkTag>) -> Option<&Chunk> {
        self.with_tag(tag).next()
    }

    /// The payload bytes of a chunk, sliced out of the scanned buffer.
    ///
    /// In bounds for every chunk this catalogue produced.
    pub fn payload(&self, chunk: &Chunk) -> &'a [u8] {
        &self.bytes[chunk.payload_offset()..chunk.payload_end()]
    }
}

impl<'a> IntoIterator for &'a ChunkCatalogue<'_> {
    type Item = &'a Chunk;
    type IntoIter = core::slice::Iter<'a, Chunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

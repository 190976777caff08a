#![doc = r#"
Chunk catalogues for RIFF-style binary containers.

# Overview

Containers in the RIFF family (RIFF/WAVE, SF2 soundbanks, AIFF and
friends) are organized as a flat sequence of chunks: a 4-byte tag, a
32-bit payload size, the payload itself, and an optional alignment byte
after odd-sized payloads. This crate walks a fully-buffered byte
sequence into an ordered [`ChunkCatalogue`] of (tag, size, offset)
records that a format-specific consumer resolves against the original
buffer.

What this crate deliberately does not do: interpret payload semantics,
validate checksums, read from streams, or write chunks back out. It
parses bytes someone else already fetched, nothing more.

# Example

```rust
use riffix::prelude::*;

let mut bytes = Vec::new();
bytes.extend_from_slice(b"DATA");
bytes.extend_from_slice(&4u32.to_le_bytes());
bytes.extend_from_slice(&[0x01, 0x02, 0x03, 0x04]);

let catalogue = ChunkCatalogue::parse(&bytes, ParseConfig::default())?;

let data = catalogue.first(b"DATA").unwrap();
assert_eq!(catalogue.payload(data), &[0x01, 0x02, 0x03, 0x04]);
# Ok::<(), riffix::scanner::ScanError>(())
```

Containers that prefix the chunk sequence with a form header, or that
use big-endian sizes, scan through the same entry point with a
[`ParseConfig`] selecting the window and byte order.
"#]
#![no_std]

extern crate alloc;

mod catalogue;
pub use catalogue::*;

mod chunk;
pub use chunk::*;

mod config;
pub use config::*;

mod tag;
pub use tag::*;

pub mod scanner;

/// Re-exports everything needed to scan a buffer and walk the result.
pub mod prelude {
    pub use crate::{
        CatalogueError, Chunk, ChunkCatalogue, ChunkTag, ParseConfig,
        scanner::{ScanError, ScanErrorKind, ScanResult},
    };
}

#[doc = r#"
Configuration for a chunk scan.

The defaults match the common RIFF layout: scan the whole buffer,
little-endian size fields, one alignment byte after every odd-sized
payload.

```rust
# use riffix::prelude::*;
// Scan 64 bytes of an AIFF-style container embedded at offset 12.
let config = ParseConfig::default()
    .with_window(12, 64)
    .with_big_endian(true);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseConfig {
    start_index: usize,
    length: Option<usize>,
    big_endian: bool,
    no_padding: bool,
}

impl ParseConfig {
    /// Scan the entire buffer with little-endian sizes and padding on.
    pub const fn new() -> Self {
        Self {
            start_index: 0,
            length: None,
            big_endian: false,
            no_padding: false,
        }
    }

    /// Restrict the scan to `length` bytes starting at `start_index`.
    pub const fn with_window(mut self, start_index: usize, length: usize) -> Self {
        self.start_index = start_index;
        self.length = Some(length);
        self
    }

    /// Begin scanning at `start_index` and run to the end of the buffer.
    pub const fn with_start_index(mut self, start_index: usize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Decode size fields most-significant-byte first.
    pub const fn with_big_endian(mut self, big_endian: bool) -> Self {
        self.big_endian = big_endian;
        self
    }

    /// Whether odd-sized payloads are followed by one alignment byte.
    pub const fn with_padding(mut self, padding: bool) -> Self {
        self.no_padding = !padding;
        self
    }

    /// The byte offset at which scanning begins.
    pub const fn start_index(&self) -> usize {
        self.start_index
    }

    /// The number of bytes to scan, or `None` for the remaining buffer.
    pub const fn length(&self) -> Option<usize> {
        self.length
    }

    /// True if size fields decode most-significant-byte first.
    pub const fn big_endian(&self) -> bool {
        self.big_endian
    }

    /// True if odd-sized payloads carry a trailing alignment byte.
    pub const fn padding(&self) -> bool {
        !self.no_padding
    }
}

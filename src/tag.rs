use core::fmt;

#[doc = r#"
The 4-byte identifier naming a chunk's type.

Tags are raw bytes, not guaranteed-valid text. Well-formed containers
use printable ASCII (`"RIFF"`, `"LIST"`, `"sfbk"`, ...), but a tag read
from a file may contain anything, so no string conversion is exposed.
Compare against byte literals instead:

```rust
# use riffix::prelude::*;
let tag = ChunkTag::new(*b"DATA");

assert_eq!(tag, b"DATA");
assert_ne!(tag, b"LIST");
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkTag([u8; 4]);

impl ChunkTag {
    /// Create a tag from its four raw bytes.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// The raw tag bytes.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl From<[u8; 4]> for ChunkTag {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl From<&[u8; 4]> for ChunkTag {
    fn from(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }
}

impl PartialEq<[u8; 4]> for ChunkTag {
    fn eq(&self, other: &[u8; 4]) -> bool {
        &self.0 == other
    }
}

impl PartialEq<&[u8; 4]> for ChunkTag {
    fn eq(&self, other: &&[u8; 4]) -> bool {
        &self.0 == *other
    }
}

impl PartialEq<[u8]> for ChunkTag {
    fn eq(&self, other: &[u8]) -> bool {
        self.0 == *other
    }
}

/// Prints printable ASCII (0x20-0x7E) verbatim and escapes every other
/// byte as `\x..`, so malformed tags stay displayable.
impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            if (0x20..=0x7E).contains(&byte) {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02x}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkTag(\"{self}\")")
    }
}

#![doc = r#"
The linear chunk walk over a scan window.

A scan is a pure function of the buffer and a [`ParseConfig`]: it keeps a
local cursor, reads one 8-byte header at a time, checks the declared
payload against the window end, and skips the alignment byte after
odd-sized payloads when padding is enabled. There is no resumable scanner
object, so a stale scan can never be resumed by accident.
"#]

mod error;
pub use error::*;

use crate::{Chunk, ChunkTag, ParseConfig, chunk::HEADER_LEN};
use alloc::vec::Vec;

/// Walk the configured window of `bytes` and return the chunks in scan order.
///
/// Fails with [`ScanErrorKind::InvalidRange`] before reading anything if the
/// window does not fit inside the buffer.
pub(crate) fn scan(bytes: &[u8], config: ParseConfig) -> ScanResult<Vec<Chunk>> {
    let start = config.start_index();
    let invalid_range = |length: usize| {
        ScanError::new(
            start,
            ScanErrorKind::InvalidRange {
                start,
                length,
                buffer_len: bytes.len(),
            },
        )
    };

    if start > bytes.len() {
        return Err(invalid_range(config.length().unwrap_or(0)));
    }
    let length = match config.length() {
        Some(length) => length,
        None => bytes.len() - start,
    };
    let end = match start.checked_add(length) {
        Some(end) if end <= bytes.len() => end,
        _ => return Err(invalid_range(length)),
    };

    let mut chunks = Vec::new();
    let mut cursor = start;

    while cursor < end {
        if end - cursor < HEADER_LEN {
            return Err(ScanError::new(
                cursor,
                ScanErrorKind::TruncatedHeader {
                    remaining: end - cursor,
                },
            ));
        }

        let mut tag = [0; 4];
        tag.copy_from_slice(&bytes[cursor..cursor + 4]);
        let tag = ChunkTag::new(tag);

        let mut size = [0; 4];
        size.copy_from_slice(&bytes[cursor + 4..cursor + HEADER_LEN]);
        let size = if config.big_endian() {
            u32::from_be_bytes(size)
        } else {
            u32::from_le_bytes(size)
        };

        let payload_offset = cursor + HEADER_LEN;
        let available = end - payload_offset;
        if size as usize > available {
            return Err(ScanError::new(
                payload_offset,
                ScanErrorKind::TruncatedPayload {
                    tag,
                    declared: size,
                    available,
                },
            ));
        }

        chunks.push(Chunk::new(tag, size, payload_offset));

        cursor = payload_offset + size as usize;

        // An odd-sized payload is followed by one alignment byte. The
        // header is even, so consumed-so-far is odd exactly when the size
        // is odd. The pad may land one byte past the window end; the loop
        // condition exits before anything reads at that cursor.
        if config.padding() && (cursor - start) % 2 == 1 {
            cursor += 1;
        }
    }

    Ok(chunks)
}

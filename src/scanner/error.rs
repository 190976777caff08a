use crate::ChunkTag;
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while scanning a buffer into a chunk catalogue
"#]
#[derive(Debug, Error)]
#[error("Scanning at byte {position}, {kind}")]
pub struct ScanError {
    position: usize,
    pub(crate) kind: ScanErrorKind,
}

/// A kind of error that a scan can produce.
///
/// None of these are retryable: the same bytes scanned again yield the
/// same result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// The configured scan window does not fit inside the buffer.
    #[error("window of {length} bytes at offset {start} exceeds buffer of {buffer_len} bytes")]
    InvalidRange {
        /// Configured start of the scan window.
        start: usize,
        /// Configured window length.
        length: usize,
        /// Actual buffer length.
        buffer_len: usize,
    },
    /// The window ended partway through an 8-byte chunk header.
    #[error("chunk header needs 8 bytes, {remaining} remain in the window")]
    TruncatedHeader {
        /// Bytes left between the cursor and the window end.
        remaining: usize,
    },
    /// A chunk declared more payload bytes than the window holds.
    #[error("chunk \"{tag}\" declares {declared} payload bytes, {available} remain in the window")]
    TruncatedPayload {
        /// Tag of the offending chunk.
        tag: ChunkTag,
        /// Declared payload size.
        declared: u32,
        /// Bytes left between the payload start and the window end.
        available: usize,
    },
}

impl ScanError {
    /// Create a scan error from a position and kind.
    pub const fn new(position: usize, kind: ScanErrorKind) -> Self {
        Self { position, kind }
    }

    /// True if the input ran out mid-header or mid-payload.
    pub const fn is_truncated(&self) -> bool {
        matches!(
            self.kind,
            ScanErrorKind::TruncatedHeader { .. } | ScanErrorKind::TruncatedPayload { .. }
        )
    }

    /// Returns the kind of scan failure.
    pub fn kind(&self) -> &ScanErrorKind {
        &self.kind
    }

    /// Returns the byte offset at which the scan failed.
    pub fn position(&self) -> usize {
        self.position
    }
}

/// The scan result type (see [`ScanError`])
pub type ScanResult<T> = Result<T, ScanError>;

use pretty_assertions::assert_eq;
use riffix::prelude::*;

#[test]
fn start_index_past_buffer_is_invalid_range() {
    let bytes = [0u8; 4];
    let err = ChunkCatalogue::parse(&bytes, ParseConfig::default().with_start_index(5))
        .unwrap_err();

    assert_eq!(err.position(), 5);
    assert!(matches!(err.kind(), ScanErrorKind::InvalidRange { .. }));
    assert!(!err.is_truncated());
}

#[test]
fn window_past_buffer_is_invalid_range_not_a_short_scan() {
    // A declared length overrunning the buffer is a configuration error,
    // never a silently truncated catalogue.
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"DATA");
    bytes.extend_from_slice(&0u32.to_le_bytes());

    let err =
        ChunkCatalogue::parse(&bytes, ParseConfig::default().with_window(0, 9)).unwrap_err();

    assert_eq!(
        *err.kind(),
        ScanErrorKind::InvalidRange {
            start: 0,
            length: 9,
            buffer_len: 8,
        }
    );
}

#[test]
fn overflowing_window_is_invalid_range() {
    let bytes = [0u8; 16];
    let config = ParseConfig::default().with_window(8, usize::MAX);
    let err = ChunkCatalogue::parse(&bytes, config).unwrap_err();

    assert!(matches!(err.kind(), ScanErrorKind::InvalidRange { .. }));
}

#[test]
fn header_stub_is_truncated_header() {
    // Three bytes into what should be an 8-byte header.
    let err = ChunkCatalogue::parse(b"DAT", ParseConfig::default()).unwrap_err();

    assert_eq!(err.position(), 0);
    assert_eq!(*err.kind(), ScanErrorKind::TruncatedHeader { remaining: 3 });
    assert!(err.is_truncated());
}

#[test]
fn trailing_header_stub_after_valid_chunk_is_truncated_header() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&[0x01, 0x00]);
    bytes.extend_from_slice(b"dat"); // next header cut short

    let err = ChunkCatalogue::parse(&bytes, ParseConfig::default()).unwrap_err();

    assert_eq!(err.position(), 10);
    assert_eq!(*err.kind(), ScanErrorKind::TruncatedHeader { remaining: 3 });
}

#[test]
fn oversized_declaration_is_truncated_payload() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&100u32.to_le_bytes());
    bytes.extend_from_slice(&[0; 4]);

    let err = ChunkCatalogue::parse(&bytes, ParseConfig::default()).unwrap_err();

    assert_eq!(err.position(), 8);
    assert_eq!(
        *err.kind(),
        ScanErrorKind::TruncatedPayload {
            tag: ChunkTag::new(*b"data"),
            declared: 100,
            available: 4,
        }
    );
    assert!(err.is_truncated());
}

#[test]
fn failure_reports_offset_and_kind_in_the_message() {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&100u32.to_le_bytes());

    let err = ChunkCatalogue::parse(&bytes, ParseConfig::default()).unwrap_err();
    let message = err.to_string();

    assert_eq!(
        message,
        "Scanning at byte 8, chunk \"data\" declares 100 payload bytes, 0 remain in the window"
    );
}

//! Codec Tests
//!
//! Tests for line framing and sanitization.

use std::io::{self, Cursor, Write};

use conquest::protocol::{read_line, sanitize, write_line};
use conquest::ConquestError;

// =============================================================================
// Helper Functions
// =============================================================================

/// Writer that fails every call
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Sanitization Tests
// =============================================================================

#[test]
fn test_sanitize_strips_newlines_and_carriage_returns() {
    assert_eq!(sanitize("PLAYER|x\n|1|2|3"), "PLAYER|x|1|2|3");
    assert_eq!(sanitize("\r\nEND\r\n"), "END");
    assert_eq!(sanitize("MOVE|A\r|B|1"), "MOVE|A|B|1");
}

#[test]
fn test_sanitize_keeps_other_whitespace() {
    assert_eq!(sanitize("PLAYER|My  Bot\t|1|2|3"), "PLAYER|My  Bot\t|1|2|3");
}

// =============================================================================
// Write Tests
// =============================================================================

#[test]
fn test_write_line_appends_single_newline() {
    let mut out = Vec::new();
    write_line(&mut out, "STATUS").unwrap();
    assert_eq!(out, b"STATUS\n");
}

#[test]
fn test_write_line_sanitizes_payload() {
    let mut out = Vec::new();
    write_line(&mut out, "PLAYER|x\n|1|2|3\r\n").unwrap();
    assert_eq!(out, b"PLAYER|x|1|2|3\n");
}

#[test]
fn test_write_line_failure_is_connection_error() {
    let err = write_line(&mut BrokenPipe, "END").unwrap_err();
    assert!(matches!(err, ConquestError::Connection(_)));
}

// =============================================================================
// Read Tests
// =============================================================================

#[test]
fn test_read_line_strips_crlf() {
    let mut input = Cursor::new(b"OK\r\n".to_vec());
    assert_eq!(read_line(&mut input).unwrap(), "OK");
}

#[test]
fn test_read_line_strips_lf() {
    let mut input = Cursor::new(b"err: invalid command\n".to_vec());
    assert_eq!(read_line(&mut input).unwrap(), "err: invalid command");
}

#[test]
fn test_read_line_returns_one_line_per_call() {
    let mut input = Cursor::new(b"OK\r\n{\"Freeze\":true}\r\nEND\n".to_vec());
    assert_eq!(read_line(&mut input).unwrap(), "OK");
    assert_eq!(read_line(&mut input).unwrap(), "{\"Freeze\":true}");
    assert_eq!(read_line(&mut input).unwrap(), "END");
}

#[test]
fn test_read_line_empty_line() {
    let mut input = Cursor::new(b"\r\n".to_vec());
    assert_eq!(read_line(&mut input).unwrap(), "");
}

#[test]
fn test_read_line_eof_is_protocol_error() {
    let mut input = Cursor::new(Vec::new());
    let err = read_line(&mut input).unwrap_err();
    assert!(matches!(err, ConquestError::Protocol(_)));
}

#[test]
fn test_read_line_partial_line_is_protocol_error() {
    let mut input = Cursor::new(b"{\"Freeze\":".to_vec());
    let err = read_line(&mut input).unwrap_err();
    assert!(matches!(err, ConquestError::Protocol(_)));
}

#[test]
fn test_read_line_invalid_utf8_is_protocol_error() {
    let mut input = Cursor::new(vec![0xff, 0xfe, b'\n']);
    let err = read_line(&mut input).unwrap_err();
    assert!(matches!(err, ConquestError::Protocol(_)));
}

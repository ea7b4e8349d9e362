//! Protocol codec
//!
//! Line framing over any `Write` / `BufRead` pair.
//!
//! ## Wire Format
//! ```text
//! ┌──────────────────────────────┬────┐
//! │  payload (no '\n' or '\r')   │ \n │
//! └──────────────────────────────┴────┘
//! ```
//! Responses may end in `\r\n`; both terminators are removed on read.

use std::io::{BufRead, Write};

use crate::error::{ConquestError, Result};

/// Remove every character that would break the line framing
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Write `text` followed by a single newline, then flush
pub fn write_line<W: Write>(writer: &mut W, text: &str) -> Result<()> {
    let mut line = sanitize(text).into_bytes();
    line.push(b'\n');
    writer.write_all(&line)?;
    writer.flush()?;
    Ok(())
}

/// Read one complete line, stripping the trailing `\n` or `\r\n`
///
/// Blocks until a newline arrives. End of stream before the newline is a
/// protocol error: the response for the command in flight never arrived.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut buf = Vec::new();
    let n = reader.read_until(b'\n', &mut buf)?;

    if n == 0 {
        return Err(ConquestError::Protocol(
            "stream closed before a response arrived".to_string(),
        ));
    }
    if buf.last() != Some(&b'\n') {
        return Err(ConquestError::Protocol(format!(
            "stream closed mid-line after {} bytes",
            buf.len()
        )));
    }

    buf.pop();
    if buf.last() == Some(&b'\r') {
        buf.pop();
    }

    String::from_utf8(buf)
        .map_err(|e| ConquestError::Protocol(format!("response is not valid UTF-8: {}", e)))
}

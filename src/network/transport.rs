//! Transport
//!
//! Owns the byte stream to the game server and moves whole lines over it.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;
use std::time::Duration;

use crate::error::Result;
use crate::protocol::{read_line, write_line};

/// Line-oriented access to one server connection
///
/// Implementations never return partial lines. Callers must not interleave
/// calls from different logical requests; `Client` enforces that.
pub trait Transport: Send {
    /// Write `text` plus a single newline
    fn send_line(&mut self, text: &str) -> Result<()>;

    /// Block until a full line is available and return it without terminator
    fn read_line(&mut self) -> Result<String>;
}

/// TCP connection to the game server
pub struct TcpTransport {
    /// TCP stream reader (buffered for line reads)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered, flushed after every line)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl TcpTransport {
    /// Connect to `addr` (host:port)
    ///
    /// A timeout of 0 leaves the corresponding operation blocking.
    pub fn connect(addr: &str, read_timeout_ms: u64, write_timeout_ms: u64) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        let transport = Self::from_stream(stream)?;
        transport.set_timeouts(read_timeout_ms, write_timeout_ms)?;

        tracing::info!("Connected to game server at {}", transport.peer_addr);
        Ok(transport)
    }

    /// Wrap an already connected stream
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Commands are tiny and latency bound
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
        })
    }

    /// Configure connection timeouts
    pub fn set_timeouts(&self, read_ms: u64, write_ms: u64) -> Result<()> {
        let read_stream = self.reader.get_ref();
        let write_stream = self.writer.get_ref();

        if read_ms > 0 {
            read_stream.set_read_timeout(Some(Duration::from_millis(read_ms)))?;
        }
        if write_ms > 0 {
            write_stream.set_write_timeout(Some(Duration::from_millis(write_ms)))?;
        }

        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}

impl Transport for TcpTransport {
    fn send_line(&mut self, text: &str) -> Result<()> {
        write_line(&mut self.writer, text)
    }

    fn read_line(&mut self) -> Result<String> {
        read_line(&mut self.reader)
    }
}

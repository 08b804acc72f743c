// Keytrace Transcription Layer - Flush Buffer

use std::io::{self, Write};

/// Number of translated bytes accumulated before a flush.
pub const FLUSH_CAPACITY: usize = 100;

/// Bounded append-only byte buffer for translated keystrokes.
///
/// Invariant: `len() <= capacity()`. The caller drains the buffer the moment
/// it becomes full, so no translated byte is ever dropped. Draining performs
/// exactly one write of the filled bytes, which bounds sink syscalls to one
/// per capacity-worth of keystrokes.
#[derive(Debug)]
pub struct TranscriptBuffer {
    bytes: Vec<u8>,
    capacity: usize,
}

impl TranscriptBuffer {
    pub fn new() -> Self {
        Self::with_capacity(FLUSH_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append one translated byte. Callers must drain a full buffer before
    /// pushing further; pushing past capacity is a logic error.
    pub fn push(&mut self, byte: u8) {
        debug_assert!(self.bytes.len() < self.capacity);
        self.bytes.push(byte);
    }

    pub fn is_full(&self) -> bool {
        self.bytes.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Write the buffered bytes to `sink` in one operation and reset the
    /// buffer. Returns the number of bytes written; an empty buffer writes
    /// nothing.
    pub fn drain_into<W: Write>(&mut self, sink: &mut W) -> io::Result<usize> {
        if self.bytes.is_empty() {
            return Ok(0);
        }
        sink.write_all(&self.bytes)?;
        let written = self.bytes.len();
        self.bytes.clear();
        Ok(written)
    }
}

impl Default for TranscriptBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_at_capacity() {
        let mut buffer = TranscriptBuffer::with_capacity(3);
        buffer.push(b'a');
        buffer.push(b'b');
        assert!(!buffer.is_full());
        buffer.push(b'c');
        assert!(buffer.is_full());
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn test_drain_writes_once_and_resets() {
        let mut buffer = TranscriptBuffer::with_capacity(4);
        buffer.push(b'h');
        buffer.push(b'i');

        let mut sink = Vec::new();
        let written = buffer.drain_into(&mut sink).unwrap();

        assert_eq!(written, 2);
        assert_eq!(sink, b"hi");
        assert!(buffer.is_empty());
        assert!(!buffer.is_full());
    }

    #[test]
    fn test_drain_empty_writes_nothing() {
        let mut buffer = TranscriptBuffer::new();
        let mut sink = Vec::new();
        assert_eq!(buffer.drain_into(&mut sink).unwrap(), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_default_capacity() {
        assert_eq!(TranscriptBuffer::new().capacity(), FLUSH_CAPACITY);
    }

    #[test]
    fn test_reuse_after_drain() {
        let mut buffer = TranscriptBuffer::with_capacity(2);
        let mut sink = Vec::new();

        buffer.push(b'a');
        buffer.push(b'b');
        buffer.drain_into(&mut sink).unwrap();
        buffer.push(b'c');
        buffer.drain_into(&mut sink).unwrap();

        assert_eq!(sink, b"abc");
    }
}

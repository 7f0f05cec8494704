use bytes::{Bytes, BytesMut};

/// Reassembles newline-delimited JSON fragments from a chunked byte stream.
///
/// The remote service emits one JSON fragment per line, but the transport
/// does not guarantee one fragment per chunk: a fragment may be split
/// across chunks, or several fragments may arrive packed into one chunk.
/// Bytes are buffered until a full line is available.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buffer: BytesMut,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one transport chunk to the buffer.
    pub fn push(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Pops the next complete line, without its trailing newline. Returns
    /// `None` until a full line has been buffered.
    pub fn next_line(&mut self) -> Option<Bytes> {
        let pos = self.buffer.iter().position(|&b| b == b'\n')?;
        let mut line = self.buffer.split_to(pos + 1);
        line.truncate(pos);
        Some(line.freeze())
    }

    /// Drains a trailing unterminated line once the stream is exhausted.
    pub fn finish(&mut self) -> Option<Bytes> {
        if self.buffer.is_empty() {
            None
        } else {
            Some(self.buffer.split().freeze())
        }
    }
}

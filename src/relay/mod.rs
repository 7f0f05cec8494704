mod decoder;

pub use decoder::LineDecoder;

use crate::inference::{ByteStream, StreamChunk};
use crate::{Error, Result};
use bytes::Bytes;
use futures::StreamExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, warn};

/// Reads the incremental text at `choices[0].delta.content`. Absent and
/// empty-string content both yield `None`.
pub fn extract_delta(chunk: &StreamChunk) -> Option<&str> {
    chunk
        .choices
        .first()
        .and_then(|choice| choice.delta.content.as_deref())
        .filter(|content| !content.is_empty())
}

/// Turns the remote byte stream into a stream of text deltas, forwarded in
/// arrival order with no batching.
///
/// A producer task consumes the upstream chunks cooperatively and pushes
/// each decoded delta through a channel as soon as it is available. The
/// returned stream ends when the upstream is exhausted. Dropping the
/// returned stream (caller disconnected) stops the producer.
///
/// A fragment that fails JSON decoding is fatal: the error is emitted and
/// the rest of the upstream is abandoned. A fragment that decodes but
/// carries no delta is skipped.
pub fn delta_stream(mut upstream: ByteStream) -> UnboundedReceiverStream<Result<Bytes>> {
    let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut decoder = LineDecoder::new();

        while let Some(chunk) = upstream.next().await {
            let bytes = match chunk {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!("Aborting relay on transport fault: {}", e);
                    let _ = tx.send(Err(e));
                    return;
                }
            };

            // Empty transport chunks contribute nothing.
            if bytes.is_empty() {
                continue;
            }

            decoder.push(&bytes);
            while let Some(line) = decoder.next_line() {
                if !forward_fragment(&line, &tx) {
                    return;
                }
            }
        }

        // The final fragment may arrive without a trailing newline.
        if let Some(line) = decoder.finish() {
            forward_fragment(&line, &tx);
        }
    });

    UnboundedReceiverStream::new(rx)
}

/// Decodes one framed line and forwards its delta, if any. Returns `false`
/// when the relay must stop: decode fault, or the receiver is gone.
fn forward_fragment(line: &[u8], tx: &UnboundedSender<Result<Bytes>>) -> bool {
    if line.iter().all(u8::is_ascii_whitespace) {
        return true;
    }

    let fragment = match decode_fragment(line) {
        Ok(fragment) => fragment,
        Err(e) => {
            warn!("Aborting relay on stream decode fault: {}", e);
            let _ = tx.send(Err(e));
            return false;
        }
    };

    debug!("Decoded stream fragment: {:?}", fragment);

    if let Some(content) = extract_delta(&fragment) {
        if tx.send(Ok(Bytes::copy_from_slice(content.as_bytes()))).is_err() {
            debug!("Caller disconnected, stopping relay");
            return false;
        }
    }

    true
}

fn decode_fragment(line: &[u8]) -> Result<StreamChunk> {
    let text = std::str::from_utf8(line)
        .map_err(|e| Error::decode(format!("fragment is not valid UTF-8: {}", e)))?;

    serde_json::from_str(text)
        .map_err(|e| Error::decode(format!("fragment is not valid JSON: {}", e)))
}

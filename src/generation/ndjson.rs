//! Line splitting for Ollama's newline-delimited JSON chat stream.

use futures_util::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use tracing::debug;

use super::error::GenerationError;
use super::model::TokenStream;

#[derive(Debug, Deserialize)]
struct ChatLine {
    #[serde(default)]
    message: Option<ChatLineMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatLineMessage {
    #[serde(default)]
    content: String,
}

/// Extracts `message.content` from one stream line.
///
/// Returns `None` for blank lines, undecodable lines and lines without content.
pub fn parse_chat_line(line: &[u8]) -> Option<String> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_slice::<ChatLine>(line) {
        Ok(parsed) => parsed
            .message
            .map(|m| m.content)
            .filter(|content| !content.is_empty()),
        Err(e) => {
            debug!(error = %e, "Skipping undecodable stream line");
            None
        }
    }
}

struct LineState<S> {
    chunks: S,
    buffer: Vec<u8>,
    exhausted: bool,
}

/// Turns a byte-chunk stream into a token stream, one token per content-bearing line.
///
/// Lines may be split across chunks. A chunk error ends the stream after being yielded.
pub fn token_stream<S, B>(chunks: S) -> TokenStream
where
    S: Stream<Item = Result<B, GenerationError>> + Send + Unpin + 'static,
    B: AsRef<[u8]> + Send + 'static,
{
    let state = LineState {
        chunks,
        buffer: Vec::new(),
        exhausted: false,
    };

    stream::unfold(state, |mut state| async move {
        loop {
            if let Some(pos) = state.buffer.iter().position(|b| *b == b'\n') {
                let line: Vec<u8> = state.buffer.drain(..=pos).collect();
                if let Some(token) = parse_chat_line(&line) {
                    return Some((Ok(token), state));
                }
                continue;
            }

            if state.exhausted {
                let rest = std::mem::take(&mut state.buffer);
                return parse_chat_line(&rest).map(|token| (Ok(token), state));
            }

            match state.chunks.next().await {
                Some(Ok(chunk)) => state.buffer.extend_from_slice(chunk.as_ref()),
                Some(Err(e)) => {
                    state.exhausted = true;
                    state.buffer.clear();
                    return Some((Err(e), state));
                }
                None => state.exhausted = true,
            }
        }
    })
    .boxed()
}

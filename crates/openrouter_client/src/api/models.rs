//! Wire types for the OpenAI-compatible chat-completions endpoint.

use chat_core::ChatTurn;
use serde::{Deserialize, Serialize};

/// Sentinel `data:` payload closing the upstream stream.
pub const DONE_SENTINEL: &str = "[DONE]";

/// JSON body of the streaming completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    pub temperature: f64,
    pub max_tokens: u32,
    pub stream: bool,
}

/// One parsed `data:` chunk of the streaming response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionStreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamDelta,
    #[allow(dead_code)]
    finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}

/// Decoded meaning of one SSE `data:` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// Next slice of assistant text.
    Delta(String),
    /// End-of-stream sentinel.
    Done,
}

/// Parse an SSE `data:` payload leniently.
///
/// `[DONE]` is the sentinel. Anything that is not valid JSON, or parses but
/// carries no non-empty `choices[0].delta.content`, yields `None`: such
/// frames are diagnostic noise and never terminate the stream.
pub fn parse_stream_data(data: &str) -> Option<StreamEvent> {
    if data.trim() == DONE_SENTINEL {
        return Some(StreamEvent::Done);
    }

    let chunk: ChatCompletionStreamChunk = serde_json::from_str(data).ok()?;
    chunk
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.delta.content)
        .filter(|content| !content.is_empty())
        .map(StreamEvent::Delta)
}

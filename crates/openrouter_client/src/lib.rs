//! Streaming client for the OpenRouter chat-completions API.
//!
//! One fixed upstream contract: `POST {api_base}/chat/completions` with
//! `stream: true`, answered as an SSE body whose `data:` payloads carry
//! incremental text at `choices[0].delta.content` and end with the
//! `[DONE]` sentinel.

pub mod api;
pub mod client_trait;
pub mod error;

pub use api::client::OpenRouterClient;
pub use api::stream::DeltaStream;
pub use client_trait::ChatClientTrait;
pub use error::{ClientError, Result};

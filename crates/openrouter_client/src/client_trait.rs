use async_trait::async_trait;
use chat_core::ChatTurn;

use crate::api::stream::DeltaStream;
use crate::error::Result;

/// Seam between the HTTP surface and the upstream client, mockable in tests.
#[async_trait]
pub trait ChatClientTrait: Send + Sync {
    /// Open a streaming completion for the given outbound messages.
    ///
    /// Any failure before the first delta (missing credential, handshake
    /// rejection) is reported here and nothing is emitted downstream.
    async fn chat_stream(&self, messages: Vec<ChatTurn>) -> Result<DeltaStream>;
}

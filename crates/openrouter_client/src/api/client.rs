use async_trait::async_trait;
use chat_core::{ChatConfig, ChatTurn};
use log::{debug, error};
use reqwest::Client;

use crate::api::models::ChatCompletionRequest;
use crate::api::stream::{delta_stream, DeltaStream};
use crate::client_trait::ChatClientTrait;
use crate::error::{ClientError, Result};

/// HTTP client for the OpenRouter chat-completions endpoint.
///
/// Each `chat_stream` call opens an independent upstream connection with its
/// own decode state; the client itself holds no per-request state.
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: ChatConfig,
}

impl OpenRouterClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn api_key(&self) -> Result<&str> {
        match self.config.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(ClientError::MissingApiKey),
        }
    }
}

#[async_trait]
impl ChatClientTrait for OpenRouterClient {
    async fn chat_stream(&self, messages: Vec<ChatTurn>) -> Result<DeltaStream> {
        let api_key = self.api_key()?;

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: true,
        };

        let url = format!("{}/chat/completions", self.config.api_base);
        debug!(
            "Sending completion request with {} messages",
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!("Completion request rejected: HTTP {status} - {message}");
            return Err(ClientError::Api { status, message });
        }

        Ok(delta_stream(response.bytes_stream()))
    }
}

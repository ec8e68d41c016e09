//! Chat relay endpoint.
//!
//! Accepts the caller's conversation history, windows it, forwards it to the
//! upstream completion endpoint, and streams the assistant's reply back as
//! plain text. The response body is pull-driven end to end: actix polls the
//! delta stream only as fast as the caller reads, and dropping the body on
//! disconnect drops the upstream connection with it.

use crate::{error::AppError, server::AppState};
use actix_web::{http::header, post, web, HttpResponse};
use bytes::Bytes;
use chat_core::ChatTurn;
use futures_util::StreamExt;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

#[post("/chat")]
pub async fn chat(
    app_state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let history = req.into_inner().messages;
    let messages = app_state.context_builder.build(&history);

    tracing::debug!(
        history_len = history.len(),
        outbound_len = messages.len(),
        "Opening completion relay"
    );

    let deltas = app_state
        .chat_client
        .chat_stream(messages)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Completion handshake failed");
            AppError::from(e)
        })?;

    let body = deltas.map(|delta| {
        delta.map(Bytes::from).map_err(|e| {
            tracing::error!(error = %e, "Relay stream failed mid-flight");
            AppError::from(e)
        })
    });

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(body))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(chat);
}

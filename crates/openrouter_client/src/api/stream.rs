//! SSE response body decoding into the caller-facing delta stream.

use std::fmt::Display;
use std::pin::Pin;

use async_stream::try_stream;
use eventsource_stream::Eventsource;
use futures::Stream;
use futures_util::StreamExt;

use crate::api::models::{parse_stream_data, StreamEvent};
use crate::error::{ClientError, Result};

/// Lazy, finite, non-restartable stream of assistant text fragments.
pub type DeltaStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Decode an upstream event-stream body into a [`DeltaStream`].
///
/// Frame reassembly (lines split across reads, multi-byte characters cut at
/// a read boundary) is owned by `eventsource-stream`; this loop owns the
/// relay lifecycle: it ends at the `[DONE]` sentinel without reading further
/// frames, skips frames carrying no content, and surfaces a transport fault
/// as a terminal stream error. Dropping the returned stream drops the
/// upstream body, and with it the connection.
pub fn delta_stream<S, B, E>(bytes: S) -> DeltaStream
where
    S: Stream<Item = std::result::Result<B, E>> + Send + 'static,
    B: AsRef<[u8]> + Send + 'static,
    E: Display + Send + 'static,
{
    Box::pin(try_stream! {
        let mut events = Box::pin(bytes.eventsource());
        while let Some(event) = events.next().await {
            let event = event.map_err(|e| ClientError::Stream(e.to_string()))?;
            match parse_stream_data(&event.data) {
                Some(StreamEvent::Done) => break,
                Some(StreamEvent::Delta(text)) => yield text,
                None => log::trace!("Skipping upstream frame without content"),
            }
        }
    })
}

// Chunked HTML streaming utilities
use crate::application::streaming_service::PageEvent;
use crate::infrastructure::html::render_event;
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::Bytes;
use futures::stream::Stream;
use futures::StreamExt;
use std::convert::Infallible;

/// Create a chunked HTML response, one chunk per event
pub fn chunked_html_stream<S>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = PageEvent> + Send + 'static,
{
    let byte_stream = stream.map(|event| Ok::<_, Infallible>(serialize_chunk(&event)));

    // No Content-Length: the browser paints each chunk as it arrives
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
        .header(header::CACHE_CONTROL, "no-store")
        .header("x-content-type-options", "nosniff")
        .body(Body::from_stream(byte_stream))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

fn serialize_chunk(event: &PageEvent) -> Bytes {
    Bytes::from(render_event(event))
}

/// Helper to create a streaming response from a receiver
pub fn stream_from_receiver(mut rx: tokio::sync::mpsc::Receiver<PageEvent>) -> impl IntoResponse {
    let stream = async_stream::stream! {
        while let Some(event) = rx.recv().await {
            yield event;
        }
    };

    match chunked_html_stream(stream) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

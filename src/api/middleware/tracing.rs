//! HTTP request/response tracing middleware.
//!
//! The per-request span carries the correlation id injected by
//! `SetRequestIdLayer`, so every handler and service event logged inside a
//! request is attributable without threading the id by hand.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

/// Creates the tracing middleware for HTTP requests.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST uri=/url request_id=9f8d...}: url saved
/// INFO request{method=POST uri=/url request_id=9f8d...}: finished processing request latency=3 ms status=200
/// ```
pub fn layer() -> TraceLayer<
    tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>,
    MakeRequestSpan,
> {
    TraceLayer::new_for_http()
        .make_span_with(MakeRequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}

/// Builds the request span, including the `x-request-id` header value set by
/// the surrounding request-id layer.
#[derive(Clone, Copy)]
pub struct MakeRequestSpan;

impl<B> tower_http::trace::MakeSpan<B> for MakeRequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

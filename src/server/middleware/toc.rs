//! Middleware that generates tables of contents in HTML responses

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::{to_bytes, Body, HttpBody},
    extract::{Query, Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::{debug, error, trace, warn};
use serde::Deserialize;

use crate::config::TocSettings;
use crate::server::types::TocGate;
use crate::toc::{contains_placeholder, filter_content, ProcessOptions, RenderMode};

/// Query parameters understood by the middleware
#[derive(Debug, Default, Deserialize)]
struct ModeQuery {
    wcmmode: Option<String>,
}

/// Render mode requested through the `wcmmode` query parameter
pub fn render_mode(uri: &Uri) -> RenderMode {
    let query = Query::<ModeQuery>::try_from_uri(uri)
        .map(|Query(query)| query)
        .unwrap_or_default();
    RenderMode::from_param(query.wcmmode.as_deref())
}

/// Body length known before reading it, from `Content-Length` or an exact size hint
fn known_length(headers: &HeaderMap, body: &Body) -> Option<u64> {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .or_else(|| body.size_hint().exact())
}

/// Whether a response carries an uncompressed HTML body
fn is_plain_html(headers: &HeaderMap) -> bool {
    if headers.contains_key(header::CONTENT_ENCODING) {
        return false;
    }
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().to_ascii_lowercase().starts_with("text/html"))
        .unwrap_or(false)
}

/// Replace TOC placeholders in HTML pages served under the configured prefix
pub async fn toc_middleware(
    State(settings): State<Arc<TocSettings>>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if request.method() != Method::GET || !path.starts_with(&settings.server.path_prefix) {
        return next.run(request).await;
    }

    let mode = render_mode(request.uri());
    let response = next.run(request).await;

    // A partial body cannot be parsed as a page
    if response.status() == StatusCode::PARTIAL_CONTENT || !is_plain_html(response.headers()) {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let limit = settings.server.max_body_bytes;
    if let Some(length) = known_length(&parts.headers, &body) {
        if length > limit as u64 {
            warn!(
                "Skipping TOC generation for {}: body of {} bytes exceeds the {} byte limit",
                path, length, limit
            );
            return Response::from_parts(parts, body);
        }
    }

    let bytes = match to_bytes(body, limit).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Failed to buffer response body for {}: {}", path, e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to buffer response body").into_response();
        }
    };

    let original = match std::str::from_utf8(&bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            debug!("Skipping non UTF-8 HTML response for {}", path);
            return Response::from_parts(parts, Body::from(bytes));
        }
    };

    let contains_toc = match parts.extensions.get::<TocGate>() {
        Some(TocGate(gate)) => *gate,
        None => contains_placeholder(&original, &settings),
    };
    if !contains_toc {
        trace!("No TOC placeholder in {}", path);
        return Response::from_parts(parts, Body::from(bytes));
    }

    let started = Instant::now();
    let options = ProcessOptions::new(true, mode);
    let task_settings = settings.clone();
    let content = match tokio::task::spawn_blocking(move || {
        filter_content(&original, &options, &task_settings)
    })
    .await
    {
        Ok(content) => content,
        Err(e) => {
            error!("TOC generation task failed for {}: {}", path, e);
            return Response::from_parts(parts, Body::from(bytes));
        }
    };

    debug!("Generated TOC for {} ({:?}) in {:?}", path, mode, started.elapsed());
    parts.headers.insert(header::CONTENT_LENGTH, HeaderValue::from(content.len()));
    Response::from_parts(parts, Body::from(content))
}

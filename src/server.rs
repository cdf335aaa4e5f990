use std::net::SocketAddr;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use colored::Colorize;
use tokio::net::TcpListener;

use crate::utils::hash::calculate_etag;
use crate::{bind_err, print_dbg};

/// Read-only state shared by every request: the page is rendered once, before serving.
#[derive(Clone)]
pub struct DashboardState {
    page: Bytes,
    etag: HeaderValue,
    debug: bool,
}

impl DashboardState {
    pub fn new(page: String, debug: bool) -> Result<Self> {
        let etag = HeaderValue::from_str(&calculate_etag(&page))?;
        Ok(Self { page: Bytes::from(page), etag, debug })
    }

    pub fn etag(&self) -> &str {
        self.etag.to_str().unwrap_or_default()
    }
}

pub fn build_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .fallback(not_found_handler)
        .with_state(state)
}

/// Binds exactly `addr`. There is no fallback to another port.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|e| bind_err!("Failed to bind {addr}: {e}"))
}

/// Serves the dashboard until the process is terminated.
pub async fn serve(listener: TcpListener, state: DashboardState) -> Result<()> {
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn dashboard_handler(State(state): State<DashboardState>, headers: HeaderMap) -> Response {
    let not_modified = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| etag_matches(value, state.etag()));

    if not_modified {
        print_dbg!(state.debug, "GET / {}", StatusCode::NOT_MODIFIED);
        return (StatusCode::NOT_MODIFIED, [(header::ETAG, state.etag)]).into_response();
    }
    print_dbg!(state.debug, "GET / {}", StatusCode::OK);
    (
        [
            (header::ETAG, state.etag),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-cache")),
        ],
        Html(state.page),
    )
        .into_response()
}

async fn not_found_handler(
    State(state): State<DashboardState>,
    method: Method,
    uri: Uri,
) -> StatusCode {
    print_dbg!(state.debug, "{} {} {}", method, uri, StatusCode::NOT_FOUND);
    StatusCode::NOT_FOUND
}

fn etag_matches(if_none_match: &str, etag: &str) -> bool {
    if_none_match
        .split(',')
        .map(str::trim)
        .any(|tag| tag == "*" || tag.trim_start_matches("W/") == etag)
}

//! Browser fetch transport via `gloo-net`.
//!
//! Client-side (csr): real HTTP calls.
//! Native builds: every send fails with a network error, since the browser
//! fetch API is the only thing this type wraps.

#![allow(clippy::unused_async)]

use async_trait::async_trait;
use signon::ApiError;
use signon::net::{ApiRequest, RawResponse, Transport};

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "browser fetch not available";

#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use signon::net::Method;
            use signon::net::api::CONTENT_TYPE;

            let builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            }
            .header("Content-Type", CONTENT_TYPE);

            let response = match request.body {
                Some(body) => builder.body(body).map_err(|e| ApiError::Encode(e.to_string()))?.send().await,
                None => builder.send().await,
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let status = response.status();
            let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Network(UNAVAILABLE.to_owned()))
        }
    }
}

#[cfg(all(test, not(feature = "csr")))]
#[path = "transport_test.rs"]
mod tests;

//! Injectable HTTP transport.
//!
//! The teacher crate treats the HTTP client as a swappable trait object
//! (`opentelemetry_http::HttpClient`); this crate defines its own narrow equivalent so the
//! transmitter never depends on a concrete client, and a test suite can substitute an in-process
//! fake instead of hitting the network (§9's "tests substitute an in-process implementation").

use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use std::error::Error as StdError;
use std::fmt::Debug;

/// Boxed transport error; opaque to callers, logged through the diagnostics sink rather than
/// returned from the client's public API.
pub type HttpError = Box<dyn StdError + Send + Sync + 'static>;

/// A transport capable of executing a single HTTP request and returning its response body as
/// bytes. Implementations must honor request cancellation promptly: the coordinator races this
/// future against its cancellation token (§5).
#[async_trait]
pub trait HttpClient: Debug + Send + Sync {
    /// Executes one request and returns its response, or an error if the request could not be
    /// completed at all (connect, TLS, cancellation, ...).
    async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError>;
}

#[cfg(feature = "reqwest-client")]
mod reqwest_client {
    use super::{async_trait, Bytes, HttpClient, HttpError, Request, Response};

    #[async_trait]
    impl HttpClient for reqwest::Client {
        async fn send(&self, request: Request<Vec<u8>>) -> Result<Response<Bytes>, HttpError> {
            let (parts, body) = request.into_parts();
            let mut builder = self.request(
                reqwest::Method::from_bytes(parts.method.as_str().as_bytes())?,
                parts.uri.to_string(),
            );
            for (name, value) in parts.headers.iter() {
                builder = builder.header(name, value.as_bytes());
            }
            let response = builder.body(body).send().await?;

            let mut result = Response::builder().status(response.status());
            for (name, value) in response.headers().iter() {
                result = result.header(name, value.as_bytes());
            }
            let body = response.bytes().await?;
            Ok(result.body(body)?)
        }
    }
}

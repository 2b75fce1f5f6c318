//! HTTP transport seam for the user fetcher.
//!
//! The fetcher never builds its own client. It hands an `http::Request` to a
//! [`Transport`] and gets back the response head plus a body that has not been
//! read yet, so connection failures and body read failures surface at
//! different points. Tests implement the trait directly to program responses.

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::{BodyExt, combinators::UnsyncBoxBody};
use std::{future::Future, time::Duration};
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Response body handed back by a [`Transport`], read lazily by the caller.
pub type ResponseBody = UnsyncBoxBody<Bytes, BoxError>;

/// Send a request and get a response or error.
pub trait Transport: Send + Sync {
    /// # Errors
    /// Returns an error if no response could be obtained (connection refused,
    /// DNS failure, timeout before headers, ...).
    fn send(
        &self,
        request: Request<()>,
    ) -> impl Future<Output = Result<Response<ResponseBody>, BoxError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport that identifies itself as `user_agent`.
    ///
    /// `timeout` bounds the whole request including the body read; `None`
    /// keeps the client default (no timeout).
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(user_agent)
            .connect_timeout(CONNECT_TIMEOUT);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: Request<()>) -> Result<Response<ResponseBody>, BoxError> {
        let (parts, ()) = request.into_parts();

        debug!("request: {} {}", parts.method, parts.uri);

        let response = self
            .client
            .request(parts.method, parts.uri.to_string())
            .headers(parts.headers)
            .send()
            .await?;

        let response: Response<reqwest::Body> = response.into();

        Ok(response.map(|body| {
            body.map_err(|e| Box::new(e) as BoxError)
                .boxed_unsync()
        }))
    }
}

//! reqwest backed [`HttpSend`] for the StreamProxy SDK.
//!
//! Connection pooling, timeouts and TLS are configured on the
//! [`reqwest::Client`] passed to [`ReqwestHttpSend::new`].

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};
use streamproxy_core::{Error, HttpSend, Result};

/// ReqwestHttpSend sends signed requests with a [`reqwest::Client`].
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::invalid_argument("request can't be converted for reqwest").with_source(e)
        })?;
        log::debug!("sending {} {}", req.method(), req.url());

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport("unable to execute HTTP request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport("unable to read HTTP response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

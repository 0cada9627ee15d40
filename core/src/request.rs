use std::collections::HashMap;
use std::str::FromStr;

use bytes::Bytes;
use http::header::{HeaderName, AUTHORIZATION};
use http::uri::{PathAndQuery, Scheme};
use http::{HeaderValue, Method, Uri};

use crate::{Error, Result};

/// The logical request before signing.
///
/// Header keys are kept exactly as written and a later insert of the same
/// key replaces the earlier value. Iteration order over headers and
/// parameters is unspecified.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// Service endpoint, only scheme and authority are used.
    pub endpoint: Uri,
    /// Resource path, e.g. `/get_subscription_position`.
    pub resource_path: String,
    /// HTTP headers.
    pub headers: HashMap<String, String>,
    /// Query parameters.
    pub parameters: HashMap<String, String>,
    /// Request body.
    pub content: String,
    /// Digest of `content`, if one has been computed.
    pub content_digest: Option<String>,
}

impl SigningRequest {
    /// Create an empty request for `method` against `endpoint`.
    pub fn new(method: Method, endpoint: Uri, resource_path: impl Into<String>) -> Self {
        Self {
            method,
            endpoint,
            resource_path: resource_path.into(),
            headers: HashMap::new(),
            parameters: HashMap::new(),
            content: String::new(),
            content_digest: None,
        }
    }

    /// Insert a header, replacing any earlier value under the same key.
    #[inline]
    pub fn header_insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Get header value by its exact key.
    #[inline]
    pub fn header_get(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Insert a query parameter.
    #[inline]
    pub fn parameter_insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(key.into(), value.into());
    }
}

/// What the signer did to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningOutcome {
    /// `Authorization` was attached for this access key.
    Signed {
        /// The sanitized access key id written into `Authorization`.
        access_key_id: String,
    },
    /// No credential was available and the request goes out unsigned.
    Unsigned,
}

impl SigningOutcome {
    /// Check if the request carries a signature.
    pub fn is_signed(&self) -> bool {
        matches!(self, SigningOutcome::Signed { .. })
    }
}

/// A request after signing.
///
/// There is no way to change the content or headers of a `SignedRequest`:
/// the signature covers them, so any change needs a new `SigningRequest`
/// and a new signature.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    inner: SigningRequest,
    outcome: SigningOutcome,
}

impl SignedRequest {
    pub(crate) fn new(inner: SigningRequest, outcome: SigningOutcome) -> Self {
        Self { inner, outcome }
    }

    /// How the request was signed.
    pub fn outcome(&self) -> &SigningOutcome {
        &self.outcome
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.inner.method
    }

    /// Service endpoint.
    pub fn endpoint(&self) -> &Uri {
        &self.inner.endpoint
    }

    /// Resource path.
    pub fn resource_path(&self) -> &str {
        &self.inner.resource_path
    }

    /// All headers.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.inner.headers
    }

    /// Get header value by its exact key.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.inner.header_get(key)
    }

    /// Query parameters.
    pub fn parameters(&self) -> &HashMap<String, String> {
        &self.inner.parameters
    }

    /// Request body.
    pub fn content(&self) -> &str {
        &self.inner.content
    }

    /// Digest of the body as signed.
    pub fn content_digest(&self) -> Option<&str> {
        self.inner.content_digest.as_deref()
    }

    /// Convert into an `http::Request` ready for the transport.
    pub fn into_http(self) -> Result<http::Request<Bytes>> {
        let req = self.inner;

        let uri = {
            let mut parts = req.endpoint.into_parts();
            let authority = parts.authority.take().ok_or_else(|| {
                Error::invalid_argument("endpoint without authority is invalid for sending")
            })?;

            let mut paq = if req.resource_path.starts_with('/') {
                req.resource_path
            } else {
                format!("/{}", req.resource_path)
            };
            if !req.parameters.is_empty() {
                let query = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(req.parameters.iter())
                    .finish();
                paq.push('?');
                paq.push_str(&query);
            }

            Uri::builder()
                .scheme(parts.scheme.unwrap_or(Scheme::HTTP))
                .authority(authority)
                .path_and_query(PathAndQuery::from_str(&paq)?)
                .build()?
        };

        let mut builder = http::Request::builder().method(req.method).uri(uri);
        for (k, v) in req.headers {
            let name = HeaderName::from_str(&k)?;
            let mut value = HeaderValue::from_str(&v)?;
            if name == AUTHORIZATION {
                value.set_sensitive(true);
            }
            builder = builder.header(name, value);
        }

        Ok(builder.body(Bytes::from(req.content))?)
    }
}

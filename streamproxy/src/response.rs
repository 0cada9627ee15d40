use std::collections::HashMap;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use streamproxy_core::Result;

/// Response returned by the service.
///
/// Non-2xx responses are returned as-is; check [`HttpResponse::is_success`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status_code: u16,
    status_text: String,
    headers: HashMap<String, String>,
    body: String,
}

impl HttpResponse {
    /// Status code, e.g. `200`.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Reason phrase of the status code, e.g. `OK`.
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Response headers, keyed by lowercase name.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Check if the status code is 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Deserialize the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

impl From<http::Response<Bytes>> for HttpResponse {
    fn from(resp: http::Response<Bytes>) -> Self {
        let (parts, body) = resp.into_parts();

        let headers = parts
            .headers
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();

        Self {
            status_code: parts.status.as_u16(),
            status_text: parts
                .status
                .canonical_reason()
                .unwrap_or_default()
                .to_string(),
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }
}

use std::sync::Arc;

use http::{Method, Uri};
use log::{info, warn};
use serde::Serialize;
use streamproxy_core::time::{format_http_date, now, DateTime};
use streamproxy_core::utils::require_non_empty;
use streamproxy_core::{Context, ProvideCredential, Result, Signer, SigningRequest};
use streamproxy_log_sign::constants::{CONTENT_TYPE, DATE, HOST, USER_AGENT};
use streamproxy_log_sign::{content_digest, Credential, RequestSigner};

use crate::{ClientConfig, HttpResponse};

#[derive(Serialize)]
struct PositionBody<'a> {
    position_type: &'a str,
}

#[derive(Serialize)]
struct LogsBody<'a> {
    position: &'a str,
    limit: u64,
}

/// Client for the StreamProxy log-streaming service.
///
/// Each call builds a fresh request, signs it once and sends it once.
#[derive(Debug, Clone)]
pub struct Client {
    ctx: Context,
    config: Arc<ClientConfig>,
    endpoint: Uri,
    signer: Signer<Credential>,
    time: Option<DateTime>,
}

impl Client {
    /// Create a client.
    ///
    /// Fails with a config error if the endpoint can't be parsed.
    pub fn new(
        ctx: Context,
        config: ClientConfig,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Result<Self> {
        let endpoint = config.endpoint_uri()?;
        let signer = Signer::new(ctx.clone(), provider, RequestSigner::new());

        Ok(Self {
            ctx,
            config: Arc::new(config),
            endpoint,
            signer,
            time: None,
        })
    }

    /// Create a client with a fixed key pair, the reqwest transport and the
    /// OS environment.
    #[cfg(feature = "default-context")]
    pub fn from_keys(access_key_id: &str, secret_key: &str) -> Result<Self> {
        let ctx = crate::default_context();
        let config = ClientConfig::default().from_env(&ctx);
        let provider =
            streamproxy_log_sign::StaticCredentialProvider::new(access_key_id, secret_key);
        Self::new(ctx, config, provider)
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// The config this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The signer, which also holds the current credential.
    ///
    /// Use [`Signer::refresh`] or [`Signer::set_credential`] to rotate keys
    /// while the client is in use.
    pub fn signer(&self) -> &Signer<Credential> {
        &self.signer
    }

    /// Fetch the current read position of a subscription.
    ///
    /// `position_type` names which position to return, e.g. `EARLIEST`.
    pub async fn fetch_position(
        &self,
        position_type: &str,
        subscription_name: &str,
    ) -> Result<HttpResponse> {
        let req = self.position_request(position_type, subscription_name)?;
        self.execute(req).await
    }

    /// Fetch up to `limit` log records of a subscription, starting at
    /// `position`.
    pub async fn fetch_logs(
        &self,
        position: &str,
        limit: u64,
        subscription_name: &str,
    ) -> Result<HttpResponse> {
        let req = self.logs_request(position, limit, subscription_name)?;
        self.execute(req).await
    }

    /// Build the unsigned request of [`Client::fetch_position`].
    pub fn position_request(
        &self,
        position_type: &str,
        subscription_name: &str,
    ) -> Result<SigningRequest> {
        let position_type = require_non_empty(position_type, "position type")?;
        let subscription_name = require_non_empty(subscription_name, "subscription name")?;
        let resource_path =
            require_non_empty(&self.config.subscription_position_path, "resource path")?;

        self.build_request(
            resource_path,
            subscription_name,
            &PositionBody { position_type },
        )
    }

    /// Build the unsigned request of [`Client::fetch_logs`].
    pub fn logs_request(
        &self,
        position: &str,
        limit: u64,
        subscription_name: &str,
    ) -> Result<SigningRequest> {
        let position = require_non_empty(position, "logs position")?;
        let subscription_name = require_non_empty(subscription_name, "subscription name")?;
        let resource_path = require_non_empty(&self.config.logs_path, "resource path")?;

        self.build_request(
            resource_path,
            subscription_name,
            &LogsBody { position, limit },
        )
    }

    fn build_request(
        &self,
        resource_path: &str,
        subscription_name: &str,
        body: &impl Serialize,
    ) -> Result<SigningRequest> {
        let mut req = SigningRequest::new(Method::POST, self.endpoint.clone(), resource_path);

        req.content = serde_json::to_string(body)?;
        req.content_digest = Some(content_digest(req.content.as_bytes()));

        req.header_insert(CONTENT_TYPE, self.config.content_type.as_str());
        req.header_insert(HOST, self.config.host_for(subscription_name));
        req.header_insert(USER_AGENT, self.config.user_agent.as_str());
        // Date is part of the canonical string, so it has to be in place
        // before the request reaches the signer.
        req.header_insert(DATE, format_http_date(self.time.unwrap_or_else(now)));

        Ok(req)
    }

    async fn execute(&self, req: SigningRequest) -> Result<HttpResponse> {
        let signed = self.signer.sign(req).await?;
        info!(
            "send request: {} {}{} ({:?})",
            signed.method(),
            signed.endpoint(),
            signed.resource_path().trim_start_matches('/'),
            signed.outcome()
        );

        let resp = HttpResponse::from(self.ctx.http_send(signed.into_http()?).await?);
        if resp.is_success() {
            info!("receive response: {}", resp.status_code());
        } else {
            warn!(
                "unable to execute HTTP request, code: {}, message: {}",
                resp.status_code(),
                resp.status_text()
            );
        }

        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use streamproxy_core::ErrorKind;
    use streamproxy_log_sign::StaticCredentialProvider;

    fn client() -> Client {
        Client::new(
            Context::new(),
            ClientConfig::default().with_user_agent("streamproxy-sdk-rust/test"),
            StaticCredentialProvider::new("access_key", "secret_key"),
        )
        .unwrap()
        .with_time(
            chrono::DateTime::parse_from_rfc2822("Tue, 03 Jun 2025 04:00:00 GMT")
                .unwrap()
                .with_timezone(&chrono::Utc),
        )
    }

    #[test]
    fn test_position_request() {
        let req = client().position_request("EARLIEST", "topic.logs").unwrap();

        assert_eq!(req.method, Method::POST);
        assert_eq!(req.resource_path, "/get_subscription_position");
        assert_eq!(req.content, r#"{"position_type":"EARLIEST"}"#);
        assert_eq!(
            req.content_digest.as_deref(),
            Some("d37d60759f9b0a6460065212194b91f5")
        );
        assert_eq!(req.header_get("Content-Type"), Some("application/json"));
        assert_eq!(req.header_get("Host"), Some("topic.logs.c.163.com"));
        assert_eq!(req.header_get("User-Agent"), Some("streamproxy-sdk-rust/test"));
        assert_eq!(req.header_get("Date"), Some("Tue, 03 Jun 2025 04:00:00 GMT"));
        assert!(req.header_get("Authorization").is_none());
    }

    #[test]
    fn test_logs_request() {
        let req = client().logs_request("abc", 1, "topic.logs").unwrap();

        assert_eq!(req.resource_path, "/get_logs");
        assert_eq!(req.content, r#"{"position":"abc","limit":1}"#);
        assert_eq!(
            req.content_digest.as_deref(),
            Some("cda6ac535264be07525c4f1c7d53634f")
        );
    }

    #[test]
    fn test_missing_arguments_are_named() {
        let c = client();
        let cases = [
            (
                c.position_request("", "topic").unwrap_err(),
                "The position type parameter must be specified.",
            ),
            (
                c.position_request("EARLIEST", " ").unwrap_err(),
                "The subscription name parameter must be specified.",
            ),
            (
                c.logs_request("", 1, "topic").unwrap_err(),
                "The logs position parameter must be specified.",
            ),
            (
                c.logs_request("abc", 1, "").unwrap_err(),
                "The subscription name parameter must be specified.",
            ),
        ];

        for (err, message) in cases {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
            assert_eq!(err.message(), message);
        }
    }

    #[test]
    fn test_empty_resource_path_is_rejected() {
        let mut config = ClientConfig::default();
        config.logs_path = String::new();
        let c = Client::new(
            Context::new(),
            config,
            StaticCredentialProvider::new("access_key", "secret_key"),
        )
        .unwrap();

        let err = c.logs_request("abc", 1, "topic").unwrap_err();
        assert_eq!(err.message(), "The resource path parameter must be specified.");
    }

    #[test]
    fn test_invalid_endpoint_fails_early() {
        let err = Client::new(
            Context::new(),
            ClientConfig::new().with_endpoint("http://bad host"),
            StaticCredentialProvider::new("access_key", "secret_key"),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[tokio::test]
    async fn test_fetch_without_transport() {
        let err = client()
            .fetch_position("EARLIEST", "topic")
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}

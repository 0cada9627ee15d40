use std::str::FromStr;

use http::Uri;
use serde::Deserialize;
use streamproxy_core::{Context, Error, Result};

/// Env value for [`ClientConfig::endpoint`].
pub const STREAMPROXY_ENDPOINT: &str = "STREAMPROXY_ENDPOINT";
/// Env value for [`ClientConfig::subscription_position_path`].
pub const STREAMPROXY_SUBSCRIPTION_POSITION_PATH: &str = "STREAMPROXY_SUBSCRIPTION_POSITION_PATH";
/// Env value for [`ClientConfig::logs_path`].
pub const STREAMPROXY_LOGS_PATH: &str = "STREAMPROXY_LOGS_PATH";
/// Env value for [`ClientConfig::host_suffix`].
pub const STREAMPROXY_HOST_SUFFIX: &str = "STREAMPROXY_HOST_SUFFIX";

const DEFAULT_ENDPOINT: &str = "http://10.180.148.6:8079";
const DEFAULT_SUBSCRIPTION_POSITION_PATH: &str = "/get_subscription_position";
const DEFAULT_LOGS_PATH: &str = "/get_logs";
const DEFAULT_HOST_SUFFIX: &str = "c.163.com";
const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// ClientConfig carries everything the client needs besides credentials.
///
/// The value is fixed once the client is built; every request made by that
/// client sees the same endpoint, paths and user agent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service endpoint. `http://` is assumed when no scheme is given.
    pub endpoint: String,
    /// Resource path of the fetch position operation.
    pub subscription_position_path: String,
    /// Resource path of the fetch logs operation.
    pub logs_path: String,
    /// Domain appended to the subscription name to form the `Host` header.
    pub host_suffix: String,
    /// `Content-Type` of request bodies.
    pub content_type: String,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            subscription_position_path: DEFAULT_SUBSCRIPTION_POSITION_PATH.to_string(),
            logs_path: DEFAULT_LOGS_PATH.to_string(),
            host_suffix: DEFAULT_HOST_SUFFIX.to_string(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl ClientConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set host suffix
    pub fn with_host_suffix(mut self, host_suffix: impl Into<String>) -> Self {
        self.host_suffix = host_suffix.into();
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override fields with values found in env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(STREAMPROXY_ENDPOINT) {
            self.endpoint = v;
        }
        if let Some(v) = ctx.env_var(STREAMPROXY_SUBSCRIPTION_POSITION_PATH) {
            self.subscription_position_path = v;
        }
        if let Some(v) = ctx.env_var(STREAMPROXY_LOGS_PATH) {
            self.logs_path = v;
        }
        if let Some(v) = ctx.env_var(STREAMPROXY_HOST_SUFFIX) {
            self.host_suffix = v;
        }

        self
    }

    /// Load config from a TOML document. Missing keys keep their defaults.
    ///
    /// ```
    /// use streamproxy::ClientConfig;
    ///
    /// let config = ClientConfig::from_toml(r#"endpoint = "http://127.0.0.1:8079""#).unwrap();
    /// assert_eq!(config.logs_path, "/get_logs");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            Error::config_invalid("unable to parse client config").with_source(e)
        })
    }

    /// Parse the endpoint, keeping only scheme and authority.
    pub fn endpoint_uri(&self) -> Result<Uri> {
        let endpoint = self.endpoint.trim();
        let endpoint = if endpoint.contains("://") {
            endpoint.to_string()
        } else {
            format!("http://{endpoint}")
        };

        let uri = Uri::from_str(&endpoint).map_err(|e| {
            Error::config_invalid(format!("can't turn {endpoint} into a URI")).with_source(e)
        })?;
        let parts = uri.into_parts();
        let (Some(scheme), Some(authority)) = (parts.scheme, parts.authority) else {
            return Err(Error::config_invalid(format!(
                "endpoint {endpoint} has no host"
            )));
        };

        Uri::builder()
            .scheme(scheme)
            .authority(authority)
            .path_and_query("/")
            .build()
            .map_err(|e| Error::config_invalid("invalid endpoint").with_source(e))
    }

    /// `Host` header value for a subscription.
    pub fn host_for(&self, subscription_name: &str) -> String {
        format!(
            "{subscription_name}.{}",
            self.host_suffix.trim_start_matches('.')
        )
    }
}

/// `streamproxy-sdk-rust/<version> <os>/<arch>`
pub fn default_user_agent() -> String {
    format!(
        "streamproxy-sdk-rust/{} {}/{}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use streamproxy_core::{ErrorKind, OsEnv, StaticEnv};

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();

        assert_eq!(config.subscription_position_path, "/get_subscription_position");
        assert_eq!(config.content_type, "application/json");
        assert!(config.user_agent.starts_with("streamproxy-sdk-rust/"));
        assert_eq!(
            config.endpoint_uri().unwrap().to_string(),
            "http://10.180.148.6:8079/"
        );
    }

    #[test]
    fn test_endpoint_without_scheme() {
        let config = ClientConfig::new().with_endpoint("proxy.example.com:8079");
        assert_eq!(
            config.endpoint_uri().unwrap().to_string(),
            "http://proxy.example.com:8079/"
        );
    }

    #[test]
    fn test_endpoint_path_is_dropped() {
        let config = ClientConfig::new().with_endpoint("https://proxy.example.com/ignored?x=1");
        assert_eq!(
            config.endpoint_uri().unwrap().to_string(),
            "https://proxy.example.com/"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = ClientConfig::new()
            .with_endpoint("http://bad host")
            .endpoint_uri()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_host_for() {
        assert_eq!(
            ClientConfig::default().host_for("topic.logs"),
            "topic.logs.c.163.com"
        );
        assert_eq!(
            ClientConfig::new()
                .with_host_suffix(".example.com")
                .host_for("topic"),
            "topic.example.com"
        );
    }

    #[test]
    fn test_from_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (STREAMPROXY_ENDPOINT.to_string(), "http://127.0.0.1:9000".to_string()),
                (STREAMPROXY_LOGS_PATH.to_string(), "/v2/get_logs".to_string()),
            ]),
        });

        let config = ClientConfig::default().from_env(&ctx);
        assert_eq!(config.endpoint, "http://127.0.0.1:9000");
        assert_eq!(config.logs_path, "/v2/get_logs");
        assert_eq!(config.subscription_position_path, "/get_subscription_position");
    }

    #[test]
    fn test_from_os_env() {
        temp_env::with_var(STREAMPROXY_HOST_SUFFIX, Some("logs.example.com"), || {
            let ctx = Context::new().with_env(OsEnv);
            let config = ClientConfig::default().from_env(&ctx);
            assert_eq!(config.host_for("topic"), "topic.logs.example.com");
        });
    }

    #[test]
    fn test_from_toml() {
        let config = ClientConfig::from_toml(
            r#"
            endpoint = "http://127.0.0.1:8079"
            logs_path = "/custom_logs"
            "#,
        )
        .unwrap();

        assert_eq!(config.endpoint, "http://127.0.0.1:8079");
        assert_eq!(config.logs_path, "/custom_logs");
        assert_eq!(config.host_suffix, "c.163.com");
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let err = ClientConfig::from_toml("logs_path = 1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}

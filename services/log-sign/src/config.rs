use std::fmt::{Debug, Formatter};

use crate::constants::*;
use streamproxy_core::{utils::Redact, Context};

/// Config carries the credential settings for the StreamProxy service.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`STREAMPROXY_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`STREAMPROXY_SECRET_KEY`]
    pub secret_key: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = Some(secret_key.into());
        self
    }

    /// Fill unset fields from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(STREAMPROXY_ACCESS_KEY_ID) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(STREAMPROXY_SECRET_KEY) {
            self.secret_key.get_or_insert(v);
        }

        self
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &self.access_key_id.as_ref().map(Redact::from))
            .field("secret_key", &self.secret_key.as_ref().map(Redact::from))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use streamproxy_core::StaticEnv;

    #[test]
    fn test_explicit_fields_win_over_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (STREAMPROXY_ACCESS_KEY_ID.to_string(), "env_ak".to_string()),
                (STREAMPROXY_SECRET_KEY.to_string(), "env_sk".to_string()),
            ]),
        });

        let config = Config::new().with_access_key_id("explicit_ak").from_env(&ctx);
        assert_eq!(config.access_key_id.as_deref(), Some("explicit_ak"));
        assert_eq!(config.secret_key.as_deref(), Some("env_sk"));
    }
}

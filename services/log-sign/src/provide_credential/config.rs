use async_trait::async_trait;
use std::sync::Arc;
use streamproxy_core::{Context, ProvideCredential, Result};

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider will load credential from config, falling back
/// to env for unset fields.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);

        if let (Some(ak), Some(sk)) = (config.access_key_id, config.secret_key) {
            return Ok(Some(Credential::new(ak, sk)));
        }

        Ok(None)
    }
}

use crate::{constants::*, Credential};
use async_trait::async_trait;
use streamproxy_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads credentials from environment variables.
///
/// This provider looks for the following environment variables:
/// - `STREAMPROXY_ACCESS_KEY_ID`: the access key id
/// - `STREAMPROXY_SECRET_KEY`: the secret key
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        match (
            ctx.env_var(STREAMPROXY_ACCESS_KEY_ID),
            ctx.env_var(STREAMPROXY_SECRET_KEY),
        ) {
            (Some(ak), Some(sk)) => Ok(Some(Credential::new(ak, sk))),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use streamproxy_core::StaticEnv;

    fn ctx(envs: &[(&str, &str)]) -> Context {
        Context::new().with_env(StaticEnv {
            envs: envs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        })
    }

    #[tokio::test]
    async fn test_env_credential_provider() -> Result<()> {
        let ctx = ctx(&[
            (STREAMPROXY_ACCESS_KEY_ID, "test_access_key"),
            (STREAMPROXY_SECRET_KEY, "test_secret_key"),
        ]);

        let cred = EnvCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.access_key_id, "test_access_key");
        assert_eq!(cred.secret_key, "test_secret_key");
        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_needs_both_keys() -> Result<()> {
        let ctx = ctx(&[(STREAMPROXY_ACCESS_KEY_ID, "test_access_key")]);

        let cred = EnvCredentialProvider::new().provide_credential(&ctx).await?;
        assert!(cred.is_none());
        Ok(())
    }
}

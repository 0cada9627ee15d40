use crate::Credential;
use async_trait::async_trait;
use streamproxy_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed key pair.
///
/// Use it when the access key id and secret key are known up front, as with
/// `Client::from_keys`.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with access key id and secret key.
    pub fn new(access_key_id: &str, secret_key: &str) -> Self {
        Self {
            credential: Credential::new(access_key_id, secret_key),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_credential_provider() -> Result<()> {
        let provider = StaticCredentialProvider::new("test_access_key", "test_secret_key");
        let cred = provider
            .provide_credential(&Context::new())
            .await?
            .expect("static provider always has a credential");

        assert_eq!(cred.access_key_id, "test_access_key");
        assert_eq!(cred.secret_key, "test_secret_key");
        Ok(())
    }
}

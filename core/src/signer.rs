use crate::{
    Context, Error, ProvideCredential, Result, SignRequest, SignedRequest, SigningCredential,
    SigningRequest,
};
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It owns the credential store: the last credential loaded by the provider,
/// kept behind a mutex so a background refresh can replace it while other
/// requests are being signed.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Sign the request, consuming it.
    ///
    /// The credential is read once as a snapshot. If the snapshot is missing
    /// or invalid, the provider is asked for a fresh one first.
    pub async fn sign(&self, mut req: SigningRequest) -> Result<SignedRequest> {
        let credential = match self.snapshot()? {
            Some(cred) if cred.is_valid() => Some(cred),
            _ => self.refresh().await?,
        };

        let outcome = self.builder.sign_request(&mut req, credential.as_ref())?;
        Ok(SignedRequest::new(req, outcome))
    }

    /// Reload the credential from the provider and store it.
    pub async fn refresh(&self) -> Result<Option<K>> {
        let loaded = self.loader.provide_credential(&self.ctx).await?;
        self.set_credential(loaded.clone())?;
        Ok(loaded)
    }

    /// Replace the stored credential.
    pub fn set_credential(&self, credential: Option<K>) -> Result<()> {
        let mut guard = self
            .credential
            .lock()
            .map_err(|_| Error::unexpected("credential lock poisoned"))?;
        *guard = credential;
        Ok(())
    }

    /// Copy the stored credential out under the lock.
    ///
    /// The lock is held only for the clone, so both halves of the key pair
    /// always come from the same write.
    pub fn snapshot(&self) -> Result<Option<K>> {
        let guard = self
            .credential
            .lock()
            .map_err(|_| Error::unexpected("credential lock poisoned"))?;
        Ok(guard.clone())
    }
}

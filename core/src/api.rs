use crate::{Context, Result, SigningOutcome, SigningRequest};
use std::fmt::Debug;

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

/// ProvideCredential is the trait used by signer to load the credential.
///
/// A provider may be polled again at any time to refresh the credential held
/// by a [`crate::Signer`], including while requests are being signed.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load the credential, returning `None` if this source has nothing.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// SignRequest is the trait used by signer to sign the request.
///
/// Signing is a pure computation over headers and in-memory bytes, so this
/// trait is synchronous.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// When `credential` is `None` the implementation must leave `req`
    /// untouched and return [`SigningOutcome::Unsigned`].
    fn sign_request(
        &self,
        req: &mut SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<SigningOutcome>;
}

//! StreamProxy LOG scheme signer
use log::{debug, warn};
use streamproxy_core::{Error, Result, SignRequest, SigningOutcome, SigningRequest};

use crate::algorithm::SigningAlgorithm;
use crate::canonical::canonical_string;
use crate::constants::*;
use crate::credential::Credential;
use crate::digest::content_digest;

/// RequestSigner that implements the LOG authorization scheme.
///
/// The request must already carry everything the canonical string covers:
/// the content digest, `Content-Type` and `Date`. The signer only adds
/// `Authorization`:
///
/// ```text
/// Authorization: LOG <access_key_id>:<base64 signature>
/// ```
#[derive(Debug, Default)]
pub struct RequestSigner {
    algorithm: SigningAlgorithm,
}

impl RequestSigner {
    /// Create a signer using HmacSHA256.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another keyed-hash algorithm.
    pub fn with_algorithm(mut self, algorithm: SigningAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// The keyed-hash algorithm in use.
    pub fn algorithm(&self) -> SigningAlgorithm {
        self.algorithm
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        req: &mut SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<SigningOutcome> {
        let Some(cred) = credential else {
            warn!(
                "no credential available, sending {} {} unsigned",
                req.method, req.resource_path
            );
            return Ok(SigningOutcome::Unsigned);
        };

        let cred = cred.sanitize();
        check_access_key_id(&cred.access_key_id)?;
        if cred.secret_key.is_empty() {
            return Err(Error::credential_invalid("secret key is empty"));
        }
        check_content_digest(req)?;

        let string_to_sign = canonical_string(req);
        debug!("string to sign: {string_to_sign:?}");

        let signature = sign(&string_to_sign, &cred.secret_key, self.algorithm)?;
        req.header_insert(
            AUTHORIZATION,
            format!("{SCHEME} {}:{signature}", cred.access_key_id),
        );

        Ok(SigningOutcome::Signed {
            access_key_id: cred.access_key_id,
        })
    }
}

/// Sign a canonical string with `secret_key` and return the base64
/// signature.
pub fn sign(canonical_string: &str, secret_key: &str, algorithm: SigningAlgorithm) -> Result<String> {
    algorithm.sign(secret_key.as_bytes(), canonical_string.as_bytes())
}

/// The digest is signed in place of the body, so it has to describe the
/// body that is about to be sent.
fn check_content_digest(req: &SigningRequest) -> Result<()> {
    let Some(digest) = req.content_digest.as_deref() else {
        return Ok(());
    };
    let actual = content_digest(req.content.as_bytes());
    if !digest.eq_ignore_ascii_case(&actual) {
        return Err(Error::invalid_argument(format!(
            "content digest {digest} does not match content (digest {actual}), \
             the content changed after the digest was computed"
        )));
    }
    Ok(())
}

/// Verifiers split `Authorization` on the first space and the first colon,
/// so neither may appear inside the access key id.
fn check_access_key_id(access_key_id: &str) -> Result<()> {
    if access_key_id.is_empty() {
        return Err(Error::credential_invalid("access key id is empty"));
    }
    if access_key_id.contains(|c: char| c == ':' || c.is_whitespace()) {
        return Err(Error::credential_invalid(
            "access key id must not contain ':' or whitespace",
        ));
    }
    Ok(())
}

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use streamproxy_core::hash::{base64_encode, hmac_sha1, hmac_sha256};
use streamproxy_core::{Error, Result};

/// Keyed-hash algorithms a request can be signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SigningAlgorithm {
    /// HMAC over SHA-1.
    HmacSha1,
    /// HMAC over SHA-256, the algorithm of the LOG scheme.
    #[default]
    HmacSha256,
}

impl SigningAlgorithm {
    /// The algorithm name as it appears in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SigningAlgorithm::HmacSha1 => "HmacSHA1",
            SigningAlgorithm::HmacSha256 => "HmacSHA256",
        }
    }

    /// Compute the keyed hash of `data` and return it base64 encoded
    /// (standard alphabet, padded).
    pub fn sign(&self, key: &[u8], data: &[u8]) -> Result<String> {
        let mac = match self {
            SigningAlgorithm::HmacSha1 => hmac_sha1(key, data),
            SigningAlgorithm::HmacSha256 => hmac_sha256(key, data),
        }
        .map_err(|e| {
            Error::signing_failed(format!(
                "unable to calculate a request signature with {self}"
            ))
            .with_source(e)
        })?;

        Ok(base64_encode(&mac))
    }
}

impl Display for SigningAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SigningAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HmacSHA1" => Ok(SigningAlgorithm::HmacSha1),
            "HmacSHA256" => Ok(SigningAlgorithm::HmacSha256),
            v => Err(Error::config_invalid(format!(
                "unsupported signing algorithm: {v}"
            ))),
        }
    }
}

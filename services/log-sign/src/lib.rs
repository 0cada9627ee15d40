//! Signer for the StreamProxy LOG authorization scheme.
//!
//! Signing a request takes three steps, all done before the request leaves
//! the client:
//!
//! 1. [`content_digest`] hashes the body.
//! 2. [`canonical_string`] joins method, digest, `Content-Type`, `Date`, the
//!    reserved extension-header line and the resource path.
//! 3. [`RequestSigner`] signs the canonical string with the secret key and
//!    writes `Authorization: LOG <access_key_id>:<signature>`.
//!
//! ```no_run
//! use streamproxy_core::{Context, Signer};
//! use streamproxy_log_sign::{RequestSigner, StaticCredentialProvider};
//!
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("access_key_id", "secret_key"),
//!     RequestSigner::new(),
//! );
//! ```

#![warn(missing_docs)]

mod algorithm;
pub use algorithm::SigningAlgorithm;

pub mod canonical;
pub use canonical::canonical_string;

mod config;
pub use config::Config;

pub mod constants;

mod credential;
pub use credential::Credential;

mod digest;
pub use digest::content_digest;

mod provide_credential;
pub use provide_credential::{
    ConfigCredentialProvider, DefaultCredentialProvider, EnvCredentialProvider,
    StaticCredentialProvider,
};

mod sign_request;
pub use sign_request::{sign, RequestSigner};

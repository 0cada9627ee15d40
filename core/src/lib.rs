//! Core components for the StreamProxy SDK.
//!
//! This crate defines the types shared by the signer and the client:
//!
//! - **Context**: holds the transport ([`HttpSend`]) and environment ([`Env`]) implementations
//! - **Traits**: [`ProvideCredential`] loads credentials, [`SignRequest`] signs a request
//! - **Signer**: keeps the current credential and drives a [`SignRequest`] implementation
//! - **Requests**: [`SigningRequest`] before signing, [`SignedRequest`] after
//!
//! ## Example
//!
//! ```no_run
//! use async_trait::async_trait;
//! use http::{Method, Uri};
//! use streamproxy_core::{
//!     Context, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
//!     SigningOutcome, SigningRequest,
//! };
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<MyCredential>> {
//!         Ok(Some(MyCredential { key: "my-key".to_string() }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     fn sign_request(
//!         &self,
//!         req: &mut SigningRequest,
//!         cred: Option<&MyCredential>,
//!     ) -> Result<SigningOutcome> {
//!         let Some(cred) = cred else {
//!             return Ok(SigningOutcome::Unsigned);
//!         };
//!         req.header_insert("Authorization", format!("MY {}", cred.key));
//!         Ok(SigningOutcome::Signed { access_key_id: cred.key.clone() })
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyProvider, MySigner);
//! let req = SigningRequest::new(Method::POST, Uri::from_static("http://localhost"), "/");
//! let signed = signer.sign(req).await?;
//! assert!(signed.outcome().is_signed());
//! # Ok(())
//! # }
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod context;
pub use context::{Context, Env, HttpSend, NoopEnv, NoopHttpSend, OsEnv, StaticEnv};

mod api;
pub use api::{ProvideCredential, SignRequest, SigningCredential};
mod chain;
pub use chain::ProvideCredentialChain;
mod request;
pub use request::{SignedRequest, SigningOutcome, SigningRequest};
mod signer;
pub use signer::Signer;

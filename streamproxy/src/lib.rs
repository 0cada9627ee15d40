//! Client SDK for the StreamProxy log-streaming service.
//!
//! Every request is a JSON `POST` signed with the LOG authorization scheme:
//!
//! ```text
//! Authorization: LOG <access_key_id>:<base64 signature>
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use streamproxy::{Client, ClientConfig, DefaultCredentialProvider};
//!
//! # #[tokio::main]
//! # async fn main() -> streamproxy::Result<()> {
//! let ctx = streamproxy::default_context();
//! let config = ClientConfig::default().from_env(&ctx);
//! let client = Client::new(ctx, config, DefaultCredentialProvider::new())?;
//!
//! let resp = client.fetch_position("EARLIEST", "my.subscription").await?;
//! println!("{}", resp.body());
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_docs)]

pub use streamproxy_core::*;
pub use streamproxy_log_sign::{
    canonical, constants, content_digest, sign, Config, ConfigCredentialProvider, Credential,
    DefaultCredentialProvider, EnvCredentialProvider, RequestSigner, SigningAlgorithm,
    StaticCredentialProvider,
};

mod client;
pub use client::Client;

/// Client configuration and the env names it reads.
pub mod config;
pub use config::ClientConfig;

mod response;
pub use response::HttpResponse;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

use streamproxy_core::{Context, OsEnv};
use streamproxy_http_send_reqwest::ReqwestHttpSend;

/// Create a [`Context`] that sends requests with reqwest and reads the OS
/// environment.
///
/// ```no_run
/// let ctx = streamproxy::default_context();
/// ```
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}

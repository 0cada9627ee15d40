//! Content digest of the request body.

use streamproxy_core::hash::hex_md5;

/// Compute the content digest of `body`: the lowercase hex MD5 of the exact
/// bytes.
///
/// The digest travels only inside the canonical string, where it binds the
/// signature to the body. An empty body still has a digest.
pub fn content_digest(body: &[u8]) -> String {
    hex_md5(body)
}

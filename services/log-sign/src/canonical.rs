//! Canonical string of the LOG scheme.

use streamproxy_core::SigningRequest;

use crate::constants::*;

/// Build the canonical string of `req`.
///
/// ## Format
///
/// ```text
/// HTTP-Method + "\n" +
/// Content-Digest + "\n" +
/// Content-Type + "\n" +
/// Date + "\n" +
/// CanonicalizedExtensionHeaders + "\n" +
/// ResourcePath
/// ```
///
/// Every line is always written. An absent digest, `Content-Type` or `Date`
/// is written as `null`, so the result always has six lines in this order.
pub fn canonical_string(req: &SigningRequest) -> String {
    build(
        req.method.as_str(),
        req.content_digest.as_deref(),
        req.header_get(CONTENT_TYPE),
        req.header_get(DATE),
        &req.resource_path,
    )
}

/// Build the canonical string from its individual fields.
pub fn build(
    method: &str,
    content_digest: Option<&str>,
    content_type: Option<&str>,
    date: Option<&str>,
    resource_path: &str,
) -> String {
    let fields = [
        method,
        content_digest.unwrap_or(NULL_FIELD),
        content_type.unwrap_or(NULL_FIELD),
        date.unwrap_or(NULL_FIELD),
        CANONICALIZED_EXTENSION_HEADERS,
        resource_path,
    ];

    let mut s = String::with_capacity(fields.iter().map(|v| v.len() + 1).sum());
    for (idx, field) in fields.iter().enumerate() {
        if idx != 0 {
            s.push('\n');
        }
        s.push_str(field);
    }
    s
}

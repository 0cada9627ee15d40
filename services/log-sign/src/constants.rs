//! Constants of the LOG scheme.

/// Env value for the access key id.
pub const STREAMPROXY_ACCESS_KEY_ID: &str = "STREAMPROXY_ACCESS_KEY_ID";
/// Env value for the secret key.
pub const STREAMPROXY_SECRET_KEY: &str = "STREAMPROXY_SECRET_KEY";

// Headers read or written while signing. Keys are matched exactly.

/// Header that carries the signature.
pub const AUTHORIZATION: &str = "Authorization";
/// Canonicalized as the third line.
pub const CONTENT_TYPE: &str = "Content-Type";
/// Canonicalized as the fourth line.
pub const DATE: &str = "Date";
/// `<subscription>.<host suffix>`, not signed.
pub const HOST: &str = "Host";
/// Not signed.
pub const USER_AGENT: &str = "User-Agent";

/// Token that starts every `Authorization` value of this scheme.
pub const SCHEME: &str = "LOG";

/// Stand-in for an absent canonical field.
///
/// Verifiers expect this literal, so an absent field must never become an
/// empty line.
pub const NULL_FIELD: &str = "null";

/// Canonicalized extension headers.
///
/// Always empty in the current protocol version, but the line is still
/// written into the canonical string.
pub const CANONICALIZED_EXTENSION_HEADERS: &str = "";

//! End-to-end signing through `Signer`.

use http::{Method, Uri};
use pretty_assertions::assert_eq;
use streamproxy_core::time::format_http_date;
use streamproxy_core::{Context, Result, Signer, SigningOutcome, SigningRequest};
use streamproxy_log_sign::{
    canonical_string, content_digest, DefaultCredentialProvider, RequestSigner,
    StaticCredentialProvider,
};

fn position_request(body: &str) -> SigningRequest {
    let mut req = SigningRequest::new(
        Method::POST,
        Uri::from_static("http://10.180.148.6:8079"),
        "/get_subscription_position",
    );
    req.content = body.to_string();
    req.content_digest = Some(content_digest(body.as_bytes()));
    req.header_insert("Content-Type", "application/json");
    req.header_insert("Host", "topic.c.163.com");
    req.header_insert("User-Agent", "streamproxy-sdk-rust/test");
    req.header_insert(
        "Date",
        format_http_date(
            chrono::DateTime::parse_from_rfc2822("Tue, 03 Jun 2025 04:00:00 GMT")
                .unwrap()
                .with_timezone(&chrono::Utc),
        ),
    );
    req
}

#[tokio::test]
async fn test_sign_empty_body() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("access_key", "secret_key"),
        RequestSigner::new(),
    );

    let req = position_request("");
    assert_eq!(
        canonical_string(&req),
        "POST\nd41d8cd98f00b204e9800998ecf8427e\napplication/json\nTue, 03 Jun 2025 04:00:00 GMT\n\n/get_subscription_position"
    );

    let signed = signer.sign(req).await?;
    assert_eq!(
        signed.outcome(),
        &SigningOutcome::Signed {
            access_key_id: "access_key".to_string()
        }
    );
    assert_eq!(
        signed.header("Authorization"),
        Some("LOG access_key:Hl5V4Od0OquOwT1DpUVcGxlOdmxvbVgQdIq/Hmz1fRQ=")
    );
    Ok(())
}

#[tokio::test]
async fn test_sign_position_body() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("access_key", "secret_key"),
        RequestSigner::new(),
    );

    let signed = signer
        .sign(position_request(r#"{"position_type":"EARLIEST"}"#))
        .await?;
    assert_eq!(
        signed.content_digest(),
        Some("d37d60759f9b0a6460065212194b91f5")
    );
    assert_eq!(
        signed.header("Authorization"),
        Some("LOG access_key:NiplefyGfd+OeGymdMsXikA/Ee/mvteeeHj5ogxUByo=")
    );

    // Everything the caller set is still present.
    for key in ["Content-Type", "Host", "User-Agent", "Date", "Authorization"] {
        assert!(signed.header(key).is_some(), "missing header {key}");
    }
    Ok(())
}

#[tokio::test]
async fn test_no_credential_sends_unsigned() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        DefaultCredentialProvider::new(),
        RequestSigner::new(),
    );

    let req = position_request("");
    let headers = req.headers.clone();
    let signed = signer.sign(req).await?;

    assert_eq!(signed.outcome(), &SigningOutcome::Unsigned);
    assert_eq!(signed.headers(), &headers);
    Ok(())
}

#[tokio::test]
async fn test_rotated_credential_is_used_by_next_request() -> Result<()> {
    let signer = Signer::new(
        Context::new(),
        StaticCredentialProvider::new("access_key", "secret_key"),
        RequestSigner::new(),
    );

    let first = signer.sign(position_request("")).await?;
    signer.set_credential(Some(streamproxy_log_sign::Credential::new(
        "rotated_key",
        "rotated_secret",
    )))?;
    let second = signer.sign(position_request("")).await?;

    assert!(first
        .header("Authorization")
        .unwrap()
        .starts_with("LOG access_key:"));
    assert!(second
        .header("Authorization")
        .unwrap()
        .starts_with("LOG rotated_key:"));
    Ok(())
}

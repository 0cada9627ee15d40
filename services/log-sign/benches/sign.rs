use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use http::{Method, Uri};
use streamproxy_core::{SignRequest, SigningRequest};
use streamproxy_log_sign::{content_digest, Credential, RequestSigner};

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("log_sign");

    let body = r#"{"position":"0:12345","limit":100}"#;
    let credential = Credential::new("access_key_id", "secret_key");
    let signer = RequestSigner::new();

    group.bench_function("sign_fetch_logs", |b| {
        b.iter(|| {
            let mut req = SigningRequest::new(
                Method::POST,
                Uri::from_static("http://10.180.148.6:8079"),
                "/get_logs",
            );
            req.content = body.to_string();
            req.content_digest = Some(content_digest(body.as_bytes()));
            req.header_insert("Content-Type", "application/json");
            req.header_insert("Date", "Tue, 03 Jun 2025 04:00:00 GMT");

            signer
                .sign_request(&mut req, Some(&credential))
                .expect("sign request must succeed")
        })
    });

    group.finish()
}

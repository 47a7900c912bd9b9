//! Shared fixtures for the integration test suites: a moderately complex
//! document plus a chunked split of the same bytes, used to exercise
//! `ReadSource` against `StrSource` over identical content.
#![allow(dead_code)]

pub const DOCUMENT: &str = r#"{
    "users": [
        {"id": 1, "name": "Ada"},
        {"id": 2, "name": "Grace"}
    ],
    "meta": {"count": 2}
}"#;

/// Splits `DOCUMENT` into `n` roughly-equal byte chunks, for feeding a
/// `Read` impl that returns a little at a time.
pub fn chunked(n: usize) -> Vec<Vec<u8>> {
    let bytes = DOCUMENT.as_bytes();
    let chunk_len = bytes.len().div_ceil(n).max(1);
    bytes.chunks(chunk_len).map(<[u8]>::to_vec).collect()
}

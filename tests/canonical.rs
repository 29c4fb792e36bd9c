//! End-to-end checks against requests from the AWS SigV4 test suite. The caller-side steps
//! (canonical request and string-to-sign assembly) are done here; the primitives come from the
//! crate.

use {
    http::{request::Request, HeaderMap, HeaderValue},
    sha2::{Digest, Sha256},
    sigv4_canonical::{
        canonicalize_signed_headers, encode_resource_name, hmac_sha256, hmac_sha256_hex, verify_hmac_sha256_hex,
        HeaderSource, RegionValidator, RequestHeaders, SignatureError, UNSIGNED_PAYLOAD,
    },
};

const ACCESS_KEY_SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const REGION: &str = "us-east-1";
const SERVICE: &str = "service";
const TIMESTAMP: &str = "20150830T123600Z";

fn signing_key() -> [u8; 32] {
    let k_secret = format!("AWS4{}", ACCESS_KEY_SECRET);
    let k_date = hmac_sha256(k_secret.as_bytes(), &TIMESTAMP.as_bytes()[..8]);
    let k_region = hmac_sha256(&k_date, REGION.as_bytes());
    let k_service = hmac_sha256(&k_region, SERVICE.as_bytes());
    hmac_sha256(&k_service, b"aws4_request")
}

fn build_string_to_sign<R: HeaderSource>(
    path: &str,
    signed_headers: &[&str],
    request: &R,
) -> Result<String, SignatureError> {
    let mut canonical_request = format!("GET\n{}\n\n", encode_resource_name(path)).into_bytes();
    canonical_request.extend(canonicalize_signed_headers(signed_headers, request)?);
    canonical_request.push(b'\n');
    canonical_request.extend(signed_headers.join(";").as_bytes());
    canonical_request.push(b'\n');
    canonical_request.extend(EMPTY_SHA256.as_bytes());

    Ok(format!(
        "AWS4-HMAC-SHA256\n{}\n{}/{}/{}/aws4_request\n{}",
        TIMESTAMP,
        &TIMESTAMP[..8],
        REGION,
        SERVICE,
        hex::encode(Sha256::digest(&canonical_request))
    ))
}

fn expected_signature<R: HeaderSource>(
    path: &str,
    signed_headers: &[&str],
    request: &R,
) -> Result<String, SignatureError> {
    let string_to_sign = build_string_to_sign(path, signed_headers, request)?;
    Ok(hmac_sha256_hex(&signing_key(), string_to_sign.as_bytes()))
}

#[test_log::test]
fn get_vanilla() {
    let request = Request::get("/")
        .header("host", "example.amazonaws.com")
        .header("x-amz-date", TIMESTAMP)
        .body(())
        .unwrap();

    let signature = expected_signature("/", &["host", "x-amz-date"], &request).unwrap();
    assert_eq!(signature, "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31");
}

#[test_log::test]
fn get_utf8() {
    let request = Request::get("/%E1%88%B4")
        .header("host", "example.amazonaws.com")
        .header("x-amz-date", TIMESTAMP)
        .body(())
        .unwrap();

    let signature = expected_signature("/\u{1234}", &["host", "x-amz-date"], &request).unwrap();
    assert_eq!(signature, "8318018e0b0f223aa2bbf98705b62bb787dc9c0e678f255a891fd03141be5d85");
}

#[test_log::test]
fn get_header_value_order() {
    let request = Request::get("/")
        .header("host", "example.amazonaws.com")
        .header("my-header1", "value2")
        .header("my-header1", "value2")
        .header("my-header1", "value1")
        .header("x-amz-date", TIMESTAMP)
        .body(())
        .unwrap();

    let signature = expected_signature("/", &["host", "my-header1", "x-amz-date"], &request).unwrap();
    assert_eq!(signature, "c9d5ea9f3f72853aea855b47ea873832890dbdd183b4468f858259531a5138ea");
}

#[test_log::test]
fn get_vanilla_host_stripped() {
    // The HTTP stack moved the host out of the header map.
    let mut headers = HeaderMap::new();
    headers.append("x-amz-date", HeaderValue::from_static(TIMESTAMP));
    let request = RequestHeaders::new(&headers, "example.amazonaws.com");

    let string_to_sign = build_string_to_sign("/", &["host", "x-amz-date"], &request).unwrap();
    let client_signature = "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31";
    assert!(verify_hmac_sha256_hex(&signing_key(), string_to_sign.as_bytes(), client_signature));

    // A client that also signed `expect` has it canonicalized in place, in signed-header order.
    let headers = canonicalize_signed_headers(&["host", "expect", "x-amz-date"], &request).unwrap();
    assert_eq!(headers, b"host:example.amazonaws.com\nexpect:100-continue\nx-amz-date:20150830T123600Z\n");
}

#[test_log::test]
fn forged_signed_header() {
    let request = Request::get("/")
        .header("host", "example.amazonaws.com")
        .header("x-amz-date", TIMESTAMP)
        .body(())
        .unwrap();

    let e = expected_signature("/", &["host", "x-amz-content-sha256", "x-amz-date"], &request).unwrap_err();
    assert!(matches!(e, SignatureError::MissingRequiredSignedHeader(ref header) if header == "x-amz-content-sha256"));

    let request = Request::get("/")
        .header("host", "example.amazonaws.com")
        .header("x-amz-content-sha256", UNSIGNED_PAYLOAD)
        .header("x-amz-date", TIMESTAMP)
        .body(())
        .unwrap();
    let headers = canonicalize_signed_headers(&["x-amz-content-sha256"], &request).unwrap();
    assert_eq!(headers, b"x-amz-content-sha256:UNSIGNED-PAYLOAD\n");
}

#[test_log::test]
fn obs_text_header_value() {
    // The client hashed the raw header bytes; the canonical request must carry them unchanged.
    let mut headers = HeaderMap::new();
    headers.append("x-amz-date", HeaderValue::from_static(TIMESTAMP));
    headers.append("x-amz-meta-name", HeaderValue::from_bytes(b"caf\xe9").unwrap());
    let request = RequestHeaders::new(&headers, "example.amazonaws.com");

    let headers = canonicalize_signed_headers(&["host", "x-amz-date", "x-amz-meta-name"], &request).unwrap();
    assert_eq!(headers, b"host:example.amazonaws.com\nx-amz-date:20150830T123600Z\nx-amz-meta-name:caf\xe9\n");

    let mut canonical_request = b"GET\n/\n\n".to_vec();
    canonical_request.extend(&headers);
    canonical_request.extend(b"\nhost;x-amz-date;x-amz-meta-name\n");
    canonical_request.extend(EMPTY_SHA256.as_bytes());
    let string_to_sign = build_string_to_sign("/", &["host", "x-amz-date", "x-amz-meta-name"], &request).unwrap();
    assert!(string_to_sign.ends_with(&hex::encode(Sha256::digest(&canonical_request))));
}

#[test_log::test]
fn region_check() {
    let validator = RegionValidator::new(REGION);
    assert!(validator.is_valid_region(""));
    assert!(validator.is_valid_region(REGION));
    assert!(!validator.is_valid_region("wrong-region"));
}

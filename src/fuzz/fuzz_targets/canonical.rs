#![no_main]
use {
    arbitrary::Arbitrary,
    http::{HeaderMap, HeaderName, HeaderValue},
    libfuzzer_sys::fuzz_target,
    sigv4_canonical::{canonicalize_signed_headers, encode_resource_name, encode_resource_name_bytes, RequestHeaders},
    std::borrow::Cow,
};

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    resource_name: &'a [u8],
    host: &'a str,
    headers: Vec<(&'a str, &'a [u8])>,
    signed_headers: Vec<&'a str>,
}

fuzz_target!(|input: Input<'_>| {
    let encoded = encode_resource_name_bytes(input.resource_name);
    match std::str::from_utf8(input.resource_name) {
        Ok(name) => {
            assert_eq!(&*encoded, encode_resource_name(name).as_bytes());
            assert!(encoded.iter().all(|b| b.is_ascii_alphanumeric() || b"-_.~/%".contains(b)));
        }
        Err(_) => assert!(matches!(encoded, Cow::Borrowed(_))),
    }

    let mut headers = HeaderMap::new();
    for (name, value) in input.headers {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::from_bytes(value)) {
            headers.append(name, value);
        }
    }

    let source = RequestHeaders::new(&headers, input.host);
    if let Ok(canonical) = canonicalize_signed_headers(input.signed_headers.as_slice(), &source) {
        assert!(canonical.iter().filter(|b| **b == b'\n').count() >= input.signed_headers.len());
    }
});

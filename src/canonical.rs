//! Canonicalization of the signed headers of a request.
//!
//! The canonical header block is one `name:value\n` line per entry in the client's
//! `SignedHeaders` list, in the client's order. Multiple values for the same header are joined
//! with `,` on a single line.
//!
//! Two headers are compensated for before the request's header map is consulted, since HTTP
//! stacks routinely strip them before the request reaches the verifier:
//! * `expect` is always canonicalized as `100-continue`, the only expectation defined by
//!   RFC 7231.
//! * `host` is always taken from the request's dedicated host field rather than the header map.

use {
    crate::{
        constants::{EXPECT_100_CONTINUE, HDR_EXPECT, HDR_HOST},
        SignatureError,
    },
    http::{
        header::{HeaderMap, HeaderValue, HOST},
        request::{Parts, Request},
        uri::Uri,
    },
    log::trace,
};

/// Read-only view of the parts of an HTTP request needed to canonicalize its signed headers.
pub trait HeaderSource {
    /// Returns every value of the named header, in the order stored in the request. The name is
    /// matched case-insensitively. A header that is absent yields an empty vector.
    fn header_values(&self, name: &str) -> Vec<&[u8]>;

    /// Returns the request's dedicated host field. This is populated independently of the
    /// header map and may be empty.
    fn host(&self) -> &[u8];
}

/// A header map paired with an explicitly supplied host, for callers that have already split the
/// host out of the headers.
#[derive(Clone, Copy, Debug)]
pub struct RequestHeaders<'a> {
    headers: &'a HeaderMap<HeaderValue>,
    host: &'a str,
}

impl<'a> RequestHeaders<'a> {
    /// Create a header source from a header map and the request's host.
    pub fn new(headers: &'a HeaderMap<HeaderValue>, host: &'a str) -> Self {
        Self {
            headers,
            host,
        }
    }
}

impl HeaderSource for RequestHeaders<'_> {
    fn header_values(&self, name: &str) -> Vec<&[u8]> {
        header_map_values(self.headers, name)
    }

    fn host(&self) -> &[u8] {
        self.host.as_bytes()
    }
}

impl HeaderSource for Parts {
    fn header_values(&self, name: &str) -> Vec<&[u8]> {
        header_map_values(&self.headers, name)
    }

    fn host(&self) -> &[u8] {
        request_host(&self.uri, &self.headers)
    }
}

impl<B> HeaderSource for Request<B> {
    fn header_values(&self, name: &str) -> Vec<&[u8]> {
        header_map_values(self.headers(), name)
    }

    fn host(&self) -> &[u8] {
        request_host(self.uri(), self.headers())
    }
}

fn header_map_values<'a>(headers: &'a HeaderMap<HeaderValue>, name: &str) -> Vec<&'a [u8]> {
    headers.get_all(name).into_iter().map(HeaderValue::as_bytes).collect()
}

/// The host of an `http` request: the URI authority (less any userinfo) when the request line
/// carried one (HTTP/2 `:authority` or an absolute-form URI), otherwise the first `Host` header.
fn request_host<'a>(uri: &'a Uri, headers: &'a HeaderMap<HeaderValue>) -> &'a [u8] {
    if let Some(authority) = uri.authority() {
        // Userinfo is not part of the host.
        let authority = authority.as_str();
        return match authority.rfind('@') {
            Some(i) => authority[i + 1..].as_bytes(),
            None => authority.as_bytes(),
        };
    }

    match headers.get(HOST) {
        Some(value) => value.as_bytes(),
        None => b"",
    }
}

/// Returns the values to canonicalize for headers the HTTP stack may have removed from the
/// header map, or `None` if the header should be looked up normally.
pub fn compensated_header_values<'a, R>(name: &str, request: &'a R) -> Option<Vec<&'a [u8]>>
where
    R: HeaderSource + ?Sized,
{
    match name {
        HDR_EXPECT => Some(vec![EXPECT_100_CONTINUE.as_bytes()]),
        HDR_HOST => Some(vec![request.host()]),
        _ => None,
    }
}

/// Build the canonical header block for the given signed headers.
///
/// Each header produces `name:value1,value2,...\n` in the order given by `signed_headers`. If a
/// signed header (other than `expect` or `host`) has no values in the request,
/// [SignatureError::MissingRequiredSignedHeader] is returned and no output is produced.
///
/// Header values are copied byte for byte, so values carrying obs-text (bytes `0x80`-`0xFF`) are
/// canonicalized exactly as the client sent them.
pub fn canonicalize_signed_headers<S, R>(signed_headers: &[S], request: &R) -> Result<Vec<u8>, SignatureError>
where
    S: AsRef<str>,
    R: HeaderSource + ?Sized,
{
    let mut result = Vec::with_capacity(256);

    for header in signed_headers {
        let header = header.as_ref();
        let values = match compensated_header_values(header, request) {
            Some(values) => values,
            None => request.header_values(header),
        };

        if values.is_empty() {
            trace!("Signed header '{}' is missing from the request", header);
            return Err(SignatureError::MissingRequiredSignedHeader(header.to_string()));
        }

        result.extend(header.as_bytes());
        result.push(b':');
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                result.push(b',');
            }
            result.extend(*value);
        }
        result.push(b'\n');
    }

    trace!("Canonical headers:\n{}", String::from_utf8_lossy(&result));
    Ok(result)
}

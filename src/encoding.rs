//! Percent-encoding of resource names (object keys and paths) for the canonical request.
//!
//! Unlike generic URL encoders, the path separator `/` is never escaped so the canonical
//! resource keeps its structure. Everything outside the RFC 3986 unreserved set is encoded as
//! `%XX` per UTF-8 byte, with uppercase hex digits.

use {
    crate::constants::{HEX_DIGITS_UPPER, RESOURCE_NAME_UNRESERVED_PATTERN},
    lazy_static::lazy_static,
    log::trace,
    qualifier_attr::qualifiers,
    regex::Regex,
    std::{borrow::Cow, str::from_utf8},
};

lazy_static! {
    /// Resource names consisting only of unreserved characters and slashes.
    static ref UNRESERVED_RESOURCE_NAME: Regex = Regex::new(RESOURCE_NAME_UNRESERVED_PATTERN).unwrap();
}

/// Percent-encode a resource name for use in the canonical request.
///
/// ASCII letters, digits, `-`, `_`, `.`, `~`, and `/` are passed through. Every other code point
/// is written as one `%XX` triplet per byte of its UTF-8 encoding, so `"é"` becomes `"%C3%A9"`.
/// Names that need no encoding are returned borrowed.
pub fn encode_resource_name(name: &str) -> Cow<'_, str> {
    if name.is_empty() || UNRESERVED_RESOURCE_NAME.is_match(name) {
        return Cow::Borrowed(name);
    }

    let mut result = String::with_capacity(name.len() * 3);
    let mut utf8_buf = [0u8; 4];

    for c in name.chars() {
        if is_resource_unreserved(c) {
            result.push(c);
            continue;
        }

        for b in c.encode_utf8(&mut utf8_buf).as_bytes() {
            let hex = u8_to_upper_hex(*b);
            result.push('%');
            result.push(hex[0] as char);
            result.push(hex[1] as char);
        }
    }

    trace!("Encoded resource name {:?} as {:?}", name, result);
    Cow::Owned(result)
}

/// Percent-encode a resource name supplied as raw bytes.
///
/// If the bytes are not valid UTF-8, no code point can be measured reliably and the input is
/// returned unmodified instead of a partially encoded name.
pub fn encode_resource_name_bytes(name: &[u8]) -> Cow<'_, [u8]> {
    let name_str = match from_utf8(name) {
        Ok(s) => s,
        Err(e) => {
            trace!("Resource name is not valid UTF-8 ({}); leaving it unencoded", e);
            return Cow::Borrowed(name);
        }
    };

    match encode_resource_name(name_str) {
        Cow::Borrowed(_) => Cow::Borrowed(name),
        Cow::Owned(encoded) => Cow::Owned(encoded.into_bytes()),
    }
}

/// Indicates whether the character can appear in a canonical resource name without being
/// percent-encoded. This is the RFC 3986 unreserved set plus `/`.
#[inline(always)]
fn is_resource_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '/')
}

/// Convert a byte to uppercase hex representation.

#[cfg_attr(any(doc, feature = "unstable"), qualifiers(pub))]
#[cfg_attr(not(any(doc, feature = "unstable")), qualifiers(pub(crate)))]
#[inline(always)]
const fn u8_to_upper_hex(b: u8) -> [u8; 2] {
    [HEX_DIGITS_UPPER[((b >> 4) & 0xf) as usize], HEX_DIGITS_UPPER[(b & 0xf) as usize]]
}

//! Common constants used throughout the crate.
//!
//! This helps ensure the entire crate is on the same page about these constant values. If a value
//! is spelled incorrectly, at least it can be fixed in one spot.
//!
//! Tests that are testing the content of an error code or message should not use these constants;
//! they should use hard-coded strings so the tests are also testing for misspellings.
//!
//! Please keep this file organized alphabetically. (This can be a bit hard with comments, etc.)

/// Error code: SignatureDoesNotMatch
pub(crate) const ERR_CODE_SIGNATURE_DOES_NOT_MATCH: &str = "SignatureDoesNotMatch";

/// The only value a client may send in the `expect` header.
pub(crate) const EXPECT_100_CONTINUE: &str = "100-continue";

/// Header for `expect`
pub(crate) const HDR_EXPECT: &str = "expect";

/// Header for `host`
pub(crate) const HDR_HOST: &str = "host";

/// Uppercase hex digits.
pub(crate) const HEX_DIGITS_UPPER: [u8; 16] =
    [b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'A', b'B', b'C', b'D', b'E', b'F'];

/// Error message prefix: `"Header included in SignedHeaders is missing from the request: "`
pub(crate) const MSG_SIGNED_HEADER_MISSING: &str = "Header included in SignedHeaders is missing from the request: ";

/// Pattern matching resource names that need no percent-encoding at all.
pub(crate) const RESOURCE_NAME_UNRESERVED_PATTERN: &str = r"^[A-Za-z0-9\-_.~/]+$";

/// The length of a SHA-256 digest, in bytes.
pub const SHA256_OUTPUT_LEN: usize = 32;

/// Value of `x-amz-content-sha256` indicating that the client did not hash the payload.
pub const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

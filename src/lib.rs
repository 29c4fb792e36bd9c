//! The `sigv4_canonical` crate provides the canonicalization primitives needed to _verify_ an AWS
//! SigV4 signature on an incoming HTTP request. A verifier must rebuild, byte for byte, the same
//! canonical request the client signed; any difference in case, ordering, or escaping causes a
//! signature mismatch.
//!
//! This crate does not parse the `Authorization` header, assemble the string to sign, or look up
//! secret keys. Those are left to the caller, who composes the pieces here:
//!
//! * [RegionValidator] checks the region declared by the client against the configured region.
//! * [canonicalize_signed_headers] builds the canonical header block from the `SignedHeaders`
//!   list and the request.
//! * [encode_resource_name] percent-encodes the resource (object key or path).
//! * [hmac_sha256] computes signatures and derives signing keys;
//!   [verify_hmac_sha256_hex] compares a client signature in constant time.
//!
//! ## Example
//! ```rust
//! use http::Request;
//! use sigv4_canonical::{canonicalize_signed_headers, encode_resource_name, RegionValidator};
//!
//! let region = RegionValidator::new("us-east-1");
//! assert!(region.is_valid_region("us-east-1"));
//! assert!(region.is_valid_region(""));
//!
//! let req = Request::get("https://example.com/photos/caf%C3%A9.jpg")
//!     .header("X-Amz-Date", "20150830T123600Z")
//!     .body(())
//!     .unwrap();
//!
//! let headers = canonicalize_signed_headers(&["host", "x-amz-date"], &req).unwrap();
//! assert_eq!(headers, b"host:example.com\nx-amz-date:20150830T123600Z\n");
//!
//! assert_eq!(encode_resource_name("photos/café.jpg"), "photos/caf%C3%A9.jpg");
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

mod canonical;
mod constants;
mod crypto;
mod encoding;
mod error;
mod region;

pub use crate::{
    canonical::{canonicalize_signed_headers, compensated_header_values, HeaderSource, RequestHeaders},
    constants::{SHA256_OUTPUT_LEN, UNSIGNED_PAYLOAD},
    crypto::{hmac_sha256, hmac_sha256_hex, verify_hmac_sha256_hex},
    encoding::{encode_resource_name, encode_resource_name_bytes},
    error::SignatureError,
    region::{RegionValidator, RegionValidatorBuilder, RegionValidatorBuilderError},
};

#[cfg(any(doc, feature = "unstable"))]
pub use crate::encoding::u8_to_upper_hex;

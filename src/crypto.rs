//! Keyed-hash primitives used to verify AWS SigV4 signatures and derive signing keys.

use {
    crate::constants::SHA256_OUTPUT_LEN,
    hmac::{Hmac, Mac},
    sha2::Sha256,
    subtle::ConstantTimeEq,
};

type HmacSha256 = Hmac<Sha256>;

/// Compute `HMAC-SHA256(key, data)`.
///
/// Keys and payloads of any length are accepted, including empty ones. Each call uses fresh
/// digest state, so identical inputs always yield identical output.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; SHA256_OUTPUT_LEN] {
    // HMAC accepts keys of any size; new_from_slice only fails for fixed-size-key MACs.
    let mut mac = match HmacSha256::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC-SHA256 accepts keys of any length"),
    };
    mac.update(data);

    let mut result = [0u8; SHA256_OUTPUT_LEN];
    result.copy_from_slice(mac.finalize().into_bytes().as_slice());
    result
}

/// Compute `HMAC-SHA256(key, data)` as a lowercase hex string, the form a SigV4 signature takes
/// on the wire.
#[inline(always)]
pub fn hmac_sha256_hex(key: &[u8], data: &[u8]) -> String {
    hex::encode(hmac_sha256(key, data))
}

/// Verify a client-supplied hex signature against `HMAC-SHA256(key, data)`.
///
/// The comparison runs in constant time with respect to the signature contents. Uppercase hex in
/// the client signature is rejected, as SigV4 signatures are always lowercase.
pub fn verify_hmac_sha256_hex(key: &[u8], data: &[u8], signature: &str) -> bool {
    let expected = hmac_sha256_hex(key, data);
    expected.as_bytes().ct_eq(signature.as_bytes()).into()
}

//! Deterministic 64-bit hashing
//!
//! Hashes must be identical across processes, platforms, and toolchain
//! versions, so `std::hash` (randomly keyed) is not used. Payload bytes are
//! digested with SHA-256 and the first eight bytes are read little-endian.

use sha2::{Digest, Sha256};

/// Hashes raw payload bytes to 64 bits
pub fn payload_hash(bytes: &[u8]) -> u64 {
    let digest = Sha256::digest(bytes);
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(head)
}

/// Hashes a field name
pub fn field_hash(name: &str) -> u64 {
    payload_hash(name.as_bytes())
}

/// 64-bit avalanche finalizer (murmur3 fmix64).
///
/// Bijective, and `mix(0) == 0`.
pub fn mix(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

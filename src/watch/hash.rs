// src/watch/hash.rs

//! Stable hashing for fingerprints and change digests.
//!
//! Every field is length-prefixed before it is fed to the hasher, so
//! `("a|b", "c")` and `("a", "b|c")` never collide the way plain
//! concatenation with a separator would.

use blake3::Hasher;

/// Domain tags keep a fingerprint and a digest over the same bytes distinct.
const FINGERPRINT_DOMAIN: &[u8] = b"playwatch.fingerprint.v1";
const DIGEST_DOMAIN: &[u8] = b"playwatch.digest.v1";

fn update_field(hasher: &mut Hasher, field: &[u8]) {
    hasher.update(&(field.len() as u64).to_le_bytes());
    hasher.update(field);
}

/// Hash of `(target, callback)` identifying a watch registration.
pub fn compute_fingerprint(target: &str, callback: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(FINGERPRINT_DOMAIN);
    update_field(&mut hasher, target.as_bytes());
    update_field(&mut hasher, callback.as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// Hash of the fields that decide whether a status change is worth a
/// notification: `(link, active, callback)` and nothing else.
pub fn compute_digest(link: &str, active: bool, callback: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(DIGEST_DOMAIN);
    update_field(&mut hasher, link.as_bytes());
    hasher.update(&[u8::from(active)]);
    update_field(&mut hasher, callback.as_bytes());
    hasher.finalize().to_hex().to_string()
}

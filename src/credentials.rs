/**
 * Credential Service
 *
 * One-way password hashing and verification on top of bcrypt.
 *
 * # Security
 *
 * - Digests are salted: hashing the same plaintext twice produces
 *   different digests, and both verify.
 * - Verification is constant-time inside bcrypt; a wrong password is a
 *   plain `false`, never an error.
 * - The only error case is a malformed digest, which callers surface as
 *   an internal error.
 */

use bcrypt::{hash as bcrypt_hash, verify as bcrypt_verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password into a salted, cost-parameterized digest.
pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt_hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored digest.
///
/// Returns false on mismatch; errors only when the digest itself is
/// malformed.
pub fn verify(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    bcrypt_verify(plaintext, digest)
}

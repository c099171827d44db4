// RSA key generation
// Derives textbook key pairs from two generated primes

use num_bigint::BigUint;

use super::bigint::{generate_large_prime, mod_inverse};
use crate::error::{Error, Result};
use crate::rng::LcgRng;

/// Fixed public exponent.
pub const PUBLIC_EXPONENT: u32 = 65537;

/// Seed of the reproducible default key-generation stream.
pub const DEFAULT_SEED: u64 = 42;

/// RSA public key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub e: BigUint, // Public exponent
    pub n: BigUint, // Modulus
}

/// RSA private key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub d: BigUint, // Private exponent
    pub n: BigUint, // Modulus (same as public)
}

/// RSA key pair (both halves share the modulus)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

impl RsaPublicKey {
    /// Encrypt a byte message with this key, yielding a decimal ciphertext.
    pub fn encrypt(&self, plaintext: &[u8]) -> String {
        super::encrypt::encrypt_bytes(plaintext, self)
    }
}

impl RsaPrivateKey {
    /// Decrypt a decimal ciphertext with this key.
    pub fn decrypt(&self, ciphertext: &str) -> Result<Vec<u8>> {
        super::decrypt::decrypt_to_bytes(ciphertext, self)
    }
}

/// Generate a key pair with the fixed default seed.
///
/// Fully deterministic: every call with the same `total_bits` yields the
/// same pair, which makes generated keys reproducible across runs. Callers
/// that need independent keys should use [`generate_keypair_with_rng`] with
/// an entropy-seeded generator.
pub fn generate_keypair(total_bits: u32) -> Result<RsaKeyPair> {
    generate_keypair_with_rng(total_bits, &mut LcgRng::new(DEFAULT_SEED))
}

/// Generate a key pair, drawing all randomness from `rng`.
///
/// The two prime factors each get `total_bits / 2` bits and exist only for
/// the duration of this call; the returned pair holds exponents and the
/// modulus, nothing else.
pub fn generate_keypair_with_rng(total_bits: u32, rng: &mut LcgRng) -> Result<RsaKeyPair> {
    let half_bits = total_bits / 2;
    if half_bits < 2 {
        return Err(Error::KeySize { total_bits });
    }

    let p = generate_large_prime(half_bits, rng);
    let q = generate_large_prime(half_bits, rng);

    let n = &p * &q;
    let phi = (&p - 1u8) * (&q - 1u8);

    let e = BigUint::from(PUBLIC_EXPONENT);
    let d = mod_inverse(&e, &phi)?;

    log::info!("generated {}-bit RSA key pair", total_bits);

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { e, n: n.clone() },
        private_key: RsaPrivateKey { d, n },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::mod_pow;

    #[test]
    fn test_key_generation() {
        let _ = env_logger::builder().is_test(true).try_init();

        let keypair = generate_keypair(64).unwrap();
        assert_eq!(keypair.public_key.e, BigUint::from(PUBLIC_EXPONENT));
        assert_eq!(keypair.public_key.n, keypair.private_key.n);
        assert!(keypair.private_key.d > BigUint::from(0u8));
    }

    #[test]
    fn test_key_generation_is_deterministic() {
        let first = generate_keypair(64).unwrap();
        let second = generate_keypair(64).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_seeds_control_the_outcome() {
        let base = generate_keypair(64).unwrap();
        let same = generate_keypair_with_rng(64, &mut LcgRng::new(DEFAULT_SEED)).unwrap();
        let other = generate_keypair_with_rng(64, &mut LcgRng::new(1337)).unwrap();

        assert_eq!(base, same);
        assert_ne!(base.public_key.n, other.public_key.n);
    }

    #[test]
    fn test_numeric_round_trip() {
        let keypair = generate_keypair(64).unwrap();
        let e = &keypair.public_key.e;
        let d = &keypair.private_key.d;
        let n = &keypair.public_key.n;

        for m in [0u64, 1, 42, 65_536, 123_456_789] {
            let m = BigUint::from(m);
            let recovered = mod_pow(&mod_pow(&m, e, n), d, n);
            assert_eq!(recovered, m);
        }

        // n-1 is its own ciphertext under any odd exponent
        let m = n - 1u8;
        assert_eq!(mod_pow(&mod_pow(&m, e, n), d, n), m);
    }

    #[test]
    fn test_rejects_tiny_bit_lengths() {
        for total_bits in [0u32, 1, 2, 3] {
            let result = generate_keypair(total_bits);
            assert!(matches!(result, Err(Error::KeySize { .. })));
        }
    }
}

// RSA encryption
// Maps byte messages to decimal ciphertext strings

use num_bigint::BigUint;

use super::bigint::mod_pow;
use super::keygen::RsaPublicKey;

/// Encrypt bytes using an RSA public key.
///
/// The message is read as a big-endian unsigned integer and raised to the
/// public exponent; the result is returned as a decimal string. Messages
/// whose integer value reaches the modulus are outside the scheme (there is
/// no chunking or padding).
pub fn encrypt_bytes(plaintext: &[u8], public_key: &RsaPublicKey) -> String {
    let m = BigUint::from_bytes_be(plaintext);
    let c = mod_pow(&m, &public_key.e, &public_key.n);
    c.to_str_radix(10)
}

/// Encrypt a UTF-8 string using an RSA public key.
pub fn encrypt_str(plaintext: &str, public_key: &RsaPublicKey) -> String {
    encrypt_bytes(plaintext.as_bytes(), public_key)
}

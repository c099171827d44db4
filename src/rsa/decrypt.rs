// RSA decryption
// Parses decimal ciphertext strings back into byte messages

use num_bigint::BigUint;
use num_traits::Zero;

use super::bigint::mod_pow;
use super::keygen::RsaPrivateKey;
use crate::error::Result;

/// Decrypt a decimal ciphertext string using an RSA private key.
///
/// Fails with a format error when the input is not a decimal integer
/// literal. The recovered integer is rendered as its minimal big-endian
/// byte string (empty for zero).
pub fn decrypt_to_bytes(ciphertext: &str, private_key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let c: BigUint = ciphertext.trim().parse()?;
    let m = mod_pow(&c, &private_key.d, &private_key.n);

    if m.is_zero() {
        return Ok(Vec::new());
    }
    Ok(m.to_bytes_be())
}

/// Decrypt a decimal ciphertext string into UTF-8 text.
pub fn decrypt_to_string(ciphertext: &str, private_key: &RsaPrivateKey) -> Result<String> {
    let plaintext = decrypt_to_bytes(ciphertext, private_key)?;
    Ok(String::from_utf8(plaintext)?)
}

// Encrypt-and-embed pipeline
// Composes the RSA cipher with the steganography codec over one pixel buffer

use crate::error::Result;
use crate::rsa::{decrypt_to_string, encrypt_str, RsaPrivateKey, RsaPublicKey};
use crate::stego::{embed_message, extract_message};

/// Encrypt `message` with `public_key` and embed the decimal ciphertext
/// into `pixels`. Returns the ciphertext that was embedded.
pub fn encrypt_and_embed(pixels: &mut [u8], message: &str, public_key: &RsaPublicKey) -> String {
    let ciphertext = encrypt_str(message, public_key);
    log::debug!("embedding {}-digit ciphertext", ciphertext.len());
    embed_message(pixels, &ciphertext);
    ciphertext
}

/// Extract an embedded decimal ciphertext from `pixels` and decrypt it with
/// `private_key`. Returns `Ok(None)` when the buffer holds no framed
/// payload.
pub fn extract_and_decrypt(pixels: &[u8], private_key: &RsaPrivateKey) -> Result<Option<String>> {
    match extract_message(pixels) {
        Some(ciphertext) => decrypt_to_string(&ciphertext, private_key).map(Some),
        None => Ok(None),
    }
}

// rsa_stego - textbook RSA with LSB image steganography
// Deterministic key generation, decimal ciphertexts, and a sentinel-framed
// bit protocol over flat RGBA pixel buffers

pub mod error;
pub mod pipeline;
pub mod rng;
pub mod rsa;
pub mod stego;

pub use error::{Error, Result};
pub use pipeline::{encrypt_and_embed, extract_and_decrypt};
pub use rng::LcgRng;
pub use rsa::{
    decrypt_to_bytes, decrypt_to_string, encrypt_bytes, encrypt_str, generate_keypair,
    generate_keypair_with_rng, RsaKeyPair, RsaPrivateKey, RsaPublicKey,
};
pub use stego::{capacity_bits, embed_message, extract_message};

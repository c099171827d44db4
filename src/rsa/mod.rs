// RSA module - main module file
// Exports the numeric engine, key generation, ciphering, and key documents

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod storage;

pub use bigint::{
    generate_large_prime, is_probable_prime, mod_inverse, mod_pow, MILLER_RABIN_ROUNDS,
};
pub use decrypt::{decrypt_to_bytes, decrypt_to_string};
pub use encrypt::{encrypt_bytes, encrypt_str};
pub use keygen::{
    generate_keypair, generate_keypair_with_rng, RsaKeyPair, RsaPrivateKey, RsaPublicKey,
    DEFAULT_SEED, PUBLIC_EXPONENT,
};
pub use storage::{KeyDocument, PRIVATE_KEY_SLOT, PUBLIC_KEY_SLOT};

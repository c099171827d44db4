// Key document serialization
// Keys travel as JSON arrays of two decimal strings: [exponent, modulus]

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::keygen::{RsaKeyPair, RsaPrivateKey, RsaPublicKey};
use crate::error::{Error, Result};

/// Slot name hosts should use when persisting the public key.
pub const PUBLIC_KEY_SLOT: &str = "public_key";

/// Slot name hosts should use when persisting the private key.
pub const PRIVATE_KEY_SLOT: &str = "private_key";

/// Serialized form of a key: exponent then modulus, both decimal strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyDocument(Vec<String>);

impl KeyDocument {
    fn new(exponent: &BigUint, modulus: &BigUint) -> Self {
        Self(vec![exponent.to_str_radix(10), modulus.to_str_radix(10)])
    }

    /// Render the document as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode the (exponent, modulus) pair.
    pub fn decode(&self) -> Result<(BigUint, BigUint)> {
        if self.0.len() != 2 {
            return Err(Error::DocumentShape {
                expected: 2,
                actual: self.0.len(),
            });
        }
        let exponent: BigUint = self.0[0].parse()?;
        let modulus: BigUint = self.0[1].parse()?;
        Ok((exponent, modulus))
    }
}

impl RsaPublicKey {
    /// Serialize this key to a JSON document.
    pub fn to_document(&self) -> Result<String> {
        KeyDocument::new(&self.e, &self.n).to_json()
    }

    /// Deserialize a key from a JSON document.
    pub fn from_document(json: &str) -> Result<Self> {
        let (e, n) = KeyDocument::from_json(json)?.decode()?;
        Ok(Self { e, n })
    }
}

impl RsaPrivateKey {
    /// Serialize this key to a JSON document.
    pub fn to_document(&self) -> Result<String> {
        KeyDocument::new(&self.d, &self.n).to_json()
    }

    /// Deserialize a key from a JSON document.
    pub fn from_document(json: &str) -> Result<Self> {
        let (d, n) = KeyDocument::from_json(json)?.decode()?;
        Ok(Self { d, n })
    }
}

impl RsaKeyPair {
    /// Serialize both halves as (slot, document) pairs, ready for whatever
    /// key-value persistence the host provides.
    pub fn to_slot_documents(&self) -> Result<Vec<(&'static str, String)>> {
        Ok(vec![
            (PUBLIC_KEY_SLOT, self.public_key.to_document()?),
            (PRIVATE_KEY_SLOT, self.private_key.to_document()?),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::keygen::generate_keypair;

    #[test]
    fn test_public_key_document_round_trip() {
        let keypair = generate_keypair(64).unwrap();
        let json = keypair.public_key.to_document().unwrap();
        let restored = RsaPublicKey::from_document(&json).unwrap();
        assert_eq!(keypair.public_key, restored);
    }

    #[test]
    fn test_private_key_document_round_trip() {
        let keypair = generate_keypair(64).unwrap();
        let json = keypair.private_key.to_document().unwrap();
        let restored = RsaPrivateKey::from_document(&json).unwrap();
        assert_eq!(keypair.private_key, restored);
    }

    #[test]
    fn test_document_shape() {
        let json = RsaPublicKey {
            e: BigUint::from(65537u32),
            n: BigUint::from(3233u16),
        }
        .to_document()
        .unwrap();

        assert_eq!(json, r#"["65537","3233"]"#);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = RsaPublicKey::from_document("not json");
        assert!(matches!(result, Err(Error::Document(_))));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let result = RsaPublicKey::from_document(r#"["1","2","3"]"#);
        assert!(matches!(
            result,
            Err(Error::DocumentShape {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_rejects_non_decimal_components() {
        let result = RsaPrivateKey::from_document(r#"["abc","12"]"#);
        assert!(matches!(result, Err(Error::Format(_))));
    }

    #[test]
    fn test_slot_documents() {
        let keypair = generate_keypair(64).unwrap();
        let slots = keypair.to_slot_documents().unwrap();

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].0, PUBLIC_KEY_SLOT);
        assert_eq!(slots[1].0, PRIVATE_KEY_SLOT);
    }
}

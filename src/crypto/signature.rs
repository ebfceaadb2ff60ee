// Ed25519 keys and signatures on top of ring
use crate::error::{Error, Result};
use crate::utils;
use ring::rand::{SecureRandom, SystemRandom};
use ring::signature::{self, KeyPair};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub const SEED_LEN: usize = 32;
pub const PUBLIC_KEY_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;

/// Ed25519 keypair kept as its 32-byte seed and the derived public key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ed25519Keypair {
    seed: [u8; SEED_LEN],
    #[zeroize(skip)]
    public: [u8; PUBLIC_KEY_LEN],
}

impl Ed25519Keypair {
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        let seed: Zeroizing<[u8; SEED_LEN]> = Zeroizing::new(utils::to_array("seed", seed)?);

        let key_pair = signature::Ed25519KeyPair::from_seed_unchecked(&seed[..])
            .map_err(|e| Error::CryptoError(format!("Rejected Ed25519 seed: {}", e)))?;

        let public = utils::to_array("public key", key_pair.public_key().as_ref())?;

        Ok(Self { seed: *seed, public })
    }

    // Seed drawn from the system RNG
    pub fn generate() -> Result<Self> {
        let rng = SystemRandom::new();
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        rng.fill(&mut seed[..])
            .map_err(|_| Error::CryptoError("Failed to generate Ed25519 seed".to_string()))?;

        Self::from_seed(&seed[..])
    }

    pub fn public_key(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.public
    }

    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let key_pair = signature::Ed25519KeyPair::from_seed_and_public_key(&self.seed, &self.public)
            .map_err(|e| Error::CryptoError(format!("Invalid Ed25519 keypair: {}", e)))?;

        Ok(key_pair.sign(message).as_ref().to_vec())
    }
}

impl fmt::Debug for Ed25519Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ed25519Keypair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

// Wrong-length signatures are a failed verification, not an error
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> Result<bool> {
    utils::validate_length("public key", public_key, PUBLIC_KEY_LEN)?;

    if signature.len() != SIGNATURE_LEN {
        return Ok(false);
    }

    let public_key = signature::UnparsedPublicKey::new(&signature::ED25519, public_key);
    Ok(public_key.verify(message, signature).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // RFC 8032, section 7.1, test 1
    const SECRET: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
    const PUBLIC: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
                             5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

    #[test]
    fn test_rfc8032_vector() {
        let keypair = Ed25519Keypair::from_seed(&hex::decode(SECRET).unwrap()).unwrap();
        assert_eq!(hex::encode(keypair.public_key()), PUBLIC);

        let signature = keypair.sign(b"").unwrap();
        assert_eq!(hex::encode(&signature), SIGNATURE);

        assert!(verify(&signature, b"", keypair.public_key()).unwrap());
        assert!(!verify(&signature, b"tampered", keypair.public_key()).unwrap());
    }

    #[test]
    fn test_invalid_lengths() {
        assert!(matches!(
            Ed25519Keypair::from_seed(&[0u8; 31]),
            Err(Error::InvalidInput(_))
        ));

        let keypair = Ed25519Keypair::generate().unwrap();
        let signature = keypair.sign(b"msg").unwrap();

        assert!(!verify(&signature[..63], b"msg", keypair.public_key()).unwrap());
        assert!(verify(&signature, b"msg", &[0u8; 31]).is_err());
    }

    #[test]
    fn test_debug_hides_seed() {
        let keypair = Ed25519Keypair::from_seed(&hex::decode(SECRET).unwrap()).unwrap();
        let rendered = format!("{:?}", keypair);
        assert!(rendered.contains("public"));
        assert!(!rendered.contains("seed"));
    }
}

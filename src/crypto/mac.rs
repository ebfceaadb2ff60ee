// HMAC and password-based key derivation
use crate::error::{Error, Result};
use ring::{hmac, pbkdf2};
use std::num::NonZeroU32;

pub const PBKDF2_OUTPUT_LEN: usize = 64;
pub const SCRYPT_OUTPUT_LEN: usize = 64;

pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::sign(&key, data).as_ref().to_vec()
}

pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA512, key);
    hmac::sign(&key, data).as_ref().to_vec()
}

// PBKDF2 with HMAC-SHA512, always 64 bytes of output
pub fn pbkdf2_sha512(password: &[u8], salt: &[u8], rounds: u32) -> Result<Vec<u8>> {
    let rounds = NonZeroU32::new(rounds)
        .ok_or_else(|| Error::InvalidInput("PBKDF2 rounds must be greater than zero".to_string()))?;

    let mut output = vec![0u8; PBKDF2_OUTPUT_LEN];
    pbkdf2::derive(pbkdf2::PBKDF2_HMAC_SHA512, rounds, salt, password, &mut output);
    Ok(output)
}

pub fn scrypt(password: &[u8], salt: &[u8], log2n: u8, r: u32, p: u32) -> Result<Vec<u8>> {
    if log2n == 0 || r == 0 || p == 0 {
        return Err(Error::InvalidInput(format!(
            "scrypt needs log2n, r and p above zero, got log2n={} r={} p={}",
            log2n, r, p
        )));
    }

    let params = ::scrypt::Params::new(log2n, r, p, SCRYPT_OUTPUT_LEN)
        .map_err(|e| Error::InvalidInput(format!("Invalid scrypt parameters: {}", e)))?;

    let mut output = vec![0u8; SCRYPT_OUTPUT_LEN];
    ::scrypt::scrypt(password, salt, &params, &mut output)
        .map_err(|e| Error::CryptoError(format!("scrypt failed: {}", e)))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hmac_sha256_rfc4231_case2() {
        let tag = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            hex::encode(tag),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_hmac_sha512_length() {
        assert_eq!(hmac_sha512(b"key", b"data").len(), 64);
    }

    #[test]
    fn test_pbkdf2() {
        let a = pbkdf2_sha512(b"password", b"salt", 2).unwrap();
        let b = pbkdf2_sha512(b"password", b"salt", 2).unwrap();
        let c = pbkdf2_sha512(b"password", b"salt", 3).unwrap();

        assert_eq!(a.len(), PBKDF2_OUTPUT_LEN);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_pbkdf2_zero_rounds() {
        assert!(matches!(
            pbkdf2_sha512(b"password", b"salt", 0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_scrypt_rfc7914_vector() {
        // RFC 7914, section 12: P="", S="", N=16, r=1, p=1
        let derived = scrypt(b"", b"", 4, 1, 1).unwrap();
        assert_eq!(
            hex::encode(derived),
            "77d6576238657b203b19ca42c18a0497f16b4844e3074ae8dfdffa3fede21442\
             fcd0069ded0948f8326a753a0fc81f17e8d3e0fb2e0d3628cf35e20c38d18906"
        );
    }

    #[test]
    fn test_scrypt_invalid_params() {
        assert!(matches!(
            scrypt(b"password", b"salt", 4, 0, 1),
            Err(Error::InvalidInput(_))
        ));
    }
}

//! API Key generation and validation

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

const API_KEY_PREFIX: &str = "ald_";
const API_KEY_VERSION: &str = "01";

/// API Key manager for generation and validation
#[derive(Clone)]
pub struct ApiKeyManager {
    hmac_secret: Vec<u8>,
}

impl ApiKeyManager {
    /// Create a new API key manager
    pub fn new(secret: &str) -> Self {
        Self {
            hmac_secret: secret.as_bytes().to_vec(),
        }
    }

    /// Generate a new API key
    /// Returns (full_key, key_hash)
    pub fn generate_key(&self) -> Result<(String, String), ApiKeyError> {
        let key_id = Uuid::new_v4();
        let random_bytes: [u8; 16] = rand::random();
        let random_hex = hex::encode(random_bytes);

        // Key payload: version + uuid + random
        let payload = format!("{}{}{}", API_KEY_VERSION, key_id.simple(), random_hex);

        let mut mac = HmacSha256::new_from_slice(&self.hmac_secret)
            .map_err(|_| ApiKeyError::HmacInitFailed)?;
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();
        let sig_hex = hex::encode(&signature[..8]);

        let full_key = format!("{}{}{}", API_KEY_PREFIX, payload, sig_hex);
        let key_hash = self.hash_key(&full_key);

        Ok((full_key, key_hash))
    }

    /// Validate an API key's format and signature.
    ///
    /// Cheap local check that runs before any database lookup; a valid
    /// signature still needs a matching stored hash to resolve to a user.
    pub fn validate_key(&self, key: &str) -> Result<bool, ApiKeyError> {
        if !key.starts_with(API_KEY_PREFIX) {
            return Ok(false);
        }

        let key_body = &key[API_KEY_PREFIX.len()..];

        // version(2) + uuid(32) + random(32) + signature(16) = 82 chars
        if key_body.len() != 82 {
            return Ok(false);
        }

        let payload = &key_body[..66];
        let provided_sig = &key_body[66..];

        let mut mac = HmacSha256::new_from_slice(&self.hmac_secret)
            .map_err(|_| ApiKeyError::HmacInitFailed)?;
        mac.update(payload.as_bytes());
        let expected_sig = mac.finalize().into_bytes();
        let expected_sig_hex = hex::encode(&expected_sig[..8]);

        Ok(constant_time_compare(provided_sig, &expected_sig_hex))
    }

    /// Hash an API key for storage
    pub fn hash_key(&self, key: &str) -> String {
        use sha2::Digest;
        let mut hasher = Sha256::new();
        hasher.update(key.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        // Dummy comparison to avoid length-based timing attacks
        let dummy = vec![0u8; a.len()];
        let _ = a.as_bytes().ct_eq(&dummy);
        return false;
    }

    a.as_bytes().ct_eq(b.as_bytes()).into()
}

#[derive(Debug, thiserror::Error)]
pub enum ApiKeyError {
    #[error("HMAC initialization failed")]
    HmacInitFailed,
}

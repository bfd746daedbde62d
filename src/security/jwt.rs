/// JWT access-token generation and validation using HS256.
///
/// Token issuance for end users lives in the auth collaborator; this service
/// validates incoming bearer tokens and mints tokens for tooling and tests.
use anyhow::{anyhow, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, TokenData, Validation};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use uuid::Uuid;

const DEFAULT_ACCESS_TOKEN_TTL_SECS: i64 = 3600;

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

// Thread-safe mutable storage for the signing secret loaded at startup
static JWT_KEYS: Lazy<RwLock<Option<(EncodingKey, DecodingKey)>>> =
    Lazy::new(|| RwLock::new(None));

/// Initialize the signing secret.
/// Must be called during application startup before any JWT operations.
pub fn initialize_secret(secret: &str) -> Result<()> {
    if secret.is_empty() {
        return Err(anyhow!("JWT secret must not be empty"));
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());

    let mut keys = JWT_KEYS
        .write()
        .map_err(|e| anyhow!("Failed to acquire write lock on JWT keys: {}", e))?;
    *keys = Some((encoding_key, decoding_key));

    Ok(())
}

fn get_encoding_key() -> Result<EncodingKey> {
    let keys = JWT_KEYS
        .read()
        .map_err(|e| anyhow!("Failed to acquire read lock on JWT keys: {}", e))?;

    keys.as_ref()
        .map(|(enc, _)| enc.clone())
        .ok_or_else(|| anyhow!("JWT keys not initialized. Call initialize_secret() during startup"))
}

fn get_decoding_key() -> Result<DecodingKey> {
    let keys = JWT_KEYS
        .read()
        .map_err(|e| anyhow!("Failed to acquire read lock on JWT keys: {}", e))?;

    keys.as_ref()
        .map(|(_, dec)| dec.clone())
        .ok_or_else(|| anyhow!("JWT keys not initialized. Call initialize_secret() during startup"))
}

/// Generate an access token for a user id.
pub fn create_access_token(user_id: Uuid) -> Result<String> {
    create_access_token_with_ttl(user_id, DEFAULT_ACCESS_TOKEN_TTL_SECS)
}

pub fn create_access_token_with_ttl(user_id: Uuid, ttl_secs: i64) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(ttl_secs)).timestamp(),
    };

    encode(&Header::default(), &claims, &get_encoding_key()?)
        .map_err(|e| anyhow!("Failed to encode token: {}", e))
}

/// Validate a bearer token and return its claims.
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    decode::<Claims>(token, &get_decoding_key()?, &Validation::default())
        .map_err(|e| anyhow!("Invalid token: {}", e))
}

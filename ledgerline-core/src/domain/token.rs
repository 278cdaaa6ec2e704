//! Session token codec
//!
//! Tokens are URL-safe base64 over a JSON payload. There is no signature:
//! this reproduces the demo backend's behavior and is NOT a security
//! primitive. Do not reuse for a real system.

use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::{Role, User};

const B64: base64::engine::GeneralPurpose = base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Claims carried inside an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    /// Subject (user id)
    pub sub: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Issued-at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

impl TokenPayload {
    /// Derive the user this payload authenticates
    pub fn user(&self) -> User {
        User {
            id: self.sub.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// A stored bearer token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: String,
}

impl AuthToken {
    /// Time remaining before expiry; negative once expired
    pub fn time_until_expiry(&self, now: DateTime<Utc>) -> Duration {
        self.expires_at - now
    }
}

/// Mints and decodes session tokens with a fixed expiration window
#[derive(Debug, Clone, Copy)]
pub struct TokenCodec {
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// The configured expiration window
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Mint a token for the given user, valid from now until now + ttl
    pub fn mint(&self, user: &User) -> AuthToken {
        self.mint_at(user, Utc::now())
    }

    /// Mint with an explicit issue time (the anchor for `iat`/`exp`)
    pub fn mint_at(&self, user: &User, now: DateTime<Utc>) -> AuthToken {
        let expires_at = now + self.ttl;
        let payload = TokenPayload {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };
        AuthToken {
            access_token: Self::encode(&payload),
            expires_at,
            user_id: user.id.clone(),
        }
    }

    /// Serialize a payload into its wire form without any expiry checks
    pub fn encode(payload: &TokenPayload) -> String {
        // TokenPayload has no map fields, serialization cannot fail
        let json = serde_json::to_vec(payload).expect("token payload serializes");
        B64.encode(json)
    }

    /// Decode an access token, returning `None` for malformed or expired input
    ///
    /// Never panics and never returns an error: garbage in means no session.
    pub fn decode(&self, access_token: &str) -> Option<TokenPayload> {
        self.decode_at(access_token, Utc::now())
    }

    /// Decode against an explicit clock
    pub fn decode_at(&self, access_token: &str, now: DateTime<Utc>) -> Option<TokenPayload> {
        let bytes = B64.decode(access_token).ok()?;
        let payload: TokenPayload = serde_json::from_slice(&bytes).ok()?;
        if now.timestamp() >= payload.exp {
            return None;
        }
        Some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_user() -> User {
        User {
            id: "u_123".to_string(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            role: Role::User,
        }
    }

    fn codec() -> TokenCodec {
        TokenCodec::new(Duration::minutes(15))
    }

    #[test]
    fn test_mint_decode_round_trip() {
        let token = codec().mint(&demo_user());
        let payload = codec().decode(&token.access_token).unwrap();

        assert_eq!(payload.sub, "u_123");
        assert_eq!(payload.email, "test@example.com");
        assert_eq!(payload.role, Role::User);
        assert!(payload.exp > payload.iat);
        assert_eq!(payload.user(), demo_user());
    }

    #[test]
    fn test_expiry_window_is_ttl() {
        let now = Utc::now();
        let token = codec().mint_at(&demo_user(), now);
        assert_eq!(token.expires_at - now, Duration::minutes(15));
    }

    #[test]
    fn test_expired_token_decodes_to_none() {
        let now = Utc::now();
        let token = codec().mint_at(&demo_user(), now - Duration::minutes(16));
        assert!(codec().decode(&token.access_token).is_none());
    }

    #[test]
    fn test_token_expiring_exactly_now_is_invalid() {
        let now = Utc::now();
        let token = codec().mint_at(&demo_user(), now - Duration::minutes(15));
        // now >= exp means invalid
        assert!(codec().decode_at(&token.access_token, token.expires_at).is_none());
    }

    #[test]
    fn test_malformed_tokens_decode_to_none() {
        let c = codec();
        assert!(c.decode("").is_none());
        assert!(c.decode("not!base64!!").is_none());
        // Valid base64 of invalid JSON
        let garbage = B64.encode(b"hello world");
        assert!(c.decode(&garbage).is_none());
        // Valid JSON with missing claims
        let partial = B64.encode(br#"{"sub":"u_123"}"#);
        assert!(c.decode(&partial).is_none());
    }
}

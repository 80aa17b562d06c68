//! Bearer-token helpers for integration tests.
//!
//! The identity service is external in production; tests sign their own
//! HS256 tokens with a known secret so token validation accepts them end
//! to end.

use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use uuid::Uuid;

/// Shared secret used by tests that mint their own tokens.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-tests-only";

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    exp: u64,
}

/// Configurable identity minted into test bearer tokens.
pub struct MockBearer {
    pub user_id: Uuid,
}

impl MockBearer {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id }
    }

    /// Sign a token for this identity, valid for one hour.
    pub fn token(&self, secret: &str) -> String {
        let exp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system clock before UNIX epoch")
            .as_secs()
            + 3600;
        let claims = TestClaims {
            sub: self.user_id.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to sign test token")
    }

    /// An already-expired token, for negative tests.
    pub fn expired_token(&self, secret: &str) -> String {
        let claims = TestClaims {
            sub: self.user_id.to_string(),
            exp: 1_000_000,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to sign test token")
    }
}

//! Signed bearer tokens.
//!
//! The subject of every token is the plain string `email:password:role`.
//! Signature and expiry are checked on decode; whether the password still
//! matches is decided by [`crate::auth::AuthService`].

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use skywings_shared::models::Role;
use skywings_shared::Masked;

use crate::{CoreError, CoreResult};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: usize,
    pub exp: usize,
}

/// The credentials carried in a token subject.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenPayload {
    pub email: String,
    pub password: Masked<String>,
    pub role: Role,
}

impl TokenPayload {
    pub fn new(email: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            password: Masked(password.into()),
            role,
        }
    }

    pub fn subject(&self) -> String {
        format!("{}:{}:{}", self.email, self.password.expose(), self.role)
    }

    /// Email is everything before the first colon and role everything after
    /// the last one, so passwords may themselves contain colons.
    pub fn parse(subject: &str) -> CoreResult<Self> {
        let malformed = || CoreError::Unauthorized("malformed token subject".to_string());

        let (email, rest) = subject.split_once(':').ok_or_else(malformed)?;
        let (password, role) = rest.rsplit_once(':').ok_or_else(malformed)?;
        if email.is_empty() {
            return Err(malformed());
        }
        let role = role.parse::<Role>().map_err(|_| malformed())?;

        Ok(Self::new(email, password, role))
    }
}

#[derive(Clone)]
pub struct TokenCodec {
    secret: String,
    expiration_seconds: u64,
}

impl TokenCodec {
    pub fn new(secret: impl Into<String>, expiration_seconds: u64) -> Self {
        Self {
            secret: secret.into(),
            expiration_seconds,
        }
    }

    pub fn issue(&self, payload: &TokenPayload) -> CoreResult<String> {
        let now = Utc::now().timestamp() as usize;
        let claims = TokenClaims {
            sub: payload.subject(),
            iat: now,
            exp: now + self.expiration_seconds as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| CoreError::InternalError(format!("Token encoding failed: {}", e)))
    }

    /// Verify signature and expiry, then split the subject.
    pub fn decode(&self, token: &str) -> CoreResult<TokenPayload> {
        let token_data = decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| CoreError::Unauthorized(e.to_string()))?;

        TokenPayload::parse(&token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_then_decode() {
        let payload = TokenPayload::new("asha@example.com", "pw", Role::Customer);
        let token = codec().issue(&payload).unwrap();

        let decoded = codec().decode(&token).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_password_may_contain_colons() {
        let parsed = TokenPayload::parse("ops@skywings.io:a:b:c:ADMIN").unwrap();
        assert_eq!(parsed.email, "ops@skywings.io");
        assert_eq!(parsed.password.expose(), "a:b:c");
        assert_eq!(parsed.role, Role::Admin);
    }

    #[test]
    fn test_malformed_subjects_are_rejected() {
        assert!(TokenPayload::parse("no-colons").is_err());
        assert!(TokenPayload::parse("a@b.c:pw").is_err());
        assert!(TokenPayload::parse("a@b.c:pw:PILOT").is_err());
        assert!(TokenPayload::parse(":pw:CUSTOMER").is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let payload = TokenPayload::new("asha@example.com", "pw", Role::Customer);
        let token = codec().issue(&payload).unwrap();

        let other = TokenCodec::new("another-secret", 3600);
        assert!(matches!(other.decode(&token), Err(CoreError::Unauthorized(_))));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let past = (Utc::now().timestamp() - 7200) as usize;
        let claims = TokenClaims {
            sub: "asha@example.com:pw:CUSTOMER".to_string(),
            iat: past,
            exp: past + 60,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(codec().decode(&token).is_err());
    }

    #[test]
    fn test_debug_does_not_leak_password() {
        let payload = TokenPayload::new("asha@example.com", "pw", Role::Customer);
        assert!(!format!("{:?}", payload).contains("pw\""));
    }
}

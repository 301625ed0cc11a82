//! JWT token management

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuthError;

/// Default token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
/// Longest token lifetime accepted from configuration (1 year)
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 3600;

/// JWT claims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// Parse the subject back into a user ID
    pub fn user_id(&self) -> Result<i64, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }
}

/// JWT manager for token generation and validation
///
/// Built once at startup from the process-wide signing secret.
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_secs: i64,
}

impl JwtManager {
    /// Create a new JWT manager
    pub fn new(secret: &str, token_ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl_secs,
        }
    }

    /// Token lifetime in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl_secs
    }

    /// Generate a JWT token for a user
    pub fn generate_token(&self, user_id: i64) -> Result<String, AuthError> {
        self.generate_token_at(user_id, Utc::now())
    }

    /// Generate a JWT token for a user as if issued at `issued_at`
    pub fn generate_token_at(
        &self,
        user_id: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<String, AuthError> {
        let exp = Duration::try_seconds(self.token_ttl_secs)
            .and_then(|ttl| issued_at.checked_add_signed(ttl))
            .ok_or_else(|| {
                AuthError::TokenIssue(format!(
                    "token lifetime of {}s is out of range",
                    self.token_ttl_secs
                ))
            })?;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: issued_at.timestamp(),
        };

        debug!("Generating token for user id: {}", user_id);

        encode(&Header::default(), &claims, &self.encoding_key).map_err(AuthError::Jwt)
    }

    /// Validate a JWT token and return claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                    _ => AuthError::Jwt(e),
                }
            })?;

        // Check expiration
        let now = Utc::now().timestamp();
        if token_data.claims.exp < now {
            return Err(AuthError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}

//! Credential manager: registration, login and logout

use keyturn_db::{NewUser, UserStore};
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

use crate::error::AuthError;
use crate::jwt::JwtManager;
use crate::password::{hash_password, verify_password};
use crate::validation::{MAX_PASSWORD_LENGTH, validate_password, validate_username};

/// Hash verified against when the requested user does not exist, so a
/// missing user costs the same as a wrong password.
fn dummy_hash() -> Result<&'static str, AuthError> {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();

    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash.as_str());
    }
    let hash = hash_password("timing-attack-prevention")?;
    Ok(DUMMY_HASH.get_or_init(|| hash).as_str())
}

/// A freshly issued access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Registers users and exchanges credentials for access tokens
#[derive(Clone)]
pub struct CredentialManager {
    store: Arc<dyn UserStore>,
    jwt: Arc<JwtManager>,
}

impl CredentialManager {
    pub fn new(store: Arc<dyn UserStore>, jwt: Arc<JwtManager>) -> Self {
        Self { store, jwt }
    }

    /// Register a new user
    ///
    /// Validates the input, rejects taken usernames and stores only the
    /// salted hash of the password.
    pub async fn register(&self, username: &str, password: &str) -> Result<(), AuthError> {
        validate_username(username)?;
        validate_password(password)?;

        if self.store.find_by_username(username).await?.is_some() {
            debug!("Registration rejected, username taken: {}", username);
            return Err(AuthError::DuplicateUser);
        }

        let password_hash = hash_password(password)?;
        let user = self
            .store
            .create(NewUser {
                username: username.to_string(),
                password_hash,
            })
            .await?;

        info!("Registered user {} (id {})", user.username, user.id);
        Ok(())
    }

    /// Verify credentials and issue an access token
    ///
    /// Unknown users and wrong passwords fail with the same error.
    pub async fn login(&self, username: &str, password: &str) -> Result<IssuedToken, AuthError> {
        if password.len() > MAX_PASSWORD_LENGTH {
            return Err(AuthError::InvalidCredentials);
        }

        debug!("Login attempt for user: {}", username);

        let user = self.store.find_by_username(username).await?;

        let hash_to_verify = match &user {
            Some(u) => u.password_hash.as_str(),
            None => dummy_hash()?,
        };
        let password_valid = verify_password(password, hash_to_verify)?;

        let user = match (user, password_valid) {
            (Some(u), true) => u,
            _ => {
                warn!("Failed login for user: {}", username);
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.jwt.generate_token(user.id)?;

        info!("User {} logged in successfully", user.username);

        Ok(IssuedToken {
            token,
            expires_in: self.jwt.token_ttl_secs(),
        })
    }

    /// Acknowledge a logout
    ///
    /// Tokens are not tracked server-side; the client discards its token.
    pub fn logout(&self) {
        debug!("Logout acknowledged");
    }
}

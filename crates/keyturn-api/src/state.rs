//! Application state

use keyturn_auth::{CredentialManager, JwtManager, TokenGate};
use keyturn_db::UserStore;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialManager,
    pub gate: TokenGate,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, jwt: Arc<JwtManager>) -> Self {
        Self {
            credentials: CredentialManager::new(store.clone(), jwt.clone()),
            gate: TokenGate::new(jwt, store),
        }
    }
}

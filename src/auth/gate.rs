use tracing::{debug, instrument};

use super::error::AuthError;
use super::token::TokenService;
use crate::clients::DirectoryClient;
use crate::domain::{Role, User};

/// Outcome of resolving a bearer token against a role requirement.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessDecision {
    Authorized(User),
    Unauthenticated,
    Forbidden(Role),
}

impl AccessDecision {
    pub fn into_result(self) -> Result<User, AuthError> {
        match self {
            AccessDecision::Authorized(user) => Ok(user),
            AccessDecision::Unauthenticated => Err(AuthError::Unauthenticated),
            AccessDecision::Forbidden(role) => Err(AuthError::Forbidden(role)),
        }
    }
}

/// Resolves bearer tokens to users and enforces role requirements in front
/// of every gated operation.
#[derive(Clone)]
pub struct AccessGate {
    tokens: TokenService,
    directory: DirectoryClient,
}

impl AccessGate {
    pub fn new(tokens: TokenService, directory: DirectoryClient) -> Self {
        Self { tokens, directory }
    }

    /// Resolves a bearer token to the user it asserts. A token whose user no
    /// longer exists in the directory is treated the same as an invalid one.
    #[instrument(skip(self, bearer))]
    pub async fn resolve(&self, bearer: &str) -> AccessDecision {
        let claims = match self.tokens.verify(bearer) {
            Ok(claims) => claims,
            Err(_) => {
                debug!("Token verification failed");
                return AccessDecision::Unauthenticated;
            }
        };
        match self.directory.get_user(claims.sub).await {
            Ok(Some(user)) => AccessDecision::Authorized(user),
            Ok(None) => {
                debug!("Token subject no longer exists");
                AccessDecision::Unauthenticated
            }
            Err(_) => AccessDecision::Unauthenticated,
        }
    }

    /// Resolves the token and additionally requires the user to hold `role`.
    #[instrument(skip(self, bearer))]
    pub async fn require_role(&self, bearer: &str, role: Role) -> AccessDecision {
        match self.resolve(bearer).await {
            AccessDecision::Authorized(user) if user.role == role => {
                AccessDecision::Authorized(user)
            }
            AccessDecision::Authorized(_) => AccessDecision::Forbidden(role),
            other => other,
        }
    }
}

//! Authentication service — registration, login, and bearer-token
//! authentication.

use fitbook_core::error::FitbookResult;
use fitbook_core::id;
use fitbook_core::models::user::{User, UserRole};
use fitbook_core::repository::UserRepository;
use tracing::info;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password;
use crate::token;

/// Input for the registration flow.
#[derive(Debug)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// Successful login result.
#[derive(Debug)]
pub struct LoginOutput {
    /// Signed JWT access token.
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    /// The authenticated user.
    pub user: User,
}

/// Authentication service.
///
/// Generic over the user repository so the auth layer has no
/// dependency on the storage crate.
#[derive(Clone)]
pub struct AuthService<U> {
    users: U,
    config: AuthConfig,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(users: U, config: AuthConfig) -> Self {
        Self { users, config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Register a new user with a hashed password.
    pub async fn register(&self, input: RegisterInput) -> FitbookResult<User> {
        if input.password.len() < self.config.min_password_length {
            return Err(AuthError::WeakPassword {
                min: self.config.min_password_length,
            }
            .into());
        }

        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = password::hash_password(&input.password)?;
        let user = User::new(id::user_id(), input.email, password_hash, input.role);
        info!(user_id = %user.user_id, "user registered");
        self.users.save(user).await
    }

    /// Authenticate with email + password and issue an access token.
    ///
    /// An unknown email and a wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> FitbookResult<LoginOutput> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = password::verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        let access_token =
            token::issue_access_token(&user.user_id, &user.email, user.role, &self.config)?;
        info!(user_id = %user.user_id, "user logged in");

        Ok(LoginOutput {
            access_token,
            expires_in: self.config.access_token_lifetime_secs,
            user,
        })
    }

    /// Resolve a bearer token to its active user.
    ///
    /// Verifies signature, expiry, and issuer, then looks up the
    /// subject. Backs the HTTP layer's request authentication.
    pub async fn authenticate(&self, token: &str) -> FitbookResult<User> {
        let claims = token::decode_access_token(token, &self.config)?;

        let user = self
            .users
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AuthError::TokenInvalid("unknown subject".into()))?;

        if !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        Ok(user)
    }
}

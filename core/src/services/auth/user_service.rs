//! User registration and sign-in orchestration

use std::sync::Arc;

use crate::domain::entities::{Account, User};
use crate::domain::value_objects::{AccountId, Email};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::auth::{authenticate, UserDirectory};
use crate::services::clock::{Clock, SystemClock};
use crate::services::password;
use crate::services::token::TokenService;

/// Raw registration input for a user account
#[derive(Debug, Clone)]
pub struct UserRegistration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// An authenticated user together with its bearer token
#[derive(Debug, Clone)]
pub struct UserSession {
    pub user: User,
    pub token: String,
}

/// Orchestrates the user-facing authentication flows
///
/// Each flow is a linear sequence with early exit on failure; nothing is
/// shared between requests beyond the repository and the signing key.
pub struct UserAuthService<R: UserRepository> {
    repository: Arc<R>,
    directory: UserDirectory<R>,
    token_service: Arc<TokenService>,
    clock: Arc<dyn Clock>,
}

impl<R: UserRepository> UserAuthService<R> {
    /// Create a service using the system clock
    pub fn new(repository: Arc<R>, token_service: Arc<TokenService>) -> Self {
        Self::with_clock(repository, token_service, Arc::new(SystemClock))
    }

    /// Create a service with an explicit clock
    pub fn with_clock(
        repository: Arc<R>,
        token_service: Arc<TokenService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            directory: UserDirectory::new(repository.clone()),
            repository,
            token_service,
            clock,
        }
    }

    /// Register a new user
    ///
    /// Duplicate check (advisory) -> hash password -> build entity with a
    /// freshly minted identifier -> persist -> issue token. The raw
    /// password is dropped as soon as the digest exists.
    #[tracing::instrument(name = "UserAuthService::register", skip_all)]
    pub async fn register(&self, registration: UserRegistration) -> DomainResult<UserSession> {
        let email = Email::parse(registration.email.clone())?;

        if self.directory.exists_by_email(&email).await? {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        let password_hash = password::hash_password(&registration.password)?;

        let now = self.clock.now();
        let user = User::new(
            0,
            AccountId::generate(),
            registration.name,
            registration.email,
            password_hash,
            now,
            now,
        )?;

        let user = self.repository.create(user).await?;
        let token = self.token_service.issue(user.account_id())?;

        Ok(UserSession { user, token })
    }

    /// Sign in with email and password
    ///
    /// Unknown email, malformed email and wrong password all surface the
    /// same `InvalidCredentials` so account existence is not inferable.
    #[tracing::instrument(name = "UserAuthService::sign_in", skip_all)]
    pub async fn sign_in(&self, email: &str, password: &str) -> DomainResult<UserSession> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self.directory.find_by_email(&email).await?;
        let user = authenticate(user, password)?;

        let token = self.token_service.issue(user.account_id())?;

        Ok(UserSession { user, token })
    }

    /// Look up a user by its external identifier
    ///
    /// Token verification is the boundary layer's job; this only parses
    /// the identifier and fetches. `Ok(None)` maps to not-found there.
    #[tracing::instrument(name = "UserAuthService::get_by_id", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let account_id = AccountId::parse(id)?;
        self.repository.find_by_account_id(account_id).await
    }
}

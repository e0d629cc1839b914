use academy_core::model::{LoginDraft, RegistrationDraft, Session, UserAccount, UserDirectory};
use storage::{Persistence, StoreKey};

use crate::error::AuthServiceError;

/// Local, simulated sign-up and sign-in. Passwords are compared as stored.
#[derive(Clone)]
pub struct AuthService {
    store: Persistence,
}

impl AuthService {
    #[must_use]
    pub fn new(store: Persistence) -> Self {
        Self { store }
    }

    async fn users(&self) -> UserDirectory {
        self.store.get(StoreKey::Users, UserDirectory::new()).await
    }

    /// Validate and insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Account` for missing fields or a short
    /// password, `AuthServiceError::DuplicateEmail` if the normalized email is
    /// taken, and `AuthServiceError::Storage` if the directory cannot be read
    /// or written. Nothing is stored on error.
    pub async fn register(&self, draft: RegistrationDraft) -> Result<UserAccount, AuthServiceError> {
        let account = draft.validate()?;
        self.store
            .update(StoreKey::Users, UserDirectory::new(), |users| {
                if users.contains_key(account.email()) {
                    return Err(AuthServiceError::DuplicateEmail);
                }
                users.insert(account.email().clone(), account.clone());
                Ok(())
            })
            .await?;
        tracing::info!(email = %account.email(), "account registered");
        Ok(account)
    }

    /// Start a session for matching credentials.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::InvalidCredentials` when no account matches;
    /// any existing session is left as it was. Returns
    /// `AuthServiceError::Storage` if the session cannot be written.
    pub async fn login(&self, draft: LoginDraft) -> Result<Session, AuthServiceError> {
        let users = self.users().await;
        let Some(account) = draft.authenticate(&users) else {
            tracing::info!(email = %draft.email(), "login rejected");
            return Err(AuthServiceError::InvalidCredentials);
        };
        let session = Session::for_account(account);
        self.store.set(StoreKey::Session, &session).await?;
        tracing::info!(email = %session.email(), "signed in");
        Ok(session)
    }

    /// Clear the session, whether or not one exists.
    ///
    /// # Errors
    ///
    /// Returns `AuthServiceError::Storage` if the delete fails.
    pub async fn logout(&self) -> Result<(), AuthServiceError> {
        self.store.delete(StoreKey::Session).await?;
        tracing::info!("signed out");
        Ok(())
    }

    pub async fn current_session(&self) -> Option<Session> {
        self.store.get(StoreKey::Session, None).await
    }
}

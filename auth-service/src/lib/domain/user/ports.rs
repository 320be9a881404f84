use async_trait::async_trait;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::user::errors::UserError;

/// Port for the authentication domain service.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new user from candidate credentials.
    ///
    /// Hashes the password and persists the user. Username uniqueness
    /// is enforced atomically by the repository; a duplicate surfaces
    /// as `UsernameAlreadyExists` even if a pre-insert check passed.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Repository operation failed
    async fn register_user(&self, credentials: Credentials) -> Result<User, UserError>;

    /// Look up a user by unique username.
    ///
    /// # Returns
    /// The user, or None when the username is unknown
    ///
    /// # Errors
    /// * `DatabaseError` - Repository operation failed
    async fn find_user_by_username(&self, username: &Username)
        -> Result<Option<User>, UserError>;

    /// Check a plaintext password against a user's stored digest.
    ///
    /// # Returns
    /// True on match, false on mismatch
    ///
    /// # Errors
    /// * `Password` - Stored digest is malformed
    fn verify_password(&self, user: &User, password: &str) -> Result<bool, UserError>;
}

/// Persistence operations for the user aggregate.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// The check for a free username and the insert must be a single
    /// atomic step in the implementation; callers rely on this for
    /// uniqueness under concurrent registrations.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `DatabaseError` - Storage operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by username.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Storage operation failed
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
}

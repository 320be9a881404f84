use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered account. The password is only ever held as
/// a hashed digest; the plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Ensures the username is non-empty (after trimming) and bounded in length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty or whitespace only
    /// * `TooLong` - Username longer than 64 characters
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = username.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(username))
    }

    /// Get username as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Candidate credentials submitted by a client.
///
/// Parsed once at the HTTP boundary and passed explicitly through the
/// guard predicates and handlers, so every stage examines the same
/// username/password pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: Username,
    pub password: String,
}

impl Credentials {
    pub fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty() {
        assert_eq!(
            Username::new(String::new()).unwrap_err(),
            UsernameError::Empty
        );
        assert_eq!(
            Username::new("   ".to_string()).unwrap_err(),
            UsernameError::Empty
        );
    }

    #[test]
    fn test_username_rejects_too_long() {
        let result = Username::new("x".repeat(65));
        assert!(matches!(
            result,
            Err(UsernameError::TooLong { max: 64, actual: 65 })
        ));
    }

    #[test]
    fn test_username_accepts_single_char() {
        let username = Username::new("a".to_string()).unwrap();
        assert_eq!(username.as_str(), "a");
    }
}

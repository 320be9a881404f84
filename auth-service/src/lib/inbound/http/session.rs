//! Session payload types.
//!
//! The service marks a client as authenticated by storing a
//! [`SessionUser`] under [`SESSION_USER_KEY`] in the server-side
//! session. Absence of the key means "not logged in"; the `restricted`
//! middleware and the login/logout handlers are the only writers and
//! readers.

use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::user::models::User;

/// Key under which the authenticated user is stored in the session.
pub const SESSION_USER_KEY: &str = "user";

/// Authenticated user snapshot persisted in the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub username: String,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            username: user.username.as_str().to_string(),
        }
    }
}

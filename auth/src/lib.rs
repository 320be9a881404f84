//! Password hashing library
//!
//! Reusable credential-hashing infrastructure for services that keep
//! their own user stores: Argon2id hashing with a fixed, documented
//! work factor, and verification against stored digests.
//!
//! Services define their own authentication flow (sessions, guards,
//! handlers) and consume only the hashing primitive from here.
//!
//! # Examples
//!
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let digest = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &digest).unwrap());
//! assert!(!hasher.verify("not_my_password", &digest).unwrap());
//! ```

pub mod password;

pub use password::PasswordError;
pub use password::PasswordHasher;

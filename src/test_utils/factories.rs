//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use std::sync::Arc;

use chrono::NaiveDateTime;
use secrecy::SecretString;
use time::Duration;
use uuid::Uuid;

use crate::{
    application::jwt::JwtCodec,
    domain::entities::{
        role::{Role, RoleName},
        user::User,
    },
};

pub const TEST_SECRET: &str = "test-secret-key-that-is-at-least-32-bytes";

pub fn test_secret() -> SecretString {
    SecretString::new(TEST_SECRET.into())
}

/// Codec over `TEST_SECRET` with a one hour lifetime.
pub fn test_codec() -> Arc<JwtCodec> {
    Arc::new(JwtCodec::new(test_secret(), Duration::hours(1)))
}

pub fn create_test_role(name: RoleName) -> Role {
    Role {
        id: Uuid::new_v4(),
        name,
    }
}

/// Create a test user with sensible defaults. The stored hash is a real
/// Argon2 hash of `"password"`.
pub fn create_test_user(overrides: impl FnOnce(&mut User)) -> User {
    let mut user = User {
        id: Uuid::new_v4(),
        username: "testuser".to_string(),
        email: "testuser@example.com".to_string(),
        password_hash: crate::application::password::hash_password("password")
            .expect("hashing a fixed password cannot fail"),
        roles: vec![create_test_role(RoleName::Developer)],
        created_at: Some(test_datetime()),
    };
    overrides(&mut user);
    user
}

pub fn test_datetime() -> NaiveDateTime {
    chrono::DateTime::from_timestamp(1_735_689_600, 0)
        .expect("valid timestamp")
        .naive_utc()
}

//! Test app state builder for HTTP-level testing.
//!
//! `TestAppStateBuilder` assembles a full `AppState` over the in-memory
//! identity and role stores, so routes run through the same wiring as
//! production minus Postgres.

use std::{net::SocketAddr, sync::Arc};

use crate::{
    adapters::http::app_state::AppState,
    domain::entities::{role::RoleName, user::User},
    infra::{config::AppConfig, setup::build_app_state},
    test_utils::{InMemoryRoleRepo, InMemoryUserRepo, TEST_SECRET},
};

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let user = create_test_user(|u| u.username = "alice".to_string());
///
/// let (app_state, users) = TestAppStateBuilder::new()
///     .with_user(user)
///     .build_with_repos();
/// ```
pub struct TestAppStateBuilder {
    users: Vec<User>,
    roles: Vec<RoleName>,
}

impl TestAppStateBuilder {
    /// New builder with the default role seeded and no users.
    pub fn new() -> Self {
        Self {
            users: vec![],
            roles: vec![RoleName::DEFAULT],
        }
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.push(user);
        self
    }

    /// Simulate a deployment where the role seed never ran.
    pub fn without_default_role(mut self) -> Self {
        self.roles.retain(|r| *r != RoleName::DEFAULT);
        self
    }

    /// Build the AppState and hand back the user store for assertions.
    pub fn build_with_repos(self) -> (AppState, Arc<InMemoryUserRepo>) {
        let config = AppConfig::new(
            TEST_SECRET.to_string(),
            3600,
            "postgres://localhost/test".to_string(),
            1,
            SocketAddr::from(([127, 0, 0, 1], 0)),
            "http://localhost:3000",
        )
        .expect("Test config should be valid");

        let users = Arc::new(InMemoryUserRepo::with_users(self.users));
        let roles = Arc::new(InMemoryRoleRepo::with_roles(&self.roles));

        (build_app_state(config, users.clone(), roles), users)
    }

    pub fn build(self) -> AppState {
        self.build_with_repos().0
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! In-memory implementations of the identity store traits.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::auth::{RoleRepo, UserRepo},
    domain::entities::{
        role::{Role, RoleName},
        user::{NewUser, User},
    },
};

use super::create_test_role;

// ============================================================================
// InMemoryUserRepo
// ============================================================================

/// Unique key a racing `save` reports as violated.
#[derive(Clone, Copy, Debug)]
pub enum RaceConflict {
    Username,
    Email,
}

/// Keyed by username. `save` enforces both unique keys like the real schema.
#[derive(Default)]
pub struct InMemoryUserRepo {
    pub users: Mutex<HashMap<String, User>>,
    /// When set, existence checks miss but `save` hits a unique violation,
    /// as if a concurrent registration committed in between.
    racing: Option<RaceConflict>,
}

impl InMemoryUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        let map = users.into_iter().map(|u| (u.username.clone(), u)).collect();
        Self {
            users: Mutex::new(map),
            racing: None,
        }
    }

    pub fn racing(conflict: RaceConflict) -> Self {
        Self {
            users: Mutex::default(),
            racing: Some(conflict),
        }
    }

    pub fn get(&self, username: &str) -> Option<User> {
        self.users.lock().unwrap().get(username).cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepo for InMemoryUserRepo {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        Ok(self.users.lock().unwrap().contains_key(username))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email == email))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.get(username))
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        match self.racing {
            Some(RaceConflict::Username) => return Err(AppError::DuplicateUsername),
            Some(RaceConflict::Email) => return Err(AppError::DuplicateEmail),
            None => {}
        }

        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.username) {
            return Err(AppError::DuplicateUsername);
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateEmail);
        }

        let stored = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            roles: user.roles,
            created_at: Some(chrono::Utc::now().naive_utc()),
        };
        users.insert(stored.username.clone(), stored.clone());
        Ok(stored)
    }
}

// ============================================================================
// InMemoryRoleRepo
// ============================================================================

#[derive(Default)]
pub struct InMemoryRoleRepo {
    pub roles: Mutex<HashMap<RoleName, Role>>,
}

impl InMemoryRoleRepo {
    /// No roles at all, as before the startup seed ran.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only the default role, as after the startup seed.
    pub fn seeded() -> Self {
        Self::with_roles(&[RoleName::DEFAULT])
    }

    pub fn with_roles(names: &[RoleName]) -> Self {
        let map = names.iter().map(|n| (*n, create_test_role(*n))).collect();
        Self {
            roles: Mutex::new(map),
        }
    }

    pub fn count(&self) -> usize {
        self.roles.lock().unwrap().len()
    }
}

#[async_trait]
impl RoleRepo for InMemoryRoleRepo {
    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>> {
        Ok(self.roles.lock().unwrap().get(&name).cloned())
    }

    async fn ensure_exists(&self, name: RoleName) -> AppResult<Role> {
        let mut roles = self.roles.lock().unwrap();
        Ok(roles
            .entry(name)
            .or_insert_with(|| create_test_role(name))
            .clone())
    }
}

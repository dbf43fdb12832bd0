use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::{PostgresPersistence, role::RoleDb},
    app_error::{AppError, AppResult},
    application::use_cases::auth::UserRepo,
    domain::entities::{
        role::Role,
        user::{NewUser, User},
    },
};

// User struct as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct UserDb {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Option<NaiveDateTime>,
}

impl UserDb {
    fn into_user(self, roles: Vec<Role>) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            roles,
            created_at: self.created_at,
        }
    }
}

impl PostgresPersistence {
    async fn roles_for_user(&self, user_id: Uuid) -> AppResult<Vec<Role>> {
        let rows = sqlx::query_as::<_, RoleDb>(
            r#"SELECT r.id, r.role_name
               FROM roles r
               JOIN user_roles ur ON ur.role_id = r.id
               WHERE ur.user_id = $1
               ORDER BY r.role_name ASC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::from)?;

        rows.into_iter().map(Role::try_from).collect()
    }
}

#[async_trait]
impl UserRepo for PostgresPersistence {
    async fn exists_by_username(&self, username: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
                .bind(username)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::from)?;
        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::from)?;
        Ok(exists)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let rec = sqlx::query_as::<_, UserDb>(
            r#"SELECT id, username, email, password_hash, created_at
               FROM users
               WHERE username = $1"#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        let Some(rec) = rec else {
            return Ok(None);
        };
        let roles = self.roles_for_user(rec.id).await?;
        Ok(Some(rec.into_user(roles)))
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        let mut tx = self.pool.begin().await.map_err(AppError::from)?;

        // Unique violations here are mapped to DuplicateUsername/DuplicateEmail by From<sqlx::Error>.
        let rec = sqlx::query_as::<_, UserDb>(
            r#"INSERT INTO users (id, username, email, password_hash)
               VALUES ($1, $2, $3, $4)
               RETURNING id, username, email, password_hash, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::from)?;

        for role in &user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES ($1, $2)")
                .bind(rec.id)
                .bind(role.id)
                .execute(&mut *tx)
                .await
                .map_err(AppError::from)?;
        }

        tx.commit().await.map_err(AppError::from)?;

        Ok(rec.into_user(user.roles))
    }
}

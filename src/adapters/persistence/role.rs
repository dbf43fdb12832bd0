use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence,
    app_error::{AppError, AppResult},
    application::use_cases::auth::RoleRepo,
    domain::entities::role::{Role, RoleName},
};

// Role as stored in the db.
#[derive(sqlx::FromRow, Debug)]
pub struct RoleDb {
    pub id: Uuid,
    pub role_name: String,
}

impl TryFrom<RoleDb> for Role {
    type Error = AppError;

    fn try_from(row: RoleDb) -> Result<Self, Self::Error> {
        let name = row.role_name.parse::<RoleName>().map_err(|e| {
            tracing::error!(role_id = %row.id, error = %e, "Unknown role name in store");
            AppError::Internal(e)
        })?;
        Ok(Role { id: row.id, name })
    }
}

#[async_trait]
impl RoleRepo for PostgresPersistence {
    async fn find_by_name(&self, name: RoleName) -> AppResult<Option<Role>> {
        let row = sqlx::query_as::<_, RoleDb>(
            "SELECT id, role_name FROM roles WHERE role_name = $1",
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)?;

        row.map(Role::try_from).transpose()
    }

    async fn ensure_exists(&self, name: RoleName) -> AppResult<Role> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let row = sqlx::query_as::<_, RoleDb>(
            r#"INSERT INTO roles (id, role_name)
               VALUES ($1, $2)
               ON CONFLICT (role_name)
               DO UPDATE SET role_name = EXCLUDED.role_name
               RETURNING id, role_name"#,
        )
        .bind(Uuid::new_v4())
        .bind(name.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from)?;

        Role::try_from(row)
    }
}

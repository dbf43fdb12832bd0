use tracing::info;

use crate::{
    app_error::AppResult, application::use_cases::auth::RoleRepo,
    domain::entities::role::RoleName,
};

/// Makes sure the default role exists before the server accepts traffic.
/// Safe to run on every start.
pub async fn ensure_default_roles(roles: &dyn RoleRepo) -> AppResult<()> {
    let role = roles.ensure_exists(RoleName::DEFAULT).await?;
    info!(role = %role.name, role_id = %role.id, "Default role present");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryRoleRepo;

    #[tokio::test]
    async fn seeds_missing_default_role() {
        let roles = InMemoryRoleRepo::new();
        ensure_default_roles(&roles).await.unwrap();

        assert_eq!(roles.count(), 1);
        assert!(roles.find_by_name(RoleName::Developer).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn seeding_twice_is_a_no_op() {
        let roles = InMemoryRoleRepo::new();
        ensure_default_roles(&roles).await.unwrap();
        let first = roles.find_by_name(RoleName::Developer).await.unwrap().unwrap();

        ensure_default_roles(&roles).await.unwrap();
        let second = roles.find_by_name(RoleName::Developer).await.unwrap().unwrap();

        assert_eq!(roles.count(), 1);
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn leaves_other_roles_alone() {
        let roles = InMemoryRoleRepo::with_roles(&[RoleName::Admin]);
        ensure_default_roles(&roles).await.unwrap();

        assert_eq!(roles.count(), 2);
        assert!(roles.find_by_name(RoleName::Admin).await.unwrap().is_some());
    }
}

use uuid::Uuid;

/// Closed set of role names. Stored with the `ROLE_` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleName {
    Admin,
    Manager,
    Developer,
}

impl RoleName {
    /// Role attached to every newly registered identity.
    pub const DEFAULT: RoleName = RoleName::Developer;

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Admin => "ROLE_ADMIN",
            RoleName::Manager => "ROLE_MANAGER",
            RoleName::Developer => "ROLE_DEVELOPER",
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RoleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
            "ADMIN" => Ok(RoleName::Admin),
            "MANAGER" => Ok(RoleName::Manager),
            "DEVELOPER" => Ok(RoleName::Developer),
            _ => Err(format!(
                "Invalid role name: {}. Must be one of ADMIN, MANAGER, DEVELOPER",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: Uuid,
    pub name: RoleName,
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Who is using the canteen. Decides which dashboard is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A student or staff member ordering food. Called `user` on the login screen.
    #[serde(rename = "user", alias = "customer")]
    Customer,
    Chef,
    Manager,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Customer, Role::Chef, Role::Manager];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "user",
            Role::Chef => "chef",
            Role::Manager => "manager",
        }
    }

    /// Chefs and managers maintain the menu.
    pub fn can_edit_menu(&self) -> bool {
        match self {
            Role::Customer => false,
            Role::Chef | Role::Manager => true,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "customer" => Ok(Role::Customer),
            "chef" => Ok(Role::Chef),
            "manager" => Ok(Role::Manager),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

/// The signed-in identity. There is no credential check; picking a role is enough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub role: Role,
    pub email: String,
}

impl Session {
    pub fn new(role: Role, email: impl Into<String>) -> Self {
        Self {
            role,
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_from_login_names() {
        assert_eq!("user".parse::<Role>().unwrap(), Role::Customer);
        assert_eq!("Customer".parse::<Role>().unwrap(), Role::Customer);
        assert_eq!(" chef ".parse::<Role>().unwrap(), Role::Chef);
        assert_eq!("MANAGER".parse::<Role>().unwrap(), Role::Manager);
        assert!("cashier".parse::<Role>().is_err());
    }

    #[test]
    fn only_staff_edit_the_menu() {
        assert!(!Role::Customer.can_edit_menu());
        assert!(Role::Chef.can_edit_menu());
        assert!(Role::Manager.can_edit_menu());
    }

    #[test]
    fn display_matches_parse() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }
}

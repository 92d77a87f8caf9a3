use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a user. Stored, never enforced by this service.
///
/// New users always start as [`Role::Undefined`]; any unrecognized
/// textual value is read back as `Undefined` as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Role {
    Admin,
    Reporter,
    #[default]
    Undefined,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Reporter => "REPORTER",
            Role::Undefined => "UNDEFINED",
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            "ADMIN" => Role::Admin,
            "REPORTER" => Role::Reporter,
            _ => Role::Undefined,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from(value.as_str())
    }
}

impl From<Role> for &'static str {
    fn from(role: Role) -> Self {
        role.as_str()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn known_roles_round_trip_through_their_names() {
        for role in [Role::Admin, Role::Reporter, Role::Undefined] {
            assert_eq!(Role::from(role.as_str()), role);
        }
    }

    #[test]
    fn role_names_are_case_sensitive() {
        assert_eq!(Role::from("admin"), Role::Undefined);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Role::Reporter).unwrap();
        assert_eq!(json, "\"REPORTER\"");

        let role: Role = serde_json::from_str("\"SUPERUSER\"").unwrap();
        assert_eq!(role, Role::Undefined);
    }

    #[quickcheck]
    fn unknown_names_parse_as_undefined(name: String) -> bool {
        match name.as_str() {
            "ADMIN" | "REPORTER" => true,
            _ => Role::from(name.as_str()) == Role::Undefined,
        }
    }
}

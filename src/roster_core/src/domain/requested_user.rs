use std::fmt;

use secrecy::Secret;

/// A user somebody asked to create.
///
/// Carries no identity and no role: the identity is generated while
/// persisting and the role is assigned later by an administrator.
#[derive(Clone)]
pub struct RequestedUser {
    pub email: String,
    pub name: String,
    pub password: Option<Secret<String>>,
}

impl RequestedUser {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: Option<Secret<String>>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            password,
        }
    }
}

impl fmt::Debug for RequestedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RequestedUser { email: ***, name: ***, password: *** }")
    }
}

use std::fmt;

use secrecy::Secret;

use crate::domain::{
    requested_user::RequestedUser,
    role::Role,
    user_id::UserId,
    validation::{ValidationErrors, validate},
};

/// A validated request, ready to be handed to a [`UserStore`](crate::UserStore).
///
/// Can only be obtained from a [`RequestedUser`] that passed validation.
/// Email and name are stored trimmed.
#[derive(Clone)]
pub struct NewUser {
    email: String,
    name: String,
    password: Option<Secret<String>>,
}

impl NewUser {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The plaintext credential. Stores hash it before it is persisted.
    pub fn password(&self) -> Option<&Secret<String>> {
        self.password.as_ref()
    }
}

impl TryFrom<RequestedUser> for NewUser {
    type Error = ValidationErrors;

    fn try_from(requested: RequestedUser) -> Result<Self, Self::Error> {
        validate(&requested)?;

        Ok(Self {
            email: requested.email.trim().to_owned(),
            name: requested.name.trim().to_owned(),
            password: requested.password,
        })
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NewUser { email: ***, name: ***, password: *** }")
    }
}

/// A persisted user.
#[derive(Clone)]
pub struct User {
    id: UserId,
    email: String,
    name: String,
    password_hash: Option<Secret<String>>,
    role: Role,
}

impl User {
    pub fn new(
        id: UserId,
        email: String,
        name: String,
        password_hash: Option<Secret<String>>,
        role: Role,
    ) -> Self {
        Self {
            id,
            email,
            name,
            password_hash,
            role,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn password_hash(&self) -> Option<&Secret<String>> {
        self.password_hash.as_ref()
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User {{ id: {:?}, role: {:?}, email: ***, name: ***, password_hash: *** }}",
            self.id.as_str(),
            self.role.as_str()
        )
    }
}

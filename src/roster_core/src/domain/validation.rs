use std::fmt;

use secrecy::ExposeSecret;
use serde::Serialize;

use crate::domain::requested_user::RequestedUser;

pub const MIN_EMAIL_LENGTH: usize = 5;
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// A single invalid parameter of a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub name: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid parameter {:?}: {}", self.name, self.reason)
    }
}

/// Ordered set of validation failures. Never empty when returned as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.0.iter().any(|e| e.name == name)
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut errors = self.0.iter();
        match errors.next() {
            None => f.write_str("unknown validation error"),
            Some(first) => {
                write!(f, "{first}")?;
                for error in errors {
                    write!(f, "; {error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Checks a creation request, collecting every violation rather than stopping at the first.
pub fn validate(user: &RequestedUser) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if user.email.trim().chars().count() < MIN_EMAIL_LENGTH {
        errors.push(ValidationError::new("email", "invalid email address"));
    }

    if let Some(password) = &user.password
        && password.expose_secret().trim().chars().count() < MIN_PASSWORD_LENGTH
    {
        errors.push(ValidationError::new(
            "password",
            "consider to use a stronger password, at least 12 characters long",
        ));
    }

    if user.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "name is not set"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

//! User domain model and login form validation

use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

/// Represents an authenticated user, derived from a valid session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Login form input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Client-side form validation, run before any backend call
    ///
    /// Intentionally shallow: a full address grammar belongs to a real
    /// backend, this only rejects obviously malformed input inline.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(Error::validation("email is required"));
        }
        let (local, domain) = email
            .split_once('@')
            .ok_or_else(|| Error::validation("email address is malformed"))?;
        if local.is_empty() || domain.is_empty() || !domain.contains('.') {
            return Err(Error::validation("email address is malformed"));
        }
        if self.password.is_empty() {
            return Err(Error::validation("password is required"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials() {
        assert!(Credentials::new("test@example.com", "password123")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_malformed_email_rejected() {
        for email in ["", "no-at-sign", "@example.com", "user@", "user@nodot"] {
            let err = Credentials::new(email, "secret").validate().unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "accepted {:?}", email);
        }
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = Credentials::new("test@example.com", "").validate().unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }
}

//! User entity

use crate::domain::{DomainError, DomainResult};
use crate::shared::validations::{is_iso8601, is_user_id};

/// A portal account. The password field always holds a hash, never
/// plaintext; hashing happens in the repository before construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: String,
    name: String,
    password: String,
    date_joined: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
        date_joined: impl Into<String>,
    ) -> DomainResult<Self> {
        let id = id.into();
        if !is_user_id(&id) {
            return Err(DomainError::Validation("Invalid user ID format".into()));
        }
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::Validation("Name cannot be empty".into()));
        }
        let password = password.into();
        if password.is_empty() {
            return Err(DomainError::Validation("Password cannot be empty".into()));
        }
        let date_joined = date_joined.into();
        if !is_iso8601(&date_joined) {
            return Err(DomainError::Validation(
                "Date must be in ISO 8601 format".into(),
            ));
        }
        Ok(Self {
            id,
            name,
            password,
            date_joined,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored password hash.
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn date_joined(&self) -> &str {
        &self.date_joined
    }

    /// Numeric suffix of the `user_<n>` id.
    pub fn id_number(&self) -> u64 {
        self.id
            .strip_prefix("user_")
            .and_then(|n| n.parse().ok())
            .unwrap_or(0)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use userbase_core::{DomainError, DomainResult, Entity, UserId};

/// User record as held by the backing store.
///
/// `password` is write-only: it is accepted on create but never serialized
/// into responses. Timestamps are maintained by the service layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub address: String,
    pub age: u32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Input schema for creating a user. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub address: String,
    pub age: u32,
    pub email: String,
}

impl NewUser {
    pub fn validate(&self) -> DomainResult<()> {
        ensure_not_blank("name", &self.name)?;
        ensure_not_blank("password", &self.password)?;
        ensure_not_blank("address", &self.address)?;
        ensure_email(&self.email)
    }

    /// Materialize the record the store will hold. The id and timestamps are
    /// owned by the caller (the service assigns both).
    pub fn into_user(self, id: UserId, now: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            password: self.password,
            address: self.address,
            age: self.age,
            email: self.email,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Input schema for updating a user. Absent fields keep their current value.
///
/// There is deliberately no password field: the update surface cannot change
/// credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub age: Option<u32>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Validate the supplied fields only. An empty patch is valid.
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            ensure_not_blank("name", name)?;
        }
        if let Some(address) = &self.address {
            ensure_not_blank("address", address)?;
        }
        if let Some(email) = &self.email {
            ensure_email(email)?;
        }
        Ok(())
    }

    /// Overwrite exactly the supplied fields.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(address) = self.address {
            user.address = address;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
    }
}

fn ensure_not_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn ensure_email(value: &str) -> DomainResult<()> {
    ensure_not_blank("email", value)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(DomainError::validation("email must be a valid address")),
    }
}

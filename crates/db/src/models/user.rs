//! User entity model and DTOs.
//!
//! User updates merge by presence: a field that is omitted, `null` or `""`
//! in [`UpdateUser`] keeps the stored value.

use hydro_core::serde_ext::empty_string_as_none;
use hydro_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user row from the `users` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[validate(
        length(min = 1, message = "is required"),
        email(message = "must be a valid email address")
    )]
    pub email: String,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
}

impl UpdateUser {
    /// Apply present fields on top of `current`, returning the merged
    /// `(name, email)` pair to write back.
    pub fn merge_onto(&self, current: &User) -> (String, String) {
        let name = self.name.clone().unwrap_or_else(|| current.name.clone());
        let email = self.email.clone().unwrap_or_else(|| current.email.clone());
        (name, email)
    }
}

//! Tank entity model and DTOs.
//!
//! Tank updates replace the whole row: [`UpdateTank`] carries the same
//! required fields as [`CreateTank`], and an omitted optional field is
//! written back as NULL.

use hydro_core::serde_ext::empty_string_as_none;
use hydro_core::types::{TankId, Timestamp};
use hydro_core::validation::validate_water;
use hydro_core::water::WaterType;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A tank row from the `tanks` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Tank {
    pub id: TankId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rack_location: Option<String>,
    pub volume_liters: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_number: Option<String>,
    #[sqlx(try_from = "String")]
    pub water: WaterType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new tank.
///
/// Missing required keys deserialize to empty/zero values so they are
/// reported by validation alongside any other failing field.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateTank {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub room: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub rack_location: Option<String>,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub volume_liters: i32,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub inventory_number: Option<String>,
    #[validate(custom(function = "validate_water"))]
    pub water: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

/// DTO for replacing an existing tank. Every required field must be resupplied.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateTank {
    #[validate(length(min = 1, message = "is required"))]
    pub name: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub room: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub rack_location: Option<String>,
    #[validate(range(min = 1, message = "must be greater than 0"))]
    pub volume_liters: i32,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub inventory_number: Option<String>,
    #[validate(custom(function = "validate_water"))]
    pub water: String,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub notes: Option<String>,
}

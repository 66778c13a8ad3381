//! Water supply classification for tanks.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Plain tap water.
pub const WATER_TAP: &str = "tap";
/// Reverse-osmosis filtered water.
pub const WATER_RO: &str = "ro";
/// Reverse-osmosis plus deionization.
pub const WATER_RODI: &str = "rodi";

/// All valid water values.
pub const VALID_WATER_TYPES: &[&str] = &[WATER_TAP, WATER_RO, WATER_RODI];

/// Closed set of water types a tank can be filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterType {
    Tap,
    Ro,
    Rodi,
}

impl WaterType {
    /// Return the database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tap => WATER_TAP,
            Self::Ro => WATER_RO,
            Self::Rodi => WATER_RODI,
        }
    }

    /// Parse from a string, returning an error for unknown values.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            WATER_TAP => Ok(Self::Tap),
            WATER_RO => Ok(Self::Ro),
            WATER_RODI => Ok(Self::Rodi),
            other => Err(CoreError::Validation(format!(
                "Unknown water type: '{other}'. Valid types: {}",
                VALID_WATER_TYPES.join(", ")
            ))),
        }
    }
}

impl TryFrom<String> for WaterType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl std::fmt::Display for WaterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
